mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli, &mut out)
}

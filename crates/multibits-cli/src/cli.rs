use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use multibits_parse::Radix;

#[derive(Parser, Debug)]
#[command(
    name = "multibits",
    version,
    about = "Store N bits of data per chessboard square in N 64-bit literals"
)]
pub struct Cli {
    /// Session settings (YAML): edit_policy, paste_failure, overflow, palette.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode square values into one mask literal per bit-plane.
    Encode(EncodeArgs),
    /// Decode a mask literal list back into per-square values.
    Decode(DecodeArgs),
    /// Show per-square intensities or heat-map colours for a literal list.
    Heatmap(HeatmapArgs),
    /// Print the square index layout, rank 8 at the top.
    Board,
}

#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Values in square-index order (a1, b1, ..., h8); commas or spaces
    /// separate them and missing trailing squares are 0.
    pub values: Vec<String>,

    /// Set one square, by index or name (e.g. `e4=3`, `63=1`). May be repeated.
    #[arg(long = "set", value_name = "SQUARE=VALUE")]
    pub set: Vec<String>,

    /// Encode with exactly this many planes instead of the derived count.
    #[arg(long)]
    pub width: Option<usize>,

    /// Literal radix for the output.
    #[arg(long, value_enum, default_value_t = RadixArg::Hex)]
    pub radix: RadixArg,
}

#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Comma-separated mask literals; `-` or omitted reads stdin.
    pub literals: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct HeatmapArgs {
    /// Comma-separated mask literals; `-` or omitted reads stdin.
    pub literals: Option<String>,

    /// Print `#rrggbb` colours from the configured palette instead of intensities.
    #[arg(long)]
    pub colors: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadixArg {
    Hex,
    Decimal,
    Binary,
    Octal,
}

impl From<RadixArg> for Radix {
    fn from(value: RadixArg) -> Self {
        match value {
            RadixArg::Hex => Radix::Hex,
            RadixArg::Decimal => Radix::Decimal,
            RadixArg::Binary => Radix::Binary,
            RadixArg::Octal => Radix::Octal,
        }
    }
}

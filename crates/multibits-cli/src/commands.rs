use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use multibits_common::Square;
use multibits_session::{Board, SessionConfig};

use crate::cli::{Cli, Command, DecodeArgs, EncodeArgs, HeatmapArgs, OutputFormat};

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "session config");
    match cli.command {
        Command::Encode(args) => encode(config, &args, out),
        Command::Decode(args) => decode(config, &args, out),
        Command::Heatmap(args) => heatmap(config, &args, out),
        Command::Board => write_grid(out, |square| square.index().to_string()),
    }
}

fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn encode(config: SessionConfig, args: &EncodeArgs, out: &mut impl Write) -> Result<()> {
    let mut board = Board::with_config(config);

    let tokens: Vec<&str> = args
        .values
        .iter()
        .flat_map(|v| v.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() > Square::COUNT {
        bail!("a board holds 64 squares, got {} values", tokens.len());
    }
    for (square, token) in Square::all().zip(tokens) {
        board
            .edit_square(square, token)
            .with_context(|| format!("value for {square}"))?;
    }

    for assignment in &args.set {
        let (square, value) = parse_assignment(assignment)?;
        board
            .edit_square(square, value)
            .with_context(|| format!("--set {assignment}"))?;
    }

    let planes = match args.width {
        Some(width) => board
            .encode_with_width(width)
            .with_context(|| format!("encoding at width {width}"))?,
        None => board.planes().clone(),
    };
    tracing::info!(planes = planes.width(), max = board.max_value(), "encoded board");
    writeln!(out, "{}", planes.to_literals_with(args.radix.into()))?;
    Ok(())
}

fn decode(config: SessionConfig, args: &DecodeArgs, out: &mut impl Write) -> Result<()> {
    let text = read_literals(args.literals.as_deref())?;
    let mut board = Board::with_config(config);
    board.paste(&text).context("decoding literals")?;
    match args.format {
        OutputFormat::Text => writeln!(out, "{}", board.values())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, board.snapshot())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn heatmap(config: SessionConfig, args: &HeatmapArgs, out: &mut impl Write) -> Result<()> {
    let text = read_literals(args.literals.as_deref())?;
    let mut board = Board::with_config(config);
    board.paste(&text).context("decoding literals")?;
    if args.colors {
        write_grid(out, |square| board.color(square).to_hex())
    } else {
        write_grid(out, |square| format!("{:.2}", board.intensity(square)))
    }
}

fn parse_assignment(assignment: &str) -> Result<(Square, &str)> {
    let Some((square, value)) = assignment.split_once('=') else {
        bail!("expected SQUARE=VALUE, got {assignment:?}");
    };
    let square = square
        .parse::<Square>()
        .with_context(|| format!("--set {assignment}"))?;
    Ok((square, value))
}

fn read_literals(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading literals from stdin")?;
            Ok(buf)
        }
    }
}

/// Eight rows in display order, cells right-aligned to the widest one.
fn write_grid(out: &mut impl Write, cell: impl Fn(Square) -> String) -> Result<()> {
    let cells: Vec<String> = Square::display_order().map(&cell).collect();
    let width = cells.iter().map(String::len).max().unwrap_or(1);
    for row in cells.chunks(8) {
        let line = row
            .iter()
            .map(|c| format!("{c:>width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

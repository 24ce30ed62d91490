//! chess-replay - Plays a file of wire-format moves through the rules engine.
//!
//! Each non-blank line is `fromCol,fromRow,toCol,toRow[,RANK]`. The result of
//! every line goes to stdout; logs go to stderr (set `RUST_LOG` to see them).

mod replay;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use replay::Replay;
use tracing_subscriber::EnvFilter;

/// Replays chess moves and reports the engine's verdict on each.
#[derive(Parser)]
#[command(name = "chess-replay")]
#[command(about = "Replays wire-format chess moves through the rules engine")]
struct Args {
    /// File of moves, one per line; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print one JSON object per line instead of text
    #[arg(long)]
    json: bool,

    /// Keep applying moves after checkmate or a draw
    #[arg(long)]
    continue_after_end: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut replay = Replay::new(args.continue_after_end);

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let Some(record) = replay.feed(index + 1, &line) else {
            continue;
        };

        if args.json {
            serde_json::to_writer(&mut out, &record).context("failed to write record")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", record)?;
        }

        if replay.is_finished() {
            tracing::info!(line = record.line, "game over, ignoring remaining input");
            break;
        }
    }
    out.flush()?;

    tracing::info!(
        applied = replay.applied(),
        to_move = replay.game().player_in_turn().tag_name(),
        outcome = replay.outcome().map(|r| r.as_str()).unwrap_or("ongoing"),
        "replay finished"
    );
    Ok(())
}

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rookery_core::{GameState, game_result};

/// Replay SAN moves read from stdin, one per line.
///
/// An optional FEN argument sets the starting position. The lines `undo`
/// and `fen` take back the last move and print the current position.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let start = match std::env::args().nth(1) {
        Some(fen) => GameState::from_fen(&fen).with_context(|| format!("invalid starting FEN \"{fen}\""))?,
        None => GameState::new(),
    };
    info!(fen = %start, "rookery starting");

    let mut states = vec![start];
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(current) = states.last() else {
            break;
        };
        match line {
            "undo" => {
                if states.len() > 1 {
                    states.pop();
                } else {
                    warn!("nothing to undo");
                }
            }
            "fen" => writeln!(stdout, "{current}")?,
            san => match current.play_san(san) {
                Ok(next) => states.push(next),
                Err(e) => warn!(san, error = %e, "move rejected"),
            },
        }

        if let Some(last) = states.last()
            && game_result(last).is_some()
        {
            break;
        }
    }

    let last = states.last().context("no game state")?;
    let result = game_result(last);
    writeln!(stdout, "{last}")?;
    writeln!(stdout, "{}", last.move_history().join(" "))?;
    match result {
        Some(result) => writeln!(stdout, "{result}")?,
        None => writeln!(stdout, "*")?,
    }
    info!(moves = last.move_history().len(), "rookery finished");
    Ok(())
}

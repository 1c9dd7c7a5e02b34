mod command;

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use command::Command;
use concentration_core::game::serialization::GameSnapshot;
use concentration_core::game::session::GameSession;
use concentration_core::model::board::{MAX_CARDS, MIN_CARDS};
use concentration_core::model::reveal::CardStatus;
use concentration_core::model::status::GameStatus;

/// Terminal front end for the Concentration engine.
#[derive(Debug, Parser)]
#[command(
    name = "concentration",
    author,
    version,
    about = "Concentration, the memory matching card game"
)]
struct Cli {
    /// Number of cards to deal. Odd counts round up; the result is clamped
    /// to the playable range.
    #[arg(short, long, value_name = "COUNT", default_value_t = MAX_CARDS)]
    cards: usize,

    /// Shuffle seed, for reproducible boards.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Write the final game snapshot as JSON to this file on exit.
    #[arg(long, value_name = "FILE")]
    transcript: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(cli.cards, seed),
        None => GameSession::new(cli.cards),
    };
    info!(
        cards = session.cards(),
        seed = session.seed(),
        "dealt a new board"
    );

    println!("Welcome to Concentration, your memory game!");
    println!(
        "Dealt a board of {} cards (playable range {MIN_CARDS}-{MAX_CARDS}).",
        session.cards()
    );
    println!("{}", render_board(&session));
    println!("Pick two cards to guess, e.g. '0 5'. Also: hint <n>, peek <n>, board, quit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading a command from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match command::parse(&line) {
            Ok(parsed) => {
                if run_command(&mut session, parsed) {
                    break;
                }
            }
            Err(error) => println!("{error}"),
        }
        if session.status().is_terminal() {
            break;
        }
    }

    if session.status() == GameStatus::InProgress {
        session.cancel().ok();
        println!("Game canceled.");
    }

    if let Some(path) = cli.transcript.as_ref() {
        let json = GameSnapshot::to_json(&session).context("encoding the transcript")?;
        fs::write(path, json)
            .with_context(|| format!("writing transcript to {}", path.display()))?;
        info!(path = %path.display(), "transcript written");
    }

    Ok(())
}

/// Apply one parsed command. Returns true when the loop should stop.
fn run_command(session: &mut GameSession, parsed: Command) -> bool {
    match parsed {
        Command::Guess(first, second) => match session.guess(first, second) {
            Ok(report) => {
                debug!(first, second, matched = report.matched, "move evaluated");
                println!("{}", report.message);
                if report.won {
                    info!(guesses = session.guesses(), "game won");
                    if let Some(score) = report.score {
                        println!(
                            "Final score: {} ({} cards in {} guesses).",
                            score.score, score.cards, score.guesses
                        );
                    }
                } else {
                    println!("{}", render_board(session));
                }
            }
            Err(error) => println!("Invalid move: {error}"),
        },
        Command::Hint(position) => match session.hint(position) {
            Ok(partner) => println!("Position {position} has a partner at position {partner}."),
            Err(error) => println!("No hint: {error}"),
        },
        Command::Peek(position) => match session.peek(position) {
            Ok(card) => println!("Position {position} holds {card}."),
            Err(error) => println!("Cannot peek: {error}"),
        },
        Command::Board => println!("{}", render_board(session)),
        Command::Quit => {
            if session.cancel().is_ok() {
                info!("game canceled");
                println!("Game canceled.");
            }
            return true;
        }
    }
    false
}

/// Matched positions show their card; everything else stays face down.
fn render_board(session: &GameSession) -> String {
    let mut lines = Vec::new();
    let mut row = String::new();
    for (position, status) in session.reveal().slots().iter().enumerate() {
        let face = match status {
            CardStatus::Matched => session
                .board()
                .card(position)
                .map(|card| card.to_string())
                .unwrap_or_else(|| "??".to_string()),
            CardStatus::Unrevealed => "??".to_string(),
        };
        row.push_str(&format!("{position:>2}:{face:<3} "));
        if (position + 1) % 13 == 0 {
            lines.push(row.trim_end().to_string());
            row.clear();
        }
    }
    if !row.is_empty() {
        lines.push(row.trim_end().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use concentration_core::game::session::GameSession;

    #[test]
    fn fresh_board_renders_face_down() {
        let session = GameSession::with_seed(8, 1);
        let rendered = render_board(&session);
        assert_eq!(rendered.matches("??").count(), 8);
        assert!(rendered.contains("0:??"));
    }

    #[test]
    fn matched_cards_render_face_up() {
        let mut session = GameSession::with_seed(8, 1);
        let partner = session.hint(0).expect("fresh board pairs");
        session.guess(0, partner).expect("valid move");
        let face = session.board().card(0).expect("in range").to_string();
        assert!(render_board(&session).contains(&face));
    }

    #[test]
    fn full_board_wraps_into_rows() {
        let session = GameSession::with_seed(52, 1);
        assert_eq!(render_board(&session).lines().count(), 4);
    }
}

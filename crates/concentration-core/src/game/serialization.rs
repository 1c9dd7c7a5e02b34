use crate::game::session::{GameSession, HistoryEntry};
use crate::model::board::Board;
use crate::model::card::Card;
use crate::model::reveal::{CardStatus, RevealState};
use crate::model::score::ScoreRecord;
use crate::model::status::GameStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable persistence form of a `GameSession`. The surrounding service owns
/// storage; this is the shape it reads and writes. Cards travel as their
/// compact abbreviations and reveal slots as `"U"`/`"M"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cards: usize,
    pub seed: u64,
    pub board: Vec<String>,
    pub reveal: Vec<CardStatus>,
    pub guesses: u32,
    pub status: GameStatus,
    pub history: Vec<HistoryEntry>,
    pub score: Option<ScoreRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    BadCard { position: usize, code: String },
    LengthMismatch { board: usize, reveal: usize },
    CardCountMismatch { declared: usize, actual: usize },
    OddBoard(usize),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::BadCard { position, code } => {
                write!(f, "board position {position} holds unparseable card '{code}'")
            }
            SnapshotError::LengthMismatch { board, reveal } => {
                write!(f, "board has {board} cards but reveal state has {reveal} slots")
            }
            SnapshotError::CardCountMismatch { declared, actual } => {
                write!(f, "snapshot declares {declared} cards but carries {actual}")
            }
            SnapshotError::OddBoard(len) => {
                write!(f, "board length {len} is odd and cannot pair")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl GameSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        GameSnapshot {
            cards: session.cards(),
            seed: session.seed(),
            board: session
                .board()
                .cards()
                .iter()
                .map(ToString::to_string)
                .collect(),
            reveal: session.reveal().slots().to_vec(),
            guesses: session.guesses(),
            status: session.status(),
            history: session.history().to_vec(),
            score: session.score(),
        }
    }

    pub fn restore(self) -> Result<GameSession, SnapshotError> {
        if self.board.len() != self.reveal.len() {
            return Err(SnapshotError::LengthMismatch {
                board: self.board.len(),
                reveal: self.reveal.len(),
            });
        }
        if self.cards != self.board.len() {
            return Err(SnapshotError::CardCountMismatch {
                declared: self.cards,
                actual: self.board.len(),
            });
        }
        if self.board.len() % 2 != 0 {
            return Err(SnapshotError::OddBoard(self.board.len()));
        }

        let mut cards = Vec::with_capacity(self.board.len());
        for (position, code) in self.board.iter().enumerate() {
            let card = code.parse::<Card>().map_err(|_| SnapshotError::BadCard {
                position,
                code: code.clone(),
            })?;
            cards.push(card);
        }

        Ok(GameSession::from_parts(
            Board::from_cards(cards),
            RevealState::from_slots(self.reveal),
            self.guesses,
            self.status,
            self.history,
            self.score,
            self.seed,
        ))
    }

    pub fn to_json(session: &GameSession) -> serde_json::Result<String> {
        let snapshot = Self::capture(session);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

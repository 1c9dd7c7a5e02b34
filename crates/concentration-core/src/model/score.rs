use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    DivisionUndefined,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::DivisionUndefined => {
                write!(f, "score is undefined for a game with zero guesses")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// The immutable result of a won game, computed exactly once at the
/// `Won` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub cards: usize,
    pub guesses: u32,
    pub score: u64,
}

impl ScoreRecord {
    /// `round(cards^4 / guesses)`. The quartic term rewards larger boards and
    /// the divisor penalizes extra guesses; the exact formula is kept for
    /// compatibility with prior deployments.
    pub fn compute(cards: usize, guesses: u32) -> Result<Self, ScoreError> {
        if guesses == 0 {
            return Err(ScoreError::DivisionUndefined);
        }
        let quartic = (cards as u64).pow(4);
        let score = (quartic as f64 / f64::from(guesses)).round() as u64;
        Ok(Self {
            cards,
            guesses,
            score,
        })
    }
}

use crate::model::board::Board;
use crate::model::card::Card;
use crate::model::reveal::{CardStatus, RevealState};
use crate::model::score::ScoreError;
use crate::model::status::GameStatus;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    IndexOutOfRange { position: usize, len: usize },
    SamePosition(usize),
    AlreadyMatched(usize),
    NoHintAvailable(usize),
    GameNotActive(GameStatus),
    DivisionUndefined,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IndexOutOfRange { position, len } => {
                write!(f, "position {position} is out of range for {len} cards")
            }
            GameError::SamePosition(position) => {
                write!(f, "cannot guess position {position} twice in one move")
            }
            GameError::AlreadyMatched(position) => {
                write!(f, "position {position} has already been matched")
            }
            GameError::NoHintAvailable(position) => {
                write!(f, "no unmatched partner remains for position {position}")
            }
            GameError::GameNotActive(status) => {
                write!(f, "game is {status}, no further play is allowed")
            }
            GameError::DivisionUndefined => {
                write!(f, "score is undefined for a game with zero guesses")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<ScoreError> for GameError {
    fn from(error: ScoreError) -> Self {
        match error {
            ScoreError::DivisionUndefined => GameError::DivisionUndefined,
        }
    }
}

/// Result of evaluating one two-card move. The returned reveal state is a
/// fresh value; the caller owns persisting it and bumping the guess counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub message: String,
    pub reveal: RevealState,
    pub matched: bool,
}

/// Read a card without touching any state. Backs the peek/flip action, which
/// is informational and never counts as a guess.
pub fn peek(position: usize, board: &Board) -> Result<Card, GameError> {
    board.card(position).ok_or(GameError::IndexOutOfRange {
        position,
        len: board.len(),
    })
}

/// Compare the cards at two distinct unrevealed positions. A match marks both
/// positions in the returned state; a miss returns the state unchanged, since
/// the flip is informational only.
pub fn evaluate_move(
    first: usize,
    second: usize,
    board: &Board,
    reveal: &RevealState,
) -> Result<MoveOutcome, GameError> {
    if first == second {
        return Err(GameError::SamePosition(first));
    }

    let card_a = peek(first, board)?;
    let card_b = peek(second, board)?;

    for position in [first, second] {
        if reveal.status(position) == Some(CardStatus::Matched) {
            return Err(GameError::AlreadyMatched(position));
        }
    }

    let matched = card_a.pairs_with(card_b);
    let mut message = format!("The first card was {card_a}. The second card was {card_b}. ");
    let mut next = reveal.clone();
    if matched {
        next.mark_matched(first);
        next.mark_matched(second);
        message.push_str("It's a match!");
    } else {
        message.push_str("Sorry, no match this time. Guess again.");
    }

    Ok(MoveOutcome {
        message,
        reveal: next,
        matched,
    })
}

/// Scan for another unrevealed position holding the same rank as `position`.
pub fn find_partner(
    position: usize,
    board: &Board,
    reveal: &RevealState,
) -> Result<usize, GameError> {
    let target = peek(position, board)?;
    if reveal.status(position) == Some(CardStatus::Matched) {
        return Err(GameError::NoHintAvailable(position));
    }

    (0..board.len())
        .filter(|&candidate| candidate != position)
        .filter(|&candidate| reveal.status(candidate) == Some(CardStatus::Unrevealed))
        .find(|&candidate| {
            board
                .card(candidate)
                .is_some_and(|card| card.pairs_with(target))
        })
        .ok_or(GameError::NoHintAvailable(position))
}

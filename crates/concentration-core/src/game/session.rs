use crate::game::evaluator::{self, GameError, MoveOutcome};
use crate::model::board::Board;
use crate::model::card::Card;
use crate::model::reveal::RevealState;
use crate::model::score::ScoreRecord;
use crate::model::status::GameStatus;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// One entry of the move log: the guessed positions and the outcome text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub first: usize,
    pub second: usize,
    pub message: String,
}

/// What a committed move tells the caller. `score` is present only on the
/// move that won the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub message: String,
    pub matched: bool,
    pub won: bool,
    pub score: Option<ScoreRecord>,
}

/// A single player's game: the hidden board, its reveal mirror, the guess
/// counter, the status machine, and the move history. All gameplay mutation
/// happens through `guess` and `cancel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    reveal: RevealState,
    guesses: u32,
    status: GameStatus,
    history: Vec<HistoryEntry>,
    score: Option<ScoreRecord>,
    seed: u64,
}

impl GameSession {
    pub fn new(requested_cards: usize) -> Self {
        Self::with_seed(requested_cards, rand::random())
    }

    pub fn with_seed(requested_cards: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::deal(requested_cards, &mut rng);
        let reveal = RevealState::concealed(board.len());
        Self {
            board,
            reveal,
            guesses: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
            score: None,
            seed,
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        reveal: RevealState,
        guesses: u32,
        status: GameStatus,
        history: Vec<HistoryEntry>,
        score: Option<ScoreRecord>,
        seed: u64,
    ) -> Self {
        Self {
            board,
            reveal,
            guesses,
            status,
            history,
            score,
            seed,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn cards(&self) -> usize {
        self.board.len()
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn score(&self) -> Option<ScoreRecord> {
        self.score
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    fn require_active(&self) -> Result<(), GameError> {
        if self.status == GameStatus::InProgress {
            Ok(())
        } else {
            Err(GameError::GameNotActive(self.status))
        }
    }

    /// Reveal a card without spending a guess.
    pub fn peek(&self, position: usize) -> Result<Card, GameError> {
        self.require_active()?;
        evaluator::peek(position, &self.board)
    }

    /// Index of an unrevealed partner for the card at `position`.
    pub fn hint(&self, position: usize) -> Result<usize, GameError> {
        self.require_active()?;
        evaluator::find_partner(position, &self.board, &self.reveal)
    }

    /// Play one two-card move. The guess counter advances exactly once per
    /// committed move, match or miss; a failed evaluation changes nothing.
    pub fn guess(&mut self, first: usize, second: usize) -> Result<MoveReport, GameError> {
        self.require_active()?;
        let MoveOutcome {
            mut message,
            reveal,
            matched,
        } = evaluator::evaluate_move(first, second, &self.board, &self.reveal)?;

        let won = reveal.is_complete();
        self.reveal = reveal;
        self.guesses += 1;
        if won {
            message.push_str(" Congratulations -- you win! All cards matched!");
            self.score = Some(ScoreRecord::compute(self.board.len(), self.guesses)?);
            self.status = GameStatus::Won;
        }
        self.history.push(HistoryEntry {
            first,
            second,
            message: message.clone(),
        });

        Ok(MoveReport {
            message,
            matched,
            won,
            score: self.score,
        })
    }

    /// Abandon an in-progress game. Terminal games cannot be canceled again.
    pub fn cancel(&mut self) -> Result<(), GameError> {
        self.require_active()?;
        self.status = GameStatus::Canceled;
        Ok(())
    }
}

use crate::model::card::Card;
use crate::model::deck::Deck;
use rand::seq::SliceRandom;

pub const MIN_CARDS: usize = 8;
pub const MAX_CARDS: usize = 52;

/// The true, hidden card sequence for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Deal a board of `requested` cards: normalize the size, slice the
    /// canonical deck to that prefix, then shuffle the slice. Slicing before
    /// shuffling is what keeps every dealt rank matchable.
    pub fn deal<R: rand::Rng + ?Sized>(requested: usize, rng: &mut R) -> Self {
        let size = Self::normalize_size(requested);
        let mut cards = Deck::standard().cards()[..size].to_vec();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Lenient size policy: odd counts round up by one, then the result is
    /// clamped to `MIN_CARDS..=MAX_CARDS`. Bad sizes are corrected, never
    /// rejected.
    pub fn normalize_size(requested: usize) -> usize {
        let even = if requested % 2 == 1 {
            requested + 1
        } else {
            requested
        };
        even.clamp(MIN_CARDS, MAX_CARDS)
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn card(&self, position: usize) -> Option<Card> {
        self.cards.get(position).copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

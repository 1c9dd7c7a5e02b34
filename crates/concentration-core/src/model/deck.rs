use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Rank-major order: all four suits of a rank sit together, so any
    /// even-length prefix contains every rank it touches an even number of
    /// times. Truncated boards stay pairable.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::ORDERED.iter().copied() {
            for suit in Suit::ALL.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

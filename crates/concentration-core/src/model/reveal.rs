use serde::{Deserialize, Serialize};

/// Per-position visibility. A move either matches both cards or leaves them
/// concealed, so there is no persisted half-flipped state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardStatus {
    #[serde(rename = "U")]
    Unrevealed,
    #[serde(rename = "M")]
    Matched,
}

/// The visibility mirror of a board: one `CardStatus` per card position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    slots: Vec<CardStatus>,
}

impl RevealState {
    pub fn concealed(len: usize) -> Self {
        Self {
            slots: vec![CardStatus::Unrevealed; len],
        }
    }

    pub fn from_slots(slots: Vec<CardStatus>) -> Self {
        Self { slots }
    }

    pub fn status(&self, position: usize) -> Option<CardStatus> {
        self.slots.get(position).copied()
    }

    pub fn mark_matched(&mut self, position: usize) {
        if let Some(slot) = self.slots.get_mut(position) {
            *slot = CardStatus::Matched;
        }
    }

    /// Win detection: the game is over once nothing is left unrevealed.
    pub fn is_complete(&self) -> bool {
        !self
            .slots
            .iter()
            .any(|status| *status == CardStatus::Unrevealed)
    }

    pub fn matched_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|status| **status == CardStatus::Matched)
            .count()
    }

    pub fn slots(&self) -> &[CardStatus] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CardStatus, RevealState};

    #[test]
    fn fresh_state_is_fully_concealed() {
        let state = RevealState::concealed(8);
        assert_eq!(state.len(), 8);
        assert_eq!(state.matched_count(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn complete_only_when_everything_matched() {
        let mut state = RevealState::concealed(4);
        for position in 0..3 {
            state.mark_matched(position);
        }
        assert!(!state.is_complete());
        state.mark_matched(3);
        assert!(state.is_complete());
    }

    #[test]
    fn mark_matched_ignores_out_of_range_positions() {
        let mut state = RevealState::concealed(4);
        state.mark_matched(17);
        assert_eq!(state.matched_count(), 0);
    }

    #[test]
    fn status_reports_per_position() {
        let mut state = RevealState::concealed(2);
        state.mark_matched(1);
        assert_eq!(state.status(0), Some(CardStatus::Unrevealed));
        assert_eq!(state.status(1), Some(CardStatus::Matched));
        assert_eq!(state.status(2), None);
    }

    #[test]
    fn card_status_serializes_to_single_letters() {
        let encoded = serde_json::to_string(&vec![CardStatus::Unrevealed, CardStatus::Matched])
            .expect("encode statuses");
        assert_eq!(encoded, r#"["U","M"]"#);
    }
}

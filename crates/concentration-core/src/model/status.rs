use core::fmt;
use serde::{Deserialize, Serialize};

/// Lifecycle of a game session. `Won` and `Canceled` are terminal; no
/// gameplay operation is legal once either is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Won,
    Canceled,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Canceled)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "In Progress",
            GameStatus::Won => "Won",
            GameStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::GameStatus;

    #[test]
    fn only_in_progress_is_non_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Canceled.is_terminal());
    }

    #[test]
    fn serializes_to_stored_labels() {
        assert_eq!(
            serde_json::to_string(&GameStatus::InProgress).unwrap(),
            r#""In Progress""#
        );
        assert_eq!(serde_json::to_string(&GameStatus::Won).unwrap(), r#""Won""#);
    }

    #[test]
    fn display_matches_stored_labels() {
        assert_eq!(GameStatus::Canceled.to_string(), "Canceled");
    }
}

//! Game state types.

use alloc::string::String;

/// Game state.
///
/// A game is in progress while at least two players hold cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// At least two players still hold cards.
    InProgress,
    /// One or no players hold cards.
    Over {
        /// The last player holding cards, if any.
        winner: Option<String>,
    },
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::Over { .. })
    }

    /// Returns the winner's name, if the game ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Over { winner } => winner.as_deref(),
            Self::InProgress => None,
        }
    }
}

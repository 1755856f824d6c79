//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while dealing the deck into hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No players to deal to.
    #[error("no players to deal to")]
    NoPlayers,
    /// More players than cards in the deck.
    #[error("{players} players cannot each be dealt a card")]
    TooManyPlayers {
        /// Requested number of players.
        players: usize,
    },
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No player names were given.
    #[error("a game needs at least one player")]
    NoPlayers,
    /// More players than cards in the deck.
    #[error("{players} players cannot each be dealt a card")]
    TooManyPlayers {
        /// Requested number of players.
        players: usize,
    },
    /// A player name is empty or whitespace.
    #[error("player name is empty")]
    EmptyName,
    /// Two players share a name.
    #[error("duplicate player name: {0}")]
    DuplicateName(String),
}

impl From<DealError> for SetupError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::NoPlayers => Self::NoPlayers,
            DealError::TooManyPlayers { players } => Self::TooManyPlayers { players },
        }
    }
}

/// Errors that can occur while playing rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// There are no active players left to take a turn.
    #[error("no active players")]
    NoActivePlayers,
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
}

//! Round results and table snapshots.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The player who took the turn.
    pub player: String,
    /// The card placed, or `None` if the player's hand was empty.
    pub card: Option<Card>,
    /// Number of pile cards the player collected by calling snap (0 if none).
    pub claimed: usize,
    /// Players removed after the round for running out of cards.
    pub eliminated: Vec<String>,
    /// Game state after the round.
    pub state: GameState,
}

impl RoundResult {
    /// Returns whether the round ended in a snap.
    #[must_use]
    pub const fn is_snap(&self) -> bool {
        self.claimed > 0
    }
}

/// What a renderer needs to know about one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    /// Name of the player.
    pub name: String,
    /// Cards left in the hand.
    pub hand_size: usize,
    /// The card that would be drawn next.
    pub top_card: Option<Card>,
}

/// Snapshot of the observable game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Name of the player whose turn it is.
    pub current_player: Option<String>,
    /// Top card of the pile.
    pub pile_top: Option<Card>,
    /// Number of cards in the pile.
    pub pile_len: usize,
    /// Active players in turn order.
    pub players: Vec<PlayerView>,
    /// Game state.
    pub state: GameState,
}

impl TableView {
    /// Returns the names of the active players in turn order.
    #[must_use]
    pub fn active_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|player| player.name.as_str())
    }
}

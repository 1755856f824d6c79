use alloc::string::String;
use alloc::vec::Vec;

use crate::observer::Event;
use crate::options::RemovalPolicy;
use crate::player::Player;

use super::{SnapGame, notify};

impl SnapGame {
    /// Removes the named player from the rotation.
    ///
    /// Returns `false`, leaving the game untouched, if no player has that name.
    /// The turn index is repaired according to [`RemovalPolicy`]; with the
    /// default policy it only wraps to the first player when it falls off the
    /// end.
    pub fn remove_player(&mut self, name: &str) -> bool {
        let before = self.players.len();
        let ahead = self.players[..self.current_player.min(before)]
            .iter()
            .filter(|player| player.name() == name)
            .count();

        self.players.retain(|player| player.name() != name);
        if self.players.len() == before {
            return false;
        }

        if self.options.removal == RemovalPolicy::KeepNextInOrder {
            self.current_player -= ahead;
        }
        if self.current_player >= self.players.len() {
            self.current_player = 0;
        }

        log::debug!("removed {name}, turn at {:?}", self.current_player_name());
        true
    }

    /// Returns the active players who still hold cards, in turn order.
    #[must_use]
    pub fn players_with_cards(&self) -> Vec<&Player> {
        self.players.iter().filter(|player| !player.is_empty()).collect()
    }

    /// Removes every active player with an empty hand and returns their names.
    pub(super) fn eliminate_empty_hands(&mut self) -> Vec<String> {
        let out: Vec<String> = self
            .players
            .iter()
            .filter(|player| player.is_empty())
            .map(|player| String::from(player.name()))
            .collect();

        for name in &out {
            self.remove_player(name);
            notify(&mut self.observer, &Event::Eliminated { player: name });
        }

        out
    }
}

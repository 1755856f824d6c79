use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PlayError;
use crate::observer::Event;
use crate::options::EmptyHandPolicy;
use crate::result::RoundResult;

use super::{GameState, SnapGame, notify};

impl SnapGame {
    /// Passes the turn to the next player, wrapping around.
    ///
    /// Does nothing when there are no players.
    pub fn switch_turn(&mut self) {
        if self.players.is_empty() {
            return;
        }
        self.current_player = (self.current_player + 1) % self.players.len();
        log::debug!("turn passes to {:?}", self.current_player_name());
    }

    /// Plays one turn for the current player.
    ///
    /// The player places their top card on the pile. If it has the same rank
    /// as the card below it, the player collects the whole pile onto their
    /// hand. The turn then passes on, whether or not a card was placed.
    ///
    /// Players who run out of cards are not removed here; see
    /// [`SnapGame::advance`].
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NoActivePlayers`] if every player has been removed.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{Card, Rank, SnapGame, Suit};
    ///
    /// let mut game = SnapGame::new([
    ///     ("alice", vec![Card::new(Suit::Hearts, Rank::Seven)]),
    ///     ("bob", vec![Card::new(Suit::Diamonds, Rank::Seven)]),
    /// ]);
    /// game.play_round().unwrap();
    /// let result = game.play_round().unwrap();
    /// assert_eq!(result.player, "bob");
    /// assert_eq!(result.claimed, 2);
    /// assert!(game.pile().is_empty());
    /// ```
    pub fn play_round(&mut self) -> Result<RoundResult, PlayError> {
        if self.players.is_empty() {
            return Err(PlayError::NoActivePlayers);
        }

        if self.options.empty_hand == EmptyHandPolicy::Skip {
            self.skip_empty_hands();
        }

        let index = self.current_player;
        let player = &mut self.players[index];
        let card = match self.observer.as_mut() {
            Some(observer) => player.draw_and_notify(&mut **observer),
            None => player.draw(),
        };

        let mut claimed = 0;
        if let Some(card) = card {
            log::debug!("{} places {card}", self.players[index].name());
            self.pile.push(card);

            if self.is_snap() {
                claimed = self.pile.len();
                let player = &mut self.players[index];
                let hand = player.len();
                player.receive(self.pile.drain(..));

                log::debug!("{} collects {claimed} cards", player.name());
                notify(
                    &mut self.observer,
                    &Event::Snap {
                        player: self.players[index].name(),
                        hand,
                        pile: claimed,
                    },
                );
            }
        } else {
            log::debug!("{} has no card to place", self.players[index].name());
        }

        let player = String::from(self.players[index].name());
        self.switch_turn();

        Ok(RoundResult {
            player,
            card,
            claimed,
            eliminated: Vec::new(),
            state: self.state(),
        })
    }

    /// Plays one turn, then removes every player left without cards.
    ///
    /// This is the step a driver repeats until the game is over. The
    /// observer receives an [`Event::GameOver`] on the step that ends it.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::GameOver`] if fewer than two players hold cards.
    pub fn advance(&mut self) -> Result<RoundResult, PlayError> {
        if self.state().is_over() {
            return Err(PlayError::GameOver);
        }

        let mut result = self.play_round()?;
        result.eliminated = self.eliminate_empty_hands();
        result.state = self.state();

        if let GameState::Over { winner } = &result.state {
            log::info!("game over, winner: {winner:?}");
            notify(
                &mut self.observer,
                &Event::GameOver {
                    winner: winner.as_deref(),
                },
            );
        }

        Ok(result)
    }

    /// Returns whether the two most recent pile cards share a rank.
    fn is_snap(&self) -> bool {
        match self.pile.as_slice() {
            [.., below, top] => top.same_rank(below),
            _ => false,
        }
    }

    /// Moves the turn forward to the first player holding cards.
    ///
    /// Leaves the turn alone if nobody holds cards.
    fn skip_empty_hands(&mut self) {
        let count = self.players.len();
        let next = (0..count)
            .map(|offset| (self.current_player + offset) % count)
            .find(|&index| !self.players[index].is_empty());

        if let Some(index) = next {
            if index != self.current_player {
                log::trace!(
                    "skipping {} empty hands",
                    (index + count - self.current_player) % count
                );
            }
            self.current_player = index;
        }
    }
}

//! Game engine and state management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::SetupError;
use crate::observer::{Event, Observer};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{PlayerView, TableView};

mod roster;
mod round;
pub mod state;

pub use state::GameState;

/// A Snap game: the players in turn order, the shared pile, and whose turn it
/// is.
///
/// The game exclusively owns all of its state. A driver calls
/// [`SnapGame::advance`] (or the lower level [`SnapGame::play_round`]) once
/// per turn and renders [`SnapGame::view`] in between.
pub struct SnapGame {
    /// Active players in turn order.
    players: Vec<Player>,
    /// The shared pile, most recent card last.
    pile: Vec<Card>,
    /// Index of the player whose turn it is.
    current_player: usize,
    /// Game options.
    options: GameOptions,
    /// Receiver for game events.
    observer: Option<Box<dyn Observer>>,
}

impl SnapGame {
    /// Creates a game from `(name, hand)` pairs with default options.
    ///
    /// Hands are used as given, top card last. Names are not validated; use
    /// [`SnapGame::start`] to deal a fresh deck to checked names.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{Card, Rank, SnapGame, Suit};
    ///
    /// let game = SnapGame::new([
    ///     ("alice", vec![Card::new(Suit::Clubs, Rank::Three)]),
    ///     ("bob", vec![Card::new(Suit::Spades, Rank::Five)]),
    /// ]);
    /// assert_eq!(game.current_player_name(), Some("alice"));
    /// assert!(game.pile().is_empty());
    /// ```
    #[must_use]
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Card>)>,
        S: Into<String>,
    {
        Self::with_options(players, GameOptions::default())
    }

    /// Creates a game from `(name, hand)` pairs with the given options.
    #[must_use]
    pub fn with_options<I, S>(players: I, options: GameOptions) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Card>)>,
        S: Into<String>,
    {
        Self {
            players: players
                .into_iter()
                .map(|(name, hand)| Player::new(name, hand))
                .collect(),
            pile: Vec::new(),
            current_player: 0,
            options,
            observer: None,
        }
    }

    /// Shuffles a fresh deck with `seed`, deals it to `names`, and creates the
    /// game.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no names, more names than cards, an empty
    /// or blank name, or a repeated name.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{GameOptions, SnapGame};
    ///
    /// let game = SnapGame::start(["alice", "bob", "carol"], GameOptions::default(), 42).unwrap();
    /// assert!(game.players().iter().all(|player| player.len() == 17));
    /// ```
    pub fn start<I, S>(names: I, options: GameOptions, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SetupError::NoPlayers);
        }

        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SetupError::EmptyName);
            }
            if names[..index].contains(name) {
                return Err(SetupError::DuplicateName(name.clone()));
            }
        }

        let mut deck = Deck::new();
        deck.shuffle_seeded(seed);
        let deal = deck.deal(names.len(), options.remainder)?;

        log::info!("starting snap with {} players", names.len());

        Ok(Self::with_options(names.into_iter().zip(deal.hands), options))
    }

    /// Sets the observer that receives game events, replacing any previous one.
    pub fn set_observer<O: Observer + 'static>(&mut self, observer: O) {
        self.observer = Some(Box::new(observer));
    }

    /// Returns the game with `observer` attached.
    #[must_use]
    pub fn with_observer<O: Observer + 'static>(mut self, observer: O) -> Self {
        self.set_observer(observer);
        self
    }

    /// Detaches the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the active players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    /// Returns the pile, most recent card last.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Returns the top card of the pile.
    #[must_use]
    pub fn pile_top(&self) -> Option<&Card> {
        self.pile.last()
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the name of the player whose turn it is.
    ///
    /// Returns `None` once every player has been removed.
    #[must_use]
    pub fn current_player_name(&self) -> Option<&str> {
        self.players.get(self.current_player).map(Player::name)
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        match self.players_with_cards().as_slice() {
            [] => GameState::Over { winner: None },
            [winner] => GameState::Over {
                winner: Some(String::from(winner.name())),
            },
            _ => GameState::InProgress,
        }
    }

    /// Returns a snapshot of everything a renderer shows.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView {
            current_player: self.current_player_name().map(String::from),
            pile_top: self.pile.last().copied(),
            pile_len: self.pile.len(),
            players: self
                .players
                .iter()
                .map(|player| PlayerView {
                    name: String::from(player.name()),
                    hand_size: player.len(),
                    top_card: player.top_card().copied(),
                })
                .collect(),
            state: self.state(),
        }
    }
}

fn notify(observer: &mut Option<Box<dyn Observer>>, event: &Event<'_>) {
    if let Some(observer) = observer {
        observer.notify(event);
    }
}

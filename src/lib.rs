//! A Snap card game engine with optional `no_std` support.
//!
//! Players take turns placing the top card of their hand on a shared pile.
//! A player whose card matches the rank of the card beneath it collects the
//! whole pile. Players who run out of cards drop out, and the last player
//! holding cards wins.
//!
//! The crate provides a [`SnapGame`] type that owns the players, the pile, and
//! the turn order. Drivers call [`SnapGame::advance`] once per turn and render
//! [`SnapGame::view`].
//!
//! # Example
//!
//! ```
//! use snaprs::{GameOptions, SnapGame};
//!
//! let mut game = SnapGame::start(["alice", "bob"], GameOptions::default(), 42).unwrap();
//! for _ in 0..10_000 {
//!     if game.state().is_over() {
//!         break;
//!     }
//!     let round = game.advance().unwrap();
//!     for name in &round.eliminated {
//!         println!("{name} is out of the game");
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod observer;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deal, Deck};
pub use error::{DealError, PlayError, SetupError};
pub use game::{GameState, SnapGame};
pub use observer::{Event, LogObserver, Observer};
pub use options::{EmptyHandPolicy, GameOptions, RemainderPolicy, RemovalPolicy};
pub use player::Player;
pub use result::{PlayerView, RoundResult, TableView};

//! Game event notifications.
//!
//! A [`SnapGame`](crate::SnapGame) can carry one [`Observer`] that is told
//! about every card placed, every snap, every elimination, and the end of the
//! game. Closures taking `&Event<'_>` implement the trait directly.

use alloc::format;
use alloc::string::String;

use crate::card::Card;

/// Something that happened during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A player placed a card on the pile.
    Placed {
        /// Name of the player.
        player: &'a str,
        /// The card placed.
        card: Card,
        /// Cards left in the player's hand.
        remaining: usize,
    },
    /// A player matched the pile top and collected the pile.
    Snap {
        /// Name of the player.
        player: &'a str,
        /// Cards in the player's hand before collecting the pile.
        hand: usize,
        /// Number of cards collected.
        pile: usize,
    },
    /// A player ran out of cards and left the rotation.
    Eliminated {
        /// Name of the player.
        player: &'a str,
    },
    /// The game ended.
    GameOver {
        /// Name of the last player holding cards, if any.
        winner: Option<&'a str>,
    },
}

/// Receives game events.
pub trait Observer {
    /// Called once per event, after the event has been applied to the game.
    fn notify(&mut self, event: &Event<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&Event<'_>),
{
    fn notify(&mut self, event: &Event<'_>) {
        self(event);
    }
}

/// Observer that reports events through the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn notify(&mut self, event: &Event<'_>) {
        log::info!("{}", message(event));
    }
}

/// Renders an event as the line shown to players.
///
/// # Example
///
/// ```
/// use snaprs::observer::{Event, message};
///
/// let line = message(&Event::Eliminated { player: "alice" });
/// assert_eq!(line, "alice is out of the game");
/// ```
#[must_use]
pub fn message(event: &Event<'_>) -> String {
    match *event {
        Event::Placed {
            player,
            card,
            remaining,
        } => format!("{player} places {card} (cards in hand: {remaining})"),
        Event::Snap { player, hand, .. } => format!("{player} calls snap (cards in hand: {hand})"),
        Event::Eliminated { player } => format!("{player} is out of the game"),
        Event::GameOver {
            winner: Some(winner),
        } => format!("{winner} wins"),
        Event::GameOver { winner: None } => {
            String::from("no players have any cards left, the game is over")
        }
    }
}

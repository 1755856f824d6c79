//! Players and their hands.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::observer::{Event, Observer};

/// A player and the stack of cards they draw from.
///
/// The last card of the hand is the top of the stack and is drawn next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Name of the player, unique within a game.
    name: String,
    /// Cards in the hand, top last.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player holding `hand`.
    #[must_use]
    pub fn new(name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            hand,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand, top last.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the card that would be drawn next.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.hand.last()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Removes and returns the top card, or `None` if the hand is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.hand.pop()
    }

    /// Draws like [`Player::draw`] and reports the placed card to `observer`.
    ///
    /// Nothing is reported when the hand is empty.
    pub fn draw_and_notify<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Option<Card> {
        let card = self.draw()?;
        observer.notify(&Event::Placed {
            player: &self.name,
            card,
            remaining: self.hand.len(),
        });
        Some(card)
    }

    /// Adds cards to the top of the hand, keeping their order.
    pub fn receive<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.extend(cards);
    }
}

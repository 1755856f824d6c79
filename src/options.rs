//! Game configuration options.
//!
//! The defaults reproduce classic table behaviour, including its rough edges:
//! leftover cards are not dealt, removing a player can reset the turn to the
//! first seat, and a player with an empty hand still takes a (silent) turn.

/// What to do with the `52 mod N` cards left after an even deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemainderPolicy {
    /// Leftover cards are set aside and never played.
    #[default]
    Drop,
    /// Leftover cards are dealt one each to the first players.
    DealOut,
}

/// How the turn index is repaired after a player is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemovalPolicy {
    /// Keep the index as is and wrap to the first player if it falls off
    /// the end. Removing a player seated before the current one skips a turn.
    #[default]
    ResetToFirst,
    /// The player who would have played next keeps the turn.
    KeepNextInOrder,
}

/// Whether a player with no cards still takes a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyHandPolicy {
    /// The player takes a turn that places nothing.
    #[default]
    TakeTurn,
    /// The turn passes to the next player holding cards before drawing.
    Skip,
}

/// Configuration options for a Snap game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use snaprs::{GameOptions, RemainderPolicy, RemovalPolicy};
///
/// let options = GameOptions::default()
///     .with_remainder(RemainderPolicy::DealOut)
///     .with_removal(RemovalPolicy::KeepNextInOrder);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Handling of cards left over after the deal.
    pub remainder: RemainderPolicy,
    /// Turn repair after removing a player.
    pub removal: RemovalPolicy,
    /// Turn handling for players with empty hands.
    pub empty_hand: EmptyHandPolicy,
}

impl GameOptions {
    /// Sets the remainder policy.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{GameOptions, RemainderPolicy};
    ///
    /// let options = GameOptions::default().with_remainder(RemainderPolicy::DealOut);
    /// assert_eq!(options.remainder, RemainderPolicy::DealOut);
    /// ```
    #[must_use]
    pub const fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Sets the removal policy.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{GameOptions, RemovalPolicy};
    ///
    /// let options = GameOptions::default().with_removal(RemovalPolicy::KeepNextInOrder);
    /// assert_eq!(options.removal, RemovalPolicy::KeepNextInOrder);
    /// ```
    #[must_use]
    pub const fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }

    /// Sets the empty hand policy.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{EmptyHandPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_empty_hand(EmptyHandPolicy::Skip);
    /// assert_eq!(options.empty_hand, EmptyHandPolicy::Skip);
    /// ```
    #[must_use]
    pub const fn with_empty_hand(mut self, empty_hand: EmptyHandPolicy) -> Self {
        self.empty_hand = empty_hand;
        self
    }
}

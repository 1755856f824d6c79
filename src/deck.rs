//! The 52-card deck and the initial deal.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::options::RemainderPolicy;

/// A standard 52-card deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// The result of dealing a deck into hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// One hand per player, in seating order.
    pub hands: Vec<Vec<Card>>,
    /// Cards that were not dealt to anyone.
    pub undealt: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck.
    ///
    /// Cards are ordered suit by suit (hearts, diamonds, clubs, spades), and
    /// from 2 up to ace within each suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Shuffles the deck using a generator seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) {
        let mut rng = ChaCha8Rng::from_os_rng();
        self.shuffle_with(&mut rng);
    }

    /// Shuffles the deck deterministically from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::Deck;
    ///
    /// let mut a = Deck::new();
    /// let mut b = Deck::new();
    /// a.shuffle_seeded(7);
    /// b.shuffle_seeded(7);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffles the deck with the given random number generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Deals the deck into `players` hands.
    ///
    /// Each hand is a contiguous run of `52 / players` cards taken in deck
    /// order. The `52 % players` cards left over are handled by `remainder`.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is zero or larger than the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{Deck, RemainderPolicy};
    ///
    /// let deal = Deck::new().deal(3, RemainderPolicy::Drop).unwrap();
    /// assert_eq!(deal.hands.len(), 3);
    /// assert!(deal.hands.iter().all(|hand| hand.len() == 17));
    /// assert_eq!(deal.undealt.len(), 1);
    /// ```
    pub fn deal(self, players: usize, remainder: RemainderPolicy) -> Result<Deal, DealError> {
        if players == 0 {
            return Err(DealError::NoPlayers);
        }
        if players > self.cards.len() {
            return Err(DealError::TooManyPlayers { players });
        }

        let per_hand = self.cards.len() / players;
        let dealt = per_hand * players;

        let mut cards = self.cards;
        let mut undealt = cards.split_off(dealt);
        let mut hands: Vec<Vec<Card>> = cards
            .chunks_exact(per_hand)
            .map(<[Card]>::to_vec)
            .collect();

        if remainder == RemainderPolicy::DealOut {
            for (hand, card) in hands.iter_mut().zip(undealt.drain(..)) {
                hand.push(card);
            }
        }

        log::info!(
            "dealt {} cards to {} players ({} undealt)",
            hands.iter().map(Vec::len).sum::<usize>(),
            players,
            undealt.len()
        );

        Ok(Deal { hands, undealt })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

//! Deck and deal integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use snaprs::{Card, DECK_SIZE, DealError, Deck, Rank, RemainderPolicy, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn distinct(cards: &[Card]) -> HashSet<Card> {
    cards.iter().copied().collect()
}

#[test]
fn new_deck_is_ordered_by_suit_then_rank() {
    let deck = Deck::new();
    let cards = deck.cards();

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(DECK_SIZE, 52);
    assert_eq!(distinct(cards).len(), DECK_SIZE);

    assert_eq!(cards[0], card(Suit::Hearts, Rank::Two));
    assert_eq!(cards[12], card(Suit::Hearts, Rank::Ace));
    assert_eq!(cards[13], card(Suit::Diamonds, Rank::Two));
    assert_eq!(cards[51], card(Suit::Spades, Rank::Ace));
}

#[test]
fn shuffle_is_a_permutation() {
    let original = distinct(Deck::new().cards());

    for seed in 0..16 {
        let mut deck = Deck::new();
        deck.shuffle_seeded(seed);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(distinct(deck.cards()), original);
    }

    let mut deck = Deck::new();
    deck.shuffle();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(distinct(deck.cards()), original);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle_seeded(9);
    b.shuffle_seeded(9);
    assert_eq!(a, b);

    let mut c = Deck::new();
    c.shuffle_with(&mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(a, c);

    let mut d = Deck::new();
    d.shuffle_seeded(10);
    assert_ne!(a, d);
    assert_ne!(a, Deck::new());
}

#[test]
fn even_deal_drops_the_remainder() {
    for players in 1..=4 {
        let mut deck = Deck::new();
        deck.shuffle_seeded(players as u64);
        let order = deck.cards().to_vec();

        let deal = deck.deal(players, RemainderPolicy::Drop).unwrap();
        let per_hand = DECK_SIZE / players;

        assert_eq!(deal.hands.len(), players);
        assert_eq!(deal.undealt.len(), DECK_SIZE % players);
        for (index, hand) in deal.hands.iter().enumerate() {
            assert_eq!(hand.as_slice(), &order[index * per_hand..(index + 1) * per_hand]);
        }

        let mut seen = HashSet::new();
        for card in deal.hands.iter().flatten().chain(&deal.undealt) {
            assert!(seen.insert(*card), "{card} dealt twice");
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }
}

#[test]
fn deal_out_spreads_the_remainder() {
    let deal = Deck::new().deal(5, RemainderPolicy::DealOut).unwrap();
    let sizes: Vec<usize> = deal.hands.iter().map(Vec::len).collect();

    assert_eq!(sizes, vec![11, 11, 10, 10, 10]);
    assert!(deal.undealt.is_empty());
    assert_eq!(deal.hands[0].last(), Some(&card(Suit::Spades, Rank::King)));
    assert_eq!(deal.hands[1].last(), Some(&card(Suit::Spades, Rank::Ace)));
}

#[test]
fn deal_errors() {
    assert_eq!(
        Deck::new().deal(0, RemainderPolicy::Drop).unwrap_err(),
        DealError::NoPlayers
    );
    assert_eq!(
        Deck::new().deal(53, RemainderPolicy::Drop).unwrap_err(),
        DealError::TooManyPlayers { players: 53 }
    );

    let deal = Deck::new().deal(52, RemainderPolicy::Drop).unwrap();
    assert!(deal.hands.iter().all(|hand| hand.len() == 1));
    assert!(deal.undealt.is_empty());
}

#[test]
fn card_display_and_rank_matching() {
    assert_eq!(card(Suit::Hearts, Rank::Seven).to_string(), "7 of hearts");
    assert_eq!(card(Suit::Spades, Rank::Queen).to_string(), "queen of spades");
    assert_eq!(card(Suit::Clubs, Rank::Ten).to_string(), "10 of clubs");

    let seven_hearts = card(Suit::Hearts, Rank::Seven);
    let seven_diamonds = card(Suit::Diamonds, Rank::Seven);
    assert!(seven_hearts.same_rank(&seven_diamonds));
    assert_ne!(seven_hearts, seven_diamonds);
    assert!(!seven_hearts.same_rank(&card(Suit::Hearts, Rank::Eight)));
}

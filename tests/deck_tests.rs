//! Deck invariant tests.
//!
//! Property-based checks that shuffling and dealing preserve the
//! 52-unique-cards invariant for any seed and hand count.

use std::collections::HashSet;

use proptest::prelude::*;

use tapjack::cards::{Card, Deck};
use tapjack::core::GameRng;

#[test]
fn reset_always_yields_13_ranks_by_4_suits() {
    let deck = Deck::new();
    assert_eq!(deck.len(), 52);

    let mut by_rank = std::collections::HashMap::new();
    for card in deck.cards() {
        *by_rank.entry(card.rank).or_insert(0u32) += 1;
    }
    assert_eq!(by_rank.len(), 13);
    assert!(by_rank.values().all(|&count| count == 4));
}

#[test]
fn deal_four_partitions_the_deck() {
    let mut deck = Deck::new();
    let mut rng = GameRng::new(99);
    deck.shuffle(&mut rng);

    let hands = deck.deal(4).unwrap();
    assert!(hands.iter().all(|h| h.len() == 13));

    let mut union: Vec<Card> = hands.iter().flat_map(|h| h.iter().copied()).collect();
    union.sort();
    let mut all = deck.cards().to_vec();
    all.sort();
    assert_eq!(union, all);
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation_for_any_seed(seed: u64) {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(seed);
        deck.shuffle(&mut rng);

        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(unique.len(), 52);
    }

    #[test]
    fn same_seed_same_order(seed: u64) {
        let mut deck1 = Deck::new();
        let mut deck2 = Deck::new();
        let mut rng1 = GameRng::new(seed);
        let mut rng2 = GameRng::new(seed);

        deck1.shuffle(&mut rng1);
        deck2.shuffle(&mut rng2);

        prop_assert_eq!(deck1.cards(), deck2.cards());
    }

    #[test]
    fn deal_partitions_for_any_hand_count(seed: u64, n in 1usize..9) {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(seed);
        deck.shuffle(&mut rng);

        let hands = deck.deal(n).unwrap();
        prop_assert_eq!(hands.len(), n);

        let total: usize = hands.iter().map(|h| h.len()).sum();
        prop_assert_eq!(total, 52);

        // Hand sizes differ by at most one.
        let min = hands.iter().map(|h| h.len()).min().unwrap();
        let max = hands.iter().map(|h| h.len()).max().unwrap();
        prop_assert!(max - min <= 1);

        let unique: HashSet<Card> = hands.iter().flat_map(|h| h.iter().copied()).collect();
        prop_assert_eq!(unique.len(), 52);
    }
}

//! Deck construction, shuffling, and dealing.
//!
//! One deck is built per match, shuffled, and fully consumed by `deal`;
//! after dealing, the deck holds no state the match depends on.

use im::Vector;

use crate::core::{EngineError, GameRng};

use super::card::{Card, Rank, Suit};

/// An ordered 52-card deck.
///
/// ## Example
///
/// ```
/// use tapjack::cards::Deck;
/// use tapjack::core::GameRng;
///
/// let mut deck = Deck::new();
/// let mut rng = GameRng::new(42);
/// deck.shuffle(&mut rng);
///
/// let hands = deck.deal(4).unwrap();
/// assert_eq!(hands.len(), 4);
/// assert!(hands.iter().all(|h| h.len() == 13));
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the canonical 52-card deck in rank-major order.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self { cards: Vec::new() };
        deck.reset();
        deck
    }

    /// Rebuild the canonical 52-card set, discarding any prior order.
    pub fn reset(&mut self) {
        self.cards.clear();
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Shuffle in place with the supplied RNG.
    ///
    /// Fisher-Yates driven by the (possibly entropy-seeded) `GameRng`:
    /// bit-reproducible for a given seed and RNG position. Always leaves
    /// exactly 52 unique cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal the deck round-robin into `n` ordered hands.
    ///
    /// Card k goes to hand `k % n`, preserving shuffle order within each
    /// hand. Fails with `InvalidArgument` for `n == 0`.
    pub fn deal(&self, n: usize) -> Result<Vec<Vector<Card>>, EngineError> {
        if n == 0 {
            return Err(EngineError::InvalidArgument(
                "cannot deal to zero hands".into(),
            ));
        }

        let mut hands = vec![Vector::new(); n];
        for (k, card) in self.cards.iter().enumerate() {
            hands[k % n].push_back(*card);
        }
        Ok(hands)
    }

    /// Number of cards currently in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reset_yields_52_unique_cards() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 52);

        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_reset_discards_prior_order() {
        let mut deck = Deck::new();
        let original = deck.cards().to_vec();

        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);
        assert_ne!(deck.cards(), original.as_slice());

        deck.reset();
        assert_eq!(deck.cards(), original.as_slice());
    }

    #[test]
    fn test_seeded_shuffle_reproducible() {
        let mut deck1 = Deck::new();
        let mut deck2 = Deck::new();
        let mut rng1 = GameRng::new(1234);
        let mut rng2 = GameRng::new(1234);

        deck1.shuffle(&mut rng1);
        deck2.shuffle(&mut rng2);

        assert_eq!(deck1.cards(), deck2.cards());
    }

    #[test]
    fn test_deal_four_hands() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(7);
        deck.shuffle(&mut rng);

        let hands = deck.deal(4).unwrap();
        assert_eq!(hands.len(), 4);
        for hand in &hands {
            assert_eq!(hand.len(), 13);
        }

        // Union of all hands is the original deck (as a multiset; cards
        // are unique so a set suffices).
        let mut union: Vec<Card> = hands.iter().flat_map(|h| h.iter().copied()).collect();
        union.sort();
        let mut all: Vec<Card> = deck.cards().to_vec();
        all.sort();
        assert_eq!(union, all);
    }

    #[test]
    fn test_deal_is_round_robin() {
        let deck = Deck::new(); // unshuffled: deterministic order
        let hands = deck.deal(4).unwrap();

        for (k, card) in deck.cards().iter().enumerate() {
            assert_eq!(hands[k % 4][k / 4], *card);
        }
    }

    #[test]
    fn test_deal_zero_hands_fails() {
        let deck = Deck::new();
        let err = deck.deal(0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_deal_uneven_split() {
        let deck = Deck::new();
        let hands = deck.deal(3).unwrap();
        let sizes: Vec<_> = hands.iter().map(|h| h.len()).collect();
        assert_eq!(sizes, vec![18, 17, 17]);
    }
}

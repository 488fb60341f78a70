//! Card values: ranks, suits, and the immutable card itself.
//!
//! Cards are pure `Copy` values with no identity beyond rank + suit;
//! the two black sevens are distinct cards that happen to share a rank,
//! which is exactly what pattern detection cares about.

use serde::{Deserialize, Serialize};

/// Rank of a playing card, Two through Ace.
///
/// Discriminants are the numeric card values used for scoring:
/// J=11, Q=12, K=13, A=14.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks in ascending value order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2-14.
    #[must_use]
    pub const fn value(self) -> i64 {
        self as i64
    }

    /// Short label for display: "2".."10", "J", "Q", "K", "A".
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// An immutable playing card.
///
/// ## Example
///
/// ```
/// use tapjack::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Queen, Suit::Spades);
/// assert_eq!(card.value(), 12);
/// assert!(card.is_face());
/// assert_eq!(card.challenge_chances(), 2);
/// assert_eq!(card.label(), "Q♠");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Numeric value: 2-10, J=11, Q=12, K=13, A=14.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.rank.value()
    }

    /// Whether this card triggers a challenge when played.
    #[must_use]
    pub fn is_face(self) -> bool {
        matches!(self.rank, Rank::Jack | Rank::Queen | Rank::King | Rank::Ace)
    }

    /// Chances granted to responders when this card starts a challenge:
    /// J=1, Q=2, K=3, A=4, 0 for non-face cards.
    #[must_use]
    pub fn challenge_chances(self) -> u8 {
        match self.rank {
            Rank::Jack => 1,
            Rank::Queen => 2,
            Rank::King => 3,
            Rank::Ace => 4,
            _ => 0,
        }
    }

    /// Display label, e.g. "Q♠" or "10♥". Used in observer events.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Queen.value(), 12);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn test_face_cards() {
        for rank in Rank::ALL {
            let card = Card::new(rank, Suit::Hearts);
            let expected = rank.value() >= 11;
            assert_eq!(card.is_face(), expected, "rank {:?}", rank);
        }
    }

    #[test]
    fn test_challenge_chances() {
        assert_eq!(Card::new(Rank::Jack, Suit::Clubs).challenge_chances(), 1);
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).challenge_chances(), 2);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).challenge_chances(), 3);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).challenge_chances(), 4);
        assert_eq!(Card::new(Rank::Nine, Suit::Clubs).challenge_chances(), 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).label(), "10♥");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).label(), "A♠");
        assert_eq!(format!("{}", Card::new(Rank::Two, Suit::Diamonds)), "2♦");
    }

    #[test]
    fn test_same_rank_different_suit_are_distinct() {
        let a = Card::new(Rank::Seven, Suit::Clubs);
        let b = Card::new(Rank::Seven, Suit::Spades);
        assert_ne!(a, b);
        assert_eq!(a.rank, b.rank);
    }

    #[test]
    fn test_card_serde_round_trip() {
        let card = Card::new(Rank::King, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}

//! Per-seat player state: hand queue, score, penalty allowance.
//!
//! A `Player` is owned exclusively by the match coordinator for the
//! duration of one match and rebuilt at `start_new_game`. The hand is a
//! queue: the front is the playable top, captured piles append to the
//! back. All mutation goes through the four operations below; nothing
//! else touches a hand.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// One seat's state for the current match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Display name (flavor content is external; this is a stable label).
    pub name: String,

    /// Whether this seat is driven by external input rather than AI.
    pub is_human: bool,

    /// Hand queue: front = playable top, back = receive end.
    hand: Vector<Card>,

    /// Accumulated score.
    score: i64,

    /// Number of piles this seat has captured.
    pile_take_count: u32,

    /// False taps remaining before further taps are ignored.
    tap_challenges_left: u8,
}

impl Player {
    /// Create a player with a dealt hand.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        is_human: bool,
        hand: Vector<Card>,
        tap_challenge_allowance: u8,
    ) -> Self {
        Self {
            name: name.into(),
            is_human,
            hand,
            score: 0,
            pile_take_count: 0,
            tap_challenges_left: tap_challenge_allowance,
        }
    }

    /// Pop the playable top card, if any.
    pub fn play_top(&mut self) -> Option<Card> {
        self.hand.pop_front()
    }

    /// Append captured cards to the back of the hand and count the take.
    pub fn receive_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.hand.push_back(card);
        }
        self.pile_take_count += 1;
    }

    /// Pop up to two cards from the front as a false-tap fine.
    ///
    /// Returned in discard order: the first element was discarded first
    /// and must end up deepest when front-inserted into the center pile.
    pub fn penalty_two(&mut self) -> SmallVec<[Card; 2]> {
        let mut fine = SmallVec::new();
        for _ in 0..2 {
            match self.hand.pop_front() {
                Some(card) => fine.push(card),
                None => break,
            }
        }
        fine
    }

    /// Add to this seat's score, returning the new total.
    pub fn add_score(&mut self, delta: i64) -> i64 {
        self.score += delta;
        self.score
    }

    /// Spend one tap-challenge allowance. Returns false (and changes
    /// nothing) if none remain.
    pub fn spend_tap_challenge(&mut self) -> bool {
        if self.tap_challenges_left == 0 {
            return false;
        }
        self.tap_challenges_left -= 1;
        true
    }

    /// The hand queue.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    /// Number of cards held.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Piles captured this match.
    #[must_use]
    pub fn pile_take_count(&self) -> u32 {
        self.pile_take_count
    }

    /// False taps remaining.
    #[must_use]
    pub fn tap_challenges_left(&self) -> u8 {
        self.tap_challenges_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Hearts)
    }

    fn player_with(ranks: &[Rank]) -> Player {
        let hand: Vector<Card> = ranks.iter().map(|&r| card(r)).collect();
        Player::new("test", false, hand, 3)
    }

    #[test]
    fn test_play_top_pops_front() {
        let mut player = player_with(&[Rank::Two, Rank::Five, Rank::King]);

        assert_eq!(player.play_top(), Some(card(Rank::Two)));
        assert_eq!(player.play_top(), Some(card(Rank::Five)));
        assert_eq!(player.card_count(), 1);
    }

    #[test]
    fn test_play_top_on_empty_hand() {
        let mut player = player_with(&[]);
        assert_eq!(player.play_top(), None);
    }

    #[test]
    fn test_receive_appends_to_back_and_counts() {
        let mut player = player_with(&[Rank::Two]);

        player.receive_cards([card(Rank::Nine), card(Rank::Ten)]);

        assert_eq!(player.card_count(), 3);
        assert_eq!(player.pile_take_count(), 1);
        // Top card unchanged; captures queue behind it.
        assert_eq!(player.play_top(), Some(card(Rank::Two)));
        assert_eq!(player.play_top(), Some(card(Rank::Nine)));
    }

    #[test]
    fn test_penalty_pops_two_in_discard_order() {
        let mut player = player_with(&[Rank::Three, Rank::Seven, Rank::Jack]);

        let fine = player.penalty_two();

        assert_eq!(fine.as_slice(), &[card(Rank::Three), card(Rank::Seven)]);
        assert_eq!(player.card_count(), 1);
    }

    #[test]
    fn test_penalty_short_hand() {
        let mut player = player_with(&[Rank::Three]);

        let fine = player.penalty_two();

        assert_eq!(fine.len(), 1);
        assert!(player.is_empty());
    }

    #[test]
    fn test_add_score_accumulates() {
        let mut player = player_with(&[]);
        assert_eq!(player.add_score(5), 5);
        assert_eq!(player.add_score(-2), 3);
        assert_eq!(player.score(), 3);
    }

    #[test]
    fn test_spend_tap_challenge_bottoms_out() {
        let mut player = player_with(&[]);

        assert!(player.spend_tap_challenge());
        assert!(player.spend_tap_challenge());
        assert!(player.spend_tap_challenge());
        assert_eq!(player.tap_challenges_left(), 0);

        // Spent twice at zero: idempotent no-op.
        assert!(!player.spend_tap_challenge());
        assert!(!player.spend_tap_challenge());
        assert_eq!(player.tap_challenges_left(), 0);
    }
}

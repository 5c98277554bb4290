//! The 56-card deck: construction, shuffling and the two-phase deal.

use alloc::vec::Vec;

use crate::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::seat::ALL_SEATS;

/// Number of cards dealt to each seat in the first phase, before Grand Tichu declarations.
pub const FIRST_DEAL_SIZE: usize = 8;
/// Number of cards dealt to each seat in the second phase, completing a 14-card hand.
pub const SECOND_DEAL_SIZE: usize = 6;
/// Full hand size once both deal phases have completed.
pub const FULL_HAND_SIZE: usize = FIRST_DEAL_SIZE + SECOND_DEAL_SIZE;

/// Source of randomness the deck shuffle is run against. Kept as a trait rather than a concrete
/// `rand::Rng` bound so callers can inject a deterministic sequence in tests without pulling in
/// a PRNG crate at the call site.
pub trait CardRng {
    /// Returns a uniformly distributed index in `0..bound`.
    fn gen_range_usize(&mut self, bound: usize) -> usize;
}

#[cfg(feature = "rand")]
impl<R: rand::Rng + ?Sized> CardRng for R {
    fn gen_range_usize(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// The 56 cards of a Tichu deck, in a fixed canonical order (suit-major, then the four
/// specials). Construction never fails and never allocates beyond the one `Vec`.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(56);
    for suit in ALL_SUITS {
        for rank in ALL_RANKS {
            deck.push(Card::Standard(suit, rank));
        }
    }
    deck.push(Card::MahJong);
    deck.push(Card::Dog);
    deck.push(Card::Phoenix);
    deck.push(Card::Dragon);
    deck
}

/// Fisher-Yates shuffle over an externally supplied [`CardRng`], so a deterministic sequence can
/// be injected in tests (see spec.md C1 "shuffle takes an injected RNG").
pub fn shuffle(deck: &mut [Card], rng: &mut impl CardRng) {
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range_usize(i + 1);
        deck.swap(i, j);
    }
}

/// A completed, un-dealt shuffled deck ready for the two deal phases.
#[derive(Clone, Debug)]
pub struct ShuffledDeck {
    cards: Vec<Card>,
}

impl ShuffledDeck {
    pub fn new(rng: &mut impl CardRng) -> Self {
        let mut cards = full_deck();
        shuffle(&mut cards, rng);
        Self { cards }
    }

    /// Deals the first 8 cards to each seat, in seat order, consuming the front of the deck.
    /// This is the hand Grand Tichu declarations are made against (spec.md C6).
    pub fn deal_first(&mut self) -> [Vec<Card>; 4] {
        self.deal_chunks(FIRST_DEAL_SIZE)
    }

    /// Deals the remaining 6 cards to each seat, completing a 14-card hand. Must be called
    /// exactly once, after [`ShuffledDeck::deal_first`].
    pub fn deal_second(&mut self) -> [Vec<Card>; 4] {
        self.deal_chunks(SECOND_DEAL_SIZE)
    }

    fn deal_chunks(&mut self, chunk_size: usize) -> [Vec<Card>; 4] {
        let mut hands: [Vec<Card>; 4] = Default::default();
        for seat in ALL_SEATS {
            let drained: Vec<Card> = self.cards.drain(..chunk_size).collect();
            hands[seat.to_usize()] = drained;
        }
        hands
    }

    /// Cards left undealt; should be 0 once both phases have run.
    pub fn remaining(&self) -> usize { self.cards.len() }
}

/// Deals a complete match-ready set of four 14-card hands in one call: first phase then second
/// phase back to back, with no Grand Tichu window in between. Convenience used by tests and by
/// any caller that doesn't need to pause between the two phases.
pub fn deal_full(rng: &mut impl CardRng) -> [Vec<Card>; 4] {
    let mut deck = ShuffledDeck::new(rng);
    let firsts = deck.deal_first();
    let seconds = deck.deal_second();
    let mut hands: [Vec<Card>; 4] = Default::default();
    for seat in ALL_SEATS {
        let i = seat.to_usize();
        let mut hand = firsts[i].clone();
        hand.extend(seconds[i].iter().copied());
        hands[i] = hand;
    }
    hands
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StepRng(usize);
    impl CardRng for StepRng {
        fn gen_range_usize(&mut self, bound: usize) -> usize {
            self.0 = self.0.wrapping_add(1);
            self.0 % bound
        }
    }

    #[test]
    fn full_deck_has_56_unique_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 56);
        let mut seen = std::collections::HashSet::new();
        for card in &deck {
            assert!(seen.insert(*card), "duplicate card {:?}", card);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StepRng(7);
        let mut deck = full_deck();
        shuffle(&mut deck, &mut rng);
        assert_eq!(deck.len(), 56);
        let mut seen = std::collections::HashSet::new();
        for card in &deck {
            assert!(seen.insert(*card));
        }
    }

    #[test]
    fn two_phase_deal_produces_full_hands_with_no_overlap() {
        let mut rng = StepRng(3);
        let mut deck = ShuffledDeck::new(&mut rng);
        let firsts = deck.deal_first();
        for hand in &firsts {
            assert_eq!(hand.len(), FIRST_DEAL_SIZE);
        }
        assert_eq!(deck.remaining(), 56 - 4 * FIRST_DEAL_SIZE);

        let seconds = deck.deal_second();
        for hand in &seconds {
            assert_eq!(hand.len(), SECOND_DEAL_SIZE);
        }
        assert_eq!(deck.remaining(), 0);

        let mut all_cards = std::collections::HashSet::new();
        for seat in ALL_SEATS {
            let i = seat.to_usize();
            for card in firsts[i].iter().chain(seconds[i].iter()) {
                assert!(all_cards.insert(*card), "card {:?} dealt twice", card);
            }
        }
        assert_eq!(all_cards.len(), 56);
    }

    #[test]
    fn deal_full_gives_everyone_fourteen_cards() {
        let mut rng = StepRng(11);
        let hands = deal_full(&mut rng);
        for hand in &hands {
            assert_eq!(hand.len(), FULL_HAND_SIZE);
        }
    }
}

//! [`RoundState`] -- the state of a single deal, from dealing through round end.

use tichu_elements::card::Card;
use tichu_elements::seat::{Seat, ALL_SEATS, S0};
use tichu_elements::typedefs::CardPoints;

use super::combination::Combination;
use super::PartiallyObservable;

/// Phase of a round, per spec.md C8.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundPhase {
    Dealt,
    GrandTichuWindow,
    Exchange,
    Play,
    RoundEnded,
}

/// A completed play recorded in the current trick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Play {
    pub seat: Seat,
    pub cards: Vec<Card>,
    pub combination: Combination,
}

/// The persistent constraint set by playing Mah Jong as a single.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wish {
    pub rank: tichu_elements::card::Rank,
    pub active: bool,
}

/// A trick won by a Dragon single, awaiting the giver's choice of recipient.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragonGift {
    pub giver_seat: Seat,
    pub cards: Vec<Card>,
    pub points: CardPoints,
}

/// Cards won in tricks by a seat, scored at round end.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack {
    pub cards: Vec<Card>,
    pub card_points: CardPoints,
}

impl Stack {
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.card_points += card.card_points();
            self.cards.push(card);
        }
    }
}

/// A seat's pending exchange submission: one card destined for each of the other three seats,
/// keyed by recipient.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeSubmission {
    pub to_next: Card,
    pub to_across: Card,
    pub to_previous: Card,
}

impl ExchangeSubmission {
    pub fn cards(&self) -> [Card; 3] { [self.to_next, self.to_across, self.to_previous] }

    pub fn recipient(&self, from: Seat, which: Card) -> Option<Seat> {
        if which == self.to_next { Some(from.succ()) }
        else if which == self.to_across { Some(from.partner()) }
        else if which == self.to_previous { Some(from.pred()) }
        else { None }
    }
}

/// State of a single deal: hands, flags, the active trick, and the seats' won-trick stacks.
///
/// Arrays are indexed by [`Seat::to_usize`]; there are no shared mutable references anywhere in
/// this struct (see spec.md §9 "Cyclic / shared references").
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    pub phase: RoundPhase,

    pub hands: [Vec<Card>; 4],
    /// The six cards held back until Grand Tichu declarations close for that seat.
    pub hidden_six: [Vec<Card>; 4],

    pub revealed: [bool; 4],
    pub grand_tichu: [bool; 4],
    pub tichu: [bool; 4],
    pub first_card_played: [bool; 4],

    /// Cyclic turn order, rotated so index 0 is always the current lead.
    pub rotation: [Seat; 4],
    pub lead_seat: Seat,
    pub current_seat: Seat,
    pub passed: [bool; 4],
    /// Finish order; append-only once a seat empties their hand.
    pub out: Vec<Seat>,

    pub current_trick: Vec<Play>,
    pub wish: Option<Wish>,
    pub dragon_pending: Option<DragonGift>,
    pub dog_priority: Option<Seat>,

    pub stacks: [Stack; 4],

    /// Submissions collected during the exchange phase; `None` until that seat has submitted.
    pub exchange: [Option<ExchangeSubmission>; 4],

    /// Seat currently holding Mah Jong. Fixed at deal, but re-derived after the exchange swap
    /// since Mah Jong may change hands (spec.md §4.5).
    pub mah_jong_holder: Seat,

    /// Set by [`PartiallyObservable::observe_by`] to the pre-redaction hand lengths, so a
    /// per-seat view still exposes other seats' card counts once their `hands` are blanked.
    /// `None` on an authoritative (unredacted) `RoundState`.
    pub hand_counts: Option<[usize; 4]>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            phase: RoundPhase::Dealt,
            hands: Default::default(),
            hidden_six: Default::default(),
            revealed: [false; 4],
            grand_tichu: [false; 4],
            tichu: [false; 4],
            first_card_played: [false; 4],
            rotation: ALL_SEATS,
            lead_seat: S0,
            current_seat: S0,
            passed: [false; 4],
            out: Vec::new(),
            current_trick: Vec::new(),
            wish: None,
            dragon_pending: None,
            dog_priority: None,
            stacks: Default::default(),
            exchange: Default::default(),
            mah_jong_holder: S0,
            hand_counts: None,
        }
    }
}

impl RoundState {
    pub fn hand(&self, seat: Seat) -> &[Card] { &self.hands[seat.to_usize()] }

    /// Number of cards in `seat`'s hand. Falls back to `hands[seat].len()` on an authoritative
    /// state; on a redacted view, reads the count `observe_by` preserved instead.
    pub fn hand_len(&self, seat: Seat) -> usize {
        match self.hand_counts {
            Some(counts) => counts[seat.to_usize()],
            None => self.hand(seat).len(),
        }
    }

    pub fn has_card(&self, seat: Seat, card: Card) -> bool {
        self.hand(seat).contains(&card)
    }

    pub fn holds_all(&self, seat: Seat, cards: &[Card]) -> bool {
        let mut hand = self.hand(seat).to_vec();
        for card in cards {
            match hand.iter().position(|c| c == card) {
                Some(idx) => { hand.remove(idx); }
                None => return false,
            }
        }
        true
    }

    pub fn is_out(&self, seat: Seat) -> bool { self.out.contains(&seat) }

    pub fn remove_from_hand(&mut self, seat: Seat, cards: &[Card]) {
        let hand = &mut self.hands[seat.to_usize()];
        for card in cards {
            if let Some(idx) = hand.iter().position(|c| c == card) {
                hand.remove(idx);
            }
        }
    }

    /// Seats in rotation order starting immediately after `seat`, skipping nobody.
    pub fn seats_after(&self, seat: Seat) -> [Seat; 3] {
        tichu_elements::seat::other_seats_after(seat)
    }

    pub fn current_trick_top(&self) -> Option<&Combination> {
        self.current_trick.last().map(|play| &play.combination)
    }

    pub fn hand_has_rank(&self, seat: Seat, rank: tichu_elements::card::Rank) -> bool {
        self.hand(seat).iter().any(|c| c.rank() == Some(rank))
    }
}

impl PartiallyObservable for RoundState {
    /// Redacts every seat's hand other than `seat`'s own, and any hidden-six still held back,
    /// while preserving their lengths in `hand_counts` (spec.md §4.8: a view "enumerates only
    /// card counts for others").
    fn observe_by(&self, seat: Seat) -> Self {
        let mut observed = self.clone();
        let mut counts = [0usize; 4];
        for other in ALL_SEATS {
            counts[other.to_usize()] = self.hand(other).len();
            if other != seat {
                observed.hands[other.to_usize()] = Vec::new();
                observed.hidden_six[other.to_usize()] = Vec::new();
            }
        }
        observed.hand_counts = Some(counts);
        observed
    }
}

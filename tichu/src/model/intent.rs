//! [`Intent`] and [`Event`] -- the inputs and outputs of the session transition API (C8).

use tichu_elements::card::{Card, Rank};
use tichu_elements::seat::Seat;
use tichu_elements::typedefs::CardPoints;

use super::round::ExchangeSubmission;

/// Something a seat (or the surrounding session) asks the engine to do.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    BeginMatch,
    BeginRound,

    DeclareGrandTichu { seat: Seat },
    RevealHidden6 { seat: Seat },
    SubmitExchange { seat: Seat, submission: ExchangeSubmission },
    DeclareTichu { seat: Seat },

    Play { seat: Seat, cards: Vec<Card>, wish_rank: Option<Rank> },
    Pass { seat: Seat },
    BombInterrupt { seat: Seat, cards: Vec<Card> },
    SelectDragonRecipient { seat: Seat, opponent_seat: Seat },
}

/// Per-team point delta accrued at round end, before folding into the match total.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamDelta {
    pub team_a: CardPoints,
    pub team_b: CardPoints,
}

/// A domain-level outcome of an accepted intent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    StateUpdated,
    WishSet { rank: Rank },
    WishCleared,
    SeatFinished { seat: Seat },
    TrickWon { winner: Seat },
    DragonGiftPending { giver: Seat },
    RoundEnded { team_deltas: TeamDelta, finish_order: Vec<Seat> },
    MatchEnded { winner_team: tichu_elements::seat::Team },
}

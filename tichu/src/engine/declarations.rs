//! Grand Tichu and Tichu declaration windows. See spec.md §4.6.

use tichu_elements::seat::{Seat, ALL_SEATS};

use crate::model::{Event, RoundPhase, RoundState};

use super::errors::{EngineFailure, IntentRejected};

pub fn declare_grand_tichu(round: &mut RoundState, seat: Seat) -> Result<Vec<Event>, EngineFailure> {
    if round.phase != RoundPhase::GrandTichuWindow || round.revealed[seat.to_usize()] {
        return Err(IntentRejected::DeclarationGrandOutOfWindow.into());
    }
    round.grand_tichu[seat.to_usize()] = true;
    reveal(round, seat);
    Ok(vec![Event::StateUpdated])
}

pub fn reveal_hidden_six(round: &mut RoundState, seat: Seat) -> Result<Vec<Event>, EngineFailure> {
    if round.phase != RoundPhase::GrandTichuWindow || round.revealed[seat.to_usize()] {
        return Err(IntentRejected::DeclarationGrandOutOfWindow.into());
    }
    reveal(round, seat);
    Ok(vec![Event::StateUpdated])
}

fn reveal(round: &mut RoundState, seat: Seat) {
    let hidden = std::mem::take(&mut round.hidden_six[seat.to_usize()]);
    round.hands[seat.to_usize()].extend(hidden);
    round.revealed[seat.to_usize()] = true;

    if ALL_SEATS.into_iter().all(|s| round.revealed[s.to_usize()]) {
        round.phase = RoundPhase::Exchange;
    }
}

pub fn declare_tichu(round: &mut RoundState, seat: Seat) -> Result<Vec<Event>, EngineFailure> {
    if round.phase != RoundPhase::Play || round.first_card_played[seat.to_usize()] {
        return Err(IntentRejected::DeclarationTichuOutOfWindow.into());
    }
    round.tichu[seat.to_usize()] = true;
    Ok(vec![Event::StateUpdated])
}

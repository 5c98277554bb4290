//! Per-seat 3-card exchange and its atomic swap. See spec.md §4.5.

use tichu_elements::card::Card;
use tichu_elements::seat::{all_seats_from, Seat, ALL_SEATS};

use crate::model::{Event, ExchangeSubmission, RoundPhase, RoundState};

use super::errors::{EngineFailure, IntentRejected};

pub fn submit_exchange(
    round: &mut RoundState,
    seat: Seat,
    submission: ExchangeSubmission,
) -> Result<Vec<Event>, EngineFailure> {
    if round.phase != RoundPhase::Exchange {
        return Err(IntentRejected::WrongPhase.into());
    }

    let cards = submission.cards();
    let all_distinct = cards[0] != cards[1] && cards[1] != cards[2] && cards[0] != cards[2];
    if !all_distinct || !round.holds_all(seat, &cards) {
        return Err(IntentRejected::ExchangeBad.into());
    }

    round.exchange[seat.to_usize()] = Some(submission);

    let mut events = vec![Event::StateUpdated];
    if round.exchange.iter().all(Option::is_some) {
        perform_swap(round);
        events.push(Event::StateUpdated);
    }
    Ok(events)
}

fn perform_swap(round: &mut RoundState) {
    let submissions: Vec<ExchangeSubmission> = round
        .exchange
        .iter()
        .map(|s| s.clone().expect("all seats submitted before a swap is performed"))
        .collect();

    let mut incoming: [Vec<Card>; 4] = Default::default();
    for from in ALL_SEATS {
        let submission = &submissions[from.to_usize()];
        for card in submission.cards() {
            let to = submission.recipient(from, card).expect("card belongs to this submission");
            incoming[to.to_usize()].push(card);
        }
    }

    for from in ALL_SEATS {
        round.remove_from_hand(from, &submissions[from.to_usize()].cards());
    }
    for seat in ALL_SEATS {
        round.hands[seat.to_usize()].extend(incoming[seat.to_usize()].drain(..));
    }

    round.exchange = Default::default();
    round.mah_jong_holder = ALL_SEATS
        .into_iter()
        .find(|s| round.hand(*s).contains(&Card::MahJong))
        .expect("Mah Jong is always in exactly one hand");

    round.phase = RoundPhase::Play;
    round.lead_seat = round.mah_jong_holder;
    round.current_seat = round.mah_jong_holder;
    round.rotation = all_seats_from(round.mah_jong_holder);

    log::debug!("exchange complete, seat {} holds Mah Jong and leads", round.mah_jong_holder);
}

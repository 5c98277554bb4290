//! Play/Pass/BombInterrupt/SelectDragonRecipient handling -- the trick engine (C3).

use tichu_elements::card::{Card, Rank};
use tichu_elements::seat::{all_seats_from, Seat, ALL_SEATS};

use crate::model::{classify, compare, Combination, Comparison, DragonGift, Event,
    InvalidCombinationReason, PhoenixSingleContext, Play, RoundPhase, RoundState, Wish};
use crate::rules::Ruleset;

use super::errors::{EngineError, EngineFailure, IntentRejected};
use super::specials::dog_lead_transfer;

pub fn play(
    round: &mut RoundState,
    rules: &Ruleset,
    seat: Seat,
    cards: Vec<Card>,
    wish_rank: Option<Rank>,
) -> Result<Vec<Event>, EngineFailure> {
    do_play(round, rules, seat, cards, wish_rank, false)
}

pub fn bomb_interrupt(
    round: &mut RoundState,
    rules: &Ruleset,
    seat: Seat,
    cards: Vec<Card>,
) -> Result<Vec<Event>, EngineFailure> {
    do_play(round, rules, seat, cards, None, true)
}

fn do_play(
    round: &mut RoundState,
    rules: &Ruleset,
    seat: Seat,
    cards: Vec<Card>,
    wish_rank: Option<Rank>,
    is_bomb_interrupt: bool,
) -> Result<Vec<Event>, EngineFailure> {
    if round.phase != RoundPhase::Play {
        return Err(IntentRejected::WrongPhase.into());
    }
    if round.dragon_pending.is_some() {
        return Err(IntentRejected::DragonMustChooseOpponent.into());
    }
    if !round.holds_all(seat, &cards) {
        return Err(IntentRejected::CardsNotInHand.into());
    }
    if !is_bomb_interrupt && seat != round.current_seat {
        return Err(IntentRejected::NotYourTurn(round.current_seat).into());
    }

    let phoenix_ctx = phoenix_context(round, &cards);
    let combo = classify(&cards, phoenix_ctx).map_err(IntentRejected::InvalidCombination)?;

    let is_new_trick_lead = round.current_trick.is_empty();

    if matches!(&combo, Combination::Single { card: Card::Dog, .. }) && !is_new_trick_lead {
        return Err(IntentRejected::InvalidCombination(InvalidCombinationReason::DogMustBeSingle).into());
    }

    if combo.is_bomb() && trick_contains_dog(round) {
        return Err(IntentRejected::BombForbiddenDogInTrick.into());
    }

    if !is_new_trick_lead {
        let top = round.current_trick_top().expect("trick is non-empty");
        if !matches!(compare(&combo, top), Comparison::Greater) {
            return Err(IntentRejected::DoesNotBeatCurrent.into());
        }
    }

    if let Some(wish) = round.wish {
        if wish.active && is_new_trick_lead && round.hand_has_rank(seat, wish.rank) {
            let leads_wish_single =
                matches!(&combo, Combination::Single { card, .. } if card.rank() == Some(wish.rank));
            if !leads_wish_single {
                return Err(IntentRejected::WishUnfulfilled(seat).into());
            }
        }
    }

    if seat == round.mah_jong_holder
        && !round.first_card_played[seat.to_usize()]
        && !cards.contains(&Card::MahJong)
    {
        return Err(IntentRejected::MahJongMustBePlayedFirst.into());
    }

    let mut events = Vec::new();

    log::debug!("seat {seat} plays {:?} as {:?}", cards, combo);

    round.remove_from_hand(seat, &cards);
    round.current_trick.push(Play { seat, cards: cards.clone(), combination: combo.clone() });
    round.first_card_played[seat.to_usize()] = true;
    round.passed = [false; 4];

    if round.hand(seat).is_empty() && !round.is_out(seat) {
        round.out.push(seat);
        log::debug!("seat {seat} is out");
        events.push(Event::SeatFinished { seat });
    }

    if combo.is_bomb() {
        round.rotation = all_seats_from(seat);
    }
    if round.dog_priority == Some(seat) {
        round.dog_priority = None;
    }

    if matches!(&combo, Combination::Single { card: Card::MahJong, .. }) {
        if let Some(rank) = wish_rank {
            round.wish = Some(Wish { rank, active: true });
            events.push(Event::WishSet { rank });
        }
    } else if let Some(wish) = round.wish {
        if wish.active {
            let contains_rank = cards.iter().any(|c| c.rank() == Some(wish.rank));
            let satisfied = if rules.wish_satisfied_by_any_play_containing_rank {
                contains_rank
            } else {
                matches!(&combo, Combination::Single { card, .. } if card.rank() == Some(wish.rank))
            };
            if satisfied {
                round.wish = None;
                events.push(Event::WishCleared);
            }
        }
    }

    if matches!(&combo, Combination::Single { card: Card::Dog, .. }) {
        resolve_dog_lead(round, seat);
        return Ok(events);
    }

    if let Some(winner) = trick_terminal(round) {
        events.extend(resolve_trick(round, winner));
    } else {
        advance_turn(round, seat, true)?;
    }

    Ok(events)
}

pub fn pass(round: &mut RoundState, seat: Seat) -> Result<Vec<Event>, EngineFailure> {
    if round.phase != RoundPhase::Play {
        return Err(IntentRejected::WrongPhase.into());
    }
    if round.dragon_pending.is_some() {
        return Err(IntentRejected::DragonMustChooseOpponent.into());
    }
    if seat != round.current_seat {
        return Err(IntentRejected::NotYourTurn(round.current_seat).into());
    }
    if let Some(wish) = round.wish {
        if wish.active && round.hand_has_rank(seat, wish.rank) {
            return Err(IntentRejected::WishUnfulfilled(seat).into());
        }
    }
    let is_new_trick_lead = round.current_trick.is_empty() && seat == round.lead_seat;
    if is_new_trick_lead || round.dog_priority == Some(seat) {
        return Err(IntentRejected::MustLead(seat).into());
    }

    log::debug!("seat {seat} passes");
    round.passed[seat.to_usize()] = true;

    let mut events = Vec::new();
    if let Some(winner) = trick_terminal(round) {
        events.extend(resolve_trick(round, winner));
    } else {
        advance_turn(round, seat, false)?;
    }
    Ok(events)
}

pub fn select_dragon_recipient(
    round: &mut RoundState,
    seat: Seat,
    opponent_seat: Seat,
) -> Result<Vec<Event>, EngineFailure> {
    let gift = round.dragon_pending.clone().ok_or(IntentRejected::WrongPhase)?;
    if gift.giver_seat != seat {
        return Err(IntentRejected::WrongPhase.into());
    }
    if opponent_seat.team() == seat.team() {
        return Err(IntentRejected::DragonRecipientMustBeOpponent.into());
    }

    round.stacks[opponent_seat.to_usize()].add(gift.cards.clone());
    round.dragon_pending = None;

    Ok(vec![Event::TrickWon { winner: opponent_seat }])
}

fn phoenix_context(round: &RoundState, cards: &[Card]) -> PhoenixSingleContext {
    if cards.len() == 1 && cards[0] == Card::Phoenix {
        if let Some(Combination::Single { value, .. }) = round.current_trick_top() {
            return PhoenixSingleContext::OnTopOf(*value);
        }
    }
    PhoenixSingleContext::Leading
}

/// Whether Dog is (still) part of the current trick. Always `false` in this engine: a Dog lead
/// is resolved to a trick-clear in the same call that plays it, so no later intent ever observes
/// it sitting in `current_trick`. Kept as an explicit guard for documentation and in case a
/// future change makes Dog resolution deferred.
fn trick_contains_dog(round: &RoundState) -> bool {
    round.current_trick.iter().any(|p| p.cards.contains(&Card::Dog))
}

fn resolve_dog_lead(round: &mut RoundState, dog_player: Seat) {
    let next_lead = dog_lead_transfer(round, dog_player);
    round.current_trick.clear();
    round.passed = [false; 4];
    round.lead_seat = next_lead;
    round.current_seat = next_lead;
    round.dog_priority = Some(next_lead);
    round.rotation = all_seats_from(next_lead);
}

/// Returns the winning seat if the trick should end now.
fn trick_terminal(round: &RoundState) -> Option<Seat> {
    let top_play = round.current_trick.last()?;
    let top_seat = top_play.seat;
    let all_others_done = ALL_SEATS.iter().filter(|s| **s != top_seat).all(|&s| {
        round.is_out(s) || round.hand(s).is_empty() || round.passed[s.to_usize()]
    });
    if all_others_done { Some(top_seat) } else { None }
}

fn resolve_trick(round: &mut RoundState, winner: Seat) -> Vec<Event> {
    let cards: Vec<Card> = round.current_trick.iter().flat_map(|p| p.cards.iter().copied()).collect();
    let winning_play_is_dragon = round
        .current_trick
        .last()
        .map(|p| matches!(&p.combination, Combination::Single { card: Card::Dragon, .. }))
        .unwrap_or(false);

    let mut events = Vec::new();

    round.current_trick.clear();
    round.passed = [false; 4];
    round.lead_seat = winner;
    round.current_seat = winner;
    round.rotation = all_seats_from(winner);

    if winning_play_is_dragon {
        let points = cards.iter().map(|c| c.card_points()).sum();
        log::debug!("seat {winner} wins the trick with Dragon, gift pending ({points} points)");
        round.dragon_pending = Some(DragonGift { giver_seat: winner, cards, points });
        events.push(Event::DragonGiftPending { giver: winner });
    } else {
        log::debug!("seat {winner} wins the trick, collecting {} cards", cards.len());
        round.stacks[winner.to_usize()].add(cards);
        events.push(Event::TrickWon { winner });
    }
    events
}

fn advance_turn(round: &mut RoundState, acted_seat: Seat, was_play: bool) -> Result<(), EngineError> {
    if was_play {
        round.passed = [false; 4];
    }
    let mut candidate = acted_seat.succ();
    for _ in 0..4 {
        let idx = candidate.to_usize();
        let eligible = !round.is_out(candidate)
            && !round.hands[idx].is_empty()
            && (was_play || !round.passed[idx]);
        if eligible {
            round.current_seat = candidate;
            return Ok(());
        }
        candidate = candidate.succ();
    }
    Err(EngineError::Invariant(
        "advance_turn found no eligible seat; trick_terminal should have fired first".into(),
    ))
}

//! Round-end triggers and resolution, and match-total accumulation. See spec.md §4.7.

use tichu_elements::card::Card;
use tichu_elements::seat::{Seat, Team, ALL_SEATS};
use tichu_elements::typedefs::CardPoints;

use crate::model::{RoundPhase, RoundState, TeamDelta};
use crate::rules::Ruleset;

/// Which round-end trigger fired, if any.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoundEndTrigger {
    /// Three seats are out; the fourth (the tailender) still holds cards.
    Tailender,
    /// Both members of one team are the first two to finish.
    DoubleVictory,
}

pub fn check_round_end(round: &RoundState) -> Option<RoundEndTrigger> {
    if round.phase != RoundPhase::Play {
        return None;
    }
    if round.out.len() == 2 && round.out[0].team() == round.out[1].team() {
        return Some(RoundEndTrigger::DoubleVictory);
    }
    if round.out.len() == 3 {
        return Some(RoundEndTrigger::Tailender);
    }
    None
}

/// Applies the trigger's resolution to `round` (mutating stacks/out as needed) and returns the
/// team point deltas for this round, including Tichu/Grand Tichu adjustments.
pub fn resolve_round_end(round: &mut RoundState, rules: &Ruleset, trigger: RoundEndTrigger) -> TeamDelta {
    let delta = match trigger {
        RoundEndTrigger::Tailender => resolve_tailender(round, rules),
        RoundEndTrigger::DoubleVictory => resolve_double_victory(round),
    };
    round.phase = RoundPhase::RoundEnded;
    apply_declarations(round, delta)
}

fn resolve_tailender(round: &mut RoundState, rules: &Ruleset) -> TeamDelta {
    let tailender = ALL_SEATS
        .into_iter()
        .find(|s| !round.is_out(*s))
        .expect("exactly one seat remains when a tailender trigger fires");
    round.out.push(tailender);

    let remaining_cards = std::mem::take(&mut round.hands[tailender.to_usize()]);
    let remaining_points: CardPoints = remaining_cards.iter().copied().map(Card::card_points).sum();
    round.stacks[tailender.to_usize()].cards.extend(remaining_cards);

    let won_trick_points = round.stacks[tailender.to_usize()].card_points;
    round.stacks[tailender.to_usize()].card_points = 0;

    // The tailender's already-won trick points always transfer to the first-finisher. Whether
    // the remaining hand cards' value joins them, rather than staying zeroed, is configurable
    // (Ruleset::tailender_cards_to_opponents; default true routes them to the opposing team).
    let first_finisher = round.out[0];
    let transferred =
        if rules.tailender_cards_to_opponents { won_trick_points + remaining_points } else { won_trick_points };
    round.stacks[first_finisher.to_usize()].card_points += transferred;

    TeamDelta {
        team_a: round.stacks[0].card_points + round.stacks[2].card_points,
        team_b: round.stacks[1].card_points + round.stacks[3].card_points,
    }
}

fn resolve_double_victory(round: &RoundState) -> TeamDelta {
    let winning_team = round.out[0].team();
    match winning_team {
        Team::A => TeamDelta { team_a: 200, team_b: 0 },
        Team::B => TeamDelta { team_a: 0, team_b: 200 },
    }
}

fn apply_declarations(round: &RoundState, mut delta: TeamDelta) -> TeamDelta {
    let first_finisher = round.out[0];
    for seat in ALL_SEATS {
        if round.grand_tichu[seat.to_usize()] {
            add_to_team(&mut delta, seat.team(), if seat == first_finisher { 200 } else { -200 });
        }
        if round.tichu[seat.to_usize()] {
            add_to_team(&mut delta, seat.team(), if seat == first_finisher { 100 } else { -100 });
        }
    }
    delta
}

fn add_to_team(delta: &mut TeamDelta, team: Team, points: i32) {
    match team {
        Team::A => delta.team_a += points,
        Team::B => delta.team_b += points,
    }
}

#![cfg(feature = "serde")]
//! Serialize/deserialize round-trip for the types exposed across the session boundary.

use tichu::model::{Intent, PartiallyObservable, RoundPhase, RoundState};
use tichu::rules::Ruleset;
use tichu_elements::card::c;
use tichu_elements::seat::{S0, S1, S2, S3};

#[test]
fn round_state_round_trips_through_json() {
    let mut round = RoundState::default();
    round.phase = RoundPhase::Play;
    round.hands[S0.to_usize()] = vec![c!("2C"), c!("3C")];
    round.hands[S1.to_usize()] = vec![c!("DRA")];
    round.stacks[S2.to_usize()].add([c!("5H"), c!("TC")]);
    round.out = vec![S3];

    let json = serde_json::to_string(&round).unwrap();
    let decoded: RoundState = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, round);
}

#[test]
fn observed_view_round_trips_with_hand_counts_intact() {
    let mut round = RoundState::default();
    round.hands[S0.to_usize()] = vec![c!("2C"), c!("3C")];
    round.hands[S1.to_usize()] = vec![c!("DRA")];

    let view = round.observe_by(S0);
    let json = serde_json::to_string(&view).unwrap();
    let decoded: RoundState = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, view);
    assert_eq!(decoded.hand_len(S1), 1);
    assert!(decoded.hand(S1).is_empty());
}

#[test]
fn intent_round_trips_through_json() {
    let intent = Intent::Play { seat: S0, cards: vec![c!("MJ")], wish_rank: None };
    let json = serde_json::to_string(&intent).unwrap();
    let decoded: Intent = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, intent);
}

#[test]
fn ruleset_round_trips_through_json() {
    let mut rules = Ruleset::default();
    rules.tailender_cards_to_opponents = false;
    let json = serde_json::to_string(&rules).unwrap();
    let decoded: Ruleset = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, rules);
}

//! The six concrete end-to-end scenarios walked through a real `RoundState`.

use tichu::engine::errors::IntentRejected;
use tichu::engine::{declarations, scoring, specials, trick};
use tichu::model::{Combination, Event, RoundPhase, RoundState, Wish};
use tichu::rules::Ruleset;
use tichu_elements::card::{c, Rank};
use tichu_elements::seat::{S0, S1, S2, S3};

fn play_phase_round() -> RoundState {
    let mut round = RoundState::default();
    round.phase = RoundPhase::Play;
    round
}

#[test]
fn scenario_1_dog_lead_transfers_to_partner() {
    let rules = Ruleset::default();
    let mut round = play_phase_round();
    round.mah_jong_holder = S1;
    round.hands[S0.to_usize()] = vec![c!("DOG")];
    round.hands[S2.to_usize()] = vec![c!("5H")];
    round.lead_seat = S0;
    round.current_seat = S0;

    trick::play(&mut round, &rules, S0, vec![c!("DOG")], None).unwrap();

    assert!(round.current_trick.is_empty());
    assert_eq!(round.lead_seat, S2);
    assert_eq!(round.current_seat, S2);
    assert_eq!(round.dog_priority, Some(S2));

    // Partner holds priority and may not pass.
    let err = trick::pass(&mut round, S2).unwrap_err();
    assert_eq!(err, tichu::engine::EngineFailure::Rejected(IntentRejected::MustLead(S2)));

    // But any valid combination is free to lead with -- no "beat the top" requirement survives
    // the Dog discard.
    let events = trick::play(&mut round, &rules, S2, vec![c!("5H")], None).unwrap();
    assert!(events.iter().any(|e| matches!(e, Event::TrickWon { winner } if *winner == S2)));
}

#[test]
fn scenario_1b_dog_lead_skips_a_partner_who_has_gone_out() {
    let mut round = play_phase_round();
    round.out.push(S2);
    round.hands[S1.to_usize()] = vec![c!("5H")];
    assert_eq!(specials::dog_lead_transfer(&round, S0), S1);
}

#[test]
fn scenario_2_straight_flush_bomb_beats_four_of_a_kind() {
    let rules = Ruleset::default();
    let mut round = play_phase_round();
    round.mah_jong_holder = S3;
    round.hands[S0.to_usize()] = vec![c!("KH"), c!("KC"), c!("KD"), c!("KS")];
    round.hands[S1.to_usize()] = vec![c!("2C")];
    round.hands[S2.to_usize()] = vec![c!("9H"), c!("TH"), c!("JH"), c!("QH"), c!("KH")];
    round.hands[S3.to_usize()] = vec![c!("2D")];
    round.lead_seat = S0;
    round.current_seat = S0;

    trick::play(&mut round, &rules, S0, vec![c!("KH"), c!("KC"), c!("KD"), c!("KS")], None).unwrap();
    assert_eq!(round.current_seat, S1);

    // Seat 2 over-bombs out of turn with a straight flush.
    let events = trick::bomb_interrupt(
        &mut round,
        &rules,
        S2,
        vec![c!("9H"), c!("TH"), c!("JH"), c!("QH"), c!("KH")],
    )
    .unwrap();
    assert!(events.iter().any(|e| matches!(e, Event::SeatFinished { seat } if *seat == S2)));

    assert_eq!(round.rotation[0], S2);
    assert_eq!(round.current_seat, S3);
    assert!(matches!(
        round.current_trick_top(),
        Some(Combination::Bomb(tichu::model::BombKind::StraightFlush { .. }))
    ));
}

#[test]
fn scenario_2b_weaker_bomb_cannot_override_a_straight_flush_bomb() {
    let rules = Ruleset::default();
    let mut round = play_phase_round();
    round.mah_jong_holder = S3;
    round.hands[S0.to_usize()] = vec![c!("9H"), c!("TH"), c!("JH"), c!("QH"), c!("KH")];
    round.hands[S1.to_usize()] = vec![c!("AH"), c!("AC"), c!("AD"), c!("AS")];
    round.lead_seat = S0;
    round.current_seat = S0;

    trick::play(
        &mut round,
        &rules,
        S0,
        vec![c!("9H"), c!("TH"), c!("JH"), c!("QH"), c!("KH")],
        None,
    )
    .unwrap();
    assert_eq!(round.current_seat, S1);

    // A weaker Four-of-a-Kind cannot interrupt a Straight Flush bomb already on top.
    let err = trick::bomb_interrupt(
        &mut round,
        &rules,
        S1,
        vec![c!("AH"), c!("AC"), c!("AD"), c!("AS")],
    )
    .unwrap_err();
    assert_eq!(err, tichu::engine::EngineFailure::Rejected(IntentRejected::DoesNotBeatCurrent));
    assert!(matches!(
        round.current_trick_top(),
        Some(Combination::Bomb(tichu::model::BombKind::StraightFlush { .. }))
    ));
}

#[test]
fn scenario_3_dragon_gift_to_chosen_opponent() {
    let rules = Ruleset::default();
    let mut round = play_phase_round();
    round.mah_jong_holder = S1;
    round.hands[S0.to_usize()] = vec![c!("DRA")];
    round.lead_seat = S0;
    round.current_seat = S0;

    trick::play(&mut round, &rules, S0, vec![c!("DRA")], None).unwrap();

    let gift = round.dragon_pending.clone().expect("dragon gift should be pending");
    assert_eq!(gift.giver_seat, S0);

    let err = trick::select_dragon_recipient(&mut round, S0, S2).unwrap_err();
    assert_eq!(
        err,
        tichu::engine::EngineFailure::Rejected(IntentRejected::DragonRecipientMustBeOpponent)
    );

    let events = trick::select_dragon_recipient(&mut round, S0, S1).unwrap();
    assert!(events.iter().any(|e| matches!(e, Event::TrickWon { winner } if *winner == S1)));
    assert_eq!(round.stacks[S1.to_usize()].card_points, 25);
    assert!(round.dragon_pending.is_none());
    assert_eq!(round.lead_seat, S0);
}

#[test]
fn scenario_4_mah_jong_wish_persists_until_satisfied() {
    let rules = Ruleset::default();
    let mut round = play_phase_round();
    round.hands[S0.to_usize()] = vec![c!("MJ")];
    round.hands[S1.to_usize()] = vec![c!("TH")];
    round.mah_jong_holder = S0;
    round.lead_seat = S0;
    round.current_seat = S0;

    let events =
        trick::play(&mut round, &rules, S0, vec![c!("MJ")], Some(Rank::Ten)).unwrap();
    assert!(events.iter().any(|e| matches!(e, Event::WishSet { rank } if *rank == Rank::Ten)));
    assert_eq!(round.wish, Some(Wish { rank: Rank::Ten, active: true }));

    assert_eq!(round.current_seat, S1);
    let err = trick::pass(&mut round, S1).unwrap_err();
    assert_eq!(err, tichu::engine::EngineFailure::Rejected(IntentRejected::WishUnfulfilled(S1)));

    let events = trick::play(&mut round, &rules, S1, vec![c!("TH")], None).unwrap();
    assert!(events.iter().any(|e| matches!(e, Event::WishCleared)));
    assert!(round.wish.is_none());
}

#[test]
fn scenario_5_tailender_transfer_with_negative_phoenix_stack() {
    let mut round = play_phase_round();
    round.out = vec![S0, S1, S2];
    round.stacks[S0.to_usize()].card_points = 15;
    round.stacks[S1.to_usize()].card_points = 5;
    round.stacks[S2.to_usize()].card_points = 20;
    round.stacks[S3.to_usize()].card_points = -25;

    let trigger = scoring::check_round_end(&round).expect("tailender trigger should fire");
    assert_eq!(trigger, scoring::RoundEndTrigger::Tailender);

    let delta = scoring::resolve_round_end(&mut round, &Ruleset::default(), trigger);
    assert_eq!(round.stacks[S0.to_usize()].card_points, -10);
    assert_eq!(round.stacks[S3.to_usize()].card_points, 0);
    assert_eq!(delta.team_a, 10);
    assert_eq!(delta.team_b, 5);
    assert_eq!(round.out, vec![S0, S1, S2, S3]);
}

#[test]
fn scenario_6_double_victory_with_failed_tichu() {
    let mut round = play_phase_round();
    round.out = vec![S0, S2];
    round.tichu[S1.to_usize()] = true;

    let trigger = scoring::check_round_end(&round).expect("double victory trigger should fire");
    assert_eq!(trigger, scoring::RoundEndTrigger::DoubleVictory);

    let delta = scoring::resolve_round_end(&mut round, &Ruleset::default(), trigger);
    assert_eq!(delta.team_a, 200);
    assert_eq!(delta.team_b, -100);
}

#[test]
fn grand_tichu_window_reveal_and_exchange_handoff() {
    let mut round = RoundState::default();
    round.phase = RoundPhase::GrandTichuWindow;
    for seat in [S0, S1, S2, S3] {
        round.hidden_six[seat.to_usize()] = vec![c!("2C")];
    }

    declarations::declare_grand_tichu(&mut round, S0).unwrap();
    assert!(round.grand_tichu[S0.to_usize()]);
    assert!(round.revealed[S0.to_usize()]);

    declarations::reveal_hidden_six(&mut round, S1).unwrap();
    declarations::reveal_hidden_six(&mut round, S2).unwrap();
    assert_eq!(round.phase, RoundPhase::GrandTichuWindow);
    declarations::reveal_hidden_six(&mut round, S3).unwrap();
    assert_eq!(round.phase, RoundPhase::Exchange);
}

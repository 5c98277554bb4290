//! The top-level session state machine. [`Engine::apply`] dispatches by [`Intent`] variant and
//! folds round-end scoring into the match total. See spec.md §4.8.

use tichu_elements::card::Card;
use tichu_elements::deck::{CardRng, ShuffledDeck};
use tichu_elements::seat::{Seat, ALL_SEATS};

use crate::model::{Event, Intent, MatchState, PartiallyObservable, RoundPhase, RoundState};
use crate::rules::Ruleset;

use super::errors::{EngineError, EngineFailure};
use super::scoring::{check_round_end, resolve_round_end};
use super::{declarations, exchange, trick};

/// Drives one Tichu match: owns [`MatchState`] and dispatches intents to the engine submodules.
#[derive(Clone, Debug)]
pub struct Engine {
    match_state: MatchState,
}

impl Engine {
    pub fn new(rules: Ruleset) -> Self {
        Self { match_state: MatchState::new(rules) }
    }

    pub fn match_state(&self) -> &MatchState { &self.match_state }

    /// The round state as visible to `seat`, with other seats' hands and hidden sixes redacted.
    pub fn view(&self, seat: Seat) -> RoundState { self.match_state.round.observe_by(seat) }

    /// Deals a fresh round and opens the Grand Tichu window. Takes the RNG directly rather than
    /// going through [`Engine::apply`], since dealing needs randomness [`Intent`] carries none of.
    pub fn begin_round(&mut self, rng: &mut impl CardRng) -> Vec<Event> {
        let mut deck = ShuffledDeck::new(rng);
        let firsts = deck.deal_first();
        let seconds = deck.deal_second();

        let mut round = RoundState::default();
        round.hands = firsts;
        round.hidden_six = seconds;
        round.phase = RoundPhase::GrandTichuWindow;
        round.mah_jong_holder = ALL_SEATS
            .into_iter()
            .find(|s| {
                round.hand(*s).contains(&Card::MahJong)
                    || round.hidden_six[s.to_usize()].contains(&Card::MahJong)
            })
            .expect("Mah Jong is always dealt to exactly one seat");

        log::debug!("round dealt, Mah Jong holder is seat {}", round.mah_jong_holder);
        self.match_state.round = round;
        vec![Event::StateUpdated]
    }

    /// Applies one intent, returning the events it produced. Round-end scoring is detected and
    /// folded into the match total automatically once the intent that triggered it is accepted.
    pub fn apply(&mut self, intent: Intent) -> Result<Vec<Event>, EngineFailure> {
        let round = &mut self.match_state.round;
        let rules = &self.match_state.rules;

        let mut events = match intent {
            Intent::BeginMatch | Intent::BeginRound => {
                return Err(EngineError::Invariant(
                    "BeginMatch/BeginRound are driven by dedicated Engine methods, not apply".into(),
                )
                .into());
            }
            Intent::DeclareGrandTichu { seat } => declarations::declare_grand_tichu(round, seat)?,
            Intent::RevealHidden6 { seat } => declarations::reveal_hidden_six(round, seat)?,
            Intent::SubmitExchange { seat, submission } => {
                exchange::submit_exchange(round, seat, submission)?
            }
            Intent::DeclareTichu { seat } => declarations::declare_tichu(round, seat)?,
            Intent::Play { seat, cards, wish_rank } => trick::play(round, rules, seat, cards, wish_rank)?,
            Intent::Pass { seat } => trick::pass(round, seat)?,
            Intent::BombInterrupt { seat, cards } => trick::bomb_interrupt(round, rules, seat, cards)?,
            Intent::SelectDragonRecipient { seat, opponent_seat } => {
                trick::select_dragon_recipient(round, seat, opponent_seat)?
            }
        };

        if let Some(trigger) = check_round_end(round) {
            log::debug!("round ends via {trigger:?}");
            let finish_order = round.out.clone();
            let team_deltas = resolve_round_end(round, rules, trigger);
            events.push(Event::RoundEnded { team_deltas, finish_order });

            self.match_state.apply_round_delta(team_deltas);
            if let Some(result) = self.match_state.result {
                log::info!("match ends, team {} wins", result.winner);
                events.push(Event::MatchEnded { winner_team: result.winner });
            }
        }

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tichu_elements::seat::{S0, S1, S2, S3};

    struct StepRng(usize);
    impl CardRng for StepRng {
        fn gen_range_usize(&mut self, bound: usize) -> usize {
            self.0 = self.0.wrapping_add(1);
            self.0 % bound
        }
    }

    #[test]
    fn begin_round_deals_full_hands_and_opens_grand_tichu_window() {
        let mut engine = Engine::new(Ruleset::default());
        let mut rng = StepRng(5);
        engine.begin_round(&mut rng);

        let round = &engine.match_state().round;
        assert_eq!(round.phase, RoundPhase::GrandTichuWindow);
        for seat in ALL_SEATS {
            assert_eq!(round.hand(seat).len(), 8);
            assert_eq!(round.hidden_six[seat.to_usize()].len(), 6);
        }
    }

    #[test]
    fn view_redacts_other_hands() {
        let mut engine = Engine::new(Ruleset::default());
        let mut rng = StepRng(9);
        engine.begin_round(&mut rng);

        let view = engine.view(S0);
        assert!(!view.hand(S0).is_empty());
        assert!(view.hand(S1).is_empty());
        assert!(view.hand(S2).is_empty());
        assert!(view.hand(S3).is_empty());
        // Hand contents are redacted, but the card counts underneath them still survive.
        assert_eq!(view.hand_len(S0), 8);
        assert_eq!(view.hand_len(S1), 8);
        assert_eq!(view.hand_len(S2), 8);
        assert_eq!(view.hand_len(S3), 8);
    }
}

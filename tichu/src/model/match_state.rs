//! [`MatchState`] -- accumulated team scores across rounds, and match termination.

use tichu_elements::seat::Team;
use tichu_elements::typedefs::CardPoints;

use super::intent::TeamDelta;
use super::round::RoundState;
use crate::rules::{Ruleset, TieBreak};

/// Outcome of a match, once terminal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub winner: Team,
}

/// Accumulated scores across rounds of one match, and the round currently in progress.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub rules: Ruleset,
    pub round: RoundState,
    pub team_a_total: CardPoints,
    pub team_b_total: CardPoints,
    pub result: Option<MatchResult>,
}

impl MatchState {
    pub fn new(rules: Ruleset) -> Self {
        Self {
            rules,
            round: RoundState::default(),
            team_a_total: 0,
            team_b_total: 0,
            result: None,
        }
    }

    pub fn is_finished(&self) -> bool { self.result.is_some() }

    /// Folds a round's team deltas into the match total and checks for termination, per
    /// spec.md §4.7 "Match accumulation".
    pub fn apply_round_delta(&mut self, delta: TeamDelta) {
        self.team_a_total += delta.team_a;
        self.team_b_total += delta.team_b;

        let target = self.rules.match_point_target;
        let a_over = self.team_a_total >= target;
        let b_over = self.team_b_total >= target;

        if a_over || b_over {
            self.result = match (a_over, b_over) {
                (true, false) => Some(MatchResult { winner: Team::A }),
                (false, true) => Some(MatchResult { winner: Team::B }),
                (true, true) => match self.team_a_total.cmp(&self.team_b_total) {
                    std::cmp::Ordering::Greater => Some(MatchResult { winner: Team::A }),
                    std::cmp::Ordering::Less => Some(MatchResult { winner: Team::B }),
                    std::cmp::Ordering::Equal => match self.rules.match_tie_break {
                        TieBreak::ContinuePlaying => None,
                        TieBreak::LargerRoundDelta => {
                            if delta.team_a >= delta.team_b {
                                Some(MatchResult { winner: Team::A })
                            } else {
                                Some(MatchResult { winner: Team::B })
                            }
                        }
                    },
                },
                (false, false) => unreachable!(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ends_when_a_team_strictly_crosses_the_target() {
        let mut m = MatchState::new(Ruleset::default());
        m.apply_round_delta(TeamDelta { team_a: 995, team_b: 100 });
        assert!(!m.is_finished());
        m.apply_round_delta(TeamDelta { team_a: 10, team_b: 0 });
        assert_eq!(m.result, Some(MatchResult { winner: Team::A }));
    }

    #[test]
    fn tie_at_target_continues_by_default() {
        let mut m = MatchState::new(Ruleset::default());
        m.apply_round_delta(TeamDelta { team_a: 1000, team_b: 1000 });
        assert!(!m.is_finished());
    }
}

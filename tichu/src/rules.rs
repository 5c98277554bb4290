//! [`Ruleset`] -- the handful of rule variations the engine leaves configurable.
//!
//! Every field defaults to the canonical reading used throughout this crate's own tests; the
//! alternates exist for hosts that want to offer a table-rules toggle, not because the engine
//! itself is ambivalent about them.

use derivative::Derivative;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Keep dealing rounds until one team strictly leads at a round boundary.
    ContinuePlaying,
    /// Break a tie at or above the point target by the larger delta in the round that crossed it.
    LargerRoundDelta,
}

#[derive(Derivative, Copy, Clone, Debug, Eq, PartialEq)]
#[derivative(Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ruleset {
    /// Whether the Mah Jong wish clears on *any* play containing the wished rank, rather than
    /// only when that rank is played as a single. Canonical Tichu play uses the stricter
    /// single-card reading.
    #[derivative(Default(value = "false"))]
    pub wish_satisfied_by_any_play_containing_rank: bool,

    /// Whether a tailender's remaining hand cards route their point value to the opposing team
    /// rather than staying zeroed in the tailender's own stack.
    #[derivative(Default(value = "true"))]
    pub tailender_cards_to_opponents: bool,

    /// Match-ending point target.
    #[derivative(Default(value = "1000"))]
    pub match_point_target: i32,

    /// Policy applied when both teams are at or above the target at the same round boundary.
    #[derivative(Default(value = "TieBreak::ContinuePlaying"))]
    pub match_tie_break: TieBreak,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_rules() {
        let rules = Ruleset::default();
        assert!(!rules.wish_satisfied_by_any_play_containing_rank);
        assert!(rules.tailender_cards_to_opponents);
        assert_eq!(rules.match_point_target, 1000);
        assert_eq!(rules.match_tie_break, TieBreak::ContinuePlaying);
    }
}

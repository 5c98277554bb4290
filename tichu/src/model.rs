//! State-Intent representation of a Tichu match.
//!
//! This module holds data model definitions and straightforward helpers; game logic belongs to
//! [`crate::engine`].

pub mod combination;
pub mod intent;
pub mod match_state;
pub mod round;

use tichu_elements::seat::Seat;

pub use combination::*;
pub use intent::*;
pub use match_state::*;
pub use round::*;

/// A state value that can be redacted to only what one seat is allowed to see.
pub trait PartiallyObservable {
    fn observe_by(&self, seat: Seat) -> Self;
}

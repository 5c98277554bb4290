//! Common types shared throughout the crate: the building blocks from `tichu-elements`.

pub use tichu_elements::card::*;
pub use tichu_elements::deck::*;
pub use tichu_elements::seat::*;
pub use tichu_elements::typedefs::*;

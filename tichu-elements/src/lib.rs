#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod seat;
pub mod typedefs;

pub mod prelude {
    pub use crate::card::*;
    pub use crate::deck::*;
    pub use crate::seat::*;
    pub use crate::typedefs::*;
}

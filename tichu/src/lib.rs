//! Rule engine for Tichu: combinations, trick resolution, special-card effects, the exchange,
//! declarations, scoring and the session state machine.

pub mod common;
pub mod engine;
pub mod model;
pub mod rules;

pub mod prelude {
    //! Convenient re-exports of commonly imported items.
    pub use super::{
        common::*,
        engine::Engine,
        model::*,
        rules::Ruleset,
    };
}

//! Game-rule engine: state transitions over [`crate::model::RoundState`] and [`crate::model::MatchState`].

pub mod declarations;
pub mod errors;
pub mod exchange;
pub mod scoring;
pub mod session;
pub mod specials;
pub mod trick;

pub use errors::{EngineError, EngineFailure, IntentRejected};
pub use session::Engine;

//! Rejection and fatal-error taxonomies for the engine. See spec.md §7.

use tichu_elements::seat::Seat;

use crate::model::InvalidCombinationReason;

/// A guard failure: the intent is rejected and state is left untouched.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum IntentRejected {
    #[error("intent is not valid in the current phase")]
    WrongPhase,

    #[error("it is not seat {0}'s turn")]
    NotYourTurn(Seat),

    #[error("not all of the played cards are in the seat's hand")]
    CardsNotInHand,

    #[error("the cards played do not form a valid combination: {0}")]
    InvalidCombination(InvalidCombinationReason),

    #[error("the play does not beat the current highest play in the trick")]
    DoesNotBeatCurrent,

    #[error("a bomb may not be played out of turn while Dog is in the current trick")]
    BombForbiddenDogInTrick,

    #[error("seat {0} holds priority to lead and may not pass")]
    MustLead(Seat),

    #[error("seat {0} holds the wished rank and must honor it before passing")]
    WishUnfulfilled(Seat),

    #[error("the Mah Jong holder must include it in the first play of the round")]
    MahJongMustBePlayedFirst,

    #[error("other intents are blocked until the Dragon giver chooses a recipient")]
    DragonMustChooseOpponent,

    #[error("the Dragon gift recipient must be an opponent of the giver")]
    DragonRecipientMustBeOpponent,

    #[error("exchange submission is invalid: wrong count, a duplicate, or a card not in hand")]
    ExchangeBad,

    #[error("Grand Tichu may only be declared before that seat reveals its hidden six")]
    DeclarationGrandOutOfWindow,

    #[error("Tichu may only be declared before that seat's first card is played")]
    DeclarationTichuOutOfWindow,
}

/// Fatal internal inconsistency: the caller should halt the session rather than retry.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("engine invariant violated: {0}")]
    Invariant(String),
}

/// Either a reported rejection or a fatal invariant failure. Internal engine functions propagate
/// this uniformly with `?`; [`crate::engine::Engine::apply`] is the only place the two are told
/// apart again, since callers need to know whether to retry or halt the session.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EngineFailure {
    #[error(transparent)]
    Rejected(#[from] IntentRejected),
    #[error(transparent)]
    Fatal(#[from] EngineError),
}

/// Card-point total accrued in a stack, or a running team/match score.
/// Signed because Phoenix contributes -25.
pub type CardPoints = i32;

/// Catch-all error for cases where details of the error are unnecessary.
#[derive(Debug)]
pub struct UnspecifiedError;

#[cfg(feature = "std")]
impl std::error::Error for UnspecifiedError {}

impl core::fmt::Display for UnspecifiedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unspecified error from tichu-elements.")
    }
}

use thiserror::Error;

/// Result type for stepping operations.
pub type StepResult<T> = Result<T, StepError>;

/// Errors surfaced by vector algebra, system evaluation, and step functions.
///
/// All checks happen before any indexing, so a malformed input can never
/// manifest as an out-of-range access or a silently truncated result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// Operand lengths disagree, or the derivative system's length does not
    /// match the state vector's length.
    #[error("dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A linear combination was requested with zero terms.
    #[error("linear combination requires at least one term")]
    EmptyCombination,

    /// The step size is NaN or infinite. Non-finite *state* values are not
    /// an error; they propagate unchanged.
    #[error("step size is not finite")]
    InvalidStep,
}

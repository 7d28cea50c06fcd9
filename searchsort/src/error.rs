use thiserror::Error;

/// Input errors detected at or before the engine boundary. All are
/// non-fatal: the engine performs no mutation when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Please enter a list of numbers.")]
    EmptyInput,
    #[error("Invalid number format. Only integers allowed: `{0}`")]
    MalformedNumber(String),
    #[error("Enter a valid number to search.")]
    MissingOrInvalidTarget,
}

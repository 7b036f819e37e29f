use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpartsError {
    #[error("Invalid hand input: {0}")]
    InvalidHandInput(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid scoring rules: {0}")]
    InvalidRules(String),

    #[error("Hand index {index} out of range (ledger holds {len} hands)")]
    HandIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SpartsError>;

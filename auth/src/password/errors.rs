use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password exceeds the maximum of {max} bytes")]
    TooLong { max: usize },

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),

    #[error("Invalid hash cost {cost}: {reason}")]
    InvalidCost { cost: u32, reason: String },
}

use thiserror::Error;

/// Error type for token operations.
///
/// The variants exist for diagnostics. Callers exposing these errors to
/// clients must collapse every validation variant into one response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token algorithm is not accepted: {0}")]
    WrongAlgorithm(String),
}

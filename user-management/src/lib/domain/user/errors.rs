use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for display name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserNameError {
    #[error("Name must not be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long: maximum {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Coarse classification of [`UserError`], used to pick the client-facing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    InvalidCredentials,
    DuplicateEmail,
    NotFound,
    Unauthorized,
    Internal,
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] UserNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::InvalidUserId(_)
            | UserError::InvalidName(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ErrorKind::Validation,
            UserError::NotFound(_) => ErrorKind::NotFound,
            UserError::EmailAlreadyExists(_) => ErrorKind::DuplicateEmail,
            UserError::InvalidCredentials => ErrorKind::InvalidCredentials,
            // Signing happens on our side; a failure there is ours, not the caller's.
            UserError::Token(TokenError::Signing(_)) => ErrorKind::Internal,
            UserError::Token(_) => ErrorKind::Unauthorized,
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Field name and reason for validation errors, `None` for every other kind.
    pub fn validation_detail(&self) -> Option<(&'static str, String)> {
        match self {
            UserError::InvalidUserId(e) => Some(("id", e.to_string())),
            UserError::InvalidName(e) => Some(("name", e.to_string())),
            UserError::InvalidEmail(e) => Some(("email", e.to_string())),
            UserError::InvalidPassword(e) => Some(("password", e.to_string())),
            _ => None,
        }
    }
}

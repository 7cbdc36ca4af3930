use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload carried inside a bearer token.
///
/// Only the token service builds claims, and only at issuance. Everything
/// else gets them back from a validated token and can read but not alter them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    sub: String,

    /// Expiration time (Unix timestamp)
    exp: i64,

    /// Issued at (Unix timestamp)
    iat: i64,
}

impl Claims {
    pub(crate) fn issue(subject: &str, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        let expiration = issued_at + lifetime;

        Self {
            sub: subject.to_string(),
            exp: expiration.timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Expiration as a Unix timestamp in seconds.
    pub fn expires_at(&self) -> i64 {
        self.exp
    }

    /// Issuance as a Unix timestamp in seconds.
    pub fn issued_at(&self) -> i64 {
        self.iat
    }

    /// A token is only valid while its expiration lies strictly in the future.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

use chrono::Duration;
use secrecy::SecretString;
use thiserror::Error;

use crate::password::PasswordHasher;

/// Errors raised while assembling the authentication configuration.
///
/// All of these are startup failures: a process that cannot build its
/// `AuthConfig` must not serve requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthConfigError {
    #[error("Token signing secret is not configured")]
    MissingSecret,

    #[error("Token lifetime must be a positive number of minutes, got {0}")]
    InvalidTokenLifetime(i64),

    #[error("Password hash cost must be at least 1, got {0}")]
    InvalidHashCost(u32),
}

/// Process-wide authentication settings.
///
/// Built once at startup and shared read-only afterwards. The signing secret
/// is kept in a [`SecretString`] so it is zeroized on drop and redacted from
/// `Debug` output.
#[derive(Debug)]
pub struct AuthConfig {
    secret: SecretString,
    token_lifetime: Duration,
    hash_cost: u32,
}

impl AuthConfig {
    pub const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 1440;

    /// Create a configuration with default token lifetime and hash cost.
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty or only whitespace
    pub fn new(secret: impl Into<String>) -> Result<Self, AuthConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(AuthConfigError::MissingSecret);
        }

        Ok(Self {
            secret: SecretString::from(secret),
            token_lifetime: Duration::minutes(Self::DEFAULT_TOKEN_LIFETIME_MINUTES),
            hash_cost: PasswordHasher::DEFAULT_COST,
        })
    }

    /// Set how long issued tokens stay valid.
    ///
    /// # Errors
    /// * `InvalidTokenLifetime` - Zero or negative lifetime
    pub fn with_token_lifetime_minutes(mut self, minutes: i64) -> Result<Self, AuthConfigError> {
        if minutes <= 0 {
            return Err(AuthConfigError::InvalidTokenLifetime(minutes));
        }
        self.token_lifetime = Duration::minutes(minutes);
        Ok(self)
    }

    /// Set the password hashing cost factor (Argon2 iterations).
    ///
    /// # Errors
    /// * `InvalidHashCost` - Cost of zero
    pub fn with_hash_cost(mut self, cost: u32) -> Result<Self, AuthConfigError> {
        if cost == 0 {
            return Err(AuthConfigError::InvalidHashCost(cost));
        }
        self.hash_cost = cost;
        Ok(self)
    }

    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    pub fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    pub fn hash_cost(&self) -> u32 {
        self.hash_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::new("a_signing_secret_of_reasonable_length").unwrap();

        assert_eq!(config.token_lifetime(), Duration::minutes(1440));
        assert_eq!(config.hash_cost(), PasswordHasher::DEFAULT_COST);
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        assert_eq!(
            AuthConfig::new("").unwrap_err(),
            AuthConfigError::MissingSecret
        );
        assert_eq!(
            AuthConfig::new("   ").unwrap_err(),
            AuthConfigError::MissingSecret
        );
    }

    #[test]
    fn test_invalid_lifetime_and_cost() {
        let result = AuthConfig::new("secret").unwrap().with_token_lifetime_minutes(0);
        assert_eq!(result.unwrap_err(), AuthConfigError::InvalidTokenLifetime(0));

        let result = AuthConfig::new("secret").unwrap().with_hash_cost(0);
        assert_eq!(result.unwrap_err(), AuthConfigError::InvalidHashCost(0));
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let config = AuthConfig::new("super_secret_value").unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("super_secret_value"));
    }
}

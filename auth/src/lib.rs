//! Authentication utilities library
//!
//! Provides the credential and token primitives of the user management service:
//! - Password hashing (Argon2id, tunable cost)
//! - Bearer token issuance and validation (HS256 JWT)
//! - Authentication coordination
//!
//! All settings come from a single [`AuthConfig`] value built at startup.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{AuthConfig, TokenService};
//!
//! let config = AuthConfig::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let tokens = TokenService::new(&config);
//! let token = tokens.issue("user123").unwrap();
//! let claims = tokens.validate(&token).unwrap();
//! assert_eq!(claims.subject(), "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthConfig, Authenticator};
//!
//! let config = AuthConfig::new("secret_key_at_least_32_bytes_long!")
//!     .unwrap()
//!     .with_hash_cost(1)
//!     .unwrap();
//! let auth = Authenticator::new(&config).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.subject(), "user123");
//! ```

pub mod authenticator;
pub mod config;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use config::AuthConfig;
pub use config::AuthConfigError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;

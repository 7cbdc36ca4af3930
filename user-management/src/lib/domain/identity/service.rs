use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use secrecy::ExposeSecret;

use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::ports::IdentityServicePort;
use crate::domain::user::models::EmailAddress;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Verifies credentials against the user store and mints tokens.
///
/// Read-only: a login never writes to the store.
pub struct IdentityService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> IdentityService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> IdentityServicePort for IdentityService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<String, UserError> {
        let LoginCommand { email, password } = command;

        // A malformed email cannot belong to any account.
        let Ok(email) = EmailAddress::new(email) else {
            return Err(UserError::InvalidCredentials);
        };

        let user = self.repository.find_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "User lookup failed during login");
            e
        })?;

        // Unknown accounts still pay for a verification, so timing matches.
        let user_id = user.as_ref().map(|u| u.id);
        let authenticator = Arc::clone(&self.authenticator);
        let result = tokio::task::spawn_blocking(move || match user {
            Some(user) => authenticator.authenticate(
                password.expose_secret(),
                &user.password_hash,
                &user.id.to_string(),
            ),
            None => Err(authenticator.reject_unknown(password.expose_secret())),
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Credential verification task failed: {}", e)))?;

        match result {
            Ok(result) => {
                tracing::info!(user_id = ?user_id, "User logged in");
                Ok(result.access_token)
            }
            Err(AuthenticationError::InvalidCredentials) => Err(UserError::InvalidCredentials),
            Err(AuthenticationError::Password(e)) => {
                tracing::error!(user_id = ?user_id, error = %e, "Stored password hash could not be verified");
                Err(UserError::Password(e))
            }
            Err(AuthenticationError::Token(e)) => {
                tracing::error!(user_id = ?user_id, error = %e, "Token issuance failed");
                Err(UserError::Token(e))
            }
        }
    }
}

use async_trait::async_trait;

use crate::domain::identity::models::LoginCommand;
use crate::user::errors::UserError;

/// Port for credential verification.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Verify email and password and issue a bearer token.
    ///
    /// # Returns
    /// Signed bearer token for the user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Password` - Stored hash is corrupted
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<String, UserError>;
}

use secrecy::SecretString;

/// Credentials submitted for login.
///
/// Neither field is validated against the account policies: any mismatch,
/// malformed email included, must end as the same `InvalidCredentials`.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: SecretString,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Self {
        Self {
            email,
            password: SecretString::from(password),
        }
    }
}

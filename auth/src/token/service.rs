use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use secrecy::ExposeSecret;
use serde::Deserialize;

use super::claims::Claims;
use super::errors::TokenError;
use crate::config::AuthConfig;

/// Issues and validates signed, time-bounded bearer tokens.
///
/// Tokens are HS256 JWTs. Nothing is tracked server-side: a token is valid
/// from issuance until its expiration and cannot be revoked.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
    validation: Validation,
}

impl TokenService {
    const ALGORITHM: Algorithm = Algorithm::HS256;
    const ALGORITHM_NAME: &'static str = "HS256";

    /// Create a token service from the process configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.secret().expose_secret().as_bytes();

        let mut validation = Validation::new(Self::ALGORITHM);
        validation.set_required_spec_claims(&["exp", "sub"]);
        // Expiration is checked against our own clock with zero leeway.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            lifetime: config.token_lifetime(),
            validation,
        }
    }

    /// Issue a token for the given subject, expiring after the configured lifetime.
    ///
    /// # Errors
    /// * `Signing` - Token could not be signed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::issue(subject, issued_at, self.lifetime);
        let header = Header::new(Self::ALGORITHM);

        encode(&header, &claims, &self.encoding_key).map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed or lacks required claims
    /// * `WrongAlgorithm` - Header names any algorithm other than HS256, `none` included
    /// * `BadSignature` - Signature does not match the configured secret
    /// * `Expired` - Expiration is not in the future
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, Utc::now().timestamp())
    }

    fn validate_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let algorithm = header_algorithm(token)?;
        if algorithm != Self::ALGORITHM_NAME {
            return Err(TokenError::WrongAlgorithm(algorithm));
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenError::WrongAlgorithm(algorithm.clone())
                }
                _ => TokenError::Malformed(e.to_string()),
            })?;

        if token_data.claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Read the `alg` field without trusting anything else in the token.
///
/// jsonwebtoken cannot even represent `none`, so it is inspected here first to
/// report unexpected algorithms as such instead of as a parse failure.
fn header_algorithm(token: &str) -> Result<String, TokenError> {
    let segment = token
        .split('.')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| TokenError::Malformed("missing header".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::Malformed(format!("header is not base64url: {}", e)))?;

    serde_json::from_slice::<RawHeader>(&bytes)
        .map(|header| header.alg)
        .map_err(|e| TokenError::Malformed(format!("header is not valid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "my_secret_key_at_least_32_bytes_long!";

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::new(SECRET).unwrap())
    }

    fn replace_char(token: &str, index: usize) -> String {
        let mut chars: Vec<char> = token.chars().collect();
        chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
        chars.into_iter().collect()
    }

    #[test]
    fn test_issue_and_validate() {
        let service = service();

        let token = service.issue("user123").expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = service.validate(&token).expect("Failed to validate token");
        assert_eq!(claims.subject(), "user123");
        assert!(claims.expires_at() > Utc::now().timestamp());
    }

    #[test]
    fn test_expiration_follows_configured_lifetime() {
        let config = AuthConfig::new(SECRET)
            .unwrap()
            .with_token_lifetime_minutes(30)
            .unwrap();
        let service = TokenService::new(&config);

        let token = service.issue("user123").unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.expires_at() - claims.issued_at(), 30 * 60);
    }

    #[test]
    fn test_expired_token() {
        let service = service();

        let issued_at = Utc::now() - Duration::days(2);
        let token = service.issue_at("user123", issued_at).unwrap();

        assert_eq!(service.validate(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_token_rejected_at_exact_expiry() {
        let service = service();

        let issued_at = Utc::now();
        let token = service.issue_at("user123", issued_at).unwrap();
        let expiry = (issued_at + Duration::minutes(1440)).timestamp();

        assert!(service.validate_at(&token, expiry - 1).is_ok());
        assert_eq!(
            service.validate_at(&token, expiry).unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn test_flipped_signature_byte() {
        let service = service();
        let token = service.issue("user123").unwrap();

        let signature_start = token.rfind('.').unwrap() + 1;
        let tampered = replace_char(&token, signature_start);

        assert_eq!(
            service.validate(&tampered).unwrap_err(),
            TokenError::BadSignature
        );
    }

    #[test]
    fn test_tampered_payload() {
        let service = service();
        let token = service.issue("user123").unwrap();

        let payload_start = token.find('.').unwrap() + 1;
        let tampered = replace_char(&token, payload_start + 2);

        assert!(service.validate(&tampered).is_err());
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let issuer = service();
        let other = TokenService::new(
            &AuthConfig::new("secret2_at_least_32_bytes_long_key!").unwrap(),
        );

        let token = issuer.issue("user123").unwrap();

        assert_eq!(
            other.validate(&token).unwrap_err(),
            TokenError::BadSignature
        );
    }

    #[test]
    fn test_rejects_other_hmac_algorithm() {
        let service = service();
        let claims = Claims::issue("user123", Utc::now(), Duration::hours(1));
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            service.validate(&token).unwrap_err(),
            TokenError::WrongAlgorithm("HS512".to_string())
        );
    }

    #[test]
    fn test_rejects_none_algorithm() {
        let service = service();
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"user123","exp":{},"iat":0}}"#, exp));
        let token = format!("{}.{}.", header, payload);

        assert_eq!(
            service.validate(&token).unwrap_err(),
            TokenError::WrongAlgorithm("none".to_string())
        );
    }

    #[test]
    fn test_malformed_token() {
        let service = service();

        assert!(matches!(
            service.validate("invalid.token.here"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(service.validate(""), Err(TokenError::Malformed(_))));
    }
}

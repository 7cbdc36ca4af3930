use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UNAUTHORIZED_MESSAGE;
use crate::inbound::http::router::AppState;

pub const MISSING_HEADER_MESSAGE: &str = "Cabeçalho de autorização não encontrado";
pub const INVALID_FORMAT_MESSAGE: &str = "Formato de token inválido";

const BEARER_PREFIX: &str = "Bearer ";

/// Identity of the caller, inserted into request extensions once the token checks out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates bearer tokens and adds the caller to request extensions.
///
/// Every rejection is a 401; the reason for a token failure is logged, never returned.
pub async fn require_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
    })?;

    let user_id = UserId::from_string(claims.subject()).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user id");
        ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized(MISSING_HEADER_MESSAGE.to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized(INVALID_FORMAT_MESSAGE.to_string()))?;

    auth_str
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| ApiError::Unauthorized(INVALID_FORMAT_MESSAGE.to_string()))
}

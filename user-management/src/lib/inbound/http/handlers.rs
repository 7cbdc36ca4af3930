use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::user::errors::ErrorKind;
use crate::user::errors::UserError;

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod health;
pub mod list_users;
pub mod login;
pub mod update_user;

pub const VALIDATION_MESSAGE: &str = "Dados inválidos";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "usuário não encontrado ou credenciais inválidas";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "E-mail já cadastrado";
pub const NOT_FOUND_MESSAGE: &str = "Usuário não encontrado";
pub const UNAUTHORIZED_MESSAGE: &str = "Token inválido ou expirado";
pub const INTERNAL_ERROR_MESSAGE: &str = "Ocorreu um erro interno no servidor.";
pub const INVALID_PAYLOAD_MESSAGE: &str = "Payload inválido";

/// Status and client-facing message for every error kind.
///
/// This is the only place domain errors meet the transport; messages are fixed
/// so that no internal detail can reach the client.
pub fn response_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, VALIDATION_MESSAGE),
        ErrorKind::InvalidCredentials => (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS_MESSAGE),
        ErrorKind::DuplicateEmail => (StatusCode::CONFLICT, DUPLICATE_EMAIL_MESSAGE),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE),
        ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE),
    }
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Validation {
        message: String,
        details: BTreeMap<String, String>,
    },
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request payload");
        Self::BadRequest(INVALID_PAYLOAD_MESSAGE.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let kind = err.kind();
        let message = response_for(kind).1.to_string();

        match kind {
            ErrorKind::Validation => ApiError::Validation {
                message,
                details: err
                    .validation_detail()
                    .map(|(field, reason)| BTreeMap::from([(field.to_string(), reason)]))
                    .unwrap_or_default(),
            },
            ErrorKind::InvalidCredentials => ApiError::Unauthorized(message),
            ErrorKind::DuplicateEmail => ApiError::Conflict(message),
            ErrorKind::NotFound => ApiError::NotFound(message),
            ErrorKind::Unauthorized => {
                tracing::warn!(error = %err, "Request rejected as unauthorized");
                ApiError::Unauthorized(message)
            }
            ErrorKind::Internal => {
                tracing::error!(error = %err, "Request failed");
                ApiError::InternalServerError(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation { message, details } => ApiErrorBody {
                error: message,
                details: Some(details),
            },
            ApiError::InternalServerError(message)
            | ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::Conflict(message)
            | ApiError::Unauthorized(message) => ApiErrorBody {
                error: message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

/// External representation of a user. Carries no password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

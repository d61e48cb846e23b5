use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spotter_core::{ApplicationError, ErrorKind};

/// Header carrying the authenticated caller's id, set by the identity proxy
/// in front of the API.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller, resolved from [`USER_ID_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(ApiError::Unauthorized("missing user id"))?;

        value
            .to_str()
            .ok()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .map(CurrentUser)
            .ok_or(ApiError::Unauthorized("invalid user id"))
    }
}

/// JSON error payload: `{ "error": <kind>, "message": <text> }`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    Unauthorized(&'static str),
    Application(ApplicationError),
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Duplicate => StatusCode::CONFLICT,
        ErrorKind::LimitExceeded => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized(reason) => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    error: "unauthorized".to_string(),
                    message: reason.to_string(),
                },
            ),
            ApiError::Application(err) => {
                let kind = err.kind();
                let status = status_for(kind);
                // Internal details stay in the logs.
                let message = if status.is_server_error() {
                    tracing::error!(kind = kind.as_str(), "Request failed: {:?}", err);
                    "Internal server error.".to_string()
                } else {
                    err.to_string()
                };
                (
                    status,
                    ErrorBody {
                        error: kind.as_str().to_string(),
                        message,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Body for commands whose output is a plain "did anything change" flag.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChangedResponse {
    pub changed: bool,
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Error taxonomy of the auth core. Both variants are recoverable: the
/// caller may retry immediately, session state is never altered by a
/// failure.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No credential record matched the submitted pair.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Bearer token missing, malformed, or past its expiry.
    #[error("Invalid or expired token")]
    TokenInvalid,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::InvalidCredentials | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Internal(err) => {
                tracing::error!("internal error: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

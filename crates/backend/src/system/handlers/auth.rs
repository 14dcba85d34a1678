use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::errors::AuthError;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, tokens};
use crate::system::users::service as user_service;

/// Login handler: the one write path into the session
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
    let user = user_service::verify_credentials(&request.username, &request.password)?
        .ok_or(AuthError::InvalidCredentials)?;

    let access_token = jwt::generate_access_token(&user)?;
    let refresh_token = jwt::generate_refresh_token();
    tokens::store(
        user.id,
        &refresh_token,
        jwt::calculate_refresh_token_expiration(),
    );

    tracing::info!("login: {} ({})", user.username, user.role);

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user,
    }))
}

/// Refresh handler: exchange a live refresh token for a new access token
pub async fn refresh(
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AuthError> {
    let user_id = tokens::validate(&request.refresh_token).ok_or(AuthError::TokenInvalid)?;

    let user = user_service::get_by_id(user_id).ok_or(AuthError::TokenInvalid)?;
    let access_token = jwt::generate_access_token(&user)?;

    Ok(Json(RefreshResponse { access_token }))
}

/// Logout handler: server side of `clear_session`
pub async fn logout(Json(request): Json<RefreshRequest>) -> StatusCode {
    tokens::revoke(&request.refresh_token);
    StatusCode::OK
}

/// Get current user handler (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Result<Json<UserInfo>, StatusCode> {
    let user_id: u32 = claims.sub.parse().map_err(|_| StatusCode::UNAUTHORIZED)?;
    let user = user_service::get_by_id(user_id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(user))
}

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

/// Validated token claims, destructured straight in handler signatures:
/// `async fn handler(CurrentUser(claims): CurrentUser)`.
///
/// The claims carry the role as its wire string; handlers go through
/// `claims.role()` and feed the view resolvers whatever comes back,
/// `None` included.
pub struct CurrentUser(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // require_auth validated the token and parked the claims here;
        // a route that skips that middleware has no claims to find.
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

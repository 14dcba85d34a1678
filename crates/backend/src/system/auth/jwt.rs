use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::{TokenClaims, UserInfo};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use rand::Rng;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;
const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 90;

/// Signing secret, generated once per process. Sessions are not meant to
/// survive a restart, so nothing is persisted.
static JWT_SECRET: Lazy<String> = Lazy::new(generate_jwt_secret);

/// Generate JWT access token with 24 hours lifetime
pub fn generate_access_token(user: &UserInfo) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        role: user.role.as_str().to_string(),
        exp,
        iat,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .context("Failed to encode JWT token")?;

    Ok(token)
}

/// Validate JWT token and extract claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(JWT_SECRET.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate refresh token (UUID-based)
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Refresh token expiration timestamp, RFC 3339
pub fn calculate_refresh_token_expiration() -> chrono::DateTime<Utc> {
    Utc::now() + chrono::Duration::days(REFRESH_TOKEN_LIFETIME_DAYS)
}

/// Cryptographically random secret (256 bits, base64)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::roles::Role;

    fn supplier() -> UserInfo {
        UserInfo {
            id: 1,
            username: "supplier".to_string(),
            role: Role::DrugSupplier,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let token = generate_access_token(&supplier()).unwrap();
        let claims = validate_token(&token).unwrap();

        assert_eq!(claims.sub, "1");
        assert_eq!(claims.username, "supplier");
        assert_eq!(claims.role, "drugSupplier");
        assert_eq!(claims.role(), Some(Role::DrugSupplier));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(validate_token("not.a.token").is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = generate_access_token(&supplier()).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(validate_token(&tampered).is_err());
    }
}

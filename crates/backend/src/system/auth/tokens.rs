//! In-memory refresh-token store.
//!
//! Tokens are stored keyed by their SHA-256 hash with an expiry and a
//! revocation mark. The map lives for the process lifetime, matching the
//! session model: nothing survives a restart.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

struct StoredToken {
    user_id: u32,
    expires_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
}

static STORE: Lazy<RwLock<HashMap<String, StoredToken>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

// A panicked holder cannot leave the map half-written (inserts and field
// updates are atomic at the map level), so a poisoned lock is recovered
// rather than propagated.
fn read_store() -> RwLockReadGuard<'static, HashMap<String, StoredToken>> {
    STORE.read().unwrap_or_else(|e| e.into_inner())
}

fn write_store() -> RwLockWriteGuard<'static, HashMap<String, StoredToken>> {
    STORE.write().unwrap_or_else(|e| e.into_inner())
}

/// Remember a freshly issued refresh token for a user. The caller fixes
/// the expiry (normally `jwt::calculate_refresh_token_expiration`).
pub fn store(user_id: u32, token: &str, expires_at: DateTime<Utc>) {
    let entry = StoredToken {
        user_id,
        expires_at,
        revoked_at: None,
    };
    write_store().insert(hash_token(token), entry);
}

/// Resolve a refresh token to its user, if the token is known, unexpired
/// and not revoked
pub fn validate(token: &str) -> Option<u32> {
    let store = read_store();
    let entry = store.get(&hash_token(token))?;
    if entry.revoked_at.is_some() || entry.expires_at <= Utc::now() {
        return None;
    }
    Some(entry.user_id)
}

/// Revoke a refresh token (logout). Unknown tokens are a no-op.
pub fn revoke(token: &str) {
    if let Some(entry) = write_store().get_mut(&hash_token(token)) {
        entry.revoked_at = Some(Utc::now());
    }
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::jwt;

    #[test]
    fn test_validate_after_store() {
        let token = jwt::generate_refresh_token();
        store(3, &token, jwt::calculate_refresh_token_expiration());
        assert_eq!(validate(&token), Some(3));
    }

    #[test]
    fn test_unknown_token_is_invalid() {
        assert_eq!(validate("no-such-token"), None);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let token = jwt::generate_refresh_token();
        store(2, &token, Utc::now() - chrono::Duration::minutes(1));
        assert_eq!(validate(&token), None);
    }

    #[test]
    fn test_revoked_token_is_invalid() {
        let token = jwt::generate_refresh_token();
        store(5, &token, jwt::calculate_refresh_token_expiration());
        revoke(&token);
        assert_eq!(validate(&token), None);
    }

    #[test]
    fn test_revoking_unknown_token_is_noop() {
        revoke("never-issued");
    }
}

use anyhow::Result;
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a password with Argon2 and a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Verify a submitted password against a stored hash.
///
/// Byte-exact comparison semantics: case matters, whitespace is not
/// trimmed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("Stored password hash is malformed: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Minimal strength gate for seeded credentials
pub fn validate_password_strength(password: &str) -> Result<()> {
    if password.len() < 4 {
        return Err(anyhow::anyhow!("Password must be at least 4 characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("distributor123").unwrap();
        assert!(verify_password("distributor123", &hash).unwrap());
    }

    #[test]
    fn test_near_misses_are_rejected() {
        // Matching is byte-exact: no case folding, no trimming.
        let hash = hash_password("distributor123").unwrap();
        assert!(!verify_password("Distributor123", &hash).unwrap());
        assert!(!verify_password("distributor123 ", &hash).unwrap());
        assert!(!verify_password(" distributor123", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let a = hash_password("supplier123").unwrap();
        let b = hash_password("supplier123").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("supplier123", &a).unwrap());
        assert!(verify_password("supplier123", &b).unwrap());
    }
}

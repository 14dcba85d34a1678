use anyhow::{Context, Result};

use crate::system::auth::password;
use crate::system::users::store::{self, UserRecord, SEED_USERS};

/// Seed the credential table (idempotent).
///
/// The table itself is a build-time constant; only the password hashes
/// are computed here, at startup, so no hash material lives in the
/// source.
pub fn ensure_seed_users() -> Result<()> {
    if store::is_installed() {
        return Ok(());
    }

    let mut records = Vec::with_capacity(SEED_USERS.len());
    for (id, username, plain, role) in SEED_USERS {
        password::validate_password_strength(plain)?;
        let password_hash = password::hash_password(plain)
            .with_context(|| format!("Failed to hash seed password for {username}"))?;
        records.push(UserRecord {
            id: *id,
            username: (*username).to_string(),
            password_hash,
            role: *role,
        });
    }

    store::install(records);

    tracing::warn!("═══════════════════════════════════════════════");
    tracing::warn!("  Seeded {} demo accounts:", store::count());
    for (_, username, _, role) in SEED_USERS {
        tracing::warn!("    {username} ({role})");
    }
    tracing::warn!("  Replace the seed table before any real deployment!");
    tracing::warn!("═══════════════════════════════════════════════");

    Ok(())
}

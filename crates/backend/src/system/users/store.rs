//! Fixed credential table.
//!
//! The record list is a build-time constant; it is seeded into the store
//! exactly once at startup (passwords get hashed then) and never mutated
//! afterwards.

use contracts::system::auth::UserInfo;
use contracts::system::roles::Role;
use once_cell::sync::OnceCell;

/// A credential record: identity plus the role that drives every
/// authorization decision downstream.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: u32,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

impl UserRecord {
    /// The record as consumers may see it: everything minus the hash.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// Seed credentials, one record per role. Demo accounts; real
/// deployments replace this table wholesale.
pub const SEED_USERS: &[(u32, &str, &str, Role)] = &[
    (1, "supplier", "supplier123", Role::DrugSupplier),
    (2, "government", "government123", Role::Government),
    (3, "distributor1", "distributor123", Role::Distributor),
    (4, "distributor2", "distributor2123", Role::DistributorLowLevel),
    (5, "medAdmin", "medAdmin123", Role::MedicalAdministrator),
];

static USERS: OnceCell<Vec<UserRecord>> = OnceCell::new();

/// Install the seeded records. Idempotent; only the first call wins.
pub fn install(records: Vec<UserRecord>) {
    let _ = USERS.set(records);
}

pub fn is_installed() -> bool {
    USERS.get().is_some()
}

fn all() -> &'static [UserRecord] {
    USERS.get().map(Vec::as_slice).unwrap_or(&[])
}

/// Exact, case-sensitive username lookup. Usernames are unique, so the
/// first match is the only match.
pub fn get_by_username(username: &str) -> Option<&'static UserRecord> {
    all().iter().find(|u| u.username == username)
}

pub fn get_by_id(id: u32) -> Option<&'static UserRecord> {
    all().iter().find(|u| u.id == id)
}

pub fn count() -> usize {
    all().len()
}

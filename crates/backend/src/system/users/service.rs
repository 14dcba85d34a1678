use anyhow::Result;
use contracts::system::auth::UserInfo;

use super::store;
use crate::system::auth::password;

/// Verify a submitted credential pair against the fixed table (login).
///
/// Scans for the record whose username matches exactly, then verifies
/// the password against its hash. `Ok(None)` on any mismatch; the caller
/// surfaces that as invalid credentials and leaves the session alone.
/// No lockout, no attempt counting: retries are free.
pub fn verify_credentials(username: &str, password: &str) -> Result<Option<UserInfo>> {
    let user = match store::get_by_username(username) {
        Some(u) => u,
        None => return Ok(None),
    };

    if !password::verify_password(password, &user.password_hash)? {
        return Ok(None);
    }

    Ok(Some(user.to_info()))
}

/// Get a user by id (token subject)
pub fn get_by_id(id: u32) -> Option<UserInfo> {
    store::get_by_id(id).map(|u| u.to_info())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::initialization;
    use contracts::system::roles::Role;
    use contracts::system::session::Session;

    fn seed() {
        initialization::ensure_seed_users().unwrap();
    }

    #[test]
    fn test_valid_credentials_return_record() {
        seed();
        let user = verify_credentials("distributor1", "distributor123")
            .unwrap()
            .expect("login should succeed");
        assert_eq!(user.id, 3);
        assert_eq!(user.username, "distributor1");
        assert_eq!(user.role, Role::Distributor);
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        seed();
        let result = verify_credentials("distributor1", "wrongpassword").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_unknown_username_is_rejected() {
        seed();
        let result = verify_credentials("nosuchuser", "whatever").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_username_lookup_is_case_sensitive() {
        seed();
        assert!(verify_credentials("Distributor1", "distributor123")
            .unwrap()
            .is_none());
        assert!(verify_credentials("distributor1 ", "distributor123")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_every_seed_account_can_log_in() {
        seed();
        for (id, username, password, role) in store::SEED_USERS {
            let user = verify_credentials(username, password)
                .unwrap()
                .unwrap_or_else(|| panic!("{username} should log in"));
            assert_eq!(user.id, *id);
            assert_eq!(user.role, *role);
        }
    }

    #[test]
    fn test_failed_attempt_does_not_clear_session() {
        seed();
        let mut session = Session::new();

        let user = verify_credentials("distributor1", "distributor123")
            .unwrap()
            .unwrap();
        session.establish(user);

        // Second, failing attempt: the caller gets None and must not
        // write, so the first login stays in place.
        if let Some(user) = verify_credentials("distributor1", "wrongpassword").unwrap() {
            session.establish(user);
        }

        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().username, "distributor1");
    }

    #[test]
    fn test_repeat_login_yields_equal_sessions() {
        seed();
        let first = verify_credentials("medAdmin", "medAdmin123").unwrap().unwrap();
        let second = verify_credentials("medAdmin", "medAdmin123").unwrap().unwrap();
        assert_eq!(first, second);

        let mut a = Session::new();
        a.establish(first);
        let mut b = Session::new();
        b.establish(second);
        assert_eq!(a, b);
    }
}

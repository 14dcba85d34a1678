//! Process-lifetime holder of the authenticated identity.
//!
//! One writer (the authenticator's success path), many readers. The
//! frontend wraps this value in a reactive signal; the contract is the
//! same there: a failed login attempt never touches an existing session.

use super::auth::UserInfo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserInfo>,
}

impl Session {
    /// Created empty at startup; nobody is signed in yet.
    pub fn new() -> Self {
        Session::default()
    }

    /// Store a successful login. Re-authenticating while already signed
    /// in simply replaces the stored user.
    pub fn establish(&mut self, user: UserInfo) {
        self.user = Some(user);
    }

    /// Symmetric inverse of `establish` (logout).
    pub fn clear(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::roles::Role;

    fn distributor() -> UserInfo {
        UserInfo {
            id: 3,
            username: "distributor1".to_string(),
            role: Role::Distributor,
        }
    }

    #[test]
    fn test_starts_empty() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_establish_and_clear() {
        let mut session = Session::new();
        session.establish(distributor());
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().role, Role::Distributor);

        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_failed_attempt_leaves_session_untouched() {
        // The caller only writes on success; a rejected attempt after a
        // successful login must leave the first user in place.
        let mut session = Session::new();
        session.establish(distributor());

        let failed_attempt: Option<UserInfo> = None;
        if let Some(user) = failed_attempt {
            session.establish(user);
        }

        assert_eq!(session.user().unwrap().username, "distributor1");
    }

    #[test]
    fn test_repeat_login_is_idempotent() {
        let mut first = Session::new();
        first.establish(distributor());

        let mut second = first.clone();
        second.establish(distributor());

        // Two distinct login events, equal resulting sessions
        assert_eq!(first, second);
    }
}

//! Auth boundary
//!
//! A session is a single persisted pointer to the logged-in user's id.
//! The credential check is an exact match on the stored plaintext
//! password; acceptable only because this mirrors a local simulation.

use tracing::error;
use tt_models::User;

use crate::store::Store;

impl Store {
    /// Exact-match credential check. On success the session pointer is
    /// persisted; a failed persist is logged and the login still
    /// succeeds for this session.
    pub fn login(&mut self, email: &str, password: &str) -> Option<User> {
        let user = self
            .data
            .users
            .iter()
            .find(|u| u.email == email && u.password.as_deref() == Some(password))
            .cloned()?;

        if let Err(e) = self.backend.save_session(&user.id) {
            error!("Failed to persist session pointer: {e}");
        }
        Some(user)
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.backend.clear_session() {
            error!("Failed to clear session pointer: {e}");
        }
    }

    /// The user the session pointer names, if any
    pub fn logged_in_user(&self) -> Option<User> {
        let user_id = self.backend.load_session().ok().flatten()?;
        self.data.users.iter().find(|u| u.id == user_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::StorageBackend;
    use crate::testing::test_store;

    #[test]
    fn test_login_logout_round_trip() {
        let (mut store, _storage, _clock) = test_store();

        assert!(store.logged_in_user().is_none());

        let user = store.login("admin@example.com", "password").unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(store.logged_in_user().unwrap().id, "user-1");

        store.logout();
        assert!(store.logged_in_user().is_none());
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let (mut store, _storage, _clock) = test_store();

        assert!(store.login("admin@example.com", "wrong").is_none());
        assert!(store.login("nobody@example.com", "password").is_none());
        assert!(store.logged_in_user().is_none());
    }

    #[test]
    fn test_stale_session_pointer_yields_absence() {
        let (mut store, storage, _clock) = test_store();
        store.login("member@example.com", "password").unwrap();

        // the pointed-to user disappears
        store.delete_member("user-2").unwrap();
        assert!(store.logged_in_user().is_none());
        // but the raw pointer is still there
        assert!(storage.load_session().unwrap().is_some());
    }
}

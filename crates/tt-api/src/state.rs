//! Shared application state

use std::sync::Arc;

use parking_lot::Mutex;
use tt_models::User;
use tt_store::Store;

use crate::error::ApiError;

/// Shared handle to the store. The mutex is the single-writer
/// authority: each request fully reads, computes, and persists before
/// the next one starts.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn store(&self) -> parking_lot::MutexGuard<'_, Store> {
        self.store.lock()
    }
}

/// The session's user, or 401
pub fn current_user(store: &Store) -> Result<User, ApiError> {
    store
        .logged_in_user()
        .ok_or_else(|| ApiError::unauthorized("Not logged in"))
}

/// The session's user if they are an admin, or 401/403
pub fn require_admin(store: &Store) -> Result<User, ApiError> {
    let user = current_user(store)?;
    if !user.is_admin() {
        return Err(ApiError::forbidden("Administrator access required"));
    }
    Ok(user)
}

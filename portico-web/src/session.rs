//! Persistence of the logged-in user across page loads.

use crate::config::SESSION_STORAGE_KEY;
use gloo_storage::{LocalStorage, Storage};
use shared::models::Session;

/// Load the stored session. Missing or corrupt entries mean logged out.
pub fn restore() -> Option<Session> {
    match LocalStorage::get::<Session>(SESSION_STORAGE_KEY) {
        Ok(session) => Some(session),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            log::warn!("discarding stored session: {err}");
            LocalStorage::delete(SESSION_STORAGE_KEY);
            None
        }
    }
}

/// Remember `session` so the next page load starts logged in.
pub fn save(session: &Session) {
    if let Err(err) = LocalStorage::set(SESSION_STORAGE_KEY, session) {
        log::error!("failed to persist session: {err}");
    }
}

/// Forget the stored session.
pub fn clear() {
    LocalStorage::delete(SESSION_STORAGE_KEY);
}

use contracts::system::session::{ActiveUser, ACTIVE_USER_STORAGE_KEY};

use crate::shared::storage;

/// Restore the signed-in user from localStorage, if any.
pub fn load_active_user() -> Option<ActiveUser> {
    storage::load_json(ACTIVE_USER_STORAGE_KEY)
}

pub fn save_active_user(user: &ActiveUser) {
    storage::save_json(ACTIVE_USER_STORAGE_KEY, user);
}

pub fn clear_active_user() {
    storage::remove(ACTIVE_USER_STORAGE_KEY);
}

//! JSON helpers over `window.localStorage`. All failures degrade to `None`
//! or a no-op; a broken storage layer must never take the page down.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("failed to parse stored value for {key}: {e}");
            None
        }
    }
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(raw) => {
            let _ = storage.set_item(key, &raw);
        }
        Err(e) => log::error!("failed to serialize value for {key}: {e}"),
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

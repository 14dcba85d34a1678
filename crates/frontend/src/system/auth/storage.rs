//! Token persistence in localStorage.
//!
//! Only the token pair lives here, under app-scoped keys; the session
//! user is never persisted and gets rebuilt from `/me` on reload.
//! Storage failures degrade to a signed-out state.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "pharmatrack_access_token";
const REFRESH_TOKEN_KEY: &str = "pharmatrack_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_access_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

pub fn get_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn save_refresh_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
    }
}

pub fn get_refresh_token() -> Option<String> {
    local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

/// Drop both tokens (logout, or a restore flow that came up empty).
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

//! `sessionStorage` adapter for the [`SessionStore`] port.

use mikrodash_app::ports::SessionStore;
use mikrodash_domain::error::StorageError;
use wasm_bindgen::JsValue;

/// The current tab's `window.sessionStorage`.
///
/// Looked up on every call, so a store created before the window is ready
/// still works later.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

fn session_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .session_storage()
        .map_err(backend_error)?
        .ok_or(StorageError::Unavailable)
}

fn backend_error(err: JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        session_storage()?.get_item(key).map_err(backend_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        session_storage()?.set_item(key, value).map_err(backend_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        session_storage()?.remove_item(key).map_err(backend_error)
    }
}

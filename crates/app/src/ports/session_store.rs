//! Session storage port: string key/value storage scoped to the browser tab.

use mikrodash_domain::error::StorageError;

/// Key/value storage that lives as long as the browser session.
pub trait SessionStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

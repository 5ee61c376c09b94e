//! Key-value port definition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// String-valued key-value persistence.
///
/// Implementations must ensure:
/// - `set` replaces the whole value for a key
/// - `get` after a successful `set` on the same store observes the new value
///
/// Calls are the only suspension points of the entry store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }
}

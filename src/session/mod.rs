//! Session context holding the bearer token

mod storage;

use std::sync::Arc;

use log::debug;

use crate::config::DEFAULT_TOKEN_KEY;
use crate::error::Result;

pub use storage::*;

/// Explicit handle on the persisted bearer token.
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone)]
pub struct SessionContext {
    storage: Arc<dyn TokenStorage>,
    key: String,
}

impl SessionContext {
    /// Create a session over `storage` using the default `authToken` key
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self::with_key(storage, DEFAULT_TOKEN_KEY)
    }

    /// Create a session over `storage` using a custom key
    pub fn with_key(storage: Arc<dyn TokenStorage>, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    /// A session over fresh in-memory storage
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// The storage key of the token
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current bearer token. An empty stored value counts as no token.
    pub fn token(&self) -> Result<Option<String>> {
        let token = self.storage.get_item(&self.key)?;
        Ok(token.filter(|t| !t.is_empty()))
    }

    /// Whether a token is present
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.token()?.is_some())
    }

    /// Store a new token
    pub fn set_token(&self, token: &str) -> Result<()> {
        debug!("Storing bearer token under '{}'", self.key);
        self.storage.set_item(&self.key, token)
    }

    /// Forget the token
    pub fn clear(&self) -> Result<()> {
        debug!("Clearing bearer token under '{}'", self.key);
        self.storage.remove_item(&self.key)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::in_memory()
    }
}

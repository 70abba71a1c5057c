//! Persistent visitor identity.
//!
//! The chat session never reads ambient storage itself. It asks an
//! [`IdentityProvider`] for the value stored under a key, and the provider
//! creates and persists a fresh id on the first miss.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::errors::PlatformError;
use crate::id::new_id;

/// Storage key under which the chat visitor id is persisted.
pub const SESSION_ID_KEY: &str = "chatbot-user-id";

/// Key-value store that survives across sessions.
///
/// Values are written once, on the first read-miss, and never updated or
/// deleted afterwards.
pub trait IdentityProvider: Send + Sync {
    fn get_or_create(&self, key: &str) -> Result<String, PlatformError>;
}

/// In-memory provider, used by tests and by surfaces that opt out of
/// persistence.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, as if it had been persisted on an earlier visit.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        self
    }
}

impl IdentityProvider for MemoryIdentityStore {
    fn get_or_create(&self, key: &str) -> Result<String, PlatformError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        let value = values.entry(key.to_string()).or_insert_with(|| {
            tracing::debug!(key, "generating new identity value");
            new_id()
        });
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_read_creates_a_uuid() {
        let store = MemoryIdentityStore::new();
        let id = store.get_or_create(SESSION_ID_KEY).unwrap();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn repeated_reads_return_the_same_value() {
        let store = MemoryIdentityStore::new();
        let a = store.get_or_create(SESSION_ID_KEY).unwrap();
        let b = store.get_or_create(SESSION_ID_KEY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_value_is_reused() {
        let store = MemoryIdentityStore::new().with_value(SESSION_ID_KEY, "returning-visitor");
        assert_eq!(
            store.get_or_create(SESSION_ID_KEY).unwrap(),
            "returning-visitor"
        );
    }

    #[test]
    fn keys_are_independent() {
        let store = MemoryIdentityStore::new();
        let a = store.get_or_create("a").unwrap();
        let b = store.get_or_create("b").unwrap();
        assert_ne!(a, b);
    }
}

//! Scalar key/value persistence
//!
//! The game only ever stores a handful of strings (scores and preferences).
//! Storage is best-effort: every failure is logged and the caller carries on
//! with defaults.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod local;

use std::str::FromStr;

use thiserror::Error;

pub use memory::{MemoryStore, UnavailableStore};
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Storage keys
pub mod keys {
    pub const LAST_SCORE: &str = "lastScore";
    pub const BEST_SCORE: &str = "bestScore";
    pub const SELECTED_SKIN: &str = "selectedSkin";
    pub const SOUND_ENABLED: &str = "soundEnabled";
}

/// Why a storage call failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Failed to read key: {0}")]
    Read(String),

    #[error("Failed to write key: {0}")]
    Write(String),
}

/// String-valued key/value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and parse `key`, falling back to `default` when the key is missing,
/// unparsable, or the store fails
pub fn read_or<T: FromStr>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    match store.get(key) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring malformed value for {}: {:?}", key, raw);
            default
        }),
        Ok(None) => default,
        Err(e) => {
            log::warn!("{} (using default for {})", e, key);
            default
        }
    }
}

/// Write `value` under `key`; failures are logged and reported as `false`
pub fn write(store: &mut dyn KeyValueStore, key: &str, value: impl ToString) -> bool {
    match store.set(key, &value.to_string()) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}

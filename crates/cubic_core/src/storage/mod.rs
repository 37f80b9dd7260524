//! Client-local key-value persistence capability.
//!
//! # Responsibility
//! - Define the string-keyed get/set/remove surface used for recent searches
//!   and the read-notification set.
//! - Provide an in-memory implementation for tests and ephemeral sessions.
//!
//! # Invariants
//! - Callers treat this storage as best-effort: failures degrade the owning
//!   feature to transient in-memory state, they never propagate upward.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;

pub use file::FileStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure while reading or writing a persisted value.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage i/o failure: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// String-keyed persisted values.
///
/// Implementations store opaque strings; the owning features serialize JSON
/// into them and handle malformed content on the way back out.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// Volatile in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

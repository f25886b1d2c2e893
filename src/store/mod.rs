//! Store - the key-value backend contract and the in-memory reference store.
//!
//! The store is the sole source of truth; records are disposable views over
//! it. The crate consumes exactly eight primitives (scalar get/set, atomic
//! increment, existence check, list append/read, set add/read) and treats
//! everything behind them, connections, pooling, wire protocol, as the
//! backend's concern.

mod in_memory;
mod store;

use std::fmt;

/// Error type for store primitives. Surfaced to callers unmodified; the
/// crate performs no retries and no local recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An internal lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// A structure primitive hit a value of a different shape.
    WrongType { key: String },
    /// `increment` hit a scalar that does not parse as an integer.
    NotAnInteger { key: String },
    /// Connectivity or protocol fault reported by a real backend.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::WrongType { key } => {
                write!(f, "operation against wrong value type at key {}", key)
            }
            StoreError::NotAnInteger { key } => {
                write!(f, "value at key {} is not an integer", key)
            }
            StoreError::Backend(msg) => write!(f, "store backend error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryStore;
pub use store::Store;

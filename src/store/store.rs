//! Store - abstract key-value backend for records.

use super::StoreError;

/// Abstract key-value backend.
///
/// Every call is synchronous request/response; cancellation and timeout
/// semantics belong to the implementation. `increment` must be atomic
/// across concurrent callers and processes, it is the only primitive the
/// record layer relies on for cross-caller ordering.
pub trait Store: Send + Sync {
    /// Read a scalar value. Returns `None` if the key was never set,
    /// which is distinct from an empty string that was set explicitly.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a scalar value, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Atomically increment an integer scalar and return the new value.
    /// A missing key counts from zero.
    fn increment(&self, key: &str) -> Result<u64, StoreError>;

    /// Check whether any value exists at the key.
    fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Append one element to the ordered list at the key, creating it
    /// if missing. Each append is a single atomic operation.
    fn list_append(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read the whole ordered list at the key, in append order.
    /// A missing key reads as an empty list.
    fn list_all(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Add one member to the set at the key, creating it if missing.
    /// Adding an existing member is a no-op.
    fn set_add(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read the members of the set at the key. Order is unspecified but
    /// stable within one read. A missing key reads as empty.
    fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError>;
}

//! Collection proxies - list and set attributes that delegate every
//! mutation straight to the store.
//!
//! Unlike scalar attributes, collection mutations are not deferred to
//! `save`: each `push`/`add` is one atomic store operation, and each
//! `to_vec` is a fresh full read. Two independent views of the same record
//! therefore always observe each other's appends. A proxy holds only a
//! store borrow and the attribute key, never store data.

use crate::error::ModelError;
use crate::store::Store;

/// Ordered-sequence attribute proxy. Read order equals append order,
/// including across independent re-loads of the record.
#[derive(Debug)]
pub struct ListProxy<'a, S> {
    store: &'a S,
    key: String,
}

impl<'a, S: Store> ListProxy<'a, S> {
    pub(crate) fn new(store: &'a S, key: String) -> Self {
        Self { store, key }
    }

    /// Append one element. Writes to the store immediately.
    pub fn push(&self, value: &str) -> Result<(), ModelError> {
        self.store.list_append(&self.key, value)?;
        Ok(())
    }

    /// Materialize the whole sequence, freshly read, in append order.
    /// A never-appended collection reads as empty.
    pub fn to_vec(&self) -> Result<Vec<String>, ModelError> {
        Ok(self.store.list_all(&self.key)?)
    }
}

/// Set attribute proxy. Members are deduplicated by the store; iteration
/// order is unspecified but stable within one read.
#[derive(Debug)]
pub struct SetProxy<'a, S> {
    store: &'a S,
    key: String,
}

impl<'a, S: Store> SetProxy<'a, S> {
    pub(crate) fn new(store: &'a S, key: String) -> Self {
        Self { store, key }
    }

    /// Add one member. Writes to the store immediately; adding an existing
    /// member is a no-op.
    pub fn add(&self, value: &str) -> Result<(), ModelError> {
        self.store.set_add(&self.key, value)?;
        Ok(())
    }

    /// Materialize the current members as a plain sequence, freshly read.
    pub fn to_vec(&self) -> Result<Vec<String>, ModelError> {
        Ok(self.store.set_members(&self.key)?)
    }
}

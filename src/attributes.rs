//! Per-instance lazy scalar attribute cache.
//!
//! A cache entry's presence means the field is known to this instance:
//! either written locally or read from the store once. `Some` is a held
//! value, `None` is known-absent. A field read once is never re-read for
//! the lifetime of the instance; that staleness is the design's trade-off,
//! with `Record::reload` as the escape hatch.

use std::collections::HashMap;

use crate::key;
use crate::schema::ModelType;
use crate::store::{Store, StoreError};

#[derive(Debug, Default)]
pub(crate) struct Attributes {
    cache: HashMap<String, Option<String>>,
}

impl Attributes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Read one field, going to the store at most once per instance.
    /// On a record with no id there is nothing to read; only locally
    /// written values are visible.
    pub(crate) fn read<S: Store>(
        &mut self,
        store: &S,
        schema: &ModelType,
        id: Option<u64>,
        field: &str,
    ) -> Result<Option<String>, StoreError> {
        if let Some(cached) = self.cache.get(field) {
            return Ok(cached.clone());
        }

        let id = match id {
            Some(id) => id,
            None => return Ok(None),
        };

        let value = store.get(&key::attribute(schema.name(), id, field))?;
        self.cache.insert(field.to_string(), value.clone());
        Ok(value)
    }

    /// Write one field into the cache only. The store is untouched until
    /// the record is persisted through `create`/`save`.
    pub(crate) fn write(&mut self, field: &str, value: String) {
        self.cache.insert(field.to_string(), Some(value));
    }

    /// Write every held value to the store, in declaration order. Fields
    /// known to be absent are skipped: absent is not the same as an empty
    /// string, and flushing must not collapse the two.
    pub(crate) fn flush<S: Store>(
        &self,
        store: &S,
        schema: &ModelType,
        id: u64,
    ) -> Result<(), StoreError> {
        for field in schema.attributes() {
            if let Some(Some(value)) = self.cache.get(field) {
                store.set(&key::attribute(schema.name(), id, field), value)?;
            }
        }
        Ok(())
    }

    /// Drop everything known, forcing re-reads.
    pub(crate) fn clear(&mut self) {
        self.cache.clear();
    }

    /// Whether the field has been materialized or written on this
    /// instance. Used by tests to observe laziness.
    #[cfg(test)]
    pub(crate) fn is_cached(&self, field: &str) -> bool {
        self.cache.contains_key(field)
    }
}

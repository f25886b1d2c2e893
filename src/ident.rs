//! Identity allocation - per-type monotone ids via the store's atomic
//! increment. The allocator holds no local state, so concurrent callers in
//! separate processes cannot be handed the same id.

use crate::key;
use crate::store::{Store, StoreError};

/// Allocate the next id for a model type. Strictly increasing, never
/// reused. A store failure surfaces as-is; an id is never fabricated.
pub(crate) fn next_id<S: Store>(store: &S, model: &str) -> Result<u64, StoreError> {
    let id = store.increment(&key::counter(model))?;
    log::trace!("allocated id {} for {}", id, model);
    Ok(id)
}

/// The highest id issued so far for a model type, 0 when none were.
/// Enumeration of all records walks `1..=last_issued`.
pub(crate) fn last_issued<S: Store>(store: &S, model: &str) -> Result<u64, StoreError> {
    let counter = key::counter(model);
    match store.get(&counter)? {
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| StoreError::NotAnInteger { key: counter }),
        None => Ok(0),
    }
}

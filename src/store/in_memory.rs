//! InMemoryStore - HashMap-backed store for testing and development.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use super::{Store, StoreError};

/// One stored value. Scalars, lists and sets share a flat namespace, as
/// they do in the kind of store this stands in for.
#[derive(Debug, Clone)]
enum Value {
    Scalar(String),
    List(Vec<String>),
    Set(BTreeSet<String>),
}

/// In-memory store backed by a HashMap. Clone-friendly via Arc: clones
/// share the same storage, so one can seed fixtures through a clone and
/// read them through the original.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    storage: Arc<RwLock<HashMap<String, Value>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Store for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;

        match storage.get(key) {
            Some(Value::Scalar(value)) => Ok(Some(value.clone())),
            Some(_) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("set"))?;

        storage.insert(key.to_string(), Value::Scalar(value.to_string()));
        Ok(())
    }

    fn increment(&self, key: &str) -> Result<u64, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("increment"))?;

        let current = match storage.get(key) {
            Some(Value::Scalar(value)) => {
                value.parse::<u64>().map_err(|_| StoreError::NotAnInteger {
                    key: key.to_string(),
                })?
            }
            Some(_) => {
                return Err(StoreError::WrongType {
                    key: key.to_string(),
                })
            }
            None => 0,
        };

        let next = current + 1;
        storage.insert(key.to_string(), Value::Scalar(next.to_string()));
        Ok(next)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("exists"))?;

        Ok(storage.contains_key(key))
    }

    fn list_append(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("list_append"))?;

        match storage
            .entry(key.to_string())
            .or_insert_with(|| Value::List(Vec::new()))
        {
            Value::List(items) => {
                items.push(value.to_string());
                Ok(())
            }
            _ => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    fn list_all(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("list_all"))?;

        match storage.get(key) {
            Some(Value::List(items)) => Ok(items.clone()),
            Some(_) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn set_add(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("set_add"))?;

        match storage
            .entry(key.to_string())
            .or_insert_with(|| Value::Set(BTreeSet::new()))
        {
            Value::Set(members) => {
                members.insert(value.to_string());
                Ok(())
            }
            _ => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("set_members"))?;

        match storage.get(key) {
            Some(Value::Set(members)) => Ok(members.iter().cloned().collect()),
            Some(_) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};

use kvrecord::{InMemoryStore, Store, StoreError};

/// Store decorator that counts scalar reads, used to observe that
/// attribute materialization is lazy.
pub struct CountingStore {
    inner: InMemoryStore,
    gets: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryStore::new(),
            gets: AtomicUsize::new(0),
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

impl Store for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set(key, value)
    }

    fn increment(&self, key: &str) -> Result<u64, StoreError> {
        self.inner.increment(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.inner.exists(key)
    }

    fn list_append(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.list_append(key, value)
    }

    fn list_all(&self, key: &str) -> Result<Vec<String>, StoreError> {
        self.inner.list_all(key)
    }

    fn set_add(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set_add(key, value)
    }

    fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        self.inner.set_members(key)
    }
}

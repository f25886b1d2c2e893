//! Records - store-backed record instances and their lifecycle.
//!
//! A [`Record`] is a disposable local view over the store: it carries an
//! optional id, a lazy scalar attribute cache, and borrows of its schema
//! and store. The store is the sole source of truth; two views of the same
//! id are independent and may diverge until re-read.
//!
//! ## Example
//!
//! ```ignore
//! use kvrecord::{InMemoryStore, ModelType, RecordsExt};
//!
//! let event = ModelType::new("Event").attribute("name");
//! let store = InMemoryStore::new();
//!
//! let mut record = store.records(&event).new_record();
//! record.write("name", "Lorem ipsum")?;
//! let id = record.create()?;
//!
//! let mut found = store.records(&event).find(id);
//! assert_eq!(found.read("name")?, Some("Lorem ipsum".to_string()));
//! ```

mod record;
mod records;

pub use record::Record;
pub use records::{Records, RecordsExt};

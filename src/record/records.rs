//! Records - typed accessor for the records of one model type.

use crate::error::ModelError;
use crate::ident;
use crate::key;
use crate::schema::ModelType;
use crate::store::Store;

use super::Record;

/// Accessor for all records of one model type against one store.
pub struct Records<'a, S> {
    store: &'a S,
    schema: &'a ModelType,
}

impl<'a, S: Store> Records<'a, S> {
    pub fn new(store: &'a S, schema: &'a ModelType) -> Self {
        Self { store, schema }
    }

    /// A New record: no id, no store interaction until `create`.
    pub fn new_record(&self) -> Record<'a, S> {
        Record::new(self.store, self.schema)
    }

    /// A Created view for the given id. Existence is not verified and no
    /// attribute is read eagerly; reads reflect whatever the store holds
    /// at access time.
    pub fn find(&self, id: u64) -> Record<'a, S> {
        Record::with_id(self.store, self.schema, id)
    }

    /// Whether the existence marker for the id is present. A view obtained
    /// from [`find`](Self::find) works either way; this is the explicit
    /// check for callers that care.
    pub fn exists(&self, id: u64) -> Result<bool, ModelError> {
        Ok(self
            .store
            .exists(&key::record(self.schema.name(), id))?)
    }

    /// One Created view per issued id, in ascending id order. Ids whose
    /// existence marker has gone missing are not filtered out; such views
    /// behave exactly like `find` on that id.
    pub fn all(&self) -> Result<Vec<Record<'a, S>>, ModelError> {
        let issued = ident::last_issued(self.store, self.schema.name())?;
        log::trace!("enumerating {} {} record(s)", issued, self.schema.name());
        Ok((1..=issued).map(|id| self.find(id)).collect())
    }
}

/// Extension trait giving any store a typed record accessor.
pub trait RecordsExt: Store + Sized {
    fn records<'a>(&'a self, schema: &'a ModelType) -> Records<'a, Self> {
        Records::new(self, schema)
    }
}

impl<S: Store> RecordsExt for S {}

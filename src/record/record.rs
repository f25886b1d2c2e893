//! Record - one record instance and its New -> Created lifecycle.

use crate::attributes::Attributes;
use crate::collection::{ListProxy, SetProxy};
use crate::error::ModelError;
use crate::ident;
use crate::key;
use crate::schema::{CollectionKind, ModelType};
use crate::store::Store;

/// One record instance.
///
/// A record with no id is New: it has never been persisted, and only
/// `create` can change that. A record with an id is a Created view; the
/// underlying data may have been changed, or removed, by anyone else
/// since the view was constructed.
pub struct Record<'a, S> {
    store: &'a S,
    schema: &'a ModelType,
    id: Option<u64>,
    attributes: Attributes,
}

impl<'a, S: Store> Record<'a, S> {
    pub(crate) fn new(store: &'a S, schema: &'a ModelType) -> Self {
        Self {
            store,
            schema,
            id: None,
            attributes: Attributes::new(),
        }
    }

    pub(crate) fn with_id(store: &'a S, schema: &'a ModelType, id: u64) -> Self {
        Self {
            store,
            schema,
            id: Some(id),
            attributes: Attributes::new(),
        }
    }

    /// The record's id, present only after `create` (or construction by
    /// id via [`Records::find`](crate::Records::find)).
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Whether the record was never persisted through this instance.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Read a scalar attribute. The first read of a field on a persisted
    /// record goes to the store; the result is cached for this instance's
    /// lifetime. A never-set field reads as `None`.
    pub fn read(&mut self, field: &str) -> Result<Option<String>, ModelError> {
        self.check_scalar(field)?;
        Ok(self
            .attributes
            .read(self.store, self.schema, self.id, field)?)
    }

    /// Write a scalar attribute into the local cache. The store is not
    /// touched until `create` or `save`.
    pub fn write(&mut self, field: &str, value: impl Into<String>) -> Result<(), ModelError> {
        self.check_scalar(field)?;
        self.attributes.write(field, value.into());
        Ok(())
    }

    /// Persist the record for the first time: allocate an id, write the
    /// existence marker, flush all held attribute values. Returns the
    /// allocated id.
    ///
    /// Fails with [`ModelError::ModelIsNew`] if the record already holds
    /// an id; the check happens before any store call. If a flush fails
    /// partway, the id and marker stay allocated; there is no rollback.
    pub fn create(&mut self) -> Result<u64, ModelError> {
        if self.id.is_some() {
            return Err(ModelError::ModelIsNew {
                model: self.schema.name().to_string(),
            });
        }

        let id = ident::next_id(self.store, self.schema.name())?;
        self.id = Some(id);
        self.store
            .set(&key::record(self.schema.name(), id), "true")?;
        self.attributes.flush(self.store, self.schema, id)?;
        log::debug!("created {} {}", self.schema.name(), id);
        Ok(id)
    }

    /// Re-write all held attribute values to the store. Idempotent: saving
    /// twice with unchanged values leaves identical store state.
    ///
    /// Fails with [`ModelError::ModelIsNew`] if the record was never
    /// created, before any store call.
    pub fn save(&self) -> Result<(), ModelError> {
        let id = self.id.ok_or_else(|| ModelError::ModelIsNew {
            model: self.schema.name().to_string(),
        })?;

        self.attributes.flush(self.store, self.schema, id)?;
        log::debug!("saved {} {}", self.schema.name(), id);
        Ok(())
    }

    /// Drop the attribute cache so the next read of each field re-fetches
    /// from the store. The escape hatch for the no-invalidation caching.
    pub fn reload(&mut self) {
        self.attributes.clear();
    }

    /// The ordered-sequence proxy for a declared list attribute. Valid for
    /// the lifetime of this instance; every mutation through it hits the
    /// store immediately.
    pub fn list(&self, field: &str) -> Result<ListProxy<'a, S>, ModelError> {
        let id = self.check_collection(field, CollectionKind::List)?;
        Ok(ListProxy::new(
            self.store,
            key::attribute(self.schema.name(), id, field),
        ))
    }

    /// The set proxy for a declared set attribute. Same eager-write
    /// contract as [`list`](Self::list).
    pub fn set(&self, field: &str) -> Result<SetProxy<'a, S>, ModelError> {
        let id = self.check_collection(field, CollectionKind::Set)?;
        Ok(SetProxy::new(
            self.store,
            key::attribute(self.schema.name(), id, field),
        ))
    }

    fn check_scalar(&self, field: &str) -> Result<(), ModelError> {
        if self.schema.has_attribute(field) {
            Ok(())
        } else {
            Err(ModelError::UnknownAttribute {
                model: self.schema.name().to_string(),
                field: field.to_string(),
            })
        }
    }

    /// Collections write through to the store, so they need both a
    /// matching declaration and an id.
    fn check_collection(&self, field: &str, kind: CollectionKind) -> Result<u64, ModelError> {
        if self.schema.collection_kind(field) != Some(kind) {
            return Err(ModelError::UnknownAttribute {
                model: self.schema.name().to_string(),
                field: field.to_string(),
            });
        }
        self.id.ok_or_else(|| ModelError::ModelIsNew {
            model: self.schema.name().to_string(),
        })
    }
}

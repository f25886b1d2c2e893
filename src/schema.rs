//! ModelType - declarative schema for one record kind.
//!
//! A model type names its scalar attributes and its collection attributes
//! (each tagged list or set) once, at startup, and is immutable afterwards.
//! Declarations can be built in code or resolved from a JSON config
//! document:
//!
//! ```ignore
//! let post = ModelType::new("Post")
//!     .attribute("body")
//!     .set("attendees")
//!     .list("comments");
//!
//! let event: ModelType = ModelType::from_json(
//!     r#"{"name":"Event","attributes":["name"]}"#,
//! )?;
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The name every model type reserves for its identity counter key.
const ID_FIELD: &str = "id";

/// Collection attribute kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// Ordered sequence, insertion order preserved.
    List,
    /// Deduplicated membership, unordered.
    Set,
}

/// Declared schema for one record kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelType {
    name: String,
    attributes: Vec<String>,
    #[serde(default)]
    collections: BTreeMap<String, CollectionKind>,
}

impl ModelType {
    /// Start a declaration for the named record kind. The name becomes the
    /// leading segment of every store key for this type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            collections: BTreeMap::new(),
        }
    }

    /// Declare a scalar attribute. Declaration order is preserved and used
    /// as the flush order on `create`/`save`.
    ///
    /// # Panics
    ///
    /// Panics if the field is named `id` or already declared as a
    /// collection. Declarations run once at startup; a colliding name is a
    /// programmer error, not a runtime condition.
    pub fn attribute(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.check_reserved(&field);
        assert!(
            !self.collections.contains_key(&field),
            "{}: field {} declared as both scalar and collection",
            self.name,
            field
        );
        if !self.attributes.contains(&field) {
            self.attributes.push(field);
        }
        self
    }

    /// Declare an ordered-sequence collection attribute.
    ///
    /// # Panics
    ///
    /// Panics if the field is named `id` or already declared as a scalar.
    pub fn list(self, field: impl Into<String>) -> Self {
        self.collection(field.into(), CollectionKind::List)
    }

    /// Declare a set collection attribute.
    ///
    /// # Panics
    ///
    /// Panics if the field is named `id` or already declared as a scalar.
    pub fn set(self, field: impl Into<String>) -> Self {
        self.collection(field.into(), CollectionKind::Set)
    }

    /// Resolve a declaration from a JSON config document.
    ///
    /// # Panics
    ///
    /// Panics under the same rules as the builder methods: a field named
    /// `id`, or one name declared as both scalar and collection.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let schema: Self = serde_json::from_str(json)?;
        schema.validate_declaration();
        Ok(schema)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scalar attribute names, in declaration order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn has_attribute(&self, field: &str) -> bool {
        self.attributes.iter().any(|a| a == field)
    }

    /// The declared kind of a collection field, `None` for scalars and
    /// undeclared names.
    pub fn collection_kind(&self, field: &str) -> Option<CollectionKind> {
        self.collections.get(field).copied()
    }

    fn collection(mut self, field: String, kind: CollectionKind) -> Self {
        self.check_reserved(&field);
        assert!(
            !self.has_attribute(&field),
            "{}: field {} declared as both scalar and collection",
            self.name,
            field
        );
        self.collections.insert(field, kind);
        self
    }

    fn check_reserved(&self, field: &str) {
        assert!(
            field != ID_FIELD,
            "{}: field name `id` is reserved for the identity counter",
            self.name
        );
    }

    fn validate_declaration(&self) {
        assert!(
            !self.has_attribute(ID_FIELD) && !self.collections.contains_key(ID_FIELD),
            "{}: field name `id` is reserved for the identity counter",
            self.name
        );
        for field in &self.attributes {
            assert!(
                !self.collections.contains_key(field),
                "{}: field {} declared as both scalar and collection",
                self.name,
                field
            );
        }
    }
}

//! Key codec - the fixed mapping from model coordinates to store keys.
//!
//! The layout is part of the deployed data format and must not change
//! within one deployment:
//!
//! - existence marker: `"<Model>:<id>"`
//! - scalar or collection attribute: `"<Model>:<id>:<field>"`
//! - identity counter: `"<Model>:id"`
//!
//! Field names never collide with the counter because `id` is a reserved
//! field name, rejected at declaration time by [`ModelType`].
//!
//! [`ModelType`]: crate::ModelType

/// Existence marker key for one record.
pub fn record(model: &str, id: u64) -> String {
    format!("{}:{}", model, id)
}

/// Key for one scalar or collection attribute of one record.
pub fn attribute(model: &str, id: u64, field: &str) -> String {
    format!("{}:{}:{}", model, id, field)
}

/// Identity counter key for a model type.
pub fn counter(model: &str) -> String {
    format!("{}:id", model)
}

use std::fmt;

use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// `save` was called on a record that was never created, or `create`
    /// was called on a record that already holds an id. Detected before
    /// any store mutation for the failing call.
    ModelIsNew { model: String },
    /// The field is not declared (as that kind) on the model type.
    UnknownAttribute { model: String, field: String },
    /// A store primitive failed. Carried as-is, never retried.
    Store(StoreError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::ModelIsNew { model } => write!(
                f,
                "illegal {} lifecycle transition: create is for new records, save for created ones",
                model
            ),
            ModelError::UnknownAttribute { model, field } => {
                write!(f, "attribute {} is not declared on {}", field, model)
            }
            ModelError::Store(err) => write!(f, "store error: {}", err),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<StoreError> for ModelError {
    fn from(err: StoreError) -> Self {
        ModelError::Store(err)
    }
}

mod attributes;
mod collection;
mod error;
mod ident;
pub mod key;
mod record;
mod schema;
mod store;

pub use collection::{ListProxy, SetProxy};
pub use error::ModelError;
pub use record::{Record, Records, RecordsExt};
pub use schema::{CollectionKind, ModelType};
pub use store::{InMemoryStore, Store, StoreError};

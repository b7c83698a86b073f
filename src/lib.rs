pub mod api;
pub mod config;
pub mod storage;
pub mod structures;

pub use api::loader::{LoadedProperty, PropertySource};
pub use api::{PropertyApi, PropertyError};
pub use config::Config;
pub use storage::{FileStore, MemoryStore, SessionStore, StorageError};
pub use structures::form::PropertyForm;
pub use structures::property::Property;

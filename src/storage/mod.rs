use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

mod file;
mod memory;

/// Key holding the last property created in this session.
pub const NEWLY_CREATED_PROPERTY: &str = "newlyCreatedProperty";
/// Older key some pages still write; only ever read and cleared.
pub const LAST_CREATED_PROPERTY: &str = "lastCreatedProperty";

/// Tab scoped key-value storage. Values are plain text, writes are last-writer-wins.
pub trait SessionStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not access session file : {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not deserialise/serialize session data : {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Session file does not contain a JSON object")]
    NotAnObject,
    #[error("Session value under {0} is not a string")]
    NotAString(String),
    #[error("Session storage lock was poisoned")]
    Poisoned,
}

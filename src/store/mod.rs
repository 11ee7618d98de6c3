//! String key-value storage
//!
//! Saved edits live in a plain get/set/remove store so the engine can be
//! hosted anywhere such a store exists:
//! - `MemoryStore` for tests and embedding
//! - `FileStore` for the CLI, one JSON file per store

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when reading or writing a store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid store path: {0}")]
    InvalidPath(String),
}

/// A string-keyed store with string values
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore> KeyValueStore for std::rc::Rc<std::cell::RefCell<S>> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.borrow_mut().remove(key)
    }
}

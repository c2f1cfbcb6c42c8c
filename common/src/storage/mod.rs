mod error;
mod file_store;
mod key_value_store;

pub use error::StorageError;
pub use file_store::FileStore;
pub use key_value_store::{KeyValueStore, MemoryStore};

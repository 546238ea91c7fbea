pub mod document_storage;

pub use document_storage::{DocumentStorage, StorageError};

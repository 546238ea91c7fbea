pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileDocumentStorage;
pub use memory_storage::MemoryDocumentStorage;

pub mod entry;
pub mod repository;
pub mod service;
pub mod sqlite;

pub use entry::{EntryType, MemoryEntry};
pub use repository::{InMemoryRepository, MemoryRepository};
pub use service::MemoryService;
pub use sqlite::SqliteRepository;

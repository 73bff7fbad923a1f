//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod persistence;
pub mod repository;

pub use config::Config;
pub use persistence::{FileSlot, MemorySlot, PersistenceAdapter};
pub use repository::{FileSystemRepository, JournalRepository};

pub mod cache;
pub mod database;
pub mod fixtures;
pub mod impls;
pub mod model;
pub mod storage;
pub mod store;

pub use cache::CacheService;
pub use database::{Database, MIGRATOR};
pub use model::glossary::{EntryView, GlossaryEntry, NewGlossaryEntry};
pub use storage::{EntryStorage, StorageBackend, memory::MemoryStorage};
pub use store::{DefinitionStore, GlossaryError};

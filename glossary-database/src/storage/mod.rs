pub mod memory;

use std::future::Future;

use crate::database::Database;
use crate::impls::glossary;
use crate::model::glossary::{GlossaryEntry, NewGlossaryEntry};
use memory::MemoryStorage;

/// Append-only access to the glossary table.
///
/// Terms passed in are already normalized. Implementations must keep
/// `(term, definition)` unique and return a term's entries ordered by
/// `(created_at, id)`.
pub trait EntryStorage: Send + Sync {
    fn entries_for_term(
        &self,
        term: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<GlossaryEntry>>> + Send;

    /// `Ok(None)` means the row was a duplicate and nothing was written.
    fn append_entry(
        &self,
        entry: NewGlossaryEntry<'_>,
    ) -> impl Future<Output = anyhow::Result<Option<GlossaryEntry>>> + Send;

    fn distinct_terms(&self) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send;

    fn terms_containing(
        &self,
        needle: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send;

    fn terms_with_definition_containing(
        &self,
        needle: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send;
}

impl EntryStorage for Database {
    async fn entries_for_term(&self, term: &str) -> anyhow::Result<Vec<GlossaryEntry>> {
        glossary::list_entries_for_term(self, term).await
    }

    async fn append_entry(
        &self,
        entry: NewGlossaryEntry<'_>,
    ) -> anyhow::Result<Option<GlossaryEntry>> {
        glossary::insert_entry(self, entry).await
    }

    async fn distinct_terms(&self) -> anyhow::Result<Vec<String>> {
        glossary::list_distinct_terms(self).await
    }

    async fn terms_containing(&self, needle: &str) -> anyhow::Result<Vec<String>> {
        glossary::search_terms(self, needle).await
    }

    async fn terms_with_definition_containing(&self, needle: &str) -> anyhow::Result<Vec<String>> {
        glossary::search_definitions(self, needle).await
    }
}

/// Storage selected at startup: PostgreSQL when configured, otherwise in-process.
#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(Database),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

impl EntryStorage for StorageBackend {
    async fn entries_for_term(&self, term: &str) -> anyhow::Result<Vec<GlossaryEntry>> {
        match self {
            Self::Postgres(db) => db.entries_for_term(term).await,
            Self::Memory(store) => store.entries_for_term(term).await,
        }
    }

    async fn append_entry(
        &self,
        entry: NewGlossaryEntry<'_>,
    ) -> anyhow::Result<Option<GlossaryEntry>> {
        match self {
            Self::Postgres(db) => db.append_entry(entry).await,
            Self::Memory(store) => store.append_entry(entry).await,
        }
    }

    async fn distinct_terms(&self) -> anyhow::Result<Vec<String>> {
        match self {
            Self::Postgres(db) => db.distinct_terms().await,
            Self::Memory(store) => store.distinct_terms().await,
        }
    }

    async fn terms_containing(&self, needle: &str) -> anyhow::Result<Vec<String>> {
        match self {
            Self::Postgres(db) => db.terms_containing(needle).await,
            Self::Memory(store) => store.terms_containing(needle).await,
        }
    }

    async fn terms_with_definition_containing(&self, needle: &str) -> anyhow::Result<Vec<String>> {
        match self {
            Self::Postgres(db) => db.terms_with_definition_containing(needle).await,
            Self::Memory(store) => store.terms_with_definition_containing(needle).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;

    use super::{StorageBackend, memory::MemoryStorage};
    use crate::{CacheService, Database};

    #[tokio::test]
    async fn backends_report_their_name() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://glossary@localhost/glossary")
            .unwrap();
        let postgres =
            StorageBackend::Postgres(Database::with_cache(pool, CacheService::disabled("t")));

        assert_eq!(postgres.name(), "postgres");
        assert_eq!(StorageBackend::Memory(MemoryStorage::new()).name(), "memory");
    }
}

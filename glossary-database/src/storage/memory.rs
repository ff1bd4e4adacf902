use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::glossary::{GlossaryEntry, NewGlossaryEntry};
use crate::storage::EntryStorage;

/// Process-local storage used when no database is configured, and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    rows: Arc<RwLock<Vec<GlossaryEntry>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl EntryStorage for MemoryStorage {
    async fn entries_for_term(&self, term: &str) -> anyhow::Result<Vec<GlossaryEntry>> {
        let rows = self.rows.read().await;
        let mut entries: Vec<GlossaryEntry> =
            rows.iter().filter(|row| row.term == term).cloned().collect();
        entries.sort_by_key(|entry| (entry.created_at, entry.id));
        Ok(entries)
    }

    async fn append_entry(
        &self,
        entry: NewGlossaryEntry<'_>,
    ) -> anyhow::Result<Option<GlossaryEntry>> {
        let mut rows = self.rows.write().await;

        if rows
            .iter()
            .any(|row| row.term == entry.term && row.definition == entry.definition)
        {
            return Ok(None);
        }

        let stored = GlossaryEntry {
            id: rows.len() as u64 + 1,
            term: entry.term.to_owned(),
            definition: entry.definition.to_owned(),
            author: entry.author.to_owned(),
            channel: entry.channel.map(str::to_owned),
            created_at: entry.created_at,
        };
        rows.push(stored.clone());

        Ok(Some(stored))
    }

    async fn distinct_terms(&self) -> anyhow::Result<Vec<String>> {
        let rows = self.rows.read().await;
        let terms: BTreeSet<&str> = rows.iter().map(|row| row.term.as_str()).collect();
        Ok(terms.into_iter().map(str::to_owned).collect())
    }

    async fn terms_containing(&self, needle: &str) -> anyhow::Result<Vec<String>> {
        let needle = needle.to_lowercase();
        let rows = self.rows.read().await;
        let terms: BTreeSet<&str> = rows
            .iter()
            .filter(|row| row.term.contains(&needle))
            .map(|row| row.term.as_str())
            .collect();
        Ok(terms.into_iter().map(str::to_owned).collect())
    }

    async fn terms_with_definition_containing(&self, needle: &str) -> anyhow::Result<Vec<String>> {
        let needle = needle.to_lowercase();
        let rows = self.rows.read().await;
        let terms: BTreeSet<&str> = rows
            .iter()
            .filter(|row| row.definition.to_lowercase().contains(&needle))
            .map(|row| row.term.as_str())
            .collect();
        Ok(terms.into_iter().map(str::to_owned).collect())
    }
}

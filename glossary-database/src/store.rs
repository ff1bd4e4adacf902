use std::collections::{BTreeMap, BTreeSet};

use glossary_utils::parse::normalize_term;
use glossary_utils::time::now_unix_secs;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::model::glossary::{EntryView, GlossaryEntry, NewGlossaryEntry};
use crate::storage::EntryStorage;

/// Upper bound on near-miss suggestions offered for an undefined term.
pub const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("`{term}` already has that definition")]
    Duplicate { term: String },
    #[error("`{term}` is undefined")]
    NotFound { term: String },
    #[error("`{index}` is not a valid entry number for `{term}`")]
    OutOfRange { term: String, index: i64 },
    #[error("the glossary has no entries")]
    EmptyStore,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Append-only glossary over an injected storage handle.
#[derive(Clone, Debug)]
pub struct DefinitionStore<S> {
    storage: S,
}

impl<S: EntryStorage> DefinitionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a definition unless the term already has the exact same text.
    pub async fn insert(
        &self,
        term: &str,
        definition: &str,
        author: &str,
        channel: Option<&str>,
    ) -> Result<GlossaryEntry, GlossaryError> {
        let term = normalize_term(term);
        let definition = definition.trim();

        let existing = self.storage.entries_for_term(&term).await?;
        if existing.iter().any(|entry| entry.definition == definition) {
            debug!(term = %term, "skipping duplicate definition");
            return Err(GlossaryError::Duplicate { term });
        }

        let inserted = self
            .storage
            .append_entry(NewGlossaryEntry {
                term: &term,
                definition,
                author,
                channel,
                created_at: now_unix_secs(),
            })
            .await?;

        match inserted {
            Some(entry) => {
                info!(
                    term = %entry.term,
                    author = %entry.author,
                    id = entry.id,
                    "glossary entry added"
                );
                Ok(entry)
            }
            None => Err(GlossaryError::Duplicate { term }),
        }
    }

    /// The most recent definition of a term.
    pub async fn get_latest(&self, term: &str) -> Result<EntryView, GlossaryError> {
        let term = normalize_term(term);
        let entries = self.storage.entries_for_term(&term).await?;
        let total = entries.len();

        match entries.into_iter().last() {
            Some(entry) => Ok(EntryView {
                entry,
                position: total,
                total,
            }),
            None => Err(GlossaryError::NotFound { term }),
        }
    }

    /// The `index`th definition of a term, counting from 1 in insertion order.
    pub async fn get_by_index(&self, term: &str, index: i64) -> Result<EntryView, GlossaryError> {
        let term = normalize_term(term);
        if index < 1 {
            return Err(GlossaryError::OutOfRange { term, index });
        }

        let mut entries = self.storage.entries_for_term(&term).await?;
        if entries.is_empty() {
            return Err(GlossaryError::NotFound { term });
        }

        let total = entries.len();
        let position = match usize::try_from(index) {
            Ok(position) if position <= total => position,
            _ => return Err(GlossaryError::OutOfRange { term, index }),
        };

        let entry = entries.swap_remove(position - 1);

        Ok(EntryView {
            entry,
            position,
            total,
        })
    }

    /// Latest definition of a term chosen uniformly among all defined terms.
    pub async fn get_random_term(&self) -> Result<EntryView, GlossaryError> {
        let terms = self.storage.distinct_terms().await?;
        let Some(term) = pick_random(&terms) else {
            return Err(GlossaryError::EmptyStore);
        };

        match self.get_latest(&term).await {
            Err(GlossaryError::NotFound { .. }) => {
                warn!(term = %term, "term list referenced a term with no entries");
                Err(GlossaryError::EmptyStore)
            }
            other => other,
        }
    }

    /// Terms matching `query` by name or by any of their definitions.
    pub async fn search(&self, query: &str) -> Result<Vec<String>, GlossaryError> {
        let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut matches: BTreeSet<String> =
            self.storage.terms_containing(&query).await?.into_iter().collect();
        matches.extend(self.storage.terms_with_definition_containing(&query).await?);

        Ok(matches.into_iter().collect())
    }

    /// Defined terms that share a word with `term`, for "did you mean" replies.
    pub async fn suggestions(&self, term: &str) -> Result<Vec<String>, GlossaryError> {
        let parts: BTreeSet<String> = term
            .split([' ', '-', '_'])
            .map(|part| part.trim().to_lowercase())
            .filter(|part| !part.is_empty())
            .collect();

        let mut found = BTreeSet::new();
        for part in &parts {
            found.extend(self.storage.terms_containing(part).await?);
        }

        Ok(found.into_iter().take(MAX_SUGGESTIONS).collect())
    }

    /// Seed term/definition pairs, skipping any that are already present.
    /// Returns how many entries were written.
    pub async fn load_fixtures(
        &self,
        fixtures: &BTreeMap<String, String>,
        author: &str,
    ) -> Result<usize, GlossaryError> {
        let mut inserted = 0;
        for (term, definition) in fixtures {
            if normalize_term(term).is_empty() || definition.trim().is_empty() {
                warn!(term = %term, "skipping blank fixture");
                continue;
            }

            match self.insert(term, definition, author, None).await {
                Ok(_) => inserted += 1,
                Err(GlossaryError::Duplicate { .. }) => {}
                Err(err) => return Err(err),
            }
        }

        Ok(inserted)
    }
}

fn pick_random(terms: &[String]) -> Option<String> {
    terms.choose(&mut rand::thread_rng()).cloned()
}

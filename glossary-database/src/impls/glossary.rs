use anyhow::Context as _;

use crate::cache::{GLOSSARY_TERMS_CACHE_TTL, glossary_terms_key, invalidate_glossary_terms};
use crate::database::Database;
use crate::model::glossary::{GlossaryEntry, NewGlossaryEntry};

#[derive(sqlx::FromRow)]
struct GlossaryEntryRow {
    id: i64,
    term: String,
    definition: String,
    author: String,
    channel: Option<String>,
    created_at: i64,
}

/// All definitions of a normalized term, oldest first.
pub async fn list_entries_for_term(
    db: &Database,
    term: &str,
) -> anyhow::Result<Vec<GlossaryEntry>> {
    let rows: Vec<GlossaryEntryRow> = sqlx::query_as(
        "SELECT id, term, definition, author, channel, created_at
         FROM glossary_entries
         WHERE term = $1
         ORDER BY created_at ASC, id ASC",
    )
    .bind(term)
    .fetch_all(db.pool())
    .await?;

    rows.into_iter().map(to_glossary_entry).collect()
}

/// Append a definition. Returns `None` when the (term, definition) pair already exists.
pub async fn insert_entry(
    db: &Database,
    entry: NewGlossaryEntry<'_>,
) -> anyhow::Result<Option<GlossaryEntry>> {
    let created_at = i64::try_from(entry.created_at).context("created_at out of i64 range")?;

    let row: Option<GlossaryEntryRow> = sqlx::query_as(
        "INSERT INTO glossary_entries (term, definition, author, channel, created_at)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (term, (md5(definition))) DO NOTHING
         RETURNING id, term, definition, author, channel, created_at",
    )
    .bind(entry.term)
    .bind(entry.definition)
    .bind(entry.author)
    .bind(entry.channel)
    .bind(created_at)
    .fetch_optional(db.pool())
    .await?;

    if row.is_some() {
        invalidate_glossary_terms(db.cache()).await;
    }

    row.map(to_glossary_entry).transpose()
}

/// Every term with at least one definition, sorted.
pub async fn list_distinct_terms(db: &Database) -> anyhow::Result<Vec<String>> {
    let cache_key = glossary_terms_key(db.cache());
    db.cache()
        .get_or_load_json(&cache_key, GLOSSARY_TERMS_CACHE_TTL, || async {
            let terms: Vec<String> = sqlx::query_scalar(
                "SELECT DISTINCT term FROM glossary_entries ORDER BY term ASC",
            )
            .fetch_all(db.pool())
            .await?;

            Ok(terms)
        })
        .await
}

/// Terms whose key contains `needle` (case-insensitive).
pub async fn search_terms(db: &Database, needle: &str) -> anyhow::Result<Vec<String>> {
    let terms: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT term
         FROM glossary_entries
         WHERE strpos(term, lower($1)) > 0
         ORDER BY term ASC",
    )
    .bind(needle)
    .fetch_all(db.pool())
    .await?;

    Ok(terms)
}

/// Terms with any definition containing `needle` (case-insensitive).
pub async fn search_definitions(db: &Database, needle: &str) -> anyhow::Result<Vec<String>> {
    let terms: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT term
         FROM glossary_entries
         WHERE strpos(lower(definition), lower($1)) > 0
         ORDER BY term ASC",
    )
    .bind(needle)
    .fetch_all(db.pool())
    .await?;

    Ok(terms)
}

fn to_glossary_entry(row: GlossaryEntryRow) -> anyhow::Result<GlossaryEntry> {
    Ok(GlossaryEntry {
        id: u64::try_from(row.id).context("id row out of u64 range")?,
        term: row.term,
        definition: row.definition,
        author: row.author,
        channel: row.channel,
        created_at: u64::try_from(row.created_at).context("created_at row out of u64 range")?,
    })
}

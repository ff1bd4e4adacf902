use serde::{Deserialize, Serialize};

/// One immutable definition of a term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub id: u64,
    /// Normalized lookup key.
    pub term: String,
    pub definition: String,
    pub author: String,
    pub channel: Option<String>,
    pub created_at: u64,
}

/// A row about to be appended. `id` is assigned by the storage.
#[derive(Clone, Copy, Debug)]
pub struct NewGlossaryEntry<'a> {
    pub term: &'a str,
    pub definition: &'a str,
    pub author: &'a str,
    pub channel: Option<&'a str>,
    pub created_at: u64,
}

/// An entry together with its place in the term's history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryView {
    pub entry: GlossaryEntry,
    /// 1-based position in insertion order.
    pub position: usize,
    pub total: usize,
}

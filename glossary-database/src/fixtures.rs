use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;
use tracing::info;

use crate::storage::EntryStorage;
use crate::store::DefinitionStore;

/// Author recorded for entries seeded from a fixtures file.
pub const FIXTURE_AUTHOR: &str = "the defaults";

/// Parse a fixtures document: a JSON object mapping term to definition.
pub fn parse_fixtures(raw: &str) -> anyhow::Result<BTreeMap<String, String>> {
    serde_json::from_str(raw).context("fixtures must be a JSON object of term -> definition")
}

/// Read `path` and seed its entries into `store`. Returns the number written.
pub async fn load_fixtures_file<S: EntryStorage>(
    store: &DefinitionStore<S>,
    path: &Path,
) -> anyhow::Result<usize> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read fixtures from `{}`", path.display()))?;
    let fixtures = parse_fixtures(&raw)?;

    let inserted = store.load_fixtures(&fixtures, FIXTURE_AUTHOR).await?;
    info!(
        path = %path.display(),
        total = fixtures.len(),
        inserted,
        "glossary fixtures loaded"
    );

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::parse_fixtures;

    #[test]
    fn parses_object_fixtures() {
        let fixtures =
            parse_fixtures(r#"{"salmon": "a type of things", "castle": "tea"}"#).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures["salmon"], "a type of things");
    }

    #[test]
    fn rejects_non_object_fixtures() {
        assert!(parse_fixtures(r#"["salmon"]"#).is_err());
        assert!(parse_fixtures("not json").is_err());
    }
}

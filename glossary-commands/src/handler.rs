use std::future::Future;

use glossary_core::Error;
use glossary_database::{DefinitionStore, EntryStorage, GlossaryError};
use glossary_utils::parse::GlossaryCommand;
use glossary_utils::time::now_unix_secs;
use tracing::debug;

use crate::replies::{
    defined_message, docs_message, duplicate_message, empty_glossary_message, entry_message,
    out_of_range_message, search_results_message, undefined_message,
};

/// Who issued a command and where.
#[derive(Clone, Copy, Debug)]
pub struct Invocation<'a> {
    pub author: &'a str,
    pub channel: Option<&'a str>,
}

/// The fixed surface a host calls into: one parsed command in, one reply out.
///
/// User-facing conditions (duplicates, unknown terms, bad indexes) come back as
/// replies. Only storage failures are returned as errors.
pub trait CommandHandler {
    fn handle(
        &self,
        command: GlossaryCommand,
        invocation: Invocation<'_>,
    ) -> impl Future<Output = Result<String, Error>> + Send;
}

/// A per-command view over the shared store held in the host's `Data`.
pub struct GlossaryHandler<'a, S> {
    store: &'a DefinitionStore<S>,
}

impl<S> Clone for GlossaryHandler<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for GlossaryHandler<'_, S> {}

impl<'a, S: EntryStorage> GlossaryHandler<'a, S> {
    pub fn new(store: &'a DefinitionStore<S>) -> Self {
        Self { store }
    }

    async fn define(
        &self,
        term: &str,
        definition: &str,
        invocation: Invocation<'_>,
    ) -> Result<String, Error> {
        match self
            .store
            .insert(term, definition, invocation.author, invocation.channel)
            .await
        {
            Ok(entry) => Ok(defined_message(&entry.term, &entry.definition)),
            Err(GlossaryError::Duplicate { term }) => Ok(duplicate_message(&term)),
            Err(err) => Err(storage_error(err)),
        }
    }

    async fn lookup(&self, term: &str, index: Option<i64>) -> Result<String, Error> {
        let result = match index {
            Some(index) => self.store.get_by_index(term, index).await,
            None => self.store.get_latest(term).await,
        };

        match result {
            Ok(view) => Ok(entry_message(&view, now_unix_secs())),
            Err(GlossaryError::NotFound { .. }) => {
                let suggestions = self.store.suggestions(term).await.map_err(storage_error)?;
                Ok(undefined_message(term.trim(), &suggestions))
            }
            Err(GlossaryError::OutOfRange { index, .. }) => {
                Ok(out_of_range_message(index, term.trim()))
            }
            Err(err) => Err(storage_error(err)),
        }
    }

    async fn random(&self) -> Result<String, Error> {
        match self.store.get_random_term().await {
            Ok(view) => Ok(entry_message(&view, now_unix_secs())),
            Err(GlossaryError::EmptyStore) => Ok(empty_glossary_message()),
            Err(err) => Err(storage_error(err)),
        }
    }

    async fn search(&self, query: &str) -> Result<String, Error> {
        let matches = self.store.search(query).await.map_err(storage_error)?;
        Ok(search_results_message(&matches))
    }
}

impl<S: EntryStorage> CommandHandler for GlossaryHandler<'_, S> {
    async fn handle(
        &self,
        command: GlossaryCommand,
        invocation: Invocation<'_>,
    ) -> Result<String, Error> {
        debug!(?command, author = invocation.author, "handling glossary command");

        match command {
            GlossaryCommand::Define { term, definition } => {
                self.define(&term, &definition, invocation).await
            }
            GlossaryCommand::Lookup { term, index } => self.lookup(&term, index).await,
            GlossaryCommand::Random => self.random().await,
            GlossaryCommand::Search { query } => self.search(&query).await,
            GlossaryCommand::Help => Ok(docs_message()),
        }
    }
}

fn storage_error(err: GlossaryError) -> Error {
    match err {
        GlossaryError::Storage(inner) => inner,
        other => anyhow::Error::new(other),
    }
}

#[cfg(test)]
mod tests {
    use glossary_database::{DefinitionStore, MemoryStorage};
    use glossary_utils::parse::{GlossaryCommand, parse_glossary_command};

    use super::{CommandHandler, GlossaryHandler, Invocation};
    use crate::replies::{docs_message, empty_glossary_message};

    const ALICE: Invocation<'static> = Invocation {
        author: "alice",
        channel: None,
    };
    const BOB: Invocation<'static> = Invocation {
        author: "bob",
        channel: Some("#kitchen"),
    };

    async fn run(
        handler: &GlossaryHandler<'_, MemoryStorage>,
        raw: &str,
        invocation: Invocation<'_>,
    ) -> String {
        let command = parse_glossary_command(raw).unwrap();
        handler.handle(command, invocation).await.unwrap()
    }

    #[tokio::test]
    async fn define_then_lookup() {
        let store = DefinitionStore::new(MemoryStorage::new());
        let handler = GlossaryHandler::new(&store);

        assert_eq!(
            run(&handler, "define Carrot: An orange rod", ALICE).await,
            "Okay! \"carrot\" is now \"An orange rod\""
        );
        assert_eq!(
            run(&handler, "carrot", ALICE).await,
            "carrot (1/1): An orange rod [defined by alice just now]"
        );

        run(&handler, "define carrot: An orange vegetable", BOB).await;
        assert_eq!(
            run(&handler, "carrot", ALICE).await,
            "carrot (2/2): An orange vegetable [defined by bob just now in #kitchen]"
        );
        assert_eq!(
            run(&handler, "CARROT 1", ALICE).await,
            "carrot (1/2): An orange rod [defined by alice just now]"
        );
    }

    #[tokio::test]
    async fn duplicates_and_ranges_are_replies() {
        let store = DefinitionStore::new(MemoryStorage::new());
        let handler = GlossaryHandler::new(&store);

        run(&handler, "define fish: dinner", ALICE).await;
        assert_eq!(
            run(&handler, "define fish: dinner", BOB).await,
            "That's already a definition of \"fish\"."
        );
        assert_eq!(
            run(&handler, "fish 0", ALICE).await,
            "\"0\" is not a valid glossary entry number for \"fish\"."
        );
        assert_eq!(
            run(&handler, "fish 2", ALICE).await,
            "\"2\" is not a valid glossary entry number for \"fish\"."
        );
        assert_eq!(
            run(&handler, "fish 99999999999999999999", ALICE).await,
            "\"9223372036854775807\" is not a valid glossary entry number for \"fish\"."
        );
    }

    #[tokio::test]
    async fn cloned_handlers_share_the_store() {
        let store = DefinitionStore::new(MemoryStorage::new());
        let handler = GlossaryHandler::new(&store);
        let copy = handler.clone();

        run(&handler, "define salmon: a type of things", ALICE).await;
        assert_eq!(
            run(&copy, "salmon", BOB).await,
            "salmon (1/1): a type of things [defined by alice just now]"
        );
    }

    #[tokio::test]
    async fn undefined_terms_get_suggestions() {
        let store = DefinitionStore::new(MemoryStorage::new());
        let handler = GlossaryHandler::new(&store);

        assert_eq!(run(&handler, "run", ALICE).await, "\"run\" is undefined.");

        run(&handler, "define running: moving fast", ALICE).await;
        assert_eq!(
            run(&handler, "run", ALICE).await,
            "\"run\" is undefined. May I interest you in running?"
        );
    }

    #[tokio::test]
    async fn random_and_help() {
        let store = DefinitionStore::new(MemoryStorage::new());
        let handler = GlossaryHandler::new(&store);

        assert_eq!(run(&handler, "", ALICE).await, empty_glossary_message());
        assert_eq!(run(&handler, "help", ALICE).await, docs_message());

        run(&handler, "define castle: where salmon have tea", ALICE).await;
        assert_eq!(
            run(&handler, "", ALICE).await,
            "castle (1/1): where salmon have tea [defined by alice just now]"
        );
    }

    #[tokio::test]
    async fn search_reports_matches() {
        let store = DefinitionStore::new(MemoryStorage::new());
        let handler = GlossaryHandler::new(&store);

        run(&handler, "define salmon: a type of things", ALICE).await;
        run(&handler, "define castle: where salmon have tea", ALICE).await;

        let found = handler
            .handle(
                GlossaryCommand::Search {
                    query: "salmon".to_owned(),
                },
                ALICE,
            )
            .await
            .unwrap();
        assert_eq!(
            found,
            "Found glossary entries: castle and salmon. To get a definition: !whatis <entry>"
        );
    }
}

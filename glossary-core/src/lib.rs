use glossary_database::{DefinitionStore, StorageBackend};

pub type Error = anyhow::Error;

/// The glossary as seen by command handlers.
pub type Glossary = DefinitionStore<StorageBackend>;

#[derive(Clone, Debug)]
pub struct Data {
    pub glossary: Glossary,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;

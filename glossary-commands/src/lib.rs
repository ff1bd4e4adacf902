#![recursion_limit = "256"]

pub mod glossary;
pub mod handler;
pub mod replies;
pub mod utility;

use glossary_core::{Data, Error};

pub use handler::{CommandHandler, GlossaryHandler, Invocation};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    glossary::whatis::META,
    glossary::define::META,
    glossary::search::META,
    utility::help::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        glossary::whatis::whatis(),
        glossary::define::define(),
        glossary::search::search(),
        utility::help::help(),
    ]
}

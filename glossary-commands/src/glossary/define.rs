use glossary_core::{Context, Error};
use glossary_utils::parse::parse_definition;

use crate::CommandMeta;
use crate::glossary::respond;

pub const META: CommandMeta = CommandMeta {
    name: "define",
    desc: "Add a definition for a glossary entry.",
    category: "glossary",
    usage: "!define <entry>: <definition>",
};

#[poise::command(prefix_command, slash_command, category = "Glossary")]
pub async fn define(
    ctx: Context<'_>,
    #[description = "`<entry>: <definition>`"]
    #[rest]
    text: Option<String>,
) -> Result<(), Error> {
    let raw = text.unwrap_or_default();
    respond(ctx, parse_definition(&raw)).await
}

use glossary_core::{Context, Error};
use glossary_utils::parse::parse_glossary_command;

use crate::CommandMeta;
use crate::glossary::respond;

pub const META: CommandMeta = CommandMeta {
    name: "whatis",
    desc: "Look up, define, or randomly pick a glossary entry.",
    category: "glossary",
    usage: "!whatis [<entry> [<num>] | define <entry>: <definition>]",
};

#[poise::command(prefix_command, slash_command, aliases("gl"), category = "Glossary")]
pub async fn whatis(
    ctx: Context<'_>,
    #[description = "Entry, optional entry number, or `define <entry>: <definition>`"]
    #[rest]
    query: Option<String>,
) -> Result<(), Error> {
    let raw = query.unwrap_or_default();
    respond(ctx, parse_glossary_command(&raw)).await
}

use glossary_core::{Context, Error};
use glossary_utils::parse::parse_search;

use crate::CommandMeta;
use crate::glossary::respond;

pub const META: CommandMeta = CommandMeta {
    name: "search",
    desc: "Search glossary entries and their definitions.",
    category: "glossary",
    usage: "!search <search terms>",
};

#[poise::command(prefix_command, slash_command, category = "Glossary")]
pub async fn search(
    ctx: Context<'_>,
    #[description = "Text to look for"]
    #[rest]
    query: Option<String>,
) -> Result<(), Error> {
    let raw = query.unwrap_or_default();
    respond(ctx, parse_search(&raw)).await
}

pub mod define;
pub mod search;
pub mod whatis;

use glossary_core::{Context, Error};
use glossary_utils::parse::{GlossaryCommand, ParseError};
use tracing::debug;

use crate::handler::{CommandHandler, GlossaryHandler, Invocation};
use crate::replies::parse_error_message;

/// Run a parsed command against the shared glossary and send the reply.
pub(crate) async fn respond(
    ctx: Context<'_>,
    parsed: Result<GlossaryCommand, ParseError>,
) -> Result<(), Error> {
    let reply = match parsed {
        Ok(command) => {
            let author = ctx.author().name.clone();
            let channel = format!("<#{}>", ctx.channel_id().get());
            let invocation = Invocation {
                author: &author,
                channel: Some(&channel),
            };

            GlossaryHandler::new(&ctx.data().glossary)
                .handle(command, invocation)
                .await?
        }
        Err(err) => {
            debug!(?err, "unparseable glossary command");
            parse_error_message(&err)
        }
    };

    ctx.say(reply).await?;
    Ok(())
}

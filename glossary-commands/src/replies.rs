use glossary_database::EntryView;
use glossary_utils::COMMAND_PREFIX;
use glossary_utils::formatting::{escape_mentions, format_age, readable_join};
use glossary_utils::parse::ParseError;
use glossary_utils::time::elapsed_secs;

pub const QUERY_COMMAND: &str = "whatis";
pub const DEFINE_COMMAND: &str = "define";
pub const SEARCH_COMMAND: &str = "search";

pub fn docs_message() -> String {
    format!(
        "To define a glossary entry: `{p}{define} <entry>: <definition>`. \
         To get a definition: `{p}{query} <entry> [<num>]`. \
         To search for entries: `{p}{search} <search terms>`. \
         Pass in an integer >= 1 to get a definition from the history. \
         Get a random definition by omitting the entry argument.",
        p = COMMAND_PREFIX,
        define = DEFINE_COMMAND,
        query = QUERY_COMMAND,
        search = SEARCH_COMMAND,
    )
}

pub fn parse_error_message(error: &ParseError) -> String {
    match error {
        ParseError::DoubleColon => {
            "I can't handle '::' right now. Please try again without it.".to_owned()
        }
        ParseError::InvalidCharacter(ch) => {
            format!("Punctuation (\"{}\") cannot be used in a glossary entry.", ch)
        }
        ParseError::MissingColon
        | ParseError::EmptyTerm
        | ParseError::EmptyDefinition
        | ParseError::EmptyQuery => format!("I didn't understand that. {}", docs_message()),
    }
}

pub fn defined_message(term: &str, definition: &str) -> String {
    format!("Okay! \"{}\" is now \"{}\"", term, escape_mentions(definition))
}

pub fn duplicate_message(term: &str) -> String {
    format!("That's already a definition of \"{}\".", term)
}

pub fn entry_message(view: &EntryView, now: u64) -> String {
    let entry = &view.entry;
    let channel = entry
        .channel
        .as_deref()
        .map(|channel| format!(" in {}", channel))
        .unwrap_or_default();

    format!(
        "{} ({}/{}): {} [defined by {} {}{}]",
        entry.term,
        view.position,
        view.total,
        escape_mentions(&entry.definition),
        escape_mentions(&entry.author),
        format_age(elapsed_secs(entry.created_at, now)),
        channel,
    )
}

pub fn undefined_message(term: &str, suggestions: &[String]) -> String {
    let mut message = format!("\"{}\" is undefined.", term);
    if let Some(joined) = readable_join(suggestions, "or") {
        message.push_str(&format!(" May I interest you in {}?", joined));
    }
    message
}

pub fn out_of_range_message(index: i64, term: &str) -> String {
    format!("\"{}\" is not a valid glossary entry number for \"{}\".", index, term)
}

pub fn empty_glossary_message() -> String {
    format!("I can't find a single definition. {}", docs_message())
}

pub fn search_results_message(matches: &[String]) -> String {
    match readable_join(matches, "and") {
        Some(joined) => format!(
            "Found glossary entries: {}. To get a definition: {}{} <entry>",
            joined, COMMAND_PREFIX, QUERY_COMMAND
        ),
        None => "No glossary results found.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use glossary_database::{EntryView, GlossaryEntry};
    use glossary_utils::parse::ParseError;

    use super::{
        entry_message, out_of_range_message, parse_error_message, search_results_message,
        undefined_message,
    };

    fn view(channel: Option<&str>) -> EntryView {
        EntryView {
            entry: GlossaryEntry {
                id: 1,
                term: "fish".to_owned(),
                definition: "a swimmy thingy".to_owned(),
                author: "bojangles".to_owned(),
                channel: channel.map(str::to_owned),
                created_at: 1_000,
            },
            position: 1,
            total: 3,
        }
    }

    #[test]
    fn formats_entries() {
        assert_eq!(
            entry_message(&view(None), 1_000),
            "fish (1/3): a swimmy thingy [defined by bojangles just now]"
        );
        assert_eq!(
            entry_message(&view(Some("#general")), 1_000 + 2 * 3_600),
            "fish (1/3): a swimmy thingy [defined by bojangles 2 hours ago in #general]"
        );
    }

    #[test]
    fn undefined_lists_suggestions() {
        assert_eq!(undefined_message("run", &[]), "\"run\" is undefined.");
        assert_eq!(
            undefined_message("run", &["running".to_owned(), "runner".to_owned()]),
            "\"run\" is undefined. May I interest you in running or runner?"
        );
    }

    #[test]
    fn parse_errors_are_explained() {
        assert_eq!(
            parse_error_message(&ParseError::InvalidCharacter('$')),
            "Punctuation (\"$\") cannot be used in a glossary entry."
        );
        assert!(
            parse_error_message(&ParseError::MissingColon)
                .starts_with("I didn't understand that.")
        );
    }

    #[test]
    fn search_and_range_messages() {
        assert_eq!(search_results_message(&[]), "No glossary results found.");
        assert_eq!(
            search_results_message(&["castle".to_owned(), "salmon".to_owned()]),
            "Found glossary entries: castle and salmon. To get a definition: !whatis <entry>"
        );
        assert_eq!(
            out_of_range_message(0, "fish"),
            "\"0\" is not a valid glossary entry number for \"fish\"."
        );
    }
}

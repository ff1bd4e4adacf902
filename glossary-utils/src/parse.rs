/// Keyword that turns a `whatis` invocation into a definition.
pub const DEFINE_KEYWORD: &str = "define";
/// Keyword that asks for usage instead of a lookup.
pub const HELP_KEYWORD: &str = "help";

/// A classified glossary invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlossaryCommand {
    /// `define <term>: <definition>`
    Define { term: String, definition: String },
    /// `<term>` or `<term> <n>`, where `n` is 1-based.
    Lookup { term: String, index: Option<i64> },
    /// Empty invocation.
    Random,
    /// `search <query>`
    Search { query: String },
    /// `help`
    Help,
}

/// Why a message could not be turned into a [`GlossaryCommand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    MissingColon,
    DoubleColon,
    EmptyTerm,
    EmptyDefinition,
    EmptyQuery,
    InvalidCharacter(char),
}

/// Classify the text that followed the trigger prefix.
pub fn parse_glossary_command(raw: &str) -> Result<GlossaryCommand, ParseError> {
    let input = raw.trim();
    if input.is_empty() {
        return Ok(GlossaryCommand::Random);
    }

    if input.eq_ignore_ascii_case(HELP_KEYWORD) {
        return Ok(GlossaryCommand::Help);
    }

    if let Some(rest) = strip_keyword(input, DEFINE_KEYWORD) {
        return parse_definition(rest);
    }

    Ok(parse_lookup(input))
}

/// Parse the `<term>: <definition>` part of a define command.
pub fn parse_definition(raw: &str) -> Result<GlossaryCommand, ParseError> {
    let input = raw.trim();
    if input.eq_ignore_ascii_case(HELP_KEYWORD) {
        return Ok(GlossaryCommand::Help);
    }

    let Some((term, definition)) = input.split_once(':') else {
        return Err(ParseError::MissingColon);
    };

    if input.contains("::") {
        return Err(ParseError::DoubleColon);
    }

    let term = term.trim();
    if term.is_empty() {
        return Err(ParseError::EmptyTerm);
    }

    if let Some(invalid) = term.chars().find(|ch| is_forbidden_term_char(*ch)) {
        return Err(ParseError::InvalidCharacter(invalid));
    }

    let definition = definition.trim();
    if definition.is_empty() {
        return Err(ParseError::EmptyDefinition);
    }

    Ok(GlossaryCommand::Define {
        term: term.to_owned(),
        definition: definition.to_owned(),
    })
}

/// Parse the argument of a search command.
pub fn parse_search(raw: &str) -> Result<GlossaryCommand, ParseError> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(ParseError::EmptyQuery);
    }

    if query.eq_ignore_ascii_case(HELP_KEYWORD) {
        return Ok(GlossaryCommand::Help);
    }

    Ok(GlossaryCommand::Search {
        query: query.to_owned(),
    })
}

/// Normalize a term into its lookup key: trimmed, single-spaced, lowercase.
pub fn normalize_term(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn parse_lookup(input: &str) -> GlossaryCommand {
    if let Some((head, last)) = input.rsplit_once(char::is_whitespace) {
        let head = head.trim();
        if let Some(index) = parse_index(last)
            && !head.is_empty()
        {
            return GlossaryCommand::Lookup {
                term: head.to_owned(),
                index: Some(index),
            };
        }
    }

    GlossaryCommand::Lookup {
        term: input.to_owned(),
        index: None,
    }
}

/// Parse a signed integer token, saturating values that overflow `i64`.
fn parse_index(token: &str) -> Option<i64> {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    match token.parse::<i64>() {
        Ok(index) => Some(index),
        Err(_) if token.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let (head, rest) = input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""));

    head.eq_ignore_ascii_case(keyword).then_some(rest)
}

fn is_forbidden_term_char(ch: char) -> bool {
    ch.is_ascii_punctuation() && ch != '-' && ch != '_'
}

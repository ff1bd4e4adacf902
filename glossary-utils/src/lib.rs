/// Shared formatting helpers (age strings, readable lists).
pub mod formatting;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Pure parser helpers for glossary commands.
pub mod parse;
/// Shared time helpers.
pub mod time;

//! Command text normalization.

/// Collapse every run of whitespace in `command` to a single space and trim both ends.
///
/// Only used to decide whether two commands are equal; stored commands keep
/// their original text.
pub fn normalize(command: &str) -> String {
    command.split_whitespace().collect::<Vec<_>>().join(" ")
}

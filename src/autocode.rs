//! Heuristics that wrap code-looking words in backticks.
//!
//! Update descriptions routinely mention file paths, bug numbers, and
//! function names without marking them up. When enabled, these words are
//! wrapped in backticks before inline formatting so they flow through the
//! normal code substitution.

use itertools::Itertools;

fn count_char(word: &str, find: char) -> usize {
    word.chars().filter(|c| *c == find).count()
}

fn word_is_code(word: &str) -> bool {
    // already marked up
    if word.starts_with('`') || word.ends_with('`') {
        return false;
    }

    // paths
    if word.starts_with('/') {
        return true;
    }

    // bug references
    if word.starts_with('#') {
        return true;
    }

    // URIs
    if word.starts_with("http://") || word.starts_with("https://") || word.starts_with("ftp://") {
        return true;
    }

    // patch files
    if word.contains(".patch") || word.contains(".diff") {
        return true;
    }

    // function names
    if word.contains("()") {
        return true;
    }

    // email addresses
    if word.contains('@') {
        return true;
    }

    // compiler defines and identifiers
    if !word.starts_with('_') && count_char(word, '_') > 1 {
        return true;
    }

    false
}

/// Wrap every code-looking word of `text` in backticks.
pub(crate) fn format_code_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if word_is_code(word) {
                format!("`{word}`")
            } else {
                word.to_string()
            }
        })
        .join(" ")
}

//! Inline delimiter-pair substitution.
//!
//! Runs once per flushed block, never per raw line. Substitution is a
//! single-pass scan over byte offsets: spans between delimiter pairs are
//! copied through, tags are emitted at the pair boundaries, and unmatched
//! delimiters are left as literal characters.

use crate::tags::TagSet;

/// Find the first occurrence of `needle` that is not surrounded by a space
/// on both sides at once. An occurrence at the start of `haystack` is
/// always taken, as is one at the very end (there is no following
/// character to flank it). Returns a byte offset.
fn find_outside_spaces(haystack: &str, needle: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = haystack[from..].find(needle) {
        let at = from + found;
        if at == 0 {
            return Some(at);
        }
        let before = haystack.as_bytes()[at - 1];
        let after = haystack.as_bytes().get(at + needle.len()).copied();
        if before == b' ' && after == Some(b' ') {
            // rejected; resume one character further on
            from = at + 1;
            continue;
        }
        return Some(at);
    }
    None
}

/// Replace each pair of `delim` occurrences with `open` and `close`.
///
/// Space-flanked occurrences are skipped, and a delimiter without a partner
/// stays literal. Once no pairs remain the function is a no-op, so it is
/// idempotent over its own output for tag-free delimiters.
pub(crate) fn apply_delimiter(text: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(first) = find_outside_spaces(rest, delim) {
        let middle_start = first + delim.len();
        let Some(found) = find_outside_spaces(&rest[middle_start..], delim) else {
            break;
        };
        let second = middle_start + found;
        out.push_str(&rest[..first]);
        out.push_str(open);
        out.push_str(&rest[middle_start..second]);
        out.push_str(close);
        rest = &rest[second + delim.len()..];
    }
    out.push_str(rest);
    out
}

/// Apply every inline substitution to one flushed block, in fixed order:
/// strong (`**`, `__`), emphasis (`*`, `_`), code (`` ` ``), the em-dash
/// rewrite, then typographic quotes when enabled.
pub(crate) fn format_line(text: &str, tags: &TagSet, smart_quoting: bool) -> String {
    let mut text = apply_delimiter(text, "**", tags.strong_start, tags.strong_end);
    text = apply_delimiter(&text, "__", tags.strong_start, tags.strong_end);
    text = apply_delimiter(&text, "*", tags.em_start, tags.em_end);
    text = apply_delimiter(&text, "_", tags.em_start, tags.em_end);
    text = apply_delimiter(&text, "`", tags.code_start, tags.code_end);
    text = text.replace(" -- ", " \u{2014} ");
    if smart_quoting {
        text = apply_delimiter(&text, "\"", "\u{201c}", "\u{201d}");
        text = apply_delimiter(&text, "'", "\u{2018}", "\u{2019}");
    }
    text
}

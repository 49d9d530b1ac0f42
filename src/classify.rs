//! Per-line classification.
//!
//! Each predicate looks at one raw line, leading and trailing whitespace
//! included. The whole-line scans (`is_blank`, `is_rule`) only inspect the
//! first [`MAX_LINE_SCAN`] bytes; anything beyond that bound is ignored.

/// Upper bound on the number of leading bytes inspected by the whole-line
/// predicates.
pub(crate) const MAX_LINE_SCAN: usize = 1024;

/// Classification of the block currently being accumulated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum LineMode {
    Blank,
    Rule,
    Bullet,
    Header1,
    Header2,
    Paragraph,
    /// Initial state, and the state forced once the output quota is spent.
    #[default]
    Unknown,
}

fn scanned(line: &str) -> &[u8] {
    let bytes = line.as_bytes();
    &bytes[..bytes.len().min(MAX_LINE_SCAN)]
}

/// An empty line, or one containing only spaces and tabs.
pub(crate) fn is_blank(line: &str) -> bool {
    scanned(line).iter().all(|b| *b == b' ' || *b == b'\t')
}

/// Three or more `-`, `*`, or `_` characters, optionally interspersed with
/// spaces, and nothing else. The empty line is not a rule.
pub(crate) fn is_rule(line: &str) -> bool {
    let scanned = scanned(line);
    if scanned.is_empty() {
        return false;
    }
    let mut count = 0;
    for b in scanned {
        match b {
            b'-' | b'*' | b'_' => count += 1,
            b' ' => {}
            _ => return false,
        }
    }
    count >= 3
}

/// A `-`, `*`, or `+` list marker, optionally after a single leading space.
pub(crate) fn is_bullet(line: &str) -> bool {
    ["- ", "* ", "+ ", " - ", " * ", " + "]
        .iter()
        .any(|marker| line.starts_with(marker))
}

pub(crate) fn is_header1(line: &str) -> bool {
    line.starts_with("# ")
}

pub(crate) fn is_header2(line: &str) -> bool {
    line.starts_with("## ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank(" \t \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn blank_scan_is_bounded() {
        let text_past_bound = " ".repeat(MAX_LINE_SCAN) + "x";
        assert!(is_blank(&text_past_bound));

        let text_at_bound = " ".repeat(MAX_LINE_SCAN - 1) + "x";
        assert!(!is_blank(&text_at_bound));
    }

    #[test]
    fn rules() {
        assert!(is_rule("---"));
        assert!(is_rule("***"));
        assert!(is_rule("___"));
        assert!(is_rule("- - -"));
        assert!(is_rule(" -*_ "));
        assert!(is_rule("----------"));
    }

    #[test]
    fn not_rules() {
        assert!(!is_rule(""));
        assert!(!is_rule("--"));
        assert!(!is_rule("- -"));
        assert!(!is_rule("---a"));
        assert!(!is_rule("a---"));
    }

    #[test]
    fn rule_scan_is_bounded() {
        let junk_past_bound = "-".repeat(MAX_LINE_SCAN) + "a";
        assert!(is_rule(&junk_past_bound));

        let junk_at_bound = "-".repeat(MAX_LINE_SCAN - 1) + "a";
        assert!(!is_rule(&junk_at_bound));
    }

    #[test]
    fn bullets() {
        assert!(is_bullet("- item"));
        assert!(is_bullet("* item"));
        assert!(is_bullet("+ item"));
        assert!(is_bullet(" - item"));
        assert!(!is_bullet("  - item"));
        assert!(!is_bullet("-item"));
        assert!(!is_bullet("item"));
    }

    #[test]
    fn headers() {
        assert!(is_header1("# Title"));
        assert!(!is_header1("#Title"));
        assert!(!is_header1("## Title"));
        assert!(is_header2("## Title"));
        assert!(!is_header2("# Title"));
    }
}

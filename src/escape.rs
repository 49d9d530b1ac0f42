//! Minimal markup escaping for the Pango dialect.

/// Escape the characters Pango treats as markup: `&`, `<`, `>` and `"`.
///
/// `&` goes first so the entities inserted for the other three are not
/// escaped a second time.
pub(crate) fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

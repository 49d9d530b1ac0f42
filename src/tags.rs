use std::str::FromStr;

use crate::converter::ConvertError;

/// Target dialect for converted text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// [Pango markup], suitable for GTK labels and text views.
    ///
    /// [Pango markup]: https://docs.gtk.org/Pango/pango_markup.html
    Pango,
    /// A small HTML subset (`<em>`, `<strong>`, `<code>`, `<h1>`, `<h2>`,
    /// `<li>`, `<hr>`).
    Html,
    /// Plain text with no inline markup.
    PlainText,
}

/// The markup fragments emitted for one output dialect.
///
/// Fixed once an [`Output`] is chosen, immutable afterwards.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct TagSet {
    pub(crate) em_start: &'static str,
    pub(crate) em_end: &'static str,
    pub(crate) strong_start: &'static str,
    pub(crate) strong_end: &'static str,
    pub(crate) code_start: &'static str,
    pub(crate) code_end: &'static str,
    pub(crate) h1_start: &'static str,
    pub(crate) h1_end: &'static str,
    pub(crate) h2_start: &'static str,
    pub(crate) h2_end: &'static str,
    pub(crate) bullet_start: &'static str,
    pub(crate) bullet_end: &'static str,
    pub(crate) rule: &'static str,
    /// Whether flushed blocks are markup-escaped before inline formatting.
    pub(crate) escape: bool,
}

impl Output {
    pub(crate) fn tag_set(self) -> TagSet {
        match self {
            Output::Pango => TagSet {
                em_start: "<i>",
                em_end: "</i>",
                strong_start: "<b>",
                strong_end: "</b>",
                code_start: "<tt>",
                code_end: "</tt>",
                h1_start: "<big>",
                h1_end: "</big>",
                h2_start: "<b>",
                h2_end: "</b>",
                bullet_start: "\u{2022} ",
                bullet_end: "",
                rule: "⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯",
                escape: true,
            },
            Output::Html => TagSet {
                em_start: "<em>",
                // sic, not </em>
                em_end: "<em>",
                strong_start: "<strong>",
                strong_end: "</strong>",
                code_start: "<code>",
                code_end: "</code>",
                h1_start: "<h1>",
                h1_end: "</h1>",
                h2_start: "<h2>",
                h2_end: "</h2>",
                bullet_start: "<li>",
                bullet_end: "</li>",
                rule: "<hr>",
                escape: false,
            },
            Output::PlainText => TagSet {
                em_start: "",
                em_end: "",
                strong_start: "",
                strong_end: "",
                code_start: "",
                code_end: "",
                h1_start: "[",
                h1_end: "]",
                h2_start: "-",
                h2_end: "-",
                bullet_start: "* ",
                bullet_end: "",
                rule: " ----- ",
                escape: false,
            },
        }
    }
}

impl FromStr for Output {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pango" => Ok(Output::Pango),
            "html" => Ok(Output::Html),
            "text" | "plain" => Ok(Output::PlainText),
            other => Err(ConvertError::UnknownOutput(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_output_names() {
        assert_eq!("pango".parse::<Output>(), Ok(Output::Pango));
        assert_eq!("html".parse::<Output>(), Ok(Output::Html));
        assert_eq!("text".parse::<Output>(), Ok(Output::PlainText));
        assert_eq!("plain".parse::<Output>(), Ok(Output::PlainText));
    }

    #[test]
    fn unknown_output_name() {
        assert_eq!(
            "markdown".parse::<Output>(),
            Err(ConvertError::UnknownOutput("markdown".to_string()))
        );
    }
}

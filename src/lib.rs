//! Convert short Markdown-like snippets into [Pango markup], a small HTML
//! subset, or plain text.
//!
//! [Pango markup]: https://docs.gtk.org/Pango/pango_markup.html
//!
//! The dialect is deliberately tiny: paragraphs, `#`/`##` headings,
//! unordered bullets, horizontal rules, and `**`/`__`/`*`/`_`/`` ` ``
//! inline pairs. It suits the kind of text found in package update
//! descriptions and changelog entries, where full CommonMark is overkill
//! and the renderer is a label widget. There is no support for code
//! sections, ordered lists, block quotes, images, links, or backslash
//! escapes.
//!
//! # Getting started
//!
//! ```rust
//! use markdown_convert::{convert_markdown, Output};
//!
//! let text = "- This is a *very*\n  short paragraph\n- Another";
//! let markup = convert_markdown(text, Output::Pango)?;
//! assert_eq!(markup, "\u{2022} This is a <i>very</i> short paragraph\n\u{2022} Another");
//! # Ok::<(), markdown_convert::ConvertError>(())
//! ```
//!
//! # Using a [`Config`]
//!
//! ```rust
//! use markdown_convert::{convert_markdown_with_config, Config, Output};
//!
//! let config = Config {
//!     output: Some(Output::PlainText),
//!     max_lines: 1,
//!     ..Config::default()
//! };
//! let text = convert_markdown_with_config("- first\n- second", config)?;
//! assert_eq!(text, "* first");
//! # Ok::<(), markdown_convert::ConvertError>(())
//! ```

mod autocode;
mod classify;
mod config;
mod converter;
mod escape;
mod inline;
mod tags;
#[cfg(test)]
mod test;

pub use config::Config;
pub use converter::{ConvertError, MarkdownConverter};
pub use tags::Output;

/// Convert a snippet with all the default settings and the given output
/// dialect.
///
/// ```rust
/// # use markdown_convert::{convert_markdown, Output};
/// let text = convert_markdown("**hot** stuff", Output::PlainText)?;
/// assert_eq!(text, "hot stuff");
/// # Ok::<(), markdown_convert::ConvertError>(())
/// ```
pub fn convert_markdown(input: &str, output: Output) -> Result<String, ConvertError> {
    convert_markdown_with_config(
        input,
        Config {
            output: Some(output),
            ..Config::default()
        },
    )
}

/// Convert a snippet with user specified settings.
///
/// ```rust
/// # use markdown_convert::{convert_markdown_with_config, Config, Output};
/// let config = Config {
///     output: Some(Output::Html),
///     smart_quoting: true,
///     ..Config::default()
/// };
/// let html = convert_markdown_with_config("a \"quoted\" word", config)?;
/// assert_eq!(html, "a \u{201c}quoted\u{201d} word");
/// # Ok::<(), markdown_convert::ConvertError>(())
/// ```
pub fn convert_markdown_with_config(input: &str, config: Config) -> Result<String, ConvertError> {
    tracing::trace!(?config);
    let mut converter = MarkdownConverter::with_config(config);
    converter.convert(input)
}

use crate::tags::Output;

/// Conversion options.
///
/// Options persist across [`convert`](crate::MarkdownConverter::convert)
/// calls on the same converter; only the working buffers are reset per
/// call.
#[derive(Clone, Debug)]
pub struct Config {
    /// Target dialect. Conversion fails with
    /// [`ConvertError::OutputNotSet`](crate::ConvertError::OutputNotSet)
    /// until one is chosen.
    pub output: Option<Output>,
    /// Upper bound on emitted bullet and paragraph blocks; headings and
    /// rules are free. `-1` disables the bound.
    pub max_lines: i32,
    /// Rewrite straight quotes into typographic quotes.
    pub smart_quoting: bool,
    /// Wrap code-looking words (paths, URIs, `function()` names) in
    /// backticks before formatting.
    pub autocode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: None,
            max_lines: -1,
            smart_quoting: false,
            autocode: false,
        }
    }
}

//! The block-level state machine.
//!
//! Input is processed one line at a time with a single line of back-memory:
//! each line is classified, a classification change flushes whatever block
//! is pending under the *previous* mode, and accumulation restarts under
//! the new one. Inline formatting happens once per flushed block.

use thiserror::Error;

use crate::{
    autocode,
    classify::{self, LineMode},
    config::Config,
    escape, inline,
    tags::{Output, TagSet},
};

/// Errors reported by [`MarkdownConverter`] and [`Output`] parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// [`convert`](MarkdownConverter::convert) was called before an output
    /// format was selected.
    #[error("no output format selected")]
    OutputNotSet,
    /// The output format name was not recognized.
    #[error("unknown output format `{0}`")]
    UnknownOutput(String),
}

/// Converts Markdown-like snippets into the selected output dialect.
///
/// A converter is cheap to create and reusable: the configuration persists
/// across calls, the working buffers are reset on every call. One instance
/// must not be shared between threads mid-call; independent instances
/// share nothing.
///
/// ```rust
/// use markdown_convert::{MarkdownConverter, Output};
///
/// let mut converter = MarkdownConverter::new();
/// converter.set_output(Output::Html);
/// let html = converter.convert("# Changes\n\nFixed **it**")?;
/// assert_eq!(html, "<h1>Changes</h1>\nFixed <strong>it</strong>");
/// # Ok::<(), markdown_convert::ConvertError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkdownConverter {
    config: Config,
    tags: TagSet,
    mode: LineMode,
    line_count: u32,
    pending: String,
    processed: String,
}

impl MarkdownConverter {
    /// Create a converter with no output format selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter from an existing [`Config`].
    pub fn with_config(config: Config) -> Self {
        let tags = config.output.map(Output::tag_set).unwrap_or_default();
        Self {
            config,
            tags,
            ..Self::default()
        }
    }

    /// Choose the output dialect. May be called again to switch dialects
    /// between conversions.
    pub fn set_output(&mut self, output: Output) -> &mut Self {
        self.config.output = Some(output);
        self.tags = output.tag_set();
        self
    }

    /// Cap the number of emitted bullet and paragraph blocks; `-1` removes
    /// the cap. Headings and rules never count against it.
    pub fn set_max_lines(&mut self, max_lines: i32) -> &mut Self {
        self.config.max_lines = max_lines;
        self
    }

    /// Toggle typographic quote substitution.
    pub fn set_smart_quoting(&mut self, smart_quoting: bool) -> &mut Self {
        self.config.smart_quoting = smart_quoting;
        self
    }

    /// Toggle backtick-wrapping of code-looking words.
    pub fn set_autocode(&mut self, autocode: bool) -> &mut Self {
        self.config.autocode = autocode;
        self
    }

    /// Convert one snippet.
    ///
    /// Returns [`ConvertError::OutputNotSet`] if no output format has been
    /// selected. Malformed input never fails: stray markers and unmatched
    /// delimiters come out as literal text.
    pub fn convert(&mut self, input: &str) -> Result<String, ConvertError> {
        if self.config.output.is_none() {
            return Err(ConvertError::OutputNotSet);
        }
        tracing::trace!(input, "converting");

        self.mode = LineMode::Unknown;
        self.line_count = 0;
        self.pending.clear();
        self.processed.clear();

        for line in input.split('\n') {
            if !self.process_line(line) {
                // quota spent; drop the rest of the input
                break;
            }
        }
        self.flush_pending();

        let output = self.processed.trim_end_matches('\n').to_string();
        self.pending.clear();
        self.processed.clear();
        tracing::trace!(output = %output, "converted");
        Ok(output)
    }

    /// Append one trimmed line fragment to the pending block, joined with a
    /// single space. Refuses, leaving all state untouched, once the quota
    /// is spent.
    fn add_pending(&mut self, text: &str) -> bool {
        if self.config.max_lines >= 0 && self.line_count >= self.config.max_lines as u32 {
            return false;
        }
        self.pending.push_str(text.trim());
        self.pending.push(' ');
        true
    }

    /// Same as [`add_pending`](Self::add_pending), with every `#` replaced
    /// by a space first so trailing closing hashes disappear.
    fn add_pending_header(&mut self, text: &str) -> bool {
        let stripped = text.replace('#', " ");
        self.add_pending(&stripped)
    }

    /// Drive the state machine with one raw line. Returns `false` once the
    /// quota is spent, which also resets the mode to [`LineMode::Unknown`].
    fn process_line(&mut self, line: &str) -> bool {
        let ok = if classify::is_blank(line) {
            tracing::trace!(line, "blank");
            self.flush_pending();
            // a blank after a list ends the list, not a gap
            let ok = if self.mode != LineMode::Bullet {
                self.add_pending("\n")
            } else {
                true
            };
            self.mode = LineMode::Blank;
            ok
        } else if classify::is_rule(line) {
            tracing::trace!(line, "rule");
            self.flush_pending();
            self.mode = LineMode::Rule;
            let rule = self.tags.rule;
            self.add_pending(rule)
        } else if classify::is_bullet(line) {
            tracing::trace!(line, "bullet");
            self.flush_pending();
            self.mode = LineMode::Bullet;
            self.add_pending(&line[2..])
        } else if classify::is_header1(line) {
            tracing::trace!(line, "header1");
            self.flush_pending();
            self.mode = LineMode::Header1;
            self.add_pending_header(&line[2..])
        } else if classify::is_header2(line) {
            tracing::trace!(line, "header2");
            self.flush_pending();
            self.mode = LineMode::Header2;
            self.add_pending_header(&line[3..])
        } else {
            tracing::trace!(line, "continuation");
            if matches!(self.mode, LineMode::Blank | LineMode::Unknown) {
                self.flush_pending();
                self.mode = LineMode::Paragraph;
            }
            self.add_pending(line)
        };
        if !ok {
            self.mode = LineMode::Unknown;
        }
        ok
    }

    /// Emit the pending block under the mode it was accumulated under,
    /// then clear the buffer.
    fn flush_pending(&mut self) {
        if self.mode == LineMode::Unknown {
            return;
        }

        let trimmed = self.pending.trim_end_matches(' ');
        let mut text = if self.config.autocode
            && matches!(self.mode, LineMode::Bullet | LineMode::Paragraph)
        {
            autocode::format_code_words(trimmed)
        } else {
            trimmed.to_string()
        };
        if self.tags.escape {
            text = escape::escape_markup(&text);
        }
        let text = inline::format_line(&text, &self.tags, self.config.smart_quoting);

        match self.mode {
            LineMode::Bullet => {
                self.processed.push_str(self.tags.bullet_start);
                self.processed.push_str(&text);
                self.processed.push_str(self.tags.bullet_end);
                self.processed.push('\n');
                self.line_count += 1;
            }
            LineMode::Header1 => {
                self.processed.push_str(self.tags.h1_start);
                self.processed.push_str(&text);
                self.processed.push_str(self.tags.h1_end);
                self.processed.push('\n');
            }
            LineMode::Header2 => {
                self.processed.push_str(self.tags.h2_start);
                self.processed.push_str(&text);
                self.processed.push_str(self.tags.h2_end);
                self.processed.push('\n');
            }
            LineMode::Paragraph => {
                self.processed.push_str(&text);
                self.processed.push('\n');
                self.line_count += 1;
            }
            // the rule literal is already in the buffer; rules are free
            // with respect to the quota
            LineMode::Rule => {
                self.processed.push_str(&text);
                self.processed.push('\n');
            }
            LineMode::Blank | LineMode::Unknown => {}
        }
        tracing::debug!(mode = ?self.mode, block = %text, "flushed");

        self.pending.clear();
    }
}

use insta::assert_snapshot;

use super::*;

fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(true)
        .try_init();
}

fn pango() -> MarkdownConverter {
    let mut converter = MarkdownConverter::new();
    converter.set_output(Output::Pango);
    converter
}

#[test]
fn bullet_continuation_lines_join_into_one_block() {
    init_tracing();
    let input = " - This is a *very*
   short paragraph
   that is not usual.
 - Another";
    let output = pango().convert(input).unwrap();
    assert_snapshot!(output, @r"
    • This is a <i>very</i> short paragraph that is not usual.
    • Another
    ");
}

#[test]
fn max_lines_truncates_at_block_boundary() {
    init_tracing();
    let mut converter = pango();
    converter.set_max_lines(1);
    let output = converter.convert("- first\n- second").unwrap();
    assert_eq!(output, "\u{2022} first");
}

#[test]
fn max_lines_counts_paragraphs() {
    init_tracing();
    let mut converter = pango();
    converter.set_max_lines(2);
    let output = converter.convert("one\n\ntwo\n\nthree").unwrap();
    assert_eq!(output, "one\ntwo");
}

#[test]
fn headings_and_rules_do_not_count_against_quota() {
    init_tracing();
    let mut converter = MarkdownConverter::new();
    converter.set_output(Output::PlainText).set_max_lines(2);
    let output = converter
        .convert("# Title\n\n---\n\none\n\ntwo")
        .unwrap();
    assert_eq!(output, "[Title]\n-----\none\ntwo");
}

#[test]
fn pango_escapes_markup_characters() {
    init_tracing();
    let output = pango().convert("* list & spaces").unwrap();
    assert_eq!(output, "\u{2022} list &amp; spaces");

    let output = pango().convert("see <b>raw</b> tags").unwrap();
    assert_eq!(output, "see &lt;b&gt;raw&lt;/b&gt; tags");
}

#[test]
fn pango_rule_literal() {
    init_tracing();
    let output = pango().convert("---").unwrap();
    assert_eq!(output, "\u{23af}".repeat(22));
}

#[test]
fn heading_then_paragraph() {
    init_tracing();
    let output = pango().convert("# Big deal\n\ntext").unwrap();
    assert_eq!(output, "<big>Big deal</big>\ntext");
}

#[test]
fn second_level_heading_strips_closing_hashes() {
    init_tracing();
    let output = pango().convert("## Details ##\n\ntext").unwrap();
    assert_eq!(output, "<b>Details</b>\ntext");
}

#[test]
fn html_profile_keeps_em_open_tag_quirk() {
    init_tracing();
    let mut converter = MarkdownConverter::new();
    converter.set_output(Output::Html);
    let output = converter.convert("*word* here").unwrap();
    assert_eq!(output, "<em>word<em> here");
}

#[test]
fn html_profile_does_not_escape() {
    init_tracing();
    let mut converter = MarkdownConverter::new();
    converter.set_output(Output::Html);
    let output = converter.convert("- tom & jerry").unwrap();
    assert_eq!(output, "<li>tom & jerry</li>");
}

#[test]
fn plain_text_document() {
    init_tracing();
    let mut converter = MarkdownConverter::new();
    converter.set_output(Output::PlainText);
    let output = converter.convert("# Title\n\n- a\n- b\n\n---").unwrap();
    assert_snapshot!(output, @r"
    [Title]
    * a
    * b
    -----
    ");
}

#[test]
fn converter_is_reusable_across_calls() {
    init_tracing();
    let mut converter = pango();
    assert_eq!(converter.convert("first call").unwrap(), "first call");
    assert_eq!(converter.convert("second call").unwrap(), "second call");
}

#[test]
fn convert_without_output_format_fails() {
    init_tracing();
    let mut converter = MarkdownConverter::new();
    assert_eq!(converter.convert("text"), Err(ConvertError::OutputNotSet));
}

#[test]
fn smart_quoting_is_opt_in() {
    init_tracing();
    let mut converter = MarkdownConverter::new();
    converter.set_output(Output::PlainText);
    assert_eq!(
        converter.convert("\"hello\" world").unwrap(),
        "\"hello\" world"
    );
    converter.set_smart_quoting(true);
    assert_eq!(
        converter.convert("\"hello\" world").unwrap(),
        "\u{201c}hello\u{201d} world"
    );
}

#[test]
fn autocode_wraps_paths_in_code_tags() {
    init_tracing();
    let mut converter = pango();
    converter.set_autocode(true);
    let output = converter.convert("edit /etc/fstab to fix it").unwrap();
    assert_eq!(output, "edit <tt>/etc/fstab</tt> to fix it");
}

#[test]
fn update_description_end_to_end() {
    init_tracing();
    let input = "# Security update

This update fixes **two** problems:

- a crash in `unref()`
- slow startup

---

See https://example.com for details.";
    let mut converter = pango();
    converter.set_autocode(true);
    let output = converter.convert(input).unwrap();
    assert_snapshot!(output, @r"
    <big>Security update</big>
    This update fixes <b>two</b> problems:
    • a crash in <tt>unref()</tt>
    • slow startup
    ⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯
    See <tt>https://example.com</tt> for details.
    ");
}

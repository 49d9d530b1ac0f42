//! Command-line interface for converting Markdown to Pango markup, HTML, or plain text.

use std::{fs, io::Read, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use markdown_convert::{Config, MarkdownConverter};

/// Convert simple Markdown to Pango markup, HTML, or plain text.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Output format: pango, html, or text.
    #[arg(long, default_value = "pango")]
    output: String,

    /// Maximum number of bullet and paragraph lines to emit; -1 for all.
    #[arg(long, default_value_t = -1)]
    max_lines: i32,

    /// Replace straight quotes with typographic quotes.
    #[arg(long)]
    smart_quoting: bool,

    /// Wrap code-looking words in backticks.
    #[arg(long)]
    autocode: bool,

    /// Input file; stdin when omitted.
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let config = Config {
        output: Some(cli.output.parse()?),
        max_lines: cli.max_lines,
        smart_quoting: cli.smart_quoting,
        autocode: cli.autocode,
    };
    let mut converter = MarkdownConverter::with_config(config);
    println!("{}", converter.convert(&input)?);
    Ok(())
}

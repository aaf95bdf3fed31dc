//! Rendering a quote and its citation as Markdown

use paste_quote_core::{replace_double_quotes, Quote};
use serde::{Deserialize, Serialize};

/// How a pasted quote is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `> ` prefixed lines
    #[default]
    Blockquote,
    /// `"body" [@key]` on a single line
    Inline,
}

/// Formatting options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub style: QuoteStyle,
    /// Citation key used when no reference matched
    pub placeholder: String,
    /// Rewrite inner double quotes when wrapping an inline quote
    pub normalize_quotes: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: QuoteStyle::Blockquote,
            placeholder: "@?".to_string(),
            normalize_quotes: true,
        }
    }
}

/// Pandoc-style citation such as `[@parfit1984, p. 56]`.
///
/// Uses `placeholder` verbatim when `id` is `None`. Page ranges get `pp.`.
pub fn citation_label(id: Option<&str>, page: Option<&str>, placeholder: &str) -> String {
    let key = match id {
        Some(id) => format!("@{}", id),
        None => placeholder.to_string(),
    };

    match page {
        Some(page) if is_page_range(page) => format!("[{}, pp. {}]", key, page),
        Some(page) => format!("[{}, p. {}]", key, page),
        None => format!("[{}]", key),
    }
}

fn is_page_range(page: &str) -> bool {
    page.contains(['-', '\u{2013}', ','].as_slice())
}

/// Render `quote` for insertion, appending `citation` when given.
pub fn format_quote(quote: &Quote, citation: Option<&str>, options: &FormatOptions) -> String {
    let mut text = match options.style {
        QuoteStyle::Blockquote => quote
            .body
            .lines()
            .map(|line| {
                if line.trim().is_empty() {
                    ">".to_string()
                } else {
                    format!("> {}", line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        QuoteStyle::Inline => {
            let body = quote.body.split_whitespace().collect::<Vec<_>>().join(" ");
            let body = if options.normalize_quotes {
                replace_double_quotes(&body)
            } else {
                body
            };
            format!("\"{}\"", body)
        }
    };

    if let Some(citation) = citation {
        text.push(' ');
        text.push_str(citation);
    }
    text
}

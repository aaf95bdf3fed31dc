//! Quotation records parsed from e-reader highlight exports
//!
//! A Kindle "export highlight" paste looks like:
//!
//! ```text
//! We think these are our own thoughts, but they are not.
//!
//! O'Neill, Heather. Daydreams of Angels: Stories (p. 56). (Function). Kindle Edition.
//! ```
//!
//! The trailing citation line carries the authors, title and page. Anything
//! that does not look like that degrades to a body-only quote.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker text that identifies a trailing citation line
pub const CITATION_MARKER: &str = "Kindle Edition";

lazy_static! {
    // Trailing "(Publisher)" or "(p" left on the title segment. Stops at the
    // last opening parenthesis so "An (Un-)Amazing Book" keeps its own group.
    static ref TITLE_NOISE: Regex = Regex::new(r"\s*\([^(]*$").unwrap();

    // "(p. 56)" or "(pp. 12-14)"
    static ref PAGE_REGEX: Regex = Regex::new(r"\(pp?\. ([^)]+)\)").unwrap();
}

/// A pasted quotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Input exactly as pasted
    pub raw: String,
    /// Quotable text; the whole input when no citation line was found
    pub body: String,
    /// Authors in the order the citation line lists them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page label; may be a range or a roman numeral
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl Quote {
    /// A quote with no citation metadata
    pub fn plain(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            body: raw.clone(),
            raw,
            authors: None,
            title: None,
            page: None,
        }
    }

    /// Whether a citation line contributed any metadata
    pub fn has_citation(&self) -> bool {
        self.authors.is_some() || self.title.is_some() || self.page.is_some()
    }
}

/// Parse pasted text into a [`Quote`].
///
/// Never fails: input with fewer than two non-blank lines, or whose last
/// non-blank line lacks [`CITATION_MARKER`], comes back as `body == raw`.
pub fn parse_quote(raw: &str) -> Quote {
    let mut quote = Quote::plain(raw);

    let lines: Vec<&str> = raw
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    // A lone line could be either quote text or a citation; keep it as text.
    let Some((citation_line, body_lines)) = lines.split_last() else {
        return quote;
    };
    if body_lines.is_empty() || !citation_line.contains(CITATION_MARKER) {
        tracing::debug!("no citation line found, keeping raw text as body");
        return quote;
    }

    quote.body = body_lines.join("\n").trim().to_string();

    // Splitting on every period also isolates "(p. 123)" into its own
    // segments, so segment 1 ends in "(p" rather than the page number.
    let segments: Vec<&str> = citation_line.split('.').collect();
    if segments.len() >= 2 {
        quote.authors = Some(
            segments[0]
                .split(';')
                .map(|author| author.trim().to_string())
                .collect(),
        );
        quote.title = Some(TITLE_NOISE.replace(segments[1], "").trim().to_string());
    }

    if let Some(caps) = PAGE_REGEX.captures(citation_line) {
        quote.page = Some(caps[1].to_string());
    }

    tracing::debug!(
        authors = ?quote.authors,
        title = ?quote.title,
        page = ?quote.page,
        "parsed citation line"
    );
    quote
}

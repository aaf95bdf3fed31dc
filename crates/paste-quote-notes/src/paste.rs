//! The paste command: raw clipboard text in, Markdown to insert out

use paste_quote_core::{best_match, parse_quote, MatchResult, Quote};
use serde::Serialize;

use crate::error::Result;
use crate::format::{citation_label, format_quote};
use crate::settings::Settings;
use crate::store::read_references;

/// Result of pasting a highlight into a note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasteOutcome {
    pub quote: Quote,
    /// Reference the citation points at, if one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<MatchResult>,
    /// Markdown to insert at the cursor
    pub text: String,
}

/// Parse `raw`, resolve its citation against the note's bibliography and
/// render the text to insert.
///
/// Quotes without citation metadata are inserted without a label. An
/// unresolved citation uses the configured placeholder key.
pub fn paste_quote(raw: &str, document: &str, settings: &Settings) -> Result<PasteOutcome> {
    let quote = parse_quote(raw);

    if !quote.has_citation() {
        let text = format_quote(&quote, None, &settings.format);
        return Ok(PasteOutcome {
            quote,
            matched: None,
            text,
        });
    }

    let references = read_references(document, &settings.references_key)?;
    let matched = best_match(&quote, &references, &settings.matching);
    match &matched {
        Some(m) => tracing::info!(id = %m.id, score = m.score, "resolved citation"),
        None => tracing::info!(title = ?quote.title, "no matching reference, using placeholder"),
    }

    let label = citation_label(
        matched.as_ref().map(|m| m.id.as_str()),
        quote.page.as_deref(),
        &settings.format.placeholder,
    );
    let text = format_quote(&quote, Some(&label), &settings.format);

    Ok(PasteOutcome {
        quote,
        matched,
        text,
    })
}

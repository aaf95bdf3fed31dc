//! paste-quote-core: turn pasted e-reader highlights into citable quotes
//!
//! This crate provides pure, stateless implementations of:
//! - Citation line parsing (body, authors, title, page)
//! - Quote-mark rewriting for safe nesting
//! - Title normalization and exact title lookup
//! - Fuzzy ranking of bibliography entries against a quote
//!
//! Nothing here performs I/O or keeps state between calls; the host owns
//! the clipboard, the document and the bibliography.

pub mod config;
pub mod error;
pub mod matching;
pub mod quote;
pub mod quote_marks;
pub mod reference;
pub mod title;

pub use config::MatchConfig;
pub use error::{CoreError, Result};
pub use matching::{best_match, rank_references, score_ref_matches, CompositeKey, MatchResult};
pub use quote::{parse_quote, Quote, CITATION_MARKER};
pub use quote_marks::replace_double_quotes;
pub use reference::{references_from_json, IssuedDate, Name, ReferenceRecord};
pub use title::{exact_match, searchable_title};

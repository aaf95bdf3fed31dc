//! paste-quote-notes: paste e-reader highlights into Markdown notes
//!
//! Host-side glue around `paste-quote-core`:
//! - The note's bibliography lives in YAML front matter
//! - Appending references deduplicates by id
//! - Quotes render as blockquotes or inline quotes with a Pandoc citation
//! - Settings persist as TOML in the user's config directory

pub mod error;
pub mod format;
pub mod front_matter;
pub mod paste;
pub mod settings;
pub mod store;

pub use error::{NotesError, Result};
pub use format::{citation_label, format_quote, FormatOptions, QuoteStyle};
pub use front_matter::{split_front_matter, FrontMatter};
pub use paste::{paste_quote, PasteOutcome};
pub use settings::Settings;
pub use store::{
    append_references, load_reference_file, read_references, write_references, AppendReport,
};

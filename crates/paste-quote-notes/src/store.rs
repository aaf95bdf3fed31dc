//! Bibliography kept in a note's front matter
//!
//! References live under a front-matter key (default `references`) as a
//! CSL-style list:
//!
//! ```yaml
//! ---
//! title: Reading notes
//! references:
//!   - id: parfit1984
//!     title: Reasons and Persons
//!     author:
//!       - family: Parfit
//!         given: Derek
//!     issued:
//!       - year: 1984
//! ---
//! ```

use std::collections::HashSet;
use std::path::Path;

use paste_quote_core::{references_from_json, ReferenceRecord};
use serde_yaml::{Mapping, Value};

use crate::error::{NotesError, Result};
use crate::front_matter::split_front_matter;

/// Outcome of appending references to a bibliography
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendReport {
    pub added: usize,
    /// Entries whose id was already present
    pub skipped: usize,
}

/// Read the reference list stored under `key`.
///
/// A document without front matter, or without the key, has no references.
pub fn read_references(document: &str, key: &str) -> Result<Vec<ReferenceRecord>> {
    let Some(front_matter) = split_front_matter(document) else {
        return Ok(Vec::new());
    };
    if front_matter.yaml.trim().is_empty() {
        return Ok(Vec::new());
    }

    let meta: Value = serde_yaml::from_str(front_matter.yaml)?;
    let value = match meta.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value,
    };

    if !value.is_sequence() {
        return Err(NotesError::InvalidBibliography {
            message: format!("`{}` must be a list, found {}", key, describe(value)),
        });
    }

    serde_yaml::from_value(value.clone()).map_err(|e| NotesError::InvalidBibliography {
        message: format!("`{}`: {}", key, e),
    })
}

/// Replace the reference list under `key`, keeping other metadata and the body.
///
/// Front matter is created when the document has none.
pub fn write_references(document: &str, key: &str, references: &[ReferenceRecord]) -> Result<String> {
    let (mut meta, body) = match split_front_matter(document) {
        Some(front_matter) if !front_matter.yaml.trim().is_empty() => {
            (serde_yaml::from_str::<Mapping>(front_matter.yaml)?, front_matter.body)
        }
        Some(front_matter) => (Mapping::new(), front_matter.body),
        None => (Mapping::new(), document),
    };

    meta.insert(Value::String(key.to_string()), serde_yaml::to_value(references)?);
    let yaml = serde_yaml::to_string(&meta)?;

    Ok(format!("---\n{}---\n{}", yaml, body))
}

/// Append `incoming` to `existing`, skipping ids that are already present.
pub fn append_references(
    existing: &mut Vec<ReferenceRecord>,
    incoming: impl IntoIterator<Item = ReferenceRecord>,
) -> AppendReport {
    let mut seen: HashSet<String> = existing.iter().map(|r| r.id.clone()).collect();
    let mut report = AppendReport::default();

    for reference in incoming {
        if seen.insert(reference.id.clone()) {
            existing.push(reference);
            report.added += 1;
        } else {
            tracing::debug!(id = %reference.id, "skipping duplicate reference");
            report.skipped += 1;
        }
    }

    tracing::info!(added = report.added, skipped = report.skipped, "appended references");
    report
}

/// Load references from a CSL-JSON (`.json`) or YAML (`.yaml`/`.yml`) file
pub fn load_reference_file(path: &Path) -> Result<Vec<ReferenceRecord>> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(references_from_json(&contents)?)
    } else {
        let value: Value = serde_yaml::from_str(&contents)?;
        if !value.is_sequence() {
            return Err(NotesError::InvalidBibliography {
                message: format!("{} must contain a list, found {}", path.display(), describe(&value)),
            });
        }
        serde_yaml::from_value(value).map_err(|e| NotesError::InvalidBibliography {
            message: format!("{}: {}", path.display(), e),
        })
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

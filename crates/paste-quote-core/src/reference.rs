//! Bibliography entries as stored in a document's metadata
//!
//! Entries follow a CSL-JSON subset: only the fields used for matching and
//! display are modelled. Every other field is kept in `extra` so entries
//! survive a decode/encode round trip unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A personal name in CSL form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    /// Unmodelled parts such as `suffix` or `literal`
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Name {
    pub fn new(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            given: Some(given.into()),
            extra: BTreeMap::new(),
        }
    }

    /// A name with only a family part
    pub fn family_only(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            given: None,
            extra: BTreeMap::new(),
        }
    }

    /// Family name, or the given name when there is no family name
    pub fn short_name(&self) -> Option<&str> {
        self.family.as_deref().or(self.given.as_deref())
    }

    /// Format as "Family, Given", dropping whichever part is missing
    pub fn sort_form(&self) -> String {
        match (self.family.as_deref(), self.given.as_deref()) {
            (Some(family), Some(given)) => format!("{}, {}", family, given),
            (Some(family), None) => family.to_string(),
            (None, Some(given)) => given.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// One `issued` date part
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedDate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A bibliography entry keyed by its citation id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Citation key; CSL allows integers here too
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Used for matching and display
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<Name>,
    /// Used for display only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editor: Vec<Name>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issued: Vec<IssuedDate>,
    /// `type`, `publisher`, `DOI` and any other field left as decoded
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ReferenceRecord {
    /// Create an entry with only an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            author: Vec::new(),
            editor: Vec::new(),
            issued: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: Name) -> Self {
        self.author.push(author);
        self
    }

    pub fn with_editor(mut self, editor: Name) -> Self {
        self.editor.push(editor);
        self
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.issued.push(IssuedDate {
            year: Some(year),
            ..Default::default()
        });
        self
    }

    /// Year of the first `issued` part, if any
    pub fn year(&self) -> Option<i64> {
        self.issued.first().and_then(|date| date.year)
    }

    /// One-line summary for presenting the entry in a picker.
    ///
    /// Up to four editor-then-author short names, the year, and the title,
    /// joined with single spaces. Empty parts still contribute their
    /// separator, so `"Smith  Title"` is expected for an undated entry.
    pub fn display_summary(&self) -> String {
        let names = self
            .editor
            .iter()
            .chain(self.author.iter())
            .take(4)
            .filter_map(Name::short_name)
            .collect::<Vec<_>>()
            .join(" ");
        let year = self.year().map(|y| y.to_string()).unwrap_or_default();
        let title = self.title.as_deref().unwrap_or("");

        format!("{} {} {}", names, year, title)
    }
}

/// Decode a CSL-JSON array of entries
pub fn references_from_json(json: &str) -> Result<Vec<ReferenceRecord>> {
    Ok(serde_json::from_str(json)?)
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

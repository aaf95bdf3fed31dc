//! Title comparison keys and exact title lookup

use crate::reference::ReferenceRecord;

/// Punctuation dropped from comparison keys
const STRIPPED_PUNCTUATION: &[char] = &['.', ':', ',', '(', ')'];

/// Hyphen-minus plus the Unicode dash variants
const DASHES: &[char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
    '\u{FE58}', '\u{FE63}', '\u{FF0D}',
];

/// Canonical comparison form of a title.
///
/// Lowercases, drops `. : , ( )` and dashes, collapses whitespace and trims.
/// Tolerates punctuation and dash-style differences, not misspellings.
pub fn searchable_title(title: &str) -> String {
    let stripped: String = title
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c) && !DASHES.contains(c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Id of the first reference whose title has the same comparison key.
///
/// Returns `None` when nothing matches or when the title has no
/// comparable content. With duplicate titles the earliest entry wins.
pub fn exact_match<'a>(title: &str, references: &'a [ReferenceRecord]) -> Option<&'a str> {
    let wanted = searchable_title(title);
    if wanted.is_empty() {
        return None;
    }

    references
        .iter()
        .find(|reference| {
            reference
                .title
                .as_deref()
                .is_some_and(|candidate| searchable_title(candidate) == wanted)
        })
        .map(|reference| reference.id.as_str())
}

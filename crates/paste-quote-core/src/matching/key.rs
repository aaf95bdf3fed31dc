//! Composite comparison keys built from a title and its authors

use std::collections::HashSet;

use lazy_static::lazy_static;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::quote::Quote;
use crate::reference::{Name, ReferenceRecord};
use crate::title::searchable_title;

lazy_static! {
    /// Title words too common to count as evidence
    static ref STOP_WORDS: HashSet<&'static str> = {
        let words = [
            "a", "an", "the", "of", "in", "on", "at", "to", "for", "and", "or", "but", "with",
            "by", "from", "as", "is", "are", "was", "were", "be",
        ];
        words.into_iter().collect()
    };
}

/// Which side of the key a word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Title,
    Author,
}

/// A single comparable word of a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyToken {
    pub text: String,
    pub origin: Origin,
}

impl KeyToken {
    /// Character length, used to weight longer words more heavily
    pub fn weight(&self) -> f64 {
        self.text.chars().count() as f64
    }
}

/// Title plus sorted author names, lowercased.
///
/// Author order is discarded so "Last, First" lists compare equal
/// regardless of how many authors are given or how they are ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeKey {
    text: String,
    tokens: Vec<KeyToken>,
}

impl CompositeKey {
    /// Key for a parsed quote, from its title and authors
    pub fn for_quote(quote: &Quote) -> Self {
        let authors: Vec<String> = quote.authors.iter().flatten().cloned().collect();
        Self::build(quote.title.as_deref(), &authors)
    }

    /// Key for a bibliography entry, with authors as "family, given"
    pub fn for_reference(reference: &ReferenceRecord) -> Self {
        let authors: Vec<String> = reference.author.iter().map(Name::sort_form).collect();
        Self::build(reference.title.as_deref(), &authors)
    }

    fn build(title: Option<&str>, authors: &[String]) -> Self {
        let title = title.map(searchable_title).unwrap_or_default();

        let mut names: Vec<String> = authors
            .iter()
            .map(|author| normalize_author(author))
            .filter(|author| !author.is_empty())
            .collect();
        names.sort();

        let mut parts = Vec::with_capacity(names.len() + 1);
        if !title.is_empty() {
            parts.push(title.clone());
        }
        parts.extend(names.iter().cloned());
        let text = parts.join(" ").to_lowercase();

        let title_tokens = title
            .split_whitespace()
            .map(fold)
            .filter(|word| !word.is_empty() && !STOP_WORDS.contains(word.as_str()))
            .map(|text| KeyToken {
                text,
                origin: Origin::Title,
            });
        let author_tokens = names
            .iter()
            .flat_map(|name| name.split_whitespace())
            .map(fold)
            .filter(|word| !word.is_empty())
            .map(|text| KeyToken {
                text,
                origin: Origin::Author,
            });
        let tokens = title_tokens.chain(author_tokens).collect();

        Self { text, tokens }
    }

    /// The full key as a single string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    /// Whether any title word survived normalization
    pub fn has_title(&self) -> bool {
        self.tokens.iter().any(|token| token.origin == Origin::Title)
    }
}

/// Lowercase and drop `.` and `,` from a name
fn normalize_author(author: &str) -> String {
    let stripped: String = author
        .to_lowercase()
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fold diacritics so "gödel" and "godel" compare equal
fn fold(word: &str) -> String {
    word.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

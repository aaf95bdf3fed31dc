//! Ranking bibliography entries against a parsed quote
//!
//! Two paths feed the ranking:
//! - an exact path on normalized titles (see [`crate::title::exact_match`]),
//!   which scores `1.0`;
//! - a fuzzy path comparing composite title+author keys word by word.
//!
//! The fuzzy quality is a Dice-style coverage: each query word is aligned
//! to its most similar unused candidate word (Jaro-Winkler), and the
//! aligned characters on both sides are divided by the total characters of
//! both keys. Candidate author words the query never mentioned count at a
//! reduced weight, so a bare title can still match an entry with a long
//! author list. Aligned title words only count along the heaviest run
//! that keeps the same order on both sides, so reordered shared words are
//! not evidence. A candidate is only kept when at least one title word
//! aligned with a candidate title word.

mod key;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

pub use key::{CompositeKey, KeyToken, Origin};

use crate::config::MatchConfig;
use crate::quote::Quote;
use crate::reference::ReferenceRecord;
use crate::title::exact_match;

/// A ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Citation key of the matched entry
    pub id: String,
    /// Quality in `(0, 1]`; `1.0` is an exact title match
    pub score: f64,
}

impl MatchResult {
    /// Result of the exact title path
    pub fn exact(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            score: 1.0,
        }
    }
}

/// Fuzzy-rank `references` against the quote's title and authors.
///
/// Returns candidates at or above `config.pass_threshold`, best first;
/// equal scores keep bibliography order. A quote without a title always
/// yields an empty list, since authors alone cannot tell works apart.
pub fn score_ref_matches(
    quote: &Quote,
    references: &[ReferenceRecord],
    config: &MatchConfig,
) -> Vec<MatchResult> {
    let query = CompositeKey::for_quote(quote);
    if !query.has_title() {
        tracing::debug!(key = query.as_str(), "no title words in query, skipping fuzzy match");
        return Vec::new();
    }

    let mut results: Vec<MatchResult> = references
        .iter()
        .filter_map(|reference| {
            let candidate = CompositeKey::for_reference(reference);
            let quality = key_quality(&query, &candidate, config)?;
            tracing::debug!(
                id = %reference.id,
                candidate = candidate.as_str(),
                quality,
                "scored reference"
            );
            (quality >= config.pass_threshold).then(|| MatchResult {
                id: reference.id.clone(),
                score: quality,
            })
        })
        .collect();

    sort_by_score(&mut results);
    results
}

/// Exact title hit first at `1.0`, then the remaining fuzzy hits.
pub fn rank_references(
    quote: &Quote,
    references: &[ReferenceRecord],
    config: &MatchConfig,
) -> Vec<MatchResult> {
    let exact = quote
        .title
        .as_deref()
        .and_then(|title| exact_match(title, references))
        .map(MatchResult::exact);

    let fuzzy = score_ref_matches(quote, references, config);

    match exact {
        Some(hit) => {
            let rest: Vec<MatchResult> = fuzzy.into_iter().filter(|m| m.id != hit.id).collect();
            let mut ranked = Vec::with_capacity(rest.len() + 1);
            ranked.push(hit);
            ranked.extend(rest);
            ranked
        }
        None => fuzzy,
    }
}

/// Top-ranked entry, if any; callers fall back to a placeholder on `None`
pub fn best_match(
    quote: &Quote,
    references: &[ReferenceRecord],
    config: &MatchConfig,
) -> Option<MatchResult> {
    rank_references(quote, references, config).into_iter().next()
}

/// Stable sort, descending by score
fn sort_by_score(results: &mut [MatchResult]) {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Quality of `candidate` against `query`, or `None` without title evidence
fn key_quality(query: &CompositeKey, candidate: &CompositeKey, config: &MatchConfig) -> Option<f64> {
    let candidate_tokens = candidate.tokens();
    let mut used = vec![false; candidate_tokens.len()];
    let mut aligned = 0.0;
    // (candidate position, contribution) of title-to-title alignments, in query order
    let mut title_pairs: Vec<(usize, f64)> = Vec::new();

    for word in query.tokens() {
        let mut best: Option<(usize, f64)> = None;
        for (index, other) in candidate_tokens.iter().enumerate() {
            if used[index] {
                continue;
            }
            let similarity = jaro_winkler(&word.text, &other.text);
            if similarity >= config.token_similarity
                && best.map_or(true, |(_, current)| similarity > current)
            {
                best = Some((index, similarity));
            }
        }

        if let Some((index, similarity)) = best {
            used[index] = true;
            let other = &candidate_tokens[index];
            let contribution = similarity * (word.weight() + other.weight());
            if word.origin == Origin::Title && other.origin == Origin::Title {
                title_pairs.push((index, contribution));
            } else {
                aligned += contribution;
            }
        }
    }

    if title_pairs.is_empty() {
        return None;
    }
    // Title words only count while they appear in the same order on both sides
    aligned += ordered_weight(&title_pairs);

    let query_total: f64 = query.tokens().iter().map(KeyToken::weight).sum();
    let candidate_total: f64 = candidate_tokens
        .iter()
        .zip(&used)
        .map(|(token, matched)| {
            if !matched && token.origin == Origin::Author {
                token.weight() * config.author_weight
            } else {
                token.weight()
            }
        })
        .sum();

    let quality = (aligned / (query_total + candidate_total)).min(1.0);
    (quality > 0.0).then_some(quality)
}

/// Heaviest subsequence of `pairs` whose candidate positions strictly increase
fn ordered_weight(pairs: &[(usize, f64)]) -> f64 {
    let mut best: Vec<f64> = Vec::with_capacity(pairs.len());
    for (i, &(position, weight)) in pairs.iter().enumerate() {
        let before = pairs[..i]
            .iter()
            .zip(&best)
            .filter(|((earlier, _), _)| *earlier < position)
            .map(|(_, total)| *total)
            .fold(0.0, f64::max);
        best.push(before + weight);
    }
    best.into_iter().fold(0.0, f64::max)
}

//! Reference matching integration tests

mod common;

use common::fixtures::bibliography;
use paste_quote_core::{
    best_match, exact_match, parse_quote, rank_references, score_ref_matches, MatchConfig, Name,
    Quote, ReferenceRecord,
};
use proptest::prelude::*;
use rstest::rstest;

fn query(title: Option<&str>, authors: &[&str]) -> Quote {
    Quote {
        title: title.map(str::to_string),
        authors: Some(authors.iter().map(|a| a.to_string()).collect()),
        ..Quote::plain("")
    }
}

// === Exact path ===

#[test]
fn test_exact_match_tolerates_punctuation() {
    let refs = bibliography();
    assert_eq!(
        exact_match("Godel, Escher, Bach — An Eternal Golden Braid", &refs),
        None,
        "diacritics are not folded on the exact path"
    );
    assert_eq!(
        exact_match("gödel escher bach an eternal golden braid", &refs),
        Some("hofstadter1979")
    );
    assert_eq!(exact_match("An Un-Amazing Book", &refs), Some("body2020"));
}

#[test]
fn test_exact_match_rejects_near_miss() {
    let refs = vec![ReferenceRecord::new("sidgwick1907").with_title("Methods of Ethics")];
    assert_eq!(exact_match("Methodses of Ethicses", &refs), None);
}

#[test]
fn test_kindle_paste_resolves_to_exact_entry() {
    let raw = "We think these are our own thoughts, but they are not.\n\nO'Neill, Heather. Daydreams of Angels: Stories (p. 56). (Function). Kindle Edition. ";
    let quote = parse_quote(raw);
    let found = best_match(&quote, &bibliography(), &MatchConfig::default()).unwrap();
    assert_eq!(found.id, "oneill2015");
    assert_eq!(found.score, 1.0);
}

#[test]
fn test_short_title_with_long_author_list_uses_exact_path() {
    let found = best_match(&query(Some("Ethics"), &[]), &bibliography(), &MatchConfig::default());
    assert_eq!(found.map(|m| m.id), Some("spinoza1677".to_string()));
}

// === Fuzzy path ===

#[test]
fn test_near_exact_title_ranks_first() {
    let results = score_ref_matches(
        &query(Some("The Methods of Ethic"), &[]),
        &bibliography(),
        &MatchConfig::default(),
    );
    assert!(!results.is_empty());
    assert_eq!(results[0].id, "sidgwick1907");
    assert!(results[0].score > 0.5, "got {}", results[0].score);
}

#[test]
fn test_author_order_does_not_matter() {
    let results = score_ref_matches(
        &query(Some("The Methods of Ethics"), &["Henry Sidgwick"]),
        &bibliography(),
        &MatchConfig::default(),
    );
    assert_eq!(results[0].id, "sidgwick1907");
    assert!((results[0].score - 1.0).abs() < 1e-9);
}

#[rstest]
#[case("Golden Braid", &["Hofstadter, Douglas"], "hofstadter1979")]
#[case("Methods", &["Henry Sidgwick"], "sidgwick1907")]
#[case("Daydreams", &["O'Neill, Heather"], "oneill2015")]
fn test_partial_title_with_author_surfaces(
    #[case] title: &str,
    #[case] authors: &[&str],
    #[case] expected: &str,
) {
    let refs = bibliography();
    let config = MatchConfig::default();

    let with_author = score_ref_matches(&query(Some(title), authors), &refs, &config);
    assert!(!with_author.is_empty(), "no match for {title}");
    assert_eq!(with_author[0].id, expected);

    let without_author = score_ref_matches(&query(Some(title), &[]), &refs, &config);
    assert!(
        without_author.first().map_or(true, |m| m.score < with_author[0].score),
        "the author should strengthen the match"
    );
}

#[rstest]
#[case(None, &["Sidgwick, Henry"])]
#[case(None, &["Parfit, Derek", "O'Neill, Heather"])]
#[case(Some(""), &["Hofstadter, Douglas R."])]
#[case(Some("The Of And"), &["Singer, Peter"])]
fn test_author_only_evidence_is_rejected(#[case] title: Option<&str>, #[case] authors: &[&str]) {
    let q = query(title, authors);
    let refs = bibliography();
    assert!(score_ref_matches(&q, &refs, &MatchConfig::default()).is_empty());
    assert!(rank_references(&q, &refs, &MatchConfig::default()).is_empty());
}

#[rstest]
#[case("Practical Reason", &["Kant, Immanuel"])]
#[case("Stories", &[])]
#[case("Book", &["Smith, John"])]
#[case("Ethics", &["Curley, Edwin"])]
#[case("The Ethics of Practical Reason", &["Kant, Immanuel"])]
fn test_weak_evidence_is_rejected(#[case] title: &str, #[case] authors: &[&str]) {
    let results = score_ref_matches(
        &query(Some(title), authors),
        &bibliography(),
        &MatchConfig::default(),
    );
    assert!(results.is_empty(), "unexpected matches: {:?}", results);
}

#[test]
fn test_duplicate_titles_keep_input_order() {
    let refs = vec![
        ReferenceRecord::new("singer2011b")
            .with_title("Practical Ethics")
            .with_author(Name::new("Singer", "Peter")),
        ReferenceRecord::new("singer2011a")
            .with_title("Practical Ethics")
            .with_author(Name::new("Singer", "Peter")),
    ];
    let q = query(Some("Practical Ethics"), &[]);

    let fuzzy = score_ref_matches(&q, &refs, &MatchConfig::default());
    let ids: Vec<&str> = fuzzy.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["singer2011b", "singer2011a"]);

    assert_eq!(exact_match("Practical Ethics", &refs), Some("singer2011b"));
}

#[test]
fn test_results_sorted_descending() {
    let results = score_ref_matches(
        &query(Some("Ethics"), &["Spinoza, Benedict de"]),
        &bibliography(),
        &MatchConfig::default(),
    );
    assert_eq!(results[0].id, "spinoza1677");
    assert!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
    assert!(results.iter().all(|m| m.score > 0.0 && m.score <= 1.0));
}

#[test]
fn test_bibliography_is_not_mutated() {
    let refs = bibliography();
    let before = refs.clone();
    let _ = rank_references(
        &query(Some("Reasons and Persons"), &["Parfit, Derek"]),
        &refs,
        &MatchConfig::default(),
    );
    assert_eq!(refs, before);
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_authors_without_title_never_match(
        authors in prop::collection::vec("[A-Z][a-z]{2,10}, [A-Z][a-z]{2,8}", 1..4)
    ) {
        let authors: Vec<&str> = authors.iter().map(String::as_str).collect();
        let results = score_ref_matches(&query(None, &authors), &bibliography(), &MatchConfig::default());
        prop_assert!(results.is_empty());
    }

    #[test]
    fn test_scores_stay_in_range(title in "[a-zA-Z ]{1,30}") {
        let results = score_ref_matches(&query(Some(title.as_str()), &[]), &bibliography(), &MatchConfig::default());
        for m in results {
            prop_assert!(m.score >= 0.5 && m.score <= 1.0, "score out of range: {}", m.score);
        }
    }
}

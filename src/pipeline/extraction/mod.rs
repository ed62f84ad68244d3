//! Keyword-driven sentence selection over unstructured summaries.
//!
//! This is a heuristic, not a parser: spans are cut at sentence-ending
//! punctuation followed by whitespace (or the end of the text) and kept
//! when they mention one of the requested keywords.

pub mod keywords;

pub use keywords::category_keywords;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::FieldCategory;

/// Maximum spans returned per extraction.
pub const MAX_SPANS: usize = 5;

/// Spans shorter than this (in characters) are discarded.
pub const MIN_SPAN_CHARS: usize = 6;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s|$)").expect("Invalid sentence boundary pattern"));

/// Select up to `MAX_SPANS` distinct sentence-like spans of `text` that
/// mention at least one keyword (case-insensitive), in order of appearance.
pub fn extract_relevant<K: AsRef<str>>(text: &str, keywords: &[K]) -> Vec<String> {
    let needles: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut spans = Vec::new();

    for span in SENTENCE_BOUNDARY.split(text).map(str::trim) {
        if span.chars().count() < MIN_SPAN_CHARS {
            continue;
        }
        let lower = span.to_lowercase();
        if !needles.iter().any(|k| lower.contains(k.as_str())) {
            continue;
        }
        if seen.insert(span) {
            spans.push(span.to_string());
            if spans.len() == MAX_SPANS {
                break;
            }
        }
    }

    spans
}

/// Extract the spans relevant to one card section.
pub fn extract_field(text: &str, category: FieldCategory) -> Vec<String> {
    extract_relevant(text, category_keywords(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALARIA_SUMMARY: &str = "Malaria is a mosquito-borne infectious disease. \
        Symptoms usually begin ten to fifteen days after being bitten. \
        It is caused by single-celled microorganisms of the Plasmodium group! \
        The disease is most commonly spread by an infected female Anopheles mosquito. \
        Risk can be reduced by preventing mosquito bites through the use of mosquito nets. \
        Treatment with artemisinin-based combination therapy is recommended? \
        Signs include fever. Ok.";

    fn assert_contract(spans: &[String], keywords: &[&str]) {
        assert!(spans.len() <= MAX_SPANS);
        let distinct: HashSet<&String> = spans.iter().collect();
        assert_eq!(distinct.len(), spans.len(), "duplicate spans: {spans:?}");
        for span in spans {
            assert!(span.chars().count() >= MIN_SPAN_CHARS, "short span {span:?}");
            let lower = span.to_lowercase();
            assert!(
                keywords.iter().any(|k| lower.contains(&k.to_lowercase())),
                "span without keyword {span:?}"
            );
        }
    }

    #[test]
    fn selects_sentences_mentioning_keywords() {
        let spans = extract_relevant(MALARIA_SUMMARY, &["caused", "spread"]);
        assert_eq!(
            spans,
            vec![
                "It is caused by single-celled microorganisms of the Plasmodium group",
                "The disease is most commonly spread by an infected female Anopheles mosquito",
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let spans = extract_relevant(MALARIA_SUMMARY, &["SYMPTOM"]);
        assert_eq!(spans, vec!["Symptoms usually begin ten to fifteen days after being bitten"]);
    }

    #[test]
    fn splits_on_question_and_exclamation_marks() {
        let spans = extract_relevant(MALARIA_SUMMARY, &["therapy"]);
        assert_eq!(
            spans,
            vec!["Treatment with artemisinin-based combination therapy is recommended"]
        );
    }

    #[test]
    fn does_not_split_inside_numbers() {
        let spans = extract_relevant("The usual dose is 2.5 mg daily. Nothing else", &["dose"]);
        assert_eq!(spans, vec!["The usual dose is 2.5 mg daily"]);
    }

    #[test]
    fn discards_spans_of_five_characters_or_fewer() {
        let spans = extract_relevant("Fever. Fevers. High fever.", &["fever"]);
        assert_eq!(spans, vec!["Fevers", "High fever"]);
    }

    #[test]
    fn removes_duplicates_preserving_first_occurrence() {
        let text = "Rest helps recovery. Drink water. Rest helps recovery. Water is good.";
        let spans = extract_relevant(text, &["rest", "water"]);
        assert_eq!(
            spans,
            vec!["Rest helps recovery", "Drink water", "Water is good"]
        );
    }

    #[test]
    fn returns_at_most_five_spans() {
        let text = (1..=8)
            .map(|i| format!("Risk factor number {i} applies"))
            .collect::<Vec<_>>()
            .join(". ");
        let spans = extract_relevant(&text, &["risk"]);
        assert_eq!(spans.len(), MAX_SPANS);
        assert_eq!(spans[0], "Risk factor number 1 applies");
        assert_eq!(spans[4], "Risk factor number 5 applies");
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract_relevant("", &["anything"]).is_empty());
        assert!(extract_field("", FieldCategory::Symptoms).is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let keywords = category_keywords(FieldCategory::Precautions);
        let first = extract_relevant(MALARIA_SUMMARY, keywords);
        let second = extract_relevant(MALARIA_SUMMARY, keywords);
        assert_eq!(first, second);
    }

    #[test]
    fn every_category_honours_the_contract() {
        for category in FieldCategory::ALL {
            let spans = extract_field(MALARIA_SUMMARY, category);
            assert_contract(&spans, category_keywords(category));
        }
    }

    #[test]
    fn field_extraction_uses_category_keywords() {
        let spans = extract_field(MALARIA_SUMMARY, FieldCategory::Causes);
        assert_eq!(
            spans,
            vec!["It is caused by single-celled microorganisms of the Plasmodium group"]
        );
    }
}

//! Symptom search over the catalog vocabulary.
//!
//! Substring hits on the label come first, in vocabulary order. Only when
//! nothing contains the term do we fall back to fuzzy matching, so typos
//! like "feaver" still find "Fever".

use strsim::{jaro_winkler, normalized_levenshtein};

use super::ConditionCatalog;
use crate::models::Symptom;

/// Minimum similarity for a fuzzy suggestion.
const MIN_FUZZY_SIMILARITY: f64 = 0.75;

impl ConditionCatalog {
    /// Find vocabulary entries matching a free-text search term.
    ///
    /// An empty (or all-whitespace) term returns the whole vocabulary.
    pub fn search_symptoms(&self, term: &str) -> Vec<&Symptom> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.symptoms().iter().collect();
        }

        let substring_hits: Vec<&Symptom> = self
            .symptoms()
            .iter()
            .filter(|s| s.label.to_lowercase().contains(&term) || s.id.contains(&term))
            .collect();

        if !substring_hits.is_empty() {
            return substring_hits;
        }

        let mut fuzzy_hits: Vec<(&Symptom, f64)> = self
            .symptoms()
            .iter()
            .map(|s| (s, label_similarity(&term, &s.label)))
            .filter(|(_, score)| *score >= MIN_FUZZY_SIMILARITY)
            .collect();

        fuzzy_hits.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        fuzzy_hits.into_iter().map(|(s, _)| s).collect()
    }
}

/// Best similarity between the term and either the whole label or any word in it.
fn label_similarity(term: &str, label: &str) -> f64 {
    let label_lower = label.to_lowercase();
    let whole = fuzzy_match(term, &label_lower);

    label_lower
        .split_whitespace()
        .map(|word| fuzzy_match(term, word))
        .fold(whole, f64::max)
}

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler rewards shared prefixes, Levenshtein overall edit distance
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    jw * 0.6 + lev * 0.4
}

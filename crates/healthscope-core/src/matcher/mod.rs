//! Weighted symptom matcher.
//!
//! Scoring per condition:
//! - Start from the condition's prior weight
//! - Add the weight of every selected symptom the condition recognizes
//! - Drop conditions with no recognized symptom
//! - Confidence = score / (selected + 1), shown as a percentage capped at 99
//!
//! Results are ranked by raw score, not by confidence.

mod scheduler;

pub use scheduler::*;

use tracing::debug;

use crate::catalog::ConditionCatalog;
use crate::models::{Condition, MatchResult, SymptomSelection};

/// Highest confidence percentage ever reported.
pub const MAX_CONFIDENCE_PERCENT: f64 = 99.0;

/// Added to the selection size when normalizing the score.
const SMOOTHING_TERM: f64 = 1.0;

/// Matcher bound to a catalog.
pub struct SymptomMatcher<'c> {
    catalog: &'c ConditionCatalog,
}

impl<'c> SymptomMatcher<'c> {
    pub fn new(catalog: &'c ConditionCatalog) -> Self {
        Self { catalog }
    }

    /// Rank catalog conditions against the selected symptoms.
    pub fn match_symptoms(&self, selected: &SymptomSelection) -> Vec<MatchResult<'c>> {
        match_symptoms(selected, self.catalog.conditions())
    }

    pub fn catalog(&self) -> &'c ConditionCatalog {
        self.catalog
    }
}

/// Rank conditions against the selected symptoms.
///
/// Total over its inputs: an empty selection or empty catalog yields an
/// empty list, and unknown symptom ids never match anything.
pub fn match_symptoms<'c>(
    selected: &SymptomSelection,
    conditions: &'c [Condition],
) -> Vec<MatchResult<'c>> {
    let mut results: Vec<MatchResult<'c>> = conditions
        .iter()
        .filter_map(|condition| score_condition(condition, selected))
        .collect();

    // Stable sort: equal scores keep catalog order
    results.sort_by(|a, b| {
        b.raw_score
            .partial_cmp(&a.raw_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        selected = selected.len(),
        matched = results.len(),
        top = ?results.first().map(|r| r.name()),
        "symptom match complete"
    );

    results
}

/// Score a single condition, or `None` if it recognizes none of the selection.
fn score_condition<'c>(
    condition: &'c Condition,
    selected: &SymptomSelection,
) -> Option<MatchResult<'c>> {
    let mut raw_score = condition.prior_weight;
    let mut matched_symptom_ids = Vec::new();

    for symptom in selected.iter() {
        if let Some(weight) = condition.weight_of(symptom) {
            raw_score += weight;
            matched_symptom_ids.push(symptom.to_string());
        }
    }

    if matched_symptom_ids.is_empty() {
        return None;
    }

    let confidence = raw_score / (selected.len() as f64 + SMOOTHING_TERM);

    Some(MatchResult {
        condition,
        matched_count: matched_symptom_ids.len(),
        matched_symptom_ids,
        raw_score,
        confidence,
        confidence_percent: confidence_percent(confidence),
    })
}

/// Convert a confidence ratio to a capped display percentage.
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).min(MAX_CONFIDENCE_PERCENT).max(0.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TriageLevel;

    fn small_catalog() -> Vec<Condition> {
        vec![
            Condition::new("Alpha", 1.0, TriageLevel::Low)
                .with_symptom("fever", 1.0)
                .with_symptom("cough", 0.5),
            Condition::new("Beta", 0.2, TriageLevel::High).with_symptom("rash", 2.0),
            Condition::new("Gamma", 1.0, TriageLevel::Medium)
                .with_symptom("fever", 1.0)
                .with_symptom("cough", 0.5),
        ]
    }

    #[test]
    fn test_empty_selection_yields_nothing() {
        let conditions = small_catalog();
        assert!(match_symptoms(&SymptomSelection::new(), &conditions).is_empty());
    }

    #[test]
    fn test_empty_catalog_yields_nothing() {
        let selection: SymptomSelection = ["fever"].into_iter().collect();
        assert!(match_symptoms(&selection, &[]).is_empty());
    }

    #[test]
    fn test_unmatched_conditions_dropped() {
        let conditions = small_catalog();
        let selection: SymptomSelection = ["rash"].into_iter().collect();
        let results = match_symptoms(&selection, &conditions);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "Beta");
        assert_eq!(results[0].matched_symptom_ids, vec!["rash"]);
    }

    #[test]
    fn test_score_and_confidence() {
        let conditions = small_catalog();
        let selection: SymptomSelection = ["fever", "cough", "unknown"].into_iter().collect();
        let results = match_symptoms(&selection, &conditions);

        let alpha = &results[0];
        assert_eq!(alpha.matched_count, 2);
        assert!((alpha.raw_score - 2.5).abs() < 1e-9);
        // 2.5 / (3 + 1)
        assert!((alpha.confidence - 0.625).abs() < 1e-9);
        assert_eq!(alpha.confidence_percent, 63);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let conditions = small_catalog();
        let selection: SymptomSelection = ["fever"].into_iter().collect();
        let results = match_symptoms(&selection, &conditions);

        let names: Vec<&str> = results.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_confidence_percent_capped() {
        assert_eq!(confidence_percent(1.3), 99);
        assert_eq!(confidence_percent(0.994), 99);
        assert_eq!(confidence_percent(0.4), 40);
        assert_eq!(confidence_percent(0.0), 0);
    }

    #[test]
    fn test_matcher_uses_catalog() {
        let catalog = ConditionCatalog::new(Vec::new(), small_catalog()).unwrap();
        let matcher = SymptomMatcher::new(&catalog);
        let selection: SymptomSelection = ["rash", "fever"].into_iter().collect();

        let results = matcher.match_symptoms(&selection);
        assert_eq!(results.len(), 3);
        // Beta: 0.2 + 2.0 = 2.2, Alpha/Gamma: 1.0 + 1.0 = 2.0
        assert_eq!(results[0].name(), "Beta");
    }
}

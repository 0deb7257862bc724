//! Symptom matching result models.

use serde::Serialize;

use super::condition::{Condition, TriageLevel};

/// A condition that matched at least one selected symptom.
///
/// Derived per analysis and never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResult<'c> {
    /// The catalog entry that matched
    pub condition: &'c Condition,
    /// Selected symptom ids the condition recognizes, in selection order
    pub matched_symptom_ids: Vec<String>,
    /// Always equal to `matched_symptom_ids.len()`
    pub matched_count: usize,
    /// Prior weight plus the weights of all matched symptoms
    pub raw_score: f64,
    /// Raw score smoothed by the selection size
    pub confidence: f64,
    /// Confidence as a display percentage, capped at 99
    pub confidence_percent: u32,
}

impl MatchResult<'_> {
    pub fn name(&self) -> &str {
        &self.condition.name
    }

    pub fn triage_level(&self) -> TriageLevel {
        self.condition.triage_level
    }
}

//! Condition catalog models.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency classification of a condition.
///
/// Variants are declared from least to most urgent, so the derived `Ord`
/// ranks `Emergency` highest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TriageLevel {
    Low,
    Medium,
    High,
    Emergency,
}

impl TriageLevel {
    /// Lowercase key as used in the catalog resource.
    pub fn key(&self) -> &'static str {
        match self {
            TriageLevel::Low => "low",
            TriageLevel::Medium => "medium",
            TriageLevel::High => "high",
            TriageLevel::Emergency => "emergency",
        }
    }

    /// Capitalized label shown on the triage badge.
    pub fn label(&self) -> &'static str {
        match self {
            TriageLevel::Low => "Low",
            TriageLevel::Medium => "Medium",
            TriageLevel::High => "High",
            TriageLevel::Emergency => "Emergency",
        }
    }

    /// Badge icon.
    pub fn icon(&self) -> &'static str {
        match self {
            TriageLevel::Low => "✓",
            TriageLevel::Medium => "⚠️",
            TriageLevel::High => "🚨",
            TriageLevel::Emergency => "🆘",
        }
    }

    /// Style class for web front ends (e.g., "triage-high").
    pub fn css_class(&self) -> String {
        format!("triage-{}", self.key())
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A named illness in the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    /// Display name (e.g., "Dengue Fever")
    pub name: String,
    /// Baseline score before any symptom matches
    pub prior_weight: f64,
    /// Urgency of the condition
    pub triage_level: TriageLevel,
    /// One-line description
    pub description: String,
    /// Symptom id → positive weight
    pub symptom_weights: BTreeMap<String, f64>,
    /// Recommended actions, most important first
    pub recommendations: Vec<String>,
}

impl Condition {
    /// Create a condition with no symptom weights or recommendations.
    pub fn new(name: impl Into<String>, prior_weight: f64, triage_level: TriageLevel) -> Self {
        Self {
            name: name.into(),
            prior_weight,
            triage_level,
            description: String::new(),
            symptom_weights: BTreeMap::new(),
            recommendations: Vec::new(),
        }
    }

    /// Builder-style helper for setting a symptom weight.
    pub fn with_symptom(mut self, symptom_id: impl Into<String>, weight: f64) -> Self {
        self.symptom_weights.insert(symptom_id.into(), weight);
        self
    }

    /// Weight of a symptom for this condition, if it is recognized.
    pub fn weight_of(&self, symptom_id: &str) -> Option<f64> {
        self.symptom_weights.get(symptom_id).copied()
    }

    /// Check if this condition recognizes a symptom.
    pub fn recognizes(&self, symptom_id: &str) -> bool {
        self.symptom_weights.contains_key(symptom_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triage_presentation() {
        assert_eq!(TriageLevel::Low.label(), "Low");
        assert_eq!(TriageLevel::Emergency.icon(), "🆘");
        assert_eq!(TriageLevel::High.css_class(), "triage-high");
        assert_eq!(TriageLevel::Medium.to_string(), "medium");
    }

    #[test]
    fn test_triage_ordering() {
        assert!(TriageLevel::Emergency > TriageLevel::High);
        assert!(TriageLevel::High > TriageLevel::Medium);
        assert!(TriageLevel::Medium > TriageLevel::Low);
    }

    #[test]
    fn test_triage_serde_lowercase() {
        let json = serde_json::to_string(&TriageLevel::Emergency).unwrap();
        assert_eq!(json, "\"emergency\"");

        let parsed: TriageLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, TriageLevel::Medium);
    }

    #[test]
    fn test_symptom_lookup() {
        let condition = Condition::new("Test Fever", 1.0, TriageLevel::Low)
            .with_symptom("fever", 1.5)
            .with_symptom("cough", 1.2);

        assert_eq!(condition.weight_of("fever"), Some(1.5));
        assert!(condition.recognizes("cough"));
        assert!(!condition.recognizes("rash"));
        assert_eq!(condition.weight_of("rash"), None);
    }
}

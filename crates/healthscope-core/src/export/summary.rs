//! Analysis summary for display front ends.

use serde::{Deserialize, Serialize};

use crate::catalog::ConditionCatalog;
use crate::models::{MatchResult, SymptomSelection, TriageLevel};

/// Heading shown when nothing matched.
pub const NO_MATCH_TITLE: &str = "No Clear Match Found";

/// Advice shown when nothing matched.
pub const NO_MATCH_MESSAGE: &str = "The selected symptoms don't match our database patterns clearly. \
Please consult a healthcare professional for proper diagnosis.";

/// Shown under every set of results.
pub const DISCLAIMER: &str = "This is an automated assessment tool and not a substitute for \
professional medical advice. Please consult a qualified healthcare provider for accurate \
diagnosis and treatment.";

/// Urgency badge derived from the top-ranked match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriageBadge {
    pub level: TriageLevel,
    /// e.g., "High Priority"
    pub label: String,
    pub icon: String,
    pub css_class: String,
}

impl From<TriageLevel> for TriageBadge {
    fn from(level: TriageLevel) -> Self {
        Self {
            level,
            label: format!("{} Priority", level.label()),
            icon: level.icon().to_string(),
            css_class: level.css_class(),
        }
    }
}

/// One ranked condition in a summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryEntry {
    pub name: String,
    pub description: String,
    pub triage_level: TriageLevel,
    pub matched_count: usize,
    pub raw_score: f64,
    /// Uncapped score ratio
    pub confidence: f64,
    pub confidence_percent: u32,
    /// Display labels of the matched symptoms
    pub matched_symptoms: Vec<String>,
}

/// What the analysis produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    NoClearMatch {
        title: String,
        message: String,
    },
    Matched {
        triage: TriageBadge,
        entries: Vec<SummaryEntry>,
        recommendations: Vec<String>,
        disclaimer: String,
    },
}

/// Presentation model for one analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSummary {
    /// Selected symptom ids in selection order
    pub selected_symptoms: Vec<String>,
    /// Timestamp of the analysis
    pub analyzed_at: String,
    pub outcome: AnalysisOutcome,
}

impl AnalysisSummary {
    /// Build a summary from ranked matches.
    ///
    /// Lists at most `display_limit` entries. Triage and recommendations
    /// come from the top match only.
    pub fn from_matches(
        matches: &[MatchResult<'_>],
        catalog: &ConditionCatalog,
        selection: &SymptomSelection,
        display_limit: usize,
    ) -> Self {
        let outcome = match matches.first() {
            None => AnalysisOutcome::NoClearMatch {
                title: NO_MATCH_TITLE.to_string(),
                message: NO_MATCH_MESSAGE.to_string(),
            },
            Some(top) => AnalysisOutcome::Matched {
                triage: TriageBadge::from(top.triage_level()),
                entries: matches
                    .iter()
                    .take(display_limit)
                    .map(|m| SummaryEntry {
                        name: m.condition.name.clone(),
                        description: m.condition.description.clone(),
                        triage_level: m.triage_level(),
                        matched_count: m.matched_count,
                        raw_score: m.raw_score,
                        confidence: m.confidence,
                        confidence_percent: m.confidence_percent,
                        matched_symptoms: m
                            .matched_symptom_ids
                            .iter()
                            .map(|id| catalog.label_for(id).to_string())
                            .collect(),
                    })
                    .collect(),
                recommendations: top.condition.recommendations.clone(),
                disclaimer: DISCLAIMER.to_string(),
            },
        };

        Self {
            selected_symptoms: selection.as_slice().to_vec(),
            analyzed_at: chrono::Utc::now().to_rfc3339(),
            outcome,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self.outcome, AnalysisOutcome::Matched { .. })
    }

    /// Badge of the top match, if any.
    pub fn triage(&self) -> Option<&TriageBadge> {
        match &self.outcome {
            AnalysisOutcome::Matched { triage, .. } => Some(triage),
            AnalysisOutcome::NoClearMatch { .. } => None,
        }
    }

    /// Listed entries (empty when nothing matched).
    pub fn entries(&self) -> &[SummaryEntry] {
        match &self.outcome {
            AnalysisOutcome::Matched { entries, .. } => entries,
            AnalysisOutcome::NoClearMatch { .. } => &[],
        }
    }

    /// Recommendations of the top match (empty when nothing matched).
    pub fn recommendations(&self) -> &[String] {
        match &self.outcome {
            AnalysisOutcome::Matched {
                recommendations, ..
            } => recommendations,
            AnalysisOutcome::NoClearMatch { .. } => &[],
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export as plain text for terminals.
    pub fn to_text(&self) -> String {
        let mut text = String::new();

        match &self.outcome {
            AnalysisOutcome::NoClearMatch { title, message } => {
                text.push_str(&format!("🤔 {}\n", title));
                text.push_str(&format!("{}\n", message));
            }
            AnalysisOutcome::Matched {
                triage,
                entries,
                recommendations,
                disclaimer,
            } => {
                text.push_str(&format!("{} {}\n\n", triage.icon, triage.label));
                text.push_str("Analysis Results\n");
                for (rank, entry) in entries.iter().enumerate() {
                    text.push_str(&format!(
                        "  {}. {} ({}% Match)\n",
                        rank + 1,
                        entry.name,
                        entry.confidence_percent
                    ));
                    text.push_str(&format!("     {}\n", entry.description));
                }

                text.push_str("\n💡 Recommended Actions\n");
                for recommendation in recommendations {
                    text.push_str(&format!("  - {}\n", recommendation));
                }

                text.push_str(&format!("\n⚠️ Disclaimer: {}\n", disclaimer));
            }
        }

        text
    }
}

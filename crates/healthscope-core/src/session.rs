//! Analysis session: the owned replacement for global symptom-checker state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ConditionCatalog;
use crate::export::AnalysisSummary;
use crate::matcher::{match_symptoms, scheduler_for_delay, AnalysisScheduler};
use crate::models::{MatchResult, SymptomSelection};

/// Number of matches shown in a summary unless configured otherwise.
pub const DEFAULT_DISPLAY_LIMIT: usize = 3;

/// Session tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// How many ranked conditions a summary lists
    pub display_limit: usize,
    /// Artificial pause before each analysis (0 = immediate)
    pub analysis_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            display_limit: DEFAULT_DISPLAY_LIMIT,
            analysis_delay_ms: 0,
        }
    }
}

impl SessionConfig {
    /// Parse a config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Symptom-checker state owned by one UI session.
pub struct AnalysisSession {
    catalog: Arc<ConditionCatalog>,
    selection: SymptomSelection,
    config: SessionConfig,
    scheduler: Box<dyn AnalysisScheduler>,
}

impl AnalysisSession {
    /// Create a session with default settings.
    pub fn new(catalog: Arc<ConditionCatalog>) -> Self {
        Self::with_config(catalog, SessionConfig::default())
    }

    /// Create a session whose scheduler follows the configured delay.
    pub fn with_config(catalog: Arc<ConditionCatalog>, config: SessionConfig) -> Self {
        Self {
            catalog,
            selection: SymptomSelection::new(),
            scheduler: scheduler_for_delay(config.analysis_delay_ms),
            config,
        }
    }

    /// Replace the scheduling hook.
    pub fn with_scheduler(mut self, scheduler: Box<dyn AnalysisScheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn catalog(&self) -> &ConditionCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Flip a symptom on or off. Returns true if it is now selected.
    pub fn toggle(&mut self, symptom_id: &str) -> bool {
        self.note_unknown_symptom(symptom_id);
        self.selection.toggle(symptom_id)
    }

    /// Select a symptom. Returns false if it was already selected.
    pub fn select(&mut self, symptom_id: &str) -> bool {
        self.note_unknown_symptom(symptom_id);
        self.selection.insert(symptom_id)
    }

    /// Deselect a symptom. Returns false if it was not selected.
    pub fn deselect(&mut self, symptom_id: &str) -> bool {
        self.selection.remove(symptom_id)
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> &SymptomSelection {
        &self.selection
    }

    /// Whether the analyze action should be enabled.
    pub fn can_analyze(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Run the scheduling hook, then rank conditions for the current selection.
    pub fn analyze(&self) -> Vec<MatchResult<'_>> {
        self.scheduler.before_analysis();
        match_symptoms(&self.selection, self.catalog.conditions())
    }

    /// Analyze and build the presentation summary.
    pub fn summarize(&self) -> AnalysisSummary {
        let matches = self.analyze();
        AnalysisSummary::from_matches(
            &matches,
            &self.catalog,
            &self.selection,
            self.config.display_limit,
        )
    }

    fn note_unknown_symptom(&self, symptom_id: &str) {
        if !self.catalog.knows_symptom(symptom_id) {
            debug!(symptom = symptom_id, "symptom is not in the catalog and will never match");
        }
    }
}

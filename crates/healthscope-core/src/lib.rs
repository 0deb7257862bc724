//! HealthScope BD Core Library
//!
//! Local symptom checker and disease-hotspot data for Bangladesh.
//!
//! # Architecture
//!
//! ```text
//!  Symptom grid ──toggle──► SymptomSelection
//!                                 │
//!                           [AnalysisScheduler]
//!                                 │
//!                                 ▼
//!            ConditionCatalog ──► match_symptoms ──► ranked MatchResult
//!                                                        │
//!                                                        ▼
//!                                                 AnalysisSummary
//!                                           (triage badge, top entries,
//!                                            recommendations, disclaimer)
//!
//!  HotspotAtlas ──► LayerRegistry (visibility, gradients, statistics)
//!  CaseReportForm ──validate──► CommunityBoard ──► Toast
//! ```
//!
//! # Core Principle
//!
//! **Scores are heuristics, not diagnoses.** Every matched summary carries the
//! disclaimer, and confidence never displays above 99%.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Symptom, Condition, MatchResult, etc.)
//! - [`catalog`]: Validated condition table and symptom search
//! - [`matcher`]: Weighted-sum scoring and ranking
//! - [`session`]: Per-session symptom selection and analysis
//! - [`export`]: Analysis summaries as JSON or text
//! - [`regions`]: Divisions and districts
//! - [`hotspots`]: Heatmap layers and their display state
//! - [`community`]: Community case reports
//! - [`tips`], [`navigation`]: Static page content helpers

pub mod catalog;
pub mod community;
pub mod export;
pub mod hotspots;
pub mod matcher;
pub mod models;
pub mod navigation;
pub mod regions;
pub mod session;
pub mod tips;

// Re-export commonly used types
pub use catalog::{CatalogError, ConditionCatalog};
pub use community::{CaseReport, CaseReportForm, CommunityBoard, ReportError, Toast, ToastKind};
pub use export::{AnalysisOutcome, AnalysisSummary, SummaryEntry, TriageBadge};
pub use hotspots::{HotspotAtlas, HotspotError, LayerRegistry};
pub use matcher::{match_symptoms, SymptomMatcher};
pub use models::{Condition, MatchResult, Symptom, SymptomSelection, TriageLevel};
pub use regions::Division;
pub use session::{AnalysisSession, SessionConfig};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HealthScopeError {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Hotspot error: {0}")]
    HotspotError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock poisoned: {0}")]
    LockError(String),
}

impl From<CatalogError> for HealthScopeError {
    fn from(e: CatalogError) -> Self {
        HealthScopeError::CatalogError(e.to_string())
    }
}

impl From<HotspotError> for HealthScopeError {
    fn from(e: HotspotError) -> Self {
        match e {
            HotspotError::UnknownLayer(_) => HealthScopeError::InvalidInput(e.to_string()),
            _ => HealthScopeError::HotspotError(e.to_string()),
        }
    }
}

impl From<ReportError> for HealthScopeError {
    fn from(e: ReportError) -> Self {
        HealthScopeError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for HealthScopeError {
    fn from(e: serde_json::Error) -> Self {
        HealthScopeError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for HealthScopeError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        HealthScopeError::LockError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a core backed by the built-in condition table.
#[uniffi::export]
pub fn open_builtin() -> Result<Arc<HealthScopeCore>, HealthScopeError> {
    HealthScopeCore::open(ConditionCatalog::builtin()?)
}

/// Open a core backed by a condition table supplied as JSON.
#[uniffi::export]
pub fn open_with_catalog_json(json: String) -> Result<Arc<HealthScopeCore>, HealthScopeError> {
    HealthScopeCore::open(ConditionCatalog::from_json(&json)?)
}

/// Static health tips.
#[uniffi::export]
pub fn list_health_tips() -> Vec<FfiHealthTip> {
    tips::health_tips().iter().map(|t| (*t).into()).collect()
}

/// Id of the page section to highlight for a scroll offset.
#[uniffi::export]
pub fn resolve_active_section(sections: Vec<FfiSection>, scroll_y: f64) -> String {
    let sections: Vec<navigation::Section> = sections.into_iter().map(|s| s.into()).collect();
    navigation::active_section(&sections, scroll_y).to_string()
}

// =========================================================================
// Main API Object
// =========================================================================

struct CoreState {
    session: AnalysisSession,
    board: CommunityBoard,
    layers: LayerRegistry,
}

/// Thread-safe session wrapper for FFI.
#[derive(uniffi::Object)]
pub struct HealthScopeCore {
    state: Mutex<CoreState>,
}

impl HealthScopeCore {
    fn open(catalog: ConditionCatalog) -> Result<Arc<Self>, HealthScopeError> {
        let atlas = HotspotAtlas::builtin()?;
        Ok(Arc::new(Self {
            state: Mutex::new(CoreState {
                session: AnalysisSession::new(Arc::new(catalog)),
                board: CommunityBoard::new(),
                layers: LayerRegistry::new(Arc::new(atlas)),
            }),
        }))
    }
}

#[uniffi::export]
impl HealthScopeCore {
    // =========================================================================
    // Symptom Operations
    // =========================================================================

    /// All selectable symptoms in grid order.
    pub fn list_symptoms(&self) -> Result<Vec<FfiSymptom>, HealthScopeError> {
        let state = self.state.lock()?;
        Ok(state
            .session
            .catalog()
            .symptoms()
            .iter()
            .map(|s| s.clone().into())
            .collect())
    }

    /// Filter the symptom grid by a search term.
    pub fn search_symptoms(&self, term: String) -> Result<Vec<FfiSymptom>, HealthScopeError> {
        let state = self.state.lock()?;
        Ok(state
            .session
            .catalog()
            .search_symptoms(&term)
            .into_iter()
            .map(|s| s.clone().into())
            .collect())
    }

    /// Flip a symptom. Returns true if it is now selected.
    pub fn toggle_symptom(&self, symptom_id: String) -> Result<bool, HealthScopeError> {
        let mut state = self.state.lock()?;
        Ok(state.session.toggle(&symptom_id))
    }

    /// Selected symptom ids in selection order.
    pub fn selected_symptoms(&self) -> Result<Vec<String>, HealthScopeError> {
        let state = self.state.lock()?;
        Ok(state.session.selected().as_slice().to_vec())
    }

    pub fn clear_selection(&self) -> Result<(), HealthScopeError> {
        let mut state = self.state.lock()?;
        state.session.clear();
        Ok(())
    }

    pub fn can_analyze(&self) -> Result<bool, HealthScopeError> {
        let state = self.state.lock()?;
        Ok(state.session.can_analyze())
    }

    // =========================================================================
    // Analysis Operations
    // =========================================================================

    /// Every matching condition, best first.
    pub fn analyze(&self) -> Result<Vec<FfiMatchResult>, HealthScopeError> {
        let state = self.state.lock()?;
        let session = &state.session;
        let matches = session.analyze();
        let summary = AnalysisSummary::from_matches(
            &matches,
            session.catalog(),
            session.selected(),
            matches.len(),
        );
        Ok(summary.entries().iter().cloned().map(|e| e.into()).collect())
    }

    /// Presentation summary of the current selection.
    pub fn analyze_summary(&self) -> Result<FfiAnalysisSummary, HealthScopeError> {
        let state = self.state.lock()?;
        Ok(state.session.summarize().into())
    }

    /// Presentation summary as JSON.
    pub fn analyze_summary_json(&self) -> Result<String, HealthScopeError> {
        let state = self.state.lock()?;
        Ok(state.session.summarize().to_json()?)
    }

    // =========================================================================
    // Community Report Operations
    // =========================================================================

    /// District choices for a division key (e.g., "dhaka").
    pub fn district_options(
        &self,
        division: String,
    ) -> Result<Vec<FfiDistrictOption>, HealthScopeError> {
        let division: Division = division.parse().map_err(HealthScopeError::InvalidInput)?;
        Ok(regions::district_options(division)
            .into_iter()
            .map(|o| o.into())
            .collect())
    }

    /// Submit a report. Validation failures come back as an error toast.
    pub fn submit_report(&self, form: FfiCaseReportForm) -> Result<FfiToast, HealthScopeError> {
        let mut state = self.state.lock()?;
        let toast = state.board.submit(&form.into());
        Ok(toast.into())
    }

    /// Reports accepted during this session.
    pub fn list_reports(&self) -> Result<Vec<FfiCaseReport>, HealthScopeError> {
        let state = self.state.lock()?;
        Ok(state
            .board
            .reports()
            .iter()
            .cloned()
            .map(|r| r.into())
            .collect())
    }

    // =========================================================================
    // Hotspot Operations
    // =========================================================================

    /// The hotspot atlas as JSON for the map renderer.
    pub fn hotspot_atlas_json(&self) -> Result<String, HealthScopeError> {
        let state = self.state.lock()?;
        Ok(serde_json::to_string(state.layers.atlas())?)
    }

    pub fn set_layer_visible(&self, key: String, visible: bool) -> Result<(), HealthScopeError> {
        let mut state = self.state.lock()?;
        state.layers.set_visible(&key, visible)?;
        Ok(())
    }

    /// Visible layer keys in atlas order.
    pub fn visible_layers(&self) -> Result<Vec<String>, HealthScopeError> {
        let state = self.state.lock()?;
        Ok(state
            .layers
            .visible_keys()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Statistics panel contents for the current visibility.
    pub fn layer_statistics(&self) -> Result<Option<FfiLayerStatistics>, HealthScopeError> {
        let state = self.state.lock()?;
        let key = state.layers.statistics_key().to_string();
        Ok(state
            .layers
            .statistics()
            .cloned()
            .map(|stats| FfiLayerStatistics::from_stats(key, stats)))
    }

    /// Restyle every layer in red.
    pub fn apply_red_gradient(&self) -> Result<(), HealthScopeError> {
        let mut state = self.state.lock()?;
        state.layers.apply_red_gradient();
        Ok(())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe symptom.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSymptom {
    pub id: String,
    pub label: String,
}

impl From<Symptom> for FfiSymptom {
    fn from(symptom: Symptom) -> Self {
        Self {
            id: symptom.id,
            label: symptom.label,
        }
    }
}

/// FFI-safe ranked condition.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMatchResult {
    pub name: String,
    pub description: String,
    /// Triage key of this condition (e.g., "high")
    pub triage_level: String,
    pub matched_count: u32,
    pub raw_score: f64,
    pub confidence: f64,
    pub confidence_percent: u32,
    pub matched_symptoms: Vec<String>,
}

impl From<SummaryEntry> for FfiMatchResult {
    fn from(entry: SummaryEntry) -> Self {
        Self {
            name: entry.name,
            description: entry.description,
            triage_level: entry.triage_level.key().to_string(),
            matched_count: entry.matched_count as u32,
            raw_score: entry.raw_score,
            confidence: entry.confidence,
            confidence_percent: entry.confidence_percent,
            matched_symptoms: entry.matched_symptoms,
        }
    }
}

/// FFI-safe analysis summary. Triage fields are set only when something matched.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAnalysisSummary {
    pub is_match: bool,
    pub selected_symptoms: Vec<String>,
    pub analyzed_at: String,
    pub title: Option<String>,
    pub message: Option<String>,
    pub triage_level: Option<String>,
    pub triage_label: Option<String>,
    pub triage_icon: Option<String>,
    pub entries: Vec<FfiMatchResult>,
    pub recommendations: Vec<String>,
    pub disclaimer: Option<String>,
}

impl From<AnalysisSummary> for FfiAnalysisSummary {
    fn from(summary: AnalysisSummary) -> Self {
        let base = Self {
            is_match: summary.is_match(),
            selected_symptoms: summary.selected_symptoms,
            analyzed_at: summary.analyzed_at,
            title: None,
            message: None,
            triage_level: None,
            triage_label: None,
            triage_icon: None,
            entries: Vec::new(),
            recommendations: Vec::new(),
            disclaimer: None,
        };

        match summary.outcome {
            AnalysisOutcome::NoClearMatch { title, message } => Self {
                title: Some(title),
                message: Some(message),
                ..base
            },
            AnalysisOutcome::Matched {
                triage,
                entries,
                recommendations,
                disclaimer,
            } => Self {
                triage_level: Some(triage.level.key().to_string()),
                triage_label: Some(triage.label),
                triage_icon: Some(triage.icon),
                entries: entries.into_iter().map(|e| e.into()).collect(),
                recommendations,
                disclaimer: Some(disclaimer),
                ..base
            },
        }
    }
}

/// FFI-safe district option.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDistrictOption {
    pub value: String,
    pub label: String,
}

impl From<regions::DistrictOption> for FfiDistrictOption {
    fn from(option: regions::DistrictOption) -> Self {
        Self {
            value: option.value,
            label: option.label,
        }
    }
}

/// FFI-safe report form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCaseReportForm {
    pub disease_type: Option<String>,
    pub severity: Option<String>,
    pub division: Option<String>,
    pub district: Option<String>,
}

impl From<FfiCaseReportForm> for CaseReportForm {
    fn from(form: FfiCaseReportForm) -> Self {
        CaseReportForm {
            disease_type: form.disease_type,
            severity: form.severity,
            division: form.division,
            district: form.district,
        }
    }
}

/// FFI-safe toast notice.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiToast {
    pub message: String,
    pub kind: String,
    pub duration_ms: u64,
}

impl From<Toast> for FfiToast {
    fn from(toast: Toast) -> Self {
        let kind = match toast.kind {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        };
        Self {
            message: toast.message,
            kind: kind.to_string(),
            duration_ms: toast.duration_ms,
        }
    }
}

/// FFI-safe accepted report.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCaseReport {
    pub report_id: String,
    pub disease_type: String,
    pub severity: String,
    pub division: String,
    pub district: String,
    pub submitted_at: String,
}

impl From<CaseReport> for FfiCaseReport {
    fn from(report: CaseReport) -> Self {
        Self {
            report_id: report.report_id,
            disease_type: report.disease_type,
            severity: report.severity.key().to_string(),
            division: report.division.label().to_string(),
            district: report.district,
            submitted_at: report.submitted_at,
        }
    }
}

/// FFI-safe layer statistics.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLayerStatistics {
    pub layer_key: String,
    pub total: u32,
    pub hotspots: u32,
    pub areas: u32,
    pub severity: String,
}

impl FfiLayerStatistics {
    fn from_stats(layer_key: String, stats: hotspots::LayerStatistics) -> Self {
        Self {
            layer_key,
            total: stats.total,
            hotspots: stats.hotspots,
            areas: stats.areas,
            severity: stats.severity,
        }
    }
}

/// FFI-safe health tip.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHealthTip {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl From<tips::HealthTip> for FfiHealthTip {
    fn from(tip: tips::HealthTip) -> Self {
        Self {
            icon: tip.icon.to_string(),
            title: tip.title.to_string(),
            description: tip.description.to_string(),
        }
    }
}

/// FFI-safe page section extent.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSection {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl From<FfiSection> for navigation::Section {
    fn from(section: FfiSection) -> Self {
        navigation::Section::new(section.id, section.top, section.height)
    }
}

//! In-memory board of accepted reports and the notices shown on submit.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{CaseReport, CaseReportForm, ReportError};

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u64 = 4000;

const SUBMITTED_MESSAGE: &str =
    "✓ Report submitted successfully! Thank you for contributing to community health.";

const MISSING_FIELDS_MESSAGE: &str = "❌ Please fill in all required fields";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: TOAST_DURATION_MS,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ToastKind::Success
    }
}

/// Accepted reports for one session, newest last.
#[derive(Debug, Clone, Default)]
pub struct CommunityBoard {
    reports: Vec<CaseReport>,
}

impl CommunityBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and accept a form, returning the notice to display.
    pub fn submit(&mut self, form: &CaseReportForm) -> Toast {
        match form.validate() {
            Ok(report) => {
                info!(
                    report_id = %report.report_id,
                    disease = %report.disease_type,
                    division = %report.division,
                    "community report accepted"
                );
                self.reports.push(report);
                Toast::new(SUBMITTED_MESSAGE, ToastKind::Success)
            }
            Err(ReportError::MissingFields(fields)) => {
                warn!(missing = ?fields, "community report rejected");
                Toast::new(MISSING_FIELDS_MESSAGE, ToastKind::Error)
            }
            Err(err) => {
                warn!(error = %err, "community report rejected");
                Toast::new(format!("❌ {}", err), ToastKind::Error)
            }
        }
    }

    pub fn reports(&self) -> &[CaseReport] {
        &self.reports
    }

    /// Most recently accepted report.
    pub fn latest(&self) -> Option<&CaseReport> {
        self.reports.last()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

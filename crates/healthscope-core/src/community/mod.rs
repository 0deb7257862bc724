//! Community case reports.
//!
//! Reports are validated and kept in memory for the lifetime of the UI
//! session. Nothing is persisted or sent anywhere.

mod board;

pub use board::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::regions::{find_district, Division};

/// Report validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ReportError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Unknown severity: {0}")]
    InvalidSeverity(String),

    #[error("Unknown division: {0}")]
    InvalidDivision(String),

    #[error("District '{district}' is not in {division}")]
    InvalidDistrict { division: Division, district: String },
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Self-assessed severity of a reported case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseSeverity {
    Mild,
    Moderate,
    Severe,
}

impl CaseSeverity {
    pub fn key(&self) -> &'static str {
        match self {
            CaseSeverity::Mild => "mild",
            CaseSeverity::Moderate => "moderate",
            CaseSeverity::Severe => "severe",
        }
    }
}

impl fmt::Display for CaseSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CaseSeverity {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Ok(CaseSeverity::Mild),
            "moderate" => Ok(CaseSeverity::Moderate),
            "severe" => Ok(CaseSeverity::Severe),
            _ => Err(ReportError::InvalidSeverity(s.to_string())),
        }
    }
}

/// Raw form input. Every field is required but may be absent on submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CaseReportForm {
    pub disease_type: Option<String>,
    pub severity: Option<String>,
    pub division: Option<String>,
    /// District form value (e.g., "cox's_bazar")
    pub district: Option<String>,
}

/// An accepted community report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseReport {
    pub report_id: String,
    pub disease_type: String,
    pub severity: CaseSeverity,
    pub division: Division,
    /// District display name
    pub district: String,
    pub submitted_at: String,
}

/// Present, non-blank field value.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl CaseReportForm {
    /// Validate the form and turn it into a report.
    pub fn validate(&self) -> ReportResult<CaseReport> {
        let fields = [
            ("disease_type", filled(&self.disease_type)),
            ("severity", filled(&self.severity)),
            ("division", filled(&self.division)),
            ("district", filled(&self.district)),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();

        let (Some(disease_type), Some(severity), Some(division), Some(district)) =
            (fields[0].1, fields[1].1, fields[2].1, fields[3].1)
        else {
            return Err(ReportError::MissingFields(missing));
        };

        let severity: CaseSeverity = severity.parse()?;
        let division: Division = division
            .parse()
            .map_err(|_| ReportError::InvalidDivision(division.to_string()))?;
        let district_name =
            find_district(division, district).ok_or_else(|| ReportError::InvalidDistrict {
                division,
                district: district.to_string(),
            })?;

        Ok(CaseReport {
            report_id: uuid::Uuid::new_v4().to_string(),
            disease_type: disease_type.to_string(),
            severity,
            division,
            district: district_name.to_string(),
            submitted_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> CaseReportForm {
        CaseReportForm {
            disease_type: Some("dengue".into()),
            severity: Some("moderate".into()),
            division: Some("chittagong".into()),
            district: Some("cox's_bazar".into()),
        }
    }

    #[test]
    fn test_valid_form() {
        let report = complete_form().validate().unwrap();

        assert_eq!(report.disease_type, "dengue");
        assert_eq!(report.severity, CaseSeverity::Moderate);
        assert_eq!(report.division, Division::Chittagong);
        assert_eq!(report.district, "Cox's Bazar");
        assert!(uuid::Uuid::parse_str(&report.report_id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&report.submitted_at).is_ok());
    }

    #[test]
    fn test_missing_fields_listed() {
        let form = CaseReportForm {
            disease_type: Some("flu".into()),
            severity: Some("   ".into()),
            ..Default::default()
        };

        assert_eq!(
            form.validate(),
            Err(ReportError::MissingFields(vec![
                "severity", "division", "district"
            ]))
        );
    }

    #[test]
    fn test_invalid_severity() {
        let mut form = complete_form();
        form.severity = Some("catastrophic".into());

        assert!(matches!(
            form.validate(),
            Err(ReportError::InvalidSeverity(_))
        ));
    }

    #[test]
    fn test_district_must_belong_to_division() {
        let mut form = complete_form();
        form.division = Some("sylhet".into());

        assert!(matches!(
            form.validate(),
            Err(ReportError::InvalidDistrict { .. })
        ));
    }

    #[test]
    fn test_error_message() {
        let err = ReportError::MissingFields(vec!["division", "district"]);
        assert_eq!(err.to_string(), "Missing required fields: division, district");
    }
}

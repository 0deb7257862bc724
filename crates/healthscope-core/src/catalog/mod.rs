//! Immutable condition catalog.
//!
//! The catalog is a structured JSON resource holding the symptom vocabulary
//! and the condition table. The built-in copy is compiled into the binary;
//! tests and embedders can inject their own through [`ConditionCatalog::from_json`].

mod search;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::models::{Condition, Symptom};

/// Built-in catalog resource.
const BUILTIN_CATALOG: &str = include_str!("../../data/conditions.json");

/// Catalog loading and validation errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Condition at index {0} has an empty name")]
    EmptyName(usize),

    #[error("Condition '{condition}' has invalid prior weight {value}")]
    InvalidPrior { condition: String, value: f64 },

    #[error("Condition '{condition}' has invalid weight {value} for symptom '{symptom}'")]
    InvalidWeight {
        condition: String,
        symptom: String,
        value: f64,
    },

    #[error("Condition '{0}' has no symptom weights")]
    NoSymptoms(String),

    #[error("Duplicate symptom id in vocabulary: {0}")]
    DuplicateSymptom(String),

    #[error("Condition '{condition}' references unknown symptom '{symptom}'")]
    UnknownSymptom { condition: String, symptom: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Symptom vocabulary plus the condition table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConditionCatalog {
    /// Symptom vocabulary; empty means weights are not checked against it
    #[serde(default)]
    symptoms: Vec<Symptom>,
    /// Conditions in display order (ties in score keep this order)
    conditions: Vec<Condition>,
}

impl ConditionCatalog {
    /// Build and validate a catalog from parts.
    pub fn new(symptoms: Vec<Symptom>, conditions: Vec<Condition>) -> CatalogResult<Self> {
        let catalog = Self {
            symptoms,
            conditions,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the catalog compiled into the library.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog resource.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        info!(
            conditions = catalog.conditions.len(),
            symptoms = catalog.symptoms.len(),
            "loaded condition catalog"
        );
        Ok(catalog)
    }

    /// Check the invariants the matcher relies on.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut vocabulary = HashSet::new();
        for symptom in &self.symptoms {
            if !vocabulary.insert(symptom.id.as_str()) {
                return Err(CatalogError::DuplicateSymptom(symptom.id.clone()));
            }
        }

        for (index, condition) in self.conditions.iter().enumerate() {
            if condition.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(index));
            }
            if !condition.prior_weight.is_finite() || condition.prior_weight < 0.0 {
                return Err(CatalogError::InvalidPrior {
                    condition: condition.name.clone(),
                    value: condition.prior_weight,
                });
            }
            if condition.symptom_weights.is_empty() {
                return Err(CatalogError::NoSymptoms(condition.name.clone()));
            }
            for (symptom, &weight) in &condition.symptom_weights {
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(CatalogError::InvalidWeight {
                        condition: condition.name.clone(),
                        symptom: symptom.clone(),
                        value: weight,
                    });
                }
                if !vocabulary.is_empty() && !vocabulary.contains(symptom.as_str()) {
                    return Err(CatalogError::UnknownSymptom {
                        condition: condition.name.clone(),
                        symptom: symptom.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Look up a condition by exact name.
    pub fn condition(&self, name: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.name == name)
    }

    /// Look up a vocabulary entry by id.
    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    /// Display label for a symptom id, falling back to the id itself.
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.symptom(id).map(|s| s.label.as_str()).unwrap_or(id)
    }

    /// Check if any part of the catalog knows this symptom id.
    pub fn knows_symptom(&self, id: &str) -> bool {
        self.symptom(id).is_some() || self.conditions.iter().any(|c| c.recognizes(id))
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

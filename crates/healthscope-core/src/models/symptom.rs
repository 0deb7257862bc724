//! Symptom vocabulary and selection models.

use serde::{Deserialize, Serialize};

/// A user-reportable symptom from the catalog vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Symptom {
    /// Stable key (e.g., "body_ache")
    pub id: String,
    /// Display label (e.g., "Body Ache")
    pub label: String,
}

impl Symptom {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The set of symptom ids a user currently has toggled on.
///
/// Ids are unique. Iteration follows insertion order so score sums are
/// reproducible between runs. Serialized as a plain list of ids; duplicates
/// are dropped on deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SymptomSelection {
    ids: Vec<String>,
}

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symptom. Returns false if it was already selected.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove a symptom. Returns false if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|s| s == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip a symptom on or off. Returns true if it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Selected ids in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }
}

impl<S: Into<String>> FromIterator<S> for SymptomSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = SymptomSelection::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

impl From<Vec<String>> for SymptomSelection {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<SymptomSelection> for Vec<String> {
    fn from(selection: SymptomSelection) -> Self {
        selection.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_unique() {
        let mut selection = SymptomSelection::new();
        assert!(selection.insert("fever"));
        assert!(!selection.insert("fever"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle() {
        let mut selection = SymptomSelection::new();
        assert!(selection.toggle("cough"));
        assert!(selection.contains("cough"));
        assert!(!selection.toggle("cough"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let selection: SymptomSelection = ["rash", "fever", "rash", "chills"].into_iter().collect();
        let ids: Vec<&str> = selection.iter().collect();
        assert_eq!(ids, vec!["rash", "fever", "chills"]);
    }

    #[test]
    fn test_remove_missing() {
        let mut selection: SymptomSelection = ["fever"].into_iter().collect();
        assert!(!selection.remove("cough"));
        assert!(selection.remove("fever"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let selection: SymptomSelection =
            serde_json::from_str(r#"["wheezing", "fever", "wheezing"]"#).unwrap();

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.as_slice(), ["wheezing", "fever"]);
        assert_eq!(serde_json::to_string(&selection).unwrap(), r#"["wheezing","fever"]"#);
    }
}

//! Scroll-position to section resolution for the single-page layout.

use serde::{Deserialize, Serialize};

/// Section reported when nothing else is active.
pub const HOME_SECTION: &str = "home";

/// Pixels above a section's top at which it becomes active.
const ACTIVATION_OFFSET: f64 = 200.0;

/// Below this scroll offset the page is always on the home section.
const HOME_THRESHOLD: f64 = 100.0;

/// A page section's vertical extent in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - ACTIVATION_OFFSET;
        let end = self.top + self.height - ACTIVATION_OFFSET;
        scroll_y >= start && scroll_y < end
    }
}

/// Id of the section the navigation bar should highlight.
///
/// The last section whose band contains `scroll_y` wins.
pub fn active_section(sections: &[Section], scroll_y: f64) -> &str {
    if scroll_y < HOME_THRESHOLD {
        return HOME_SECTION;
    }

    sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y))
        .map(|section| section.id.as_str())
        .unwrap_or(HOME_SECTION)
}

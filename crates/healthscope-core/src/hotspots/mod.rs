//! Disease hotspot heatmap data.
//!
//! The atlas is a read-only JSON resource describing per-disease heat layers
//! for an external map renderer. Visibility and styling state lives in
//! [`LayerRegistry`], one per UI session.

mod registry;

pub use registry::*;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Built-in hotspot resource.
const BUILTIN_HOTSPOTS: &str = include_str!("../../data/hotspots.json");

/// Key of the aggregate layer, also the statistics fallback.
pub const ALL_LAYER: &str = "all";

/// Hotspot data errors.
#[derive(Error, Debug)]
pub enum HotspotError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hotspot atlas has no 'all' layer")]
    MissingAllLayer,

    #[error("Duplicate layer key: {0}")]
    DuplicateLayer(String),

    #[error("Layer '{layer}' has intensity {value} outside 0..=1")]
    InvalidIntensity { layer: String, value: f64 },

    #[error("Unknown layer: {0}")]
    UnknownLayer(String),
}

pub type HotspotResult<T> = Result<T, HotspotError>;

/// Initial map viewport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapView {
    /// (latitude, longitude)
    pub center: (f64, f64),
    pub zoom: u8,
}

/// Rendering options shared by all heat layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatLayerOptions {
    pub radius: u32,
    pub blur: u32,
    pub max_zoom: u8,
    pub max: f64,
}

/// One color stop of a heat gradient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradientStop {
    /// Position in 0..=1
    pub offset: f64,
    /// CSS color
    pub color: String,
}

impl GradientStop {
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

/// A weighted map point. Serialized as `[lat, lng, intensity]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "(f64, f64, f64)", into = "(f64, f64, f64)")]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
}

impl From<(f64, f64, f64)> for HeatPoint {
    fn from((lat, lng, intensity): (f64, f64, f64)) -> Self {
        Self {
            lat,
            lng,
            intensity,
        }
    }
}

impl From<HeatPoint> for (f64, f64, f64) {
    fn from(point: HeatPoint) -> Self {
        (point.lat, point.lng, point.intensity)
    }
}

/// Summary figures displayed next to the map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayerStatistics {
    pub total: u32,
    pub hotspots: u32,
    pub areas: u32,
    /// e.g., "Medium"
    pub severity: String,
}

/// A per-disease heat layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseLayer {
    /// Stable key (e.g., "dengue")
    pub key: String,
    /// Bilingual display label
    pub label: String,
    /// Swatch color for the layer toggle
    pub color: String,
    /// Default gradient
    pub gradient: Vec<GradientStop>,
    pub points: Vec<HeatPoint>,
    pub statistics: LayerStatistics,
}

/// All hotspot layers plus map defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotspotAtlas {
    pub view: MapView,
    pub heat_options: HeatLayerOptions,
    layers: Vec<DiseaseLayer>,
}

impl HotspotAtlas {
    /// Load the atlas compiled into the library.
    pub fn builtin() -> HotspotResult<Self> {
        Self::from_json(BUILTIN_HOTSPOTS)
    }

    /// Parse and validate an atlas resource.
    pub fn from_json(json: &str) -> HotspotResult<Self> {
        let atlas: Self = serde_json::from_str(json)?;
        atlas.validate()?;
        info!(layers = atlas.layers.len(), "loaded hotspot atlas");
        Ok(atlas)
    }

    fn validate(&self) -> HotspotResult<()> {
        let mut keys = HashSet::new();
        for layer in &self.layers {
            if !keys.insert(layer.key.as_str()) {
                return Err(HotspotError::DuplicateLayer(layer.key.clone()));
            }
            if let Some(point) = layer
                .points
                .iter()
                .find(|p| !(0.0..=1.0).contains(&p.intensity))
            {
                return Err(HotspotError::InvalidIntensity {
                    layer: layer.key.clone(),
                    value: point.intensity,
                });
            }
        }

        if !keys.contains(ALL_LAYER) {
            return Err(HotspotError::MissingAllLayer);
        }

        Ok(())
    }

    pub fn layers(&self) -> &[DiseaseLayer] {
        &self.layers
    }

    pub fn layer(&self, key: &str) -> Option<&DiseaseLayer> {
        self.layers.iter().find(|l| l.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.key.as_str()).collect()
    }

    /// Statistics for a layer, falling back to the aggregate layer for unknown keys.
    pub fn statistics(&self, key: &str) -> Option<&LayerStatistics> {
        self.layer(key)
            .or_else(|| self.layer(ALL_LAYER))
            .map(|l| &l.statistics)
    }
}

/// The strong red gradient applied by "red mode".
pub fn red_gradient() -> Vec<GradientStop> {
    vec![
        GradientStop::new(0.0, "rgba(255,240,240,0.06)"),
        GradientStop::new(0.25, "rgba(255,200,200,0.20)"),
        GradientStop::new(0.5, "rgba(255,150,150,0.40)"),
        GradientStop::new(0.75, "rgba(255,90,90,0.70)"),
        GradientStop::new(1.0, "rgba(220,38,38,0.95)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_atlas_loads() {
        let atlas = HotspotAtlas::builtin().unwrap();

        assert_eq!(
            atlas.keys(),
            vec!["all", "flu", "dengue", "covid", "gastroenteritis", "typhoid"]
        );
        assert_eq!(atlas.view.center, (23.8103, 90.4125));
        assert_eq!(atlas.view.zoom, 7);
        assert_eq!(atlas.heat_options.radius, 36);
        assert_eq!(atlas.heat_options.blur, 48);
    }

    #[test]
    fn test_points_parse_from_triples() {
        let atlas = HotspotAtlas::builtin().unwrap();
        let flu = atlas.layer("flu").unwrap();

        assert_eq!(flu.points.len(), 12);
        assert_eq!(
            flu.points[0],
            HeatPoint {
                lat: 23.8103,
                lng: 90.4125,
                intensity: 0.9
            }
        );
    }

    #[test]
    fn test_statistics_fallback() {
        let atlas = HotspotAtlas::builtin().unwrap();

        assert_eq!(atlas.statistics("dengue").unwrap().total, 234);
        assert_eq!(atlas.statistics("malaria").unwrap().total, 1247);
    }

    #[test]
    fn test_rejects_missing_all_layer() {
        let json = r#"{
            "view": { "center": [0.0, 0.0], "zoom": 1 },
            "heat_options": { "radius": 1, "blur": 1, "max_zoom": 1, "max": 1.0 },
            "layers": []
        }"#;

        assert!(matches!(
            HotspotAtlas::from_json(json),
            Err(HotspotError::MissingAllLayer)
        ));
    }

    #[test]
    fn test_rejects_out_of_range_intensity() {
        let json = r##"{
            "view": { "center": [0.0, 0.0], "zoom": 1 },
            "heat_options": { "radius": 1, "blur": 1, "max_zoom": 1, "max": 1.0 },
            "layers": [{
                "key": "all", "label": "All", "color": "#000", "gradient": [],
                "points": [[1.0, 2.0, 1.5]],
                "statistics": { "total": 0, "hotspots": 0, "areas": 0, "severity": "Low" }
            }]
        }"##;

        assert!(matches!(
            HotspotAtlas::from_json(json),
            Err(HotspotError::InvalidIntensity { .. })
        ));
    }

    #[test]
    fn test_custom_atlas_with_hex_colors() {
        let json = r##"{
            "view": { "center": [22.3569, 91.7832], "zoom": 9 },
            "heat_options": { "radius": 20, "blur": 30, "max_zoom": 12, "max": 1.0 },
            "layers": [{
                "key": "all", "label": "All", "color": "#dc2626",
                "gradient": [{ "offset": 0.0, "color": "#fee2e2" }, { "offset": 1.0, "color": "#dc2626" }],
                "points": [[22.3569, 91.7832, 0.8]],
                "statistics": { "total": 12, "hotspots": 1, "areas": 1, "severity": "Low" }
            }]
        }"##;

        let atlas = HotspotAtlas::from_json(json).unwrap();
        let all = atlas.layer("all").unwrap();

        assert_eq!(all.color, "#dc2626");
        assert_eq!(all.gradient[0].color, "#fee2e2");
        assert_eq!(atlas.statistics("flu").unwrap().total, 12);
    }

    #[test]
    fn test_red_gradient_stops() {
        let gradient = red_gradient();
        assert_eq!(gradient.len(), 5);
        assert_eq!(gradient[4].color, "rgba(220,38,38,0.95)");
    }
}

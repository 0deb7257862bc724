//! Per-session visibility and styling of hotspot layers.

use std::sync::Arc;

use tracing::debug;

use super::{
    red_gradient, DiseaseLayer, GradientStop, HotspotAtlas, HotspotError, HotspotResult,
    LayerStatistics, ALL_LAYER,
};

#[derive(Debug, Clone)]
struct LayerState {
    visible: bool,
    gradient: Vec<GradientStop>,
}

/// Owned layer registry. Starts with only the aggregate layer visible.
#[derive(Debug, Clone)]
pub struct LayerRegistry {
    atlas: Arc<HotspotAtlas>,
    /// Parallel to `atlas.layers()`
    states: Vec<LayerState>,
}

impl LayerRegistry {
    pub fn new(atlas: Arc<HotspotAtlas>) -> Self {
        let states = atlas
            .layers()
            .iter()
            .map(|layer| LayerState {
                visible: layer.key == ALL_LAYER,
                gradient: layer.gradient.clone(),
            })
            .collect();

        Self { atlas, states }
    }

    pub fn atlas(&self) -> &HotspotAtlas {
        &self.atlas
    }

    fn index_of(&self, key: &str) -> HotspotResult<usize> {
        self.atlas
            .layers()
            .iter()
            .position(|l| l.key == key)
            .ok_or_else(|| HotspotError::UnknownLayer(key.to_string()))
    }

    /// Show or hide one layer.
    pub fn set_visible(&mut self, key: &str, visible: bool) -> HotspotResult<()> {
        let index = self.index_of(key)?;
        self.states[index].visible = visible;
        debug!(layer = key, visible, "layer visibility changed");
        Ok(())
    }

    /// Show or hide every layer.
    pub fn set_all_visible(&mut self, visible: bool) {
        for state in &mut self.states {
            state.visible = visible;
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.index_of(key)
            .map(|index| self.states[index].visible)
            .unwrap_or(false)
    }

    /// Visible layer keys in atlas order.
    pub fn visible_keys(&self) -> Vec<&str> {
        self.visible_layers()
            .into_iter()
            .map(|l| l.key.as_str())
            .collect()
    }

    /// Layers the map should currently render.
    pub fn visible_layers(&self) -> Vec<&DiseaseLayer> {
        self.atlas
            .layers()
            .iter()
            .zip(&self.states)
            .filter(|(_, state)| state.visible)
            .map(|(layer, _)| layer)
            .collect()
    }

    /// Which layer's statistics to show: the only visible layer, else the aggregate.
    pub fn statistics_key(&self) -> &str {
        let visible = self.visible_keys();
        match visible.as_slice() {
            [only] => *only,
            _ => ALL_LAYER,
        }
    }

    pub fn statistics(&self) -> Option<&LayerStatistics> {
        self.atlas.statistics(self.statistics_key())
    }

    /// Current gradient of a layer.
    pub fn gradient(&self, key: &str) -> Option<&[GradientStop]> {
        self.index_of(key)
            .ok()
            .map(|index| self.states[index].gradient.as_slice())
    }

    /// Restyle every layer with the red gradient. Visibility is unchanged.
    pub fn apply_red_gradient(&mut self) {
        let red = red_gradient();
        for state in &mut self.states {
            state.gradient = red.clone();
        }
        debug!("applied red gradient to all layers");
    }
}

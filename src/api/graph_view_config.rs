use serde::{Deserialize, Serialize};

use crate::axis::{DEFAULT_AXIS_INCREMENT, DEFAULT_SHOW_LABELS_EVERY};
use crate::core::{CellSize, Margins, ScrollOffset};
use crate::error::{GraphError, GraphResult};
use crate::interaction::ScrollBehavior;
use crate::render::Attribute;

/// Serializable per-axis settings. The label formatter is code, so it is not
/// part of the config and always starts as the default formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub increment: f64,
    pub show_labels_every: u32,
    pub visible: bool,
    pub title: String,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            increment: DEFAULT_AXIS_INCREMENT,
            show_labels_every: DEFAULT_SHOW_LABELS_EVERY,
            visible: true,
            title: String::new(),
        }
    }
}

/// Public graph view bootstrap configuration.
///
/// Serializable so host applications can keep graph setup in their own
/// config files. Series and annotations are data and stay out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphViewConfig {
    #[serde(default = "default_cell_size")]
    pub cell_size: CellSize,
    #[serde(default)]
    pub scroll_offset: ScrollOffset,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub graph_color: Option<Attribute>,
    #[serde(default)]
    pub horizontal_axis: AxisConfig,
    #[serde(default)]
    pub vertical_axis: AxisConfig,
    #[serde(default = "default_scroll_behavior")]
    pub scroll_behavior: ScrollBehavior,
}

impl Default for GraphViewConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            scroll_offset: ScrollOffset::default(),
            margins: Margins::default(),
            graph_color: None,
            horizontal_axis: AxisConfig::default(),
            vertical_axis: AxisConfig::default(),
            scroll_behavior: default_scroll_behavior(),
        }
    }
}

impl GraphViewConfig {
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: CellSize) -> Self {
        self.cell_size = cell_size;
        self
    }

    #[must_use]
    pub fn with_scroll_offset(mut self, scroll_offset: ScrollOffset) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_graph_color(mut self, color: Attribute) -> Self {
        self.graph_color = Some(color);
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        self.cell_size.validate()?;
        if !self.scroll_behavior.fast_multiplier.is_finite() {
            return Err(GraphError::InvalidConfig(
                "fast scroll multiplier must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_cell_size() -> CellSize {
    CellSize::default()
}

fn default_scroll_behavior() -> ScrollBehavior {
    ScrollBehavior::default()
}

use std::sync::Arc;

use crate::axis::AxisOrientation;
use crate::core::{GraphRect, ScreenPoint};

/// Formats the label of a tick. Receives the tick with an empty `label`.
pub type AxisLabelFormatterFn = Arc<dyn Fn(&AxisTick) -> String + Send + Sync + 'static>;

/// One tick produced during a redraw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub orientation: AxisOrientation,
    /// Cell on the axis line where the tick mark is drawn.
    pub screen_location: ScreenPoint,
    /// Graph-space cell under `screen_location`.
    pub graph_space: GraphRect,
    /// Empty for ticks skipped by the label cadence.
    pub label: String,
}

/// Renders the tick coordinate along the axis with zero decimals.
#[must_use]
pub fn default_axis_label(tick: &AxisTick) -> String {
    let value = match tick.orientation {
        AxisOrientation::Horizontal => tick.graph_space.x,
        AxisOrientation::Vertical => tick.graph_space.y,
    };
    let rounded = value.round();
    if rounded == 0.0 {
        // Avoids "-0" for small negative values.
        return "0".to_owned();
    }
    format!("{rounded:.0}")
}

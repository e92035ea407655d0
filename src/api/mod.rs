mod graph_view;
mod graph_view_config;
mod navigation_controller;
mod redraw_coordinator;

pub use graph_view::GraphView;
pub use graph_view_config::{AxisConfig, GraphViewConfig};

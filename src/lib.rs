//! termgraph: a graph engine for character-grid terminal widgets.
//!
//! A `GraphView` maps a continuous, scrollable graph space onto terminal
//! cells and draws series, axes and annotations through a host-provided
//! `Canvas`. The host owns focus, layout, key dispatch and the console
//! driver.

pub mod annotations;
pub mod api;
pub mod axis;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod series;
pub mod telemetry;

pub use api::{GraphView, GraphViewConfig};
pub use error::{GraphError, GraphResult};

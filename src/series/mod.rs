//! Data series drawn into the graph's drawable area.
//!
//! Series draw additively in registration order, so later series paint
//! over earlier ones. Each series restores the graph's ambient color once it
//! is done with custom colors.

mod bar;
mod multi_bar;
mod scatter;

pub use bar::{Bar, BarSeries};
pub use multi_bar::MultiBarSeries;
pub use scatter::ScatterSeries;

use crate::api::GraphView;
use crate::core::{GraphRect, ScreenRect};
use crate::render::Canvas;

pub trait Series {
    /// Draws the series.
    ///
    /// `draw_bounds` is the viewport minus margins and `graph_bounds` is the
    /// same area in graph space; both are computed once per redraw.
    fn draw_series(
        &self,
        graph: &GraphView,
        canvas: &mut dyn Canvas,
        draw_bounds: ScreenRect,
        graph_bounds: GraphRect,
    );
}

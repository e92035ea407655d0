use serde::{Deserialize, Serialize};

use crate::api::GraphView;
use crate::core::{GraphPoint, GraphRect, ScreenRect};
use crate::render::{Canvas, CellGlyph};

use super::Series;

pub const DEFAULT_SCATTER_SYMBOL: char = 'x';

/// Unconnected points, one glyph per visible point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub points: Vec<GraphPoint>,
    pub fill: CellGlyph,
}

impl Default for ScatterSeries {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            fill: CellGlyph::new(DEFAULT_SCATTER_SYMBOL),
        }
    }
}

impl ScatterSeries {
    #[must_use]
    pub fn new(points: Vec<GraphPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: CellGlyph) -> Self {
        self.fill = fill;
        self
    }
}

impl Series for ScatterSeries {
    fn draw_series(
        &self,
        graph: &GraphView,
        canvas: &mut dyn Canvas,
        draw_bounds: ScreenRect,
        graph_bounds: GraphRect,
    ) {
        let transform = graph.transform(canvas.viewport());
        graph.apply_glyph_color(canvas, self.fill);

        for point in self.points.iter().copied() {
            if !graph_bounds.contains(point) {
                continue;
            }
            let screen = transform.graph_space_to_screen(point);
            if draw_bounds.contains(screen) {
                canvas.move_cursor(screen.col, screen.row);
                canvas.write_glyph(self.fill.symbol);
            }
        }

        graph.apply_ambient_color(canvas);
    }
}

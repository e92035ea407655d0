use serde::{Deserialize, Serialize};

use crate::api::GraphView;
use crate::axis::AxisOrientation;
use crate::core::{GraphPoint, GraphRect, ScreenPoint, ScreenRect, draw_line};
use crate::render::{Attribute, Canvas, CellGlyph};

use super::Series;

/// One bar: a category label, the glyph it is filled with, and its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    label: String,
    fill: CellGlyph,
    value: f64,
}

impl Bar {
    #[must_use]
    pub fn new(label: impl Into<String>, fill: CellGlyph, value: f64) -> Self {
        Self {
            label: label.into(),
            fill,
            value,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn fill(&self) -> CellGlyph {
        self.fill
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Bars extruded from an axis, one per entry, spaced `bar_every` apart.
///
/// `Vertical` bars stand on the horizontal axis and grow up; `Horizontal`
/// bars start at the vertical axis and grow right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub bars: Vec<Bar>,
    /// Graph-space distance between consecutive bars.
    pub bar_every: f64,
    /// Graph-space position of the first bar along the category axis.
    pub offset: f64,
    pub orientation: AxisOrientation,
    /// Replaces every bar's own color.
    pub override_color: Option<Attribute>,
    /// Replaces every bar's own symbol.
    pub override_symbol: Option<char>,
    /// Writes bar labels onto the category axis.
    pub draw_labels: bool,
}

impl Default for BarSeries {
    fn default() -> Self {
        Self {
            bars: Vec::new(),
            bar_every: 1.0,
            offset: 0.0,
            orientation: AxisOrientation::Vertical,
            override_color: None,
            override_symbol: None,
            draw_labels: true,
        }
    }
}

impl BarSeries {
    #[must_use]
    pub fn new(bars: Vec<Bar>) -> Self {
        Self {
            bars,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_bar_every(mut self, bar_every: f64) -> Self {
        self.bar_every = bar_every;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Graph-space position of bar `index` along the category axis.
    #[must_use]
    pub fn bar_position(&self, index: usize) -> f64 {
        self.offset + index as f64 * self.bar_every
    }

    fn adjusted_fill(&self, bar: &Bar) -> CellGlyph {
        CellGlyph {
            symbol: self.override_symbol.unwrap_or(bar.fill.symbol),
            color: self.override_color.or(bar.fill.color),
        }
    }

    /// Screen endpoints of one bar, or `None` when its category position is
    /// outside the drawable area.
    fn bar_endpoints(
        &self,
        graph: &GraphView,
        canvas: &dyn Canvas,
        draw_bounds: ScreenRect,
        index: usize,
        bar: &Bar,
    ) -> Option<(ScreenPoint, ScreenPoint)> {
        let viewport = canvas.viewport();
        let transform = graph.transform(viewport);
        let position = self.bar_position(index);

        match self.orientation {
            AxisOrientation::Vertical => {
                let mut start = transform.graph_space_to_screen(GraphPoint::new(position, 0.0));
                let mut end = transform.graph_space_to_screen(GraphPoint::new(position, bar.value));
                if start.col < draw_bounds.col || start.col >= draw_bounds.right() {
                    return None;
                }
                start.row = graph.axis_x().anchor(graph, viewport);
                end.row = end.row.min(draw_bounds.bottom() - 1).max(draw_bounds.row);
                Some((start, end))
            }
            AxisOrientation::Horizontal => {
                let mut start = transform.graph_space_to_screen(GraphPoint::new(0.0, position));
                let mut end = transform.graph_space_to_screen(GraphPoint::new(bar.value, position));
                if start.row < draw_bounds.row || start.row >= draw_bounds.bottom() {
                    return None;
                }
                start.col = graph.axis_y().anchor(graph, viewport);
                end.col = end.col.min(draw_bounds.right() - 1).max(draw_bounds.col);
                Some((start, end))
            }
        }
    }
}

impl Series for BarSeries {
    fn draw_series(
        &self,
        graph: &GraphView,
        canvas: &mut dyn Canvas,
        draw_bounds: ScreenRect,
        _graph_bounds: GraphRect,
    ) {
        if draw_bounds.is_empty() {
            return;
        }

        for (index, bar) in self.bars.iter().enumerate() {
            let Some((start, end)) = self.bar_endpoints(graph, canvas, draw_bounds, index, bar)
            else {
                continue;
            };

            if bar.value != 0.0 {
                let fill = self.adjusted_fill(bar);
                graph.apply_glyph_color(canvas, fill);
                draw_line(canvas, start, end, fill.symbol);
                graph.apply_ambient_color(canvas);
            }

            if self.draw_labels && !bar.label.trim().is_empty() {
                match self.orientation {
                    AxisOrientation::Vertical => {
                        graph
                            .axis_x()
                            .draw_axis_label(graph, canvas, start.col, &bar.label);
                    }
                    AxisOrientation::Horizontal => {
                        graph
                            .axis_y()
                            .draw_axis_label(graph, canvas, start.row, &bar.label);
                    }
                }
            }
        }
    }
}

//! Horizontal and vertical graph axes.
//!
//! An axis draws its baseline through the graph-space origin, generates
//! ticks wherever a screen cell crosses a multiple of `increment`, and labels
//! every `show_labels_every`-th tick. Axes know nothing about series data.

mod tick;

pub use tick::{AxisLabelFormatterFn, AxisTick, default_axis_label};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::api::GraphView;
use crate::core::{ScreenPoint, Viewport};
use crate::render::{Canvas, clip_to_columns, text_width};

pub const DEFAULT_AXIS_INCREMENT: f64 = 1.0;
pub const DEFAULT_SHOW_LABELS_EVERY: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// Runs left to right; ticks are columns, labels sit below the line.
    Horizontal,
    /// Runs top to bottom; ticks are rows, labels sit left of the line.
    Vertical,
}

#[derive(Clone)]
pub struct Axis {
    orientation: AxisOrientation,
    /// Graph-space distance between ticks. Zero disables ticks.
    pub increment: f64,
    /// Label every n-th tick. Zero disables labels but keeps ticks.
    pub show_labels_every: u32,
    pub visible: bool,
    pub title: String,
    label_getter: AxisLabelFormatterFn,
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("orientation", &self.orientation)
            .field("increment", &self.increment)
            .field("show_labels_every", &self.show_labels_every)
            .field("visible", &self.visible)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl Axis {
    #[must_use]
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            increment: DEFAULT_AXIS_INCREMENT,
            show_labels_every: DEFAULT_SHOW_LABELS_EVERY,
            visible: true,
            title: String::new(),
            label_getter: Arc::new(default_axis_label),
        }
    }

    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(AxisOrientation::Horizontal)
    }

    #[must_use]
    pub fn vertical() -> Self {
        Self::new(AxisOrientation::Vertical)
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    /// Restores increment, cadence, visibility, title and formatter defaults.
    pub fn reset(&mut self) {
        *self = Self::new(self.orientation);
    }

    pub fn set_label_getter(&mut self, getter: AxisLabelFormatterFn) {
        self.label_getter = getter;
    }

    #[must_use]
    pub fn with_label_getter(mut self, getter: AxisLabelFormatterFn) -> Self {
        self.label_getter = getter;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Screen position of the axis line: a row for horizontal axes, a column
    /// for vertical ones.
    ///
    /// The line follows the graph-space origin but is clamped into the
    /// drawable area so it stays visible after the origin scrolls away.
    #[must_use]
    pub fn anchor(&self, graph: &GraphView, viewport: Viewport) -> i32 {
        let origin = graph.origin_on_screen(viewport);
        let margins = graph.margins();
        match self.orientation {
            AxisOrientation::Horizontal => {
                let last_row = viewport.height_cells() - margin_cells(margins.bottom) - 1;
                origin.row.min(last_row).max(0)
            }
            AxisOrientation::Vertical => {
                let first_col = margin_cells(margins.left);
                origin.col.min(viewport.width_cells() - 1).max(first_col)
            }
        }
    }

    /// Generates the ticks for the current viewport in iteration order.
    ///
    /// Horizontal axes walk columns left to right, vertical axes walk rows
    /// top to bottom.
    #[must_use]
    pub fn ticks(&self, graph: &GraphView, viewport: Viewport) -> Vec<AxisTick> {
        if self.increment == 0.0 || !self.increment.is_finite() {
            return Vec::new();
        }

        let transform = graph.transform(viewport);
        let cell_size = graph.cell_size();
        let margins = graph.margins();
        let anchor = self.anchor(graph, viewport);

        let positions: Vec<ScreenPoint> = match self.orientation {
            AxisOrientation::Horizontal => (margin_cells(margins.left)..viewport.width_cells())
                .map(|col| ScreenPoint::new(col, anchor))
                .collect(),
            AxisOrientation::Vertical => {
                (0..viewport.height_cells() - margin_cells(margins.bottom))
                    .map(|row| ScreenPoint::new(anchor, row))
                    .collect()
            }
        };

        let mut ticks = Vec::new();
        for screen_location in positions {
            let graph_space =
                transform.screen_to_graph_space(screen_location.col, screen_location.row);
            let (coordinate, cell_extent) = match self.orientation {
                AxisOrientation::Horizontal => (graph_space.x, cell_size.x.abs()),
                AxisOrientation::Vertical => (graph_space.y, cell_size.y.abs()),
            };

            if coordinate.abs() % self.increment >= cell_extent {
                continue;
            }

            let mut tick = AxisTick {
                orientation: self.orientation,
                screen_location,
                graph_space,
                label: String::new(),
            };
            if self.labels_tick(ticks.len()) {
                tick.label = (self.label_getter)(&tick);
            }
            ticks.push(tick);
        }

        trace!(
            orientation = ?self.orientation,
            tick_count = ticks.len(),
            "generated axis ticks"
        );
        ticks
    }

    fn labels_tick(&self, index: usize) -> bool {
        self.show_labels_every != 0 && index % self.show_labels_every as usize == 0
    }

    pub fn draw_axis_line(&self, graph: &GraphView, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }

        let viewport = canvas.viewport();
        let glyphs = canvas.line_glyphs();
        let margins = graph.margins();
        let anchor = self.anchor(graph, viewport);
        graph.apply_ambient_color(canvas);

        match self.orientation {
            AxisOrientation::Horizontal => {
                for col in margin_cells(margins.left)..viewport.width_cells() {
                    canvas.move_cursor(col, anchor);
                    canvas.write_glyph(glyphs.horizontal);
                }
            }
            AxisOrientation::Vertical => {
                for row in 0..viewport.height_cells() - margin_cells(margins.bottom) {
                    canvas.move_cursor(anchor, row);
                    canvas.write_glyph(glyphs.vertical);
                }
            }
        }
    }

    /// Draws tick marks, tick labels and the axis title.
    pub fn draw_axis_labels(&self, graph: &GraphView, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }

        let viewport = canvas.viewport();
        let glyphs = canvas.line_glyphs();
        let ticks = self.ticks(graph, viewport);
        graph.apply_ambient_color(canvas);

        let tick_glyph = match self.orientation {
            AxisOrientation::Horizontal => glyphs.top_tee,
            AxisOrientation::Vertical => glyphs.right_tee,
        };
        for tick in &ticks {
            canvas.move_cursor(tick.screen_location.col, tick.screen_location.row);
            canvas.write_glyph(tick_glyph);
        }

        match self.orientation {
            AxisOrientation::Horizontal => {
                for tick in ticks.iter().filter(|tick| !tick.label.is_empty()) {
                    draw_centered_below(canvas, tick.screen_location, &tick.label);
                }
            }
            AxisOrientation::Vertical => {
                // Every label shares the widest label's left edge.
                let label_width = ticks
                    .iter()
                    .map(|tick| text_width(&tick.label))
                    .max()
                    .unwrap_or(0);
                for tick in ticks.iter().filter(|tick| !tick.label.is_empty()) {
                    let padded = format!("{:>width$}", tick.label, width = label_width as usize);
                    let col = tick.screen_location.col - label_width;
                    write_clipped(canvas, col, tick.screen_location.row, &padded);
                }
            }
        }

        self.draw_title(canvas);
    }

    /// Writes `text` at an arbitrary position along the axis.
    ///
    /// `position` is a column for horizontal axes and a row for vertical axes.
    /// Bar series use this to name their categories.
    pub fn draw_axis_label(
        &self,
        graph: &GraphView,
        canvas: &mut dyn Canvas,
        position: i32,
        text: &str,
    ) {
        if !self.visible || text.trim().is_empty() {
            return;
        }

        let viewport = canvas.viewport();
        let anchor = self.anchor(graph, viewport);
        graph.apply_ambient_color(canvas);
        match self.orientation {
            AxisOrientation::Horizontal => {
                draw_centered_below(canvas, ScreenPoint::new(position, anchor), text);
            }
            AxisOrientation::Vertical => {
                write_clipped(canvas, anchor - text_width(text), position, text);
            }
        }
    }

    fn draw_title(&self, canvas: &mut dyn Canvas) {
        if self.title.trim().is_empty() {
            return;
        }

        let viewport = canvas.viewport();
        let title_width = text_width(&self.title);
        match self.orientation {
            AxisOrientation::Horizontal => {
                let col = (viewport.width_cells() / 2 - title_width / 2).max(0);
                write_clipped(canvas, col, viewport.height_cells() - 1, &self.title);
            }
            AxisOrientation::Vertical => {
                let first_row = (viewport.height_cells() / 2 - title_width / 2).max(0);
                for (row, symbol) in (first_row..viewport.height_cells()).zip(self.title.chars()) {
                    canvas.move_cursor(0, row);
                    canvas.write_glyph(symbol);
                }
            }
        }
    }
}

fn margin_cells(margin: u32) -> i32 {
    i32::try_from(margin).unwrap_or(i32::MAX)
}

fn draw_centered_below(canvas: &mut dyn Canvas, tick: ScreenPoint, text: &str) {
    let col = tick.col - text_width(text) / 2;
    write_clipped(canvas, col, tick.row + 1, text);
}

fn write_clipped(canvas: &mut dyn Canvas, col: i32, row: i32, text: &str) {
    let viewport = canvas.viewport();
    if row < 0 || row >= viewport.height_cells() {
        return;
    }
    if let Some((start, visible)) = clip_to_columns(text, col, viewport.width_cells()) {
        canvas.move_cursor(start, row);
        canvas.write_text(&visible);
    }
}

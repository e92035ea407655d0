use serde::{Deserialize, Serialize};

use crate::api::GraphView;
use crate::core::ScreenRect;
use crate::render::{Canvas, CellGlyph, truncate_or_pad};

use super::Annotation;

/// Boxed key of glyphs and their descriptions at a fixed screen rectangle.
///
/// One entry per line; entries that do not fit vertically are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendAnnotation {
    pub bounds: ScreenRect,
    pub border: bool,
    pub before_series: bool,
    entries: Vec<(CellGlyph, String)>,
}

impl LegendAnnotation {
    #[must_use]
    pub fn new(bounds: ScreenRect) -> Self {
        Self {
            bounds,
            border: true,
            before_series: false,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Appends an entry. Duplicates are kept.
    pub fn add_entry(&mut self, glyph: CellGlyph, text: impl Into<String>) {
        self.entries.push((glyph, text.into()));
    }

    #[must_use]
    pub fn entries(&self) -> &[(CellGlyph, String)] {
        &self.entries
    }

    fn draw_frame(&self, canvas: &mut dyn Canvas) {
        let glyphs = canvas.line_glyphs();
        let ScreenRect {
            col,
            row,
            width,
            height,
        } = self.bounds;
        if width < 2 || height < 2 {
            return;
        }

        let right = col + width - 1;
        let bottom = row + height - 1;
        for (edge_row, left, right_corner) in [
            (row, glyphs.top_left, glyphs.top_right),
            (bottom, glyphs.bottom_left, glyphs.bottom_right),
        ] {
            canvas.move_cursor(col, edge_row);
            canvas.write_glyph(left);
            for _ in col + 1..right {
                canvas.write_glyph(glyphs.horizontal);
            }
            canvas.write_glyph(right_corner);
        }
        for side_row in row + 1..bottom {
            for side_col in [col, right] {
                canvas.move_cursor(side_col, side_row);
                canvas.write_glyph(glyphs.vertical);
            }
        }
    }
}

impl Annotation for LegendAnnotation {
    fn before_series(&self) -> bool {
        self.before_series
    }

    fn render(&self, graph: &GraphView, canvas: &mut dyn Canvas) {
        graph.apply_ambient_color(canvas);
        if self.border {
            self.draw_frame(canvas);
        }

        let inset = i32::from(self.border);
        let col = self.bounds.col + inset;
        let row = self.bounds.row + inset;
        let available_width = self.bounds.width - 2 * inset;
        let available_height = self.bounds.height - 2 * inset;
        if available_width <= 0 || available_height <= 0 {
            return;
        }

        let text_width = (available_width - 1).max(0) as usize;
        for (line, (glyph, text)) in (0..available_height).zip(&self.entries) {
            graph.apply_glyph_color(canvas, *glyph);
            canvas.move_cursor(col, row + line);
            canvas.write_glyph(glyph.symbol);

            graph.apply_ambient_color(canvas);
            canvas.write_text(&truncate_or_pad(text, text_width));
        }
    }
}

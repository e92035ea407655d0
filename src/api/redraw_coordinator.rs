use tracing::{trace, warn};

use crate::error::GraphResult;
use crate::render::Canvas;

use super::GraphView;

impl GraphView {
    /// Draws the whole graph in one synchronous pass.
    ///
    /// Order: clear, annotations flagged `before_series`, series in
    /// registration order, both axis lines, both label sets, origin
    /// crosshair, remaining annotations. Fails before touching the canvas
    /// when the cell size has a zero component. A zero-sized canvas is left
    /// untouched and series are skipped when margins leave no drawable area.
    pub fn redraw(&self, canvas: &mut dyn Canvas) -> GraphResult<()> {
        if let Err(err) = self.cell_size.validate() {
            warn!(error = %err, "refusing to redraw graph");
            return Err(err);
        }

        let viewport = canvas.viewport();
        if !viewport.is_valid() {
            trace!(?viewport, "zero-sized canvas, nothing to draw");
            return Ok(());
        }
        self.clear(canvas);
        if self.series.is_empty() && self.annotations.is_empty() {
            trace!("nothing to draw, graph left blank");
            return Ok(());
        }

        for annotation in self.annotations.iter().filter(|a| a.before_series()) {
            annotation.render(self, canvas);
        }

        let draw_bounds = self.draw_bounds(viewport);
        let graph_bounds = self.screen_rect_to_graph_space(viewport, draw_bounds);
        trace!(
            ?draw_bounds,
            ?graph_bounds,
            series_count = self.series.len(),
            "drawing series"
        );
        if draw_bounds.is_empty() {
            trace!(?draw_bounds, "margins cover the canvas, series skipped");
        } else {
            for series in &self.series {
                series.draw_series(self, canvas, draw_bounds, graph_bounds);
            }
        }

        self.apply_ambient_color(canvas);
        self.axis_x.draw_axis_line(self, canvas);
        self.axis_y.draw_axis_line(self, canvas);
        self.axis_x.draw_axis_labels(self, canvas);
        self.axis_y.draw_axis_labels(self, canvas);

        if self.axis_x.visible && self.axis_y.visible {
            let origin = self.origin_on_screen(viewport);
            if draw_bounds.contains(origin) {
                let crosshair = canvas.line_glyphs().crosshair;
                self.apply_ambient_color(canvas);
                canvas.move_cursor(origin.col, origin.row);
                canvas.write_glyph(crosshair);
            }
        }

        for annotation in self.annotations.iter().filter(|a| !a.before_series()) {
            annotation.render(self, canvas);
        }

        Ok(())
    }

    fn clear(&self, canvas: &mut dyn Canvas) {
        let viewport = canvas.viewport();
        self.apply_ambient_color(canvas);
        for row in 0..viewport.height_cells() {
            canvas.move_cursor(0, row);
            for _ in 0..viewport.width_cells() {
                canvas.write_glyph(' ');
            }
        }
    }
}

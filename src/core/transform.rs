use crate::core::types::{
    CellSize, GraphPoint, GraphRect, Margins, ScreenPoint, ScreenRect, ScrollOffset,
};

/// Bidirectional mapping between terminal cells and graph space.
///
/// Screen rows grow downward while graph Y grows upward, so the transform
/// needs the viewport height to flip the vertical axis. Built fresh for
/// every redraw from the owning view's state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphTransform {
    pub scroll_offset: ScrollOffset,
    pub cell_size: CellSize,
    pub margins: Margins,
    pub viewport_height: i32,
}

impl GraphTransform {
    #[must_use]
    pub fn new(
        scroll_offset: ScrollOffset,
        cell_size: CellSize,
        margins: Margins,
        viewport_height: i32,
    ) -> Self {
        Self {
            scroll_offset,
            cell_size,
            margins,
            viewport_height,
        }
    }

    fn margin_left(self) -> i32 {
        i32::try_from(self.margins.left).unwrap_or(i32::MAX)
    }

    fn margin_bottom(self) -> i32 {
        i32::try_from(self.margins.bottom).unwrap_or(i32::MAX)
    }

    /// Returns the graph-space cell represented by screen position `(col, row)`.
    #[must_use]
    pub fn screen_to_graph_space(self, col: i32, row: i32) -> GraphRect {
        let cols_from_origin = f64::from(col) - f64::from(self.margin_left());
        let rows_from_origin =
            f64::from(self.viewport_height) - (f64::from(row) + f64::from(self.margin_bottom()) + 1.0);

        GraphRect::new(
            self.scroll_offset.x + cols_from_origin * self.cell_size.x,
            self.scroll_offset.y + rows_from_origin * self.cell_size.y,
            self.cell_size.x,
            self.cell_size.y,
        )
    }

    /// Returns the graph-space bounding rectangle of a screen rectangle.
    ///
    /// The bottom-left cell anchors the result; width and height scale by
    /// the cell size.
    #[must_use]
    pub fn screen_rect_to_graph_space(self, rect: ScreenRect) -> GraphRect {
        let anchor = self.screen_to_graph_space(rect.col, rect.bottom() - 1);
        GraphRect::new(
            anchor.x,
            anchor.y,
            f64::from(rect.width) * self.cell_size.x,
            f64::from(rect.height) * self.cell_size.y,
        )
    }

    /// Projects a graph-space point into screen cells.
    ///
    /// The result may fall outside the viewport.
    #[must_use]
    pub fn graph_space_to_screen(self, point: GraphPoint) -> ScreenPoint {
        let cols = ((point.x - self.scroll_offset.x) / self.cell_size.x).floor();
        let rows = ((point.y - self.scroll_offset.y) / self.cell_size.y).floor();

        // `as` saturates on overflow and maps NaN to zero.
        let col = self.margin_left().saturating_add(cols as i32);
        let row = (self.viewport_height - 1)
            .saturating_sub(self.margin_bottom())
            .saturating_sub(rows as i32);

        ScreenPoint::new(col, row)
    }
}

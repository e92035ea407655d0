use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Width and height of the drawable cell grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_cells(self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    #[must_use]
    pub fn height_cells(self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    #[must_use]
    pub fn bounds(self) -> ScreenRect {
        ScreenRect::new(0, 0, self.width_cells(), self.height_cells())
    }
}

/// Location in continuous graph space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl GraphPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Discrete terminal cell location.
///
/// Transforms may produce values outside the visible grid; callers clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub col: i32,
    pub row: i32,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Axis-aligned rectangle in graph space.
///
/// `(x, y)` is the bottom-left corner; graph space grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GraphRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.x.min(self.x + self.width)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x.max(self.x + self.width)
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y.min(self.y + self.height)
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y.max(self.y + self.height)
    }

    /// Half-open containment: left/bottom edges are inside, right/top are not.
    #[must_use]
    pub fn contains(self, point: GraphPoint) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.bottom()
            && point.y < self.top()
    }
}

/// Rectangle of terminal cells; `row` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub col: i32,
    pub row: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(col: i32, row: i32, width: i32, height: i32) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn right(self) -> i32 {
        self.col + self.width
    }

    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.row + self.height
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        point.col >= self.col
            && point.col < self.right()
            && point.row >= self.row
            && point.row < self.bottom()
    }
}

/// Graph-space extent of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub x: f64,
    pub y: f64,
}

impl CellSize {
    pub fn new(x: f64, y: f64) -> GraphResult<Self> {
        let size = Self { x, y };
        size.validate()?;
        Ok(size)
    }

    /// Both components must be finite and non-zero.
    pub fn validate(self) -> GraphResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() || self.x == 0.0 || self.y == 0.0 {
            return Err(GraphError::InvalidCellSize {
                x: self.x,
                y: self.y,
            });
        }
        Ok(())
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// Graph-space coordinate aligned with the bottom-left of the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cells reserved for axis labels; series never draw inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub left: u32,
    pub bottom: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(left: u32, bottom: u32) -> Self {
        Self { left, bottom }
    }
}

#[cfg(test)]
mod tests {
    use super::{CellSize, GraphPoint, GraphRect, ScreenPoint, ScreenRect};

    #[test]
    fn graph_rect_contains_is_half_open() {
        let rect = GraphRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(GraphPoint::new(0.0, 0.0)));
        assert!(rect.contains(GraphPoint::new(9.99, 9.99)));
        assert!(!rect.contains(GraphPoint::new(10.0, 5.0)));
        assert!(!rect.contains(GraphPoint::new(5.0, 10.0)));
    }

    #[test]
    fn graph_rect_normalizes_negative_extent() {
        let rect = GraphRect::new(0.0, 0.0, -4.0, 2.0);
        assert!(rect.contains(GraphPoint::new(-2.0, 1.0)));
        assert!(!rect.contains(GraphPoint::new(2.0, 1.0)));
    }

    #[test]
    fn screen_rect_contains_excludes_far_edges() {
        let rect = ScreenRect::new(2, 0, 8, 5);
        assert!(rect.contains(ScreenPoint::new(2, 0)));
        assert!(rect.contains(ScreenPoint::new(9, 4)));
        assert!(!rect.contains(ScreenPoint::new(10, 4)));
        assert!(!rect.contains(ScreenPoint::new(1, 0)));
    }

    #[test]
    fn cell_size_rejects_zero_and_non_finite() {
        assert!(CellSize::new(1.0, 0.5).is_ok());
        assert!(CellSize::new(0.0, 1.0).is_err());
        assert!(CellSize::new(1.0, 0.0).is_err());
        assert!(CellSize::new(f64::NAN, 1.0).is_err());
    }
}

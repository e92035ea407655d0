pub mod line;
pub mod transform;
pub mod types;

pub use line::{clip_segment, draw_line, line_cells};
pub use transform::GraphTransform;
pub use types::{
    CellSize, GraphPoint, GraphRect, Margins, ScreenPoint, ScreenRect, ScrollOffset,
    Viewport,
};

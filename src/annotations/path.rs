use serde::{Deserialize, Serialize};

use crate::api::GraphView;
use crate::core::{GraphPoint, ScreenPoint, draw_line};
use crate::render::{Attribute, Canvas, CellGlyph};

use super::Annotation;

pub const DEFAULT_PATH_SYMBOL: char = '•';

/// Open polyline through graph-space points. The last point is never joined
/// back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathAnnotation {
    pub points: Vec<GraphPoint>,
    pub line_symbol: char,
    pub line_color: Option<Attribute>,
    pub before_series: bool,
}

impl Default for PathAnnotation {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            line_symbol: DEFAULT_PATH_SYMBOL,
            line_color: None,
            before_series: false,
        }
    }
}

impl PathAnnotation {
    #[must_use]
    pub fn new(points: Vec<GraphPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }
}

impl Annotation for PathAnnotation {
    fn before_series(&self) -> bool {
        self.before_series
    }

    fn render(&self, graph: &GraphView, canvas: &mut dyn Canvas) {
        let transform = graph.transform(canvas.viewport());
        let screen: Vec<ScreenPoint> = self
            .points
            .iter()
            .map(|point| transform.graph_space_to_screen(*point))
            .collect();

        graph.apply_glyph_color(
            canvas,
            CellGlyph {
                symbol: self.line_symbol,
                color: self.line_color,
            },
        );
        for segment in screen.windows(2) {
            draw_line(canvas, segment[0], segment[1], self.line_symbol);
        }
        graph.apply_ambient_color(canvas);
    }
}

use serde::{Deserialize, Serialize};

use crate::api::GraphView;
use crate::core::{GraphPoint, ScreenPoint};
use crate::render::{Canvas, clip_to_columns};

use super::Annotation;

/// Where a text annotation is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TextPosition {
    /// Fixed cell, unaffected by scrolling.
    Screen(ScreenPoint),
    /// Graph-space point, re-projected every redraw.
    Graph(GraphPoint),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    pub text: String,
    pub position: TextPosition,
    pub before_series: bool,
}

impl TextAnnotation {
    #[must_use]
    pub fn at_screen(text: impl Into<String>, position: ScreenPoint) -> Self {
        Self {
            text: text.into(),
            position: TextPosition::Screen(position),
            before_series: false,
        }
    }

    #[must_use]
    pub fn at_graph(text: impl Into<String>, position: GraphPoint) -> Self {
        Self {
            text: text.into(),
            position: TextPosition::Graph(position),
            before_series: false,
        }
    }

    #[must_use]
    pub fn with_before_series(mut self, before_series: bool) -> Self {
        self.before_series = before_series;
        self
    }
}

impl Annotation for TextAnnotation {
    fn before_series(&self) -> bool {
        self.before_series
    }

    fn render(&self, graph: &GraphView, canvas: &mut dyn Canvas) {
        if self.text.trim().is_empty() {
            return;
        }

        let viewport = canvas.viewport();
        let screen = match self.position {
            TextPosition::Screen(point) => point,
            TextPosition::Graph(point) => graph.transform(viewport).graph_space_to_screen(point),
        };
        if !viewport.bounds().contains(screen) {
            return;
        }

        if let Some((col, visible)) = clip_to_columns(&self.text, screen.col, viewport.width_cells())
        {
            graph.apply_ambient_color(canvas);
            canvas.move_cursor(col, screen.row);
            canvas.write_text(&visible);
        }
    }
}

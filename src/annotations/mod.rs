//! Overlays drawn independently of series data.
//!
//! The graph draws every annotation whose `before_series` is `true` ahead of
//! the series and the rest after the axes.

mod legend;
mod path;
mod text;

pub use legend::LegendAnnotation;
pub use path::PathAnnotation;
pub use text::{TextAnnotation, TextPosition};

use crate::api::GraphView;
use crate::render::Canvas;

pub trait Annotation {
    /// `true` draws underneath series and axes.
    fn before_series(&self) -> bool;

    fn render(&self, graph: &GraphView, canvas: &mut dyn Canvas);
}

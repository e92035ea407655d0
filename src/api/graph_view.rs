use std::fmt;

use tracing::debug;

use crate::annotations::Annotation;
use crate::axis::Axis;
use crate::core::{
    CellSize, GraphPoint, GraphRect, GraphTransform, Margins, ScreenPoint, ScreenRect,
    ScrollOffset, Viewport,
};
use crate::error::GraphResult;
use crate::interaction::ScrollBehavior;
use crate::render::{Attribute, Canvas, CellGlyph};
use crate::series::Series;

use super::{AxisConfig, GraphViewConfig};

/// Graph widget state: view geometry, axes, series and annotations.
///
/// Every redraw re-derives geometry from this state; nothing is cached
/// between passes.
pub struct GraphView {
    pub(super) margins: Margins,
    pub(super) scroll_offset: ScrollOffset,
    pub(super) cell_size: CellSize,
    pub(super) graph_color: Option<Attribute>,
    pub(super) focused: bool,
    pub(super) axis_x: Axis,
    pub(super) axis_y: Axis,
    pub(super) series: Vec<Box<dyn Series>>,
    pub(super) annotations: Vec<Box<dyn Annotation>>,
    pub(super) scroll_behavior: ScrollBehavior,
    pub(super) needs_redraw: bool,
}

impl fmt::Debug for GraphView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphView")
            .field("margins", &self.margins)
            .field("scroll_offset", &self.scroll_offset)
            .field("cell_size", &self.cell_size)
            .field("graph_color", &self.graph_color)
            .field("axis_x", &self.axis_x)
            .field("axis_y", &self.axis_y)
            .field("series_len", &self.series.len())
            .field("annotations_len", &self.annotations.len())
            .finish_non_exhaustive()
    }
}

impl Default for GraphView {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            margins: Margins::default(),
            scroll_offset: ScrollOffset::default(),
            cell_size: CellSize::default(),
            graph_color: None,
            focused: false,
            axis_x: Axis::horizontal(),
            axis_y: Axis::vertical(),
            series: Vec::new(),
            annotations: Vec::new(),
            scroll_behavior: ScrollBehavior::default(),
            needs_redraw: true,
        }
    }

    pub fn from_config(config: &GraphViewConfig) -> GraphResult<Self> {
        config.validate()?;

        let mut graph = Self::new();
        graph.cell_size = config.cell_size;
        graph.scroll_offset = config.scroll_offset;
        graph.margins = config.margins;
        graph.graph_color = config.graph_color;
        graph.scroll_behavior = config.scroll_behavior;
        apply_axis_config(&mut graph.axis_x, &config.horizontal_axis);
        apply_axis_config(&mut graph.axis_y, &config.vertical_axis);

        debug!(
            cell_size = ?graph.cell_size,
            margins = ?graph.margins,
            "graph view created from config"
        );
        Ok(graph)
    }

    /// Clears series and annotations and restores default view geometry.
    ///
    /// Margins are kept; they belong to the host layout.
    pub fn reset(&mut self) {
        self.scroll_offset = ScrollOffset::default();
        self.cell_size = CellSize::default();
        self.axis_x.reset();
        self.axis_y.reset();
        self.series.clear();
        self.annotations.clear();
        self.graph_color = None;
        self.needs_redraw = true;
        debug!("graph view reset");
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
        self.needs_redraw = true;
    }

    #[must_use]
    pub fn scroll_offset(&self) -> ScrollOffset {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, scroll_offset: ScrollOffset) {
        self.scroll_offset = scroll_offset;
        self.needs_redraw = true;
    }

    #[must_use]
    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// Accepts any value; a zero component fails the next redraw.
    pub fn set_cell_size(&mut self, cell_size: CellSize) {
        self.cell_size = cell_size;
        self.needs_redraw = true;
    }

    #[must_use]
    pub fn graph_color(&self) -> Option<Attribute> {
        self.graph_color
    }

    pub fn set_graph_color(&mut self, color: Option<Attribute>) {
        self.graph_color = color;
        self.needs_redraw = true;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Focus is owned by the host; this only selects the color scheme entry.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.needs_redraw = true;
        }
    }

    #[must_use]
    pub fn axis_x(&self) -> &Axis {
        &self.axis_x
    }

    pub fn axis_x_mut(&mut self) -> &mut Axis {
        self.needs_redraw = true;
        &mut self.axis_x
    }

    #[must_use]
    pub fn axis_y(&self) -> &Axis {
        &self.axis_y
    }

    pub fn axis_y_mut(&mut self) -> &mut Axis {
        self.needs_redraw = true;
        &mut self.axis_y
    }

    #[must_use]
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        self.scroll_behavior
    }

    pub fn set_scroll_behavior(&mut self, behavior: ScrollBehavior) {
        self.scroll_behavior = behavior;
    }

    /// Appends a series on top of those already registered.
    pub fn add_series(&mut self, series: impl Series + 'static) {
        self.series.push(Box::new(series));
        self.needs_redraw = true;
        debug!(count = self.series.len(), "add series");
    }

    #[must_use]
    pub fn series_len(&self) -> usize {
        self.series.len()
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
        self.needs_redraw = true;
    }

    pub fn add_annotation(&mut self, annotation: impl Annotation + 'static) {
        self.annotations.push(Box::new(annotation));
        self.needs_redraw = true;
        debug!(count = self.annotations.len(), "add annotation");
    }

    #[must_use]
    pub fn annotations_len(&self) -> usize {
        self.annotations.len()
    }

    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
        self.needs_redraw = true;
    }

    /// `true` after any state change the host should repaint for.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn mark_redrawn(&mut self) {
        self.needs_redraw = false;
    }

    /// Coordinate transform for a viewport of the given size.
    #[must_use]
    pub fn transform(&self, viewport: Viewport) -> GraphTransform {
        GraphTransform::new(
            self.scroll_offset,
            self.cell_size,
            self.margins,
            viewport.height_cells(),
        )
    }

    #[must_use]
    pub fn screen_to_graph_space(&self, viewport: Viewport, col: i32, row: i32) -> GraphRect {
        self.transform(viewport).screen_to_graph_space(col, row)
    }

    #[must_use]
    pub fn screen_rect_to_graph_space(&self, viewport: Viewport, rect: ScreenRect) -> GraphRect {
        self.transform(viewport).screen_rect_to_graph_space(rect)
    }

    #[must_use]
    pub fn graph_space_to_screen(&self, viewport: Viewport, point: GraphPoint) -> ScreenPoint {
        self.transform(viewport).graph_space_to_screen(point)
    }

    /// Screen projection of graph-space `(0, 0)`, possibly off screen.
    #[must_use]
    pub fn origin_on_screen(&self, viewport: Viewport) -> ScreenPoint {
        self.graph_space_to_screen(viewport, GraphPoint::new(0.0, 0.0))
    }

    /// Viewport minus margins: where series content may be drawn.
    #[must_use]
    pub fn draw_bounds(&self, viewport: Viewport) -> ScreenRect {
        let left = i32::try_from(self.margins.left).unwrap_or(i32::MAX);
        let bottom = i32::try_from(self.margins.bottom).unwrap_or(i32::MAX);
        ScreenRect::new(
            left,
            0,
            viewport.width_cells().saturating_sub(left),
            viewport.height_cells().saturating_sub(bottom),
        )
    }

    /// Graph color when set, otherwise the host scheme entry for the current
    /// focus state.
    #[must_use]
    pub fn ambient_color(&self, canvas: &dyn Canvas) -> Attribute {
        self.graph_color.unwrap_or_else(|| {
            let scheme = canvas.color_scheme();
            if self.focused {
                scheme.focus
            } else {
                scheme.normal
            }
        })
    }

    pub fn apply_ambient_color(&self, canvas: &mut dyn Canvas) {
        let color = self.ambient_color(canvas);
        canvas.set_color(color);
    }

    /// Switches to the glyph's own color, or the ambient color if it has none.
    pub fn apply_glyph_color(&self, canvas: &mut dyn Canvas, glyph: CellGlyph) {
        let color = match glyph.color {
            Some(color) => color,
            None => self.ambient_color(canvas),
        };
        canvas.set_color(color);
    }
}

fn apply_axis_config(axis: &mut Axis, config: &AxisConfig) {
    axis.increment = config.increment;
    axis.show_labels_every = config.show_labels_every;
    axis.visible = config.visible;
    axis.title = config.title.clone();
}

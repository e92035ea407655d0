use std::sync::Arc;

use termgraph::annotations::TextAnnotation;
use termgraph::api::GraphView;
use termgraph::axis::AxisTick;
use termgraph::core::{CellSize, GraphPoint, Margins, ScreenPoint, ScrollOffset};
use termgraph::error::GraphError;
use termgraph::render::{Attribute, Canvas, CellBuffer, Color, ColorScheme};
use termgraph::series::ScatterSeries;

fn scheme() -> ColorScheme {
    ColorScheme {
        normal: Attribute::fg(Color::Green),
        focus: Attribute::fg(Color::BrightYellow),
    }
}

#[test]
fn zero_cell_size_fails_without_touching_the_canvas() {
    let mut graph = GraphView::new();
    graph.set_cell_size(CellSize { x: 0.0, y: 1.0 });
    graph.add_series(ScatterSeries::new(vec![GraphPoint::new(1.0, 1.0)]));

    let mut buffer = CellBuffer::new(10, 10);
    let err = graph.redraw(&mut buffer).expect_err("zero cell width");
    assert!(matches!(err, GraphError::InvalidCellSize { .. }));
    assert_eq!(buffer.writes, 0);
}

#[test]
fn empty_graph_is_cleared_and_left_blank() {
    let graph = GraphView::new();
    let mut buffer = CellBuffer::new(6, 3);
    buffer.move_cursor(0, 1);
    buffer.write_text("stale!");

    graph.redraw(&mut buffer).expect("redraw");

    assert_eq!(buffer.to_text(), "      \n      \n      ");
}

#[test]
fn annotation_alone_also_draws_axes() {
    let mut graph = GraphView::new();
    graph.add_annotation(TextAnnotation::at_screen("hi", ScreenPoint::new(4, 2)));

    let mut buffer = CellBuffer::new(10, 10);
    graph.redraw(&mut buffer).expect("redraw");

    assert_eq!(buffer.symbol_at(0, 9), Some('┼'));
    assert_eq!(buffer.symbol_at(4, 2), Some('h'));
}

#[test]
fn redraw_is_idempotent() {
    let mut graph = GraphView::new();
    graph.set_margins(Margins::new(2, 1));
    graph.set_scroll_offset(ScrollOffset::new(-2.0, -2.0));
    graph.add_series(ScatterSeries::new(vec![
        GraphPoint::new(1.0, 1.0),
        GraphPoint::new(3.0, 4.0),
    ]));

    let mut buffer = CellBuffer::new(16, 8);
    graph.redraw(&mut buffer).expect("first redraw");
    let first = buffer.to_text();
    graph.redraw(&mut buffer).expect("second redraw");
    assert_eq!(buffer.to_text(), first);
}

#[test]
fn graph_color_overrides_the_scheme() {
    let yellow = Attribute::fg(Color::Yellow);
    let mut graph = GraphView::new();
    graph.set_graph_color(Some(yellow));
    graph.add_series(ScatterSeries::new(Vec::new()));

    let mut buffer = CellBuffer::new(10, 10).with_color_scheme(scheme());
    graph.redraw(&mut buffer).expect("redraw");

    assert_eq!(buffer.attribute_at(0, 9), Some(yellow));
    assert_eq!(buffer.attribute_at(5, 5), Some(yellow));
}

#[test]
fn focus_selects_the_focus_attribute() {
    let mut graph = GraphView::new();
    graph.add_series(ScatterSeries::new(Vec::new()));
    let mut buffer = CellBuffer::new(10, 10).with_color_scheme(scheme());

    graph.redraw(&mut buffer).expect("redraw");
    assert_eq!(buffer.attribute_at(3, 9), Some(scheme().normal));

    graph.set_focused(true);
    graph.redraw(&mut buffer).expect("redraw");
    assert_eq!(buffer.attribute_at(3, 9), Some(scheme().focus));
}

#[test]
fn series_draw_under_axes() {
    let mut graph = GraphView::new();
    // Lands on the horizontal axis row.
    graph.add_series(ScatterSeries::new(vec![GraphPoint::new(3.0, 0.0)]));

    let mut buffer = CellBuffer::new(10, 10);
    graph.redraw(&mut buffer).expect("redraw");

    assert_eq!(buffer.symbol_at(3, 9), Some('┬'));
    assert!(buffer.positions_of('x').is_empty());
}

#[test]
fn reset_clears_content_and_restores_defaults() {
    let mut graph = GraphView::new();
    graph.set_margins(Margins::new(3, 1));
    graph.set_scroll_offset(ScrollOffset::new(4.0, 4.0));
    graph.set_cell_size(CellSize::new(2.0, 2.0).expect("valid cell size"));
    graph.axis_x_mut().increment = 5.0;
    graph.axis_x_mut().title = "x".to_owned();
    graph
        .axis_y_mut()
        .set_label_getter(Arc::new(|_: &AxisTick| "?".to_owned()));
    graph.add_series(ScatterSeries::new(vec![GraphPoint::new(1.0, 1.0)]));
    graph.add_annotation(TextAnnotation::at_screen("t", ScreenPoint::new(0, 0)));

    graph.reset();

    assert_eq!(graph.series_len(), 0);
    assert_eq!(graph.annotations_len(), 0);
    assert_eq!(graph.scroll_offset(), ScrollOffset::default());
    assert_eq!(graph.cell_size(), CellSize::default());
    assert_eq!(graph.margins(), Margins::new(3, 1));
    assert!((graph.axis_x().increment - 1.0).abs() < f64::EPSILON);
    assert!(graph.axis_x().title.is_empty());
    assert!(graph.needs_redraw());

    let mut buffer = CellBuffer::new(10, 10);
    graph.redraw(&mut buffer).expect("redraw");
    assert_eq!(buffer.to_text().trim(), "");
}

#[test]
fn state_changes_request_a_redraw() {
    let mut graph = GraphView::new();
    assert!(graph.needs_redraw());
    graph.mark_redrawn();
    assert!(!graph.needs_redraw());

    graph.add_series(ScatterSeries::new(Vec::new()));
    assert!(graph.needs_redraw());
    graph.mark_redrawn();

    graph.axis_y_mut().visible = false;
    assert!(graph.needs_redraw());
}

#[test]
fn clearing_series_leaves_annotations_in_place() {
    let mut graph = GraphView::new();
    graph.add_series(ScatterSeries::new(vec![GraphPoint::new(2.0, 2.0)]));
    graph.add_annotation(TextAnnotation::at_screen("a", ScreenPoint::new(5, 1)));
    graph.mark_redrawn();

    graph.clear_series();
    assert_eq!(graph.series_len(), 0);
    assert_eq!(graph.annotations_len(), 1);
    assert!(graph.needs_redraw());

    let mut buffer = CellBuffer::new(10, 10);
    graph.redraw(&mut buffer).expect("redraw");
    assert!(buffer.positions_of('x').is_empty());
    assert_eq!(buffer.symbol_at(5, 1), Some('a'));
}

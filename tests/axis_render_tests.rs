use std::sync::Arc;

use termgraph::api::GraphView;
use termgraph::axis::AxisTick;
use termgraph::core::{GraphPoint, Margins, ScreenPoint, ScrollOffset, Viewport};
use termgraph::render::{CellBuffer, LineGlyphs};
use termgraph::series::ScatterSeries;

fn scrolled_graph() -> GraphView {
    let mut graph = GraphView::new();
    graph.set_scroll_offset(ScrollOffset::new(-4.0, -3.0));
    // An empty series still counts as content, so axes are drawn.
    graph.add_series(ScatterSeries::new(Vec::new()));
    graph
}

#[test]
fn axes_cross_at_origin_with_tick_marks() {
    let graph = scrolled_graph();
    let mut buffer = CellBuffer::new(20, 10);
    graph.redraw(&mut buffer).expect("redraw");

    assert_eq!(buffer.symbol_at(4, 6), Some('┼'));
    assert_eq!(buffer.symbol_at(0, 6), Some('┬'));
    assert_eq!(buffer.symbol_at(10, 6), Some('┬'));
    assert_eq!(buffer.symbol_at(4, 2), Some('┤'));
    assert_eq!(buffer.symbol_at(4, 9), Some('┤'));
}

#[test]
fn horizontal_labels_are_centered_below_ticks() {
    let graph = scrolled_graph();
    let mut buffer = CellBuffer::new(20, 10);
    graph.redraw(&mut buffer).expect("redraw");

    // Ticks at columns 0, 5, 10 and 15 carry x = -4, 1, 6 and 11.
    assert_eq!(buffer.symbol_at(0, 7), Some('4'));
    assert_eq!(buffer.symbol_at(5, 7), Some('1'));
    assert_eq!(buffer.symbol_at(10, 7), Some('6'));
    assert_eq!(buffer.symbol_at(14, 7), Some('1'));
    assert_eq!(buffer.symbol_at(15, 7), Some('1'));
    assert_eq!(buffer.symbol_at(16, 7), Some(' '));
}

#[test]
fn vertical_labels_end_left_of_the_axis() {
    let graph = scrolled_graph();
    let mut buffer = CellBuffer::new(20, 10);
    graph.redraw(&mut buffer).expect("redraw");

    assert_eq!(buffer.symbol_at(3, 0), Some('6'));
    assert_eq!(buffer.symbol_at(3, 5), Some('1'));
    assert_eq!(buffer.symbol_at(3, 1), Some(' '));
}

#[test]
fn vertical_labels_share_the_widest_left_edge() {
    let mut graph = GraphView::new();
    graph.set_margins(Margins::new(3, 2));
    graph.axis_y_mut().show_labels_every = 7;
    graph
        .axis_y_mut()
        .set_label_getter(Arc::new(|tick: &AxisTick| {
            format!("{:.0}", tick.graph_space.y * 100.0)
        }));
    graph.add_series(ScatterSeries::new(Vec::new()));

    let mut buffer = CellBuffer::new(20, 10);
    graph.redraw(&mut buffer).expect("redraw");

    // Rows 0 and 7 hold y = 7 and y = 0.
    assert_eq!(&buffer.row_text(0)[..3], "700");
    assert_eq!(buffer.symbol_at(0, 7), Some(' '));
    assert_eq!(buffer.symbol_at(1, 7), Some(' '));
    assert_eq!(buffer.symbol_at(2, 7), Some('0'));
}

#[test]
fn titles_are_centered_in_the_margins() {
    let mut graph = GraphView::new();
    graph.set_margins(Margins::new(3, 2));
    graph.axis_x_mut().title = "Time".to_owned();
    graph.axis_y_mut().title = "Temp".to_owned();
    graph.add_series(ScatterSeries::new(Vec::new()));

    let mut buffer = CellBuffer::new(20, 10);
    graph.redraw(&mut buffer).expect("redraw");

    assert_eq!(buffer.row_text(9), "        Time        ");
    let column: String = (3..7)
        .filter_map(|row| buffer.symbol_at(0, row))
        .collect();
    assert_eq!(column, "Temp");
}

#[test]
fn hidden_axis_draws_nothing_and_suppresses_crosshair() {
    let mut graph = scrolled_graph();
    graph.axis_y_mut().visible = false;

    let mut buffer = CellBuffer::new(20, 10);
    graph.redraw(&mut buffer).expect("redraw");

    assert!(buffer.positions_of('┼').is_empty());
    assert!(buffer.positions_of('┤').is_empty());
    assert_eq!(buffer.symbol_at(4, 6), Some('┬'));
    assert_eq!(buffer.symbol_at(3, 0), Some(' '));
}

#[test]
fn crosshair_only_when_origin_is_drawable() {
    let mut graph = scrolled_graph();
    graph.set_scroll_offset(ScrollOffset::new(5.0, 5.0));

    let mut buffer = CellBuffer::new(20, 10);
    graph.redraw(&mut buffer).expect("redraw");
    assert!(buffer.positions_of('┼').is_empty());

    // The clamped axes still cross in the corner.
    assert_eq!(buffer.symbol_at(0, 9), Some('┤'));
    assert_eq!(
        graph.graph_space_to_screen(Viewport::new(20, 10), GraphPoint::new(0.0, 0.0)),
        ScreenPoint::new(-5, 14)
    );
}

#[test]
fn ascii_glyphs_are_used_when_the_canvas_asks_for_them() {
    let graph = scrolled_graph();
    let mut buffer = CellBuffer::new(20, 10).with_line_glyphs(LineGlyphs::ascii());
    graph.redraw(&mut buffer).expect("redraw");

    assert_eq!(buffer.symbol_at(4, 6), Some(LineGlyphs::ascii().crosshair));
}


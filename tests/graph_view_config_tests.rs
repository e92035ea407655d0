use approx::assert_relative_eq;
use termgraph::api::{GraphView, GraphViewConfig};
use termgraph::core::{CellSize, Margins, ScrollOffset};
use termgraph::error::GraphError;
use termgraph::render::{Attribute, Color};

#[test]
fn default_config_round_trips_through_json() {
    let config = GraphViewConfig::default()
        .with_margins(Margins::new(5, 2))
        .with_scroll_offset(ScrollOffset::new(-3.0, 1.5))
        .with_graph_color(Attribute::fg(Color::Cyan));

    let json = config.to_json_pretty().expect("serialize");
    let parsed = GraphViewConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = GraphViewConfig::from_json_str(
        r#"{
            "cell_size": { "x": 0.5, "y": 2.0 },
            "margins": { "left": 4, "bottom": 1 },
            "horizontal_axis": { "title": "time" }
        }"#,
    )
    .expect("parse");

    assert_relative_eq!(config.cell_size.x, 0.5);
    assert_eq!(config.margins, Margins::new(4, 1));
    assert_eq!(config.horizontal_axis.title, "time");
    assert_relative_eq!(config.horizontal_axis.increment, 1.0);
    assert_eq!(config.horizontal_axis.show_labels_every, 5);
    assert!(config.vertical_axis.visible);
    assert_relative_eq!(config.scroll_behavior.fast_multiplier, 5.0);
}

#[test]
fn zero_cell_size_is_rejected() {
    let err = GraphViewConfig::from_json_str(r#"{ "cell_size": { "x": 1.0, "y": 0.0 } }"#)
        .expect_err("zero cell height");
    assert!(matches!(err, GraphError::InvalidCellSize { .. }));
}

#[test]
fn malformed_json_is_reported() {
    let err = GraphViewConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, GraphError::InvalidConfig(_)));
}

#[test]
fn graph_view_is_built_from_config() {
    let mut config = GraphViewConfig::default()
        .with_cell_size(CellSize::new(10.0, 0.25).expect("valid cell size"))
        .with_margins(Margins::new(6, 2));
    config.vertical_axis.title = "value".to_owned();
    config.horizontal_axis.show_labels_every = 2;

    let graph = GraphView::from_config(&config).expect("valid config");
    assert_eq!(graph.margins(), Margins::new(6, 2));
    assert_relative_eq!(graph.cell_size().x, 10.0);
    assert_eq!(graph.axis_y().title, "value");
    assert_eq!(graph.axis_x().show_labels_every, 2);
}

#[test]
fn graph_view_rejects_invalid_config() {
    let config = GraphViewConfig {
        cell_size: CellSize { x: 0.0, y: 0.0 },
        ..GraphViewConfig::default()
    };
    assert!(GraphView::from_config(&config).is_err());
}

use std::collections::HashSet;

use termgraph::core::{ScreenPoint, draw_line, line_cells};
use termgraph::render::CellBuffer;

fn p(col: i32, row: i32) -> ScreenPoint {
    ScreenPoint::new(col, row)
}

#[test]
fn horizontal_line_includes_both_endpoints() {
    let cells = line_cells(p(0, 0), p(4, 0));
    assert_eq!(cells, vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0), p(4, 0)]);
}

#[test]
fn diagonal_is_strictly_monotonic() {
    let cells = line_cells(p(0, 0), p(3, 3));
    assert_eq!(cells, vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3)]);

    for pair in cells.windows(2) {
        assert_eq!(pair[1].col, pair[0].col + 1);
        assert_eq!(pair[1].row, pair[0].row + 1);
    }
}

#[test]
fn degenerate_line_yields_no_cells() {
    assert!(line_cells(p(5, 5), p(5, 5)).is_empty());
}

#[test]
fn lines_are_symmetric_across_octants() {
    let endpoints = [
        (p(0, 0), p(7, 2)),
        (p(0, 0), p(2, 7)),
        (p(0, 0), p(-7, 2)),
        (p(0, 0), p(-2, -7)),
        (p(3, -4), p(-5, 6)),
    ];

    for (start, end) in endpoints {
        let forward = line_cells(start, end);
        let backward = line_cells(end, start);

        assert_eq!(forward.first(), Some(&start));
        assert_eq!(forward.last(), Some(&end));
        let major = (end.col - start.col).abs().max((end.row - start.row).abs());
        assert_eq!(forward.len(), major as usize + 1);
        assert_eq!(backward.len(), forward.len());

        // Adjacent cells always touch (8-connected, no gaps).
        for pair in forward.windows(2) {
            assert!((pair[1].col - pair[0].col).abs() <= 1);
            assert!((pair[1].row - pair[0].row).abs() <= 1);
        }
        let unique: HashSet<_> = forward.iter().collect();
        assert_eq!(unique.len(), forward.len());
    }
}

#[test]
fn draw_line_clips_to_canvas() {
    let mut buffer = CellBuffer::new(5, 3);
    draw_line(&mut buffer, p(-2, 1), p(8, 1), '*');
    assert_eq!(buffer.row_text(1), "*****");
    assert_eq!(buffer.writes, 5);
}

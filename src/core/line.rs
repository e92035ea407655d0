use crate::core::types::{ScreenPoint, ScreenRect};
use crate::render::Canvas;

/// Rasterizes a straight line between two cells with integer Bresenham stepping.
///
/// Both endpoints are included. A line from a cell to itself yields no cells;
/// call sites compare endpoints and skip degenerate segments. The whole
/// segment is returned, so callers drawing far off-screen points should go
/// through `draw_line`, which clips first.
#[must_use]
pub fn line_cells(start: ScreenPoint, end: ScreenPoint) -> Vec<ScreenPoint> {
    if start == end {
        return Vec::new();
    }

    // i64 so spans between saturated projections cannot overflow.
    let (mut col, mut row) = (i64::from(start.col), i64::from(start.row));
    let (end_col, end_row) = (i64::from(end.col), i64::from(end.row));
    let dx = (end_col - col).abs();
    let dy = (end_row - row).abs();
    let step_col = if col < end_col { 1 } else { -1 };
    let step_row = if row < end_row { 1 } else { -1 };
    let mut err = (if dx > dy { dx } else { -dy }) / 2;

    let mut cells = Vec::new();
    loop {
        // Every stepped cell lies between two i32 endpoints.
        cells.push(ScreenPoint::new(col as i32, row as i32));
        if col == end_col && row == end_row {
            break;
        }

        let e2 = err;
        if e2 > -dx {
            err -= dy;
            col += step_col;
        }
        if e2 < dy {
            err += dx;
            row += step_row;
        }
    }

    cells
}

/// Clips the segment to the cells of `bounds` (Liang-Barsky).
///
/// Endpoints already inside are returned unchanged; clipped ones are
/// rounded to the nearest cell. `None` when the segment misses `bounds`.
#[must_use]
pub fn clip_segment(
    start: ScreenPoint,
    end: ScreenPoint,
    bounds: ScreenRect,
) -> Option<(ScreenPoint, ScreenPoint)> {
    if bounds.is_empty() {
        return None;
    }

    let (x0, y0) = (f64::from(start.col), f64::from(start.row));
    let (dx, dy) = (f64::from(end.col) - x0, f64::from(end.row) - y0);
    let (min_col, max_col) = (f64::from(bounds.col), f64::from(bounds.right() - 1));
    let (min_row, max_row) = (f64::from(bounds.row), f64::from(bounds.bottom() - 1));

    let mut enter = 0.0_f64;
    let mut exit = 1.0_f64;
    for (p, q) in [
        (-dx, x0 - min_col),
        (dx, max_col - x0),
        (-dy, y0 - min_row),
        (dy, max_row - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > exit {
                return None;
            }
            enter = enter.max(t);
        } else {
            if t < enter {
                return None;
            }
            exit = exit.min(t);
        }
    }

    let at = |t: f64| {
        let col = (x0 + t * dx).round().clamp(min_col, max_col);
        let row = (y0 + t * dy).round().clamp(min_row, max_row);
        // Clamped into `bounds`, so both fit in i32.
        ScreenPoint::new(col as i32, row as i32)
    };
    let clipped_start = if enter == 0.0 { start } else { at(enter) };
    let clipped_end = if exit == 1.0 { end } else { at(exit) };
    Some((clipped_start, clipped_end))
}

/// Draws `symbol` on every rasterized cell that lies inside the canvas.
///
/// The segment is clipped to the canvas first, so the work done is bounded
/// by the canvas size however far off-screen the endpoints are.
pub fn draw_line(canvas: &mut dyn Canvas, start: ScreenPoint, end: ScreenPoint, symbol: char) {
    if start == end {
        return;
    }

    let bounds = canvas.bounds();
    let Some((start, end)) = clip_segment(start, end, bounds) else {
        return;
    };

    if start == end {
        // Grazes a single cell.
        canvas.move_cursor(start.col, start.row);
        canvas.write_glyph(symbol);
        return;
    }
    for cell in line_cells(start, end) {
        if bounds.contains(cell) {
            canvas.move_cursor(cell.col, cell.row);
            canvas.write_glyph(symbol);
        }
    }
}

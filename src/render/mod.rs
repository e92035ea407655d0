mod cell_buffer;
mod primitives;
mod text;

pub use cell_buffer::{Cell, CellBuffer};
pub use primitives::{Attribute, CellGlyph, Color, ColorScheme, LineGlyphs};
pub use text::{clip_to_columns, text_width, truncate_or_pad};

use crate::core::{ScreenRect, Viewport};

/// Contract implemented by the console driver a graph draws through.
///
/// The cursor is positioned with `move_cursor` and advances one column per
/// written glyph. Writes outside the viewport must be ignored by the
/// implementation; the graph clips what it can but labels may overrun.
pub trait Canvas {
    /// Current size of the drawable region, stable for one redraw pass.
    fn viewport(&self) -> Viewport;

    fn move_cursor(&mut self, col: i32, row: i32);

    fn write_glyph(&mut self, symbol: char);

    fn write_text(&mut self, text: &str) {
        for symbol in text.chars() {
            self.write_glyph(symbol);
        }
    }

    fn set_color(&mut self, attribute: Attribute);

    fn color_scheme(&self) -> ColorScheme;

    fn line_glyphs(&self) -> LineGlyphs {
        LineGlyphs::default()
    }

    fn bounds(&self) -> ScreenRect {
        self.viewport().bounds()
    }
}

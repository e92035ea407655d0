use crate::core::{ScreenPoint, Viewport};
use crate::render::{Attribute, Canvas, ColorScheme, LineGlyphs};

/// One written terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub attribute: Attribute,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            attribute: Attribute::default(),
        }
    }
}

/// In-memory canvas used by tests and headless hosts.
///
/// Mirrors what a console driver would show: cursor-relative writes,
/// a current attribute, and silent clipping at the grid edges.
#[derive(Debug, Clone)]
pub struct CellBuffer {
    viewport: Viewport,
    cells: Vec<Cell>,
    cursor: ScreenPoint,
    attribute: Attribute,
    scheme: ColorScheme,
    glyphs: LineGlyphs,
    pub writes: usize,
}

impl CellBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let viewport = Viewport::new(width, height);
        let len = (width as usize) * (height as usize);
        Self {
            viewport,
            cells: vec![Cell::default(); len],
            cursor: ScreenPoint::default(),
            attribute: Attribute::default(),
            scheme: ColorScheme::default(),
            glyphs: LineGlyphs::default(),
            writes: 0,
        }
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_line_glyphs(mut self, glyphs: LineGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if !self.viewport.bounds().contains(ScreenPoint::new(col, row)) {
            return None;
        }
        Some(row as usize * self.viewport.width as usize + col as usize)
    }

    #[must_use]
    pub fn cell(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|index| self.cells[index])
    }

    #[must_use]
    pub fn symbol_at(&self, col: i32, row: i32) -> Option<char> {
        self.cell(col, row).map(|cell| cell.symbol)
    }

    #[must_use]
    pub fn attribute_at(&self, col: i32, row: i32) -> Option<Attribute> {
        self.cell(col, row).map(|cell| cell.attribute)
    }

    /// Returns one row as a string, trailing blanks included.
    #[must_use]
    pub fn row_text(&self, row: i32) -> String {
        (0..self.viewport.width_cells())
            .filter_map(|col| self.symbol_at(col, row))
            .collect()
    }

    /// Returns every cell holding `symbol`, in row-major order.
    #[must_use]
    pub fn positions_of(&self, symbol: char) -> Vec<ScreenPoint> {
        let width = self.viewport.width_cells();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.symbol == symbol)
            .map(|(index, _)| {
                let index = index as i32;
                ScreenPoint::new(index % width, index / width)
            })
            .collect()
    }

    /// Renders the whole grid, one line per row.
    #[must_use]
    pub fn to_text(&self) -> String {
        (0..self.viewport.height_cells())
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Canvas for CellBuffer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn move_cursor(&mut self, col: i32, row: i32) {
        self.cursor = ScreenPoint::new(col, row);
    }

    fn write_glyph(&mut self, symbol: char) {
        if let Some(index) = self.index(self.cursor.col, self.cursor.row) {
            self.cells[index] = Cell {
                symbol,
                attribute: self.attribute,
            };
            self.writes += 1;
        }
        self.cursor.col = self.cursor.col.saturating_add(1);
    }

    fn set_color(&mut self, attribute: Attribute) {
        self.attribute = attribute;
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn line_glyphs(&self) -> LineGlyphs {
        self.glyphs
    }
}

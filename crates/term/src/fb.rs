//! Terminal cell frame.
//!
//! This is the *display-side* buffer: one entry per terminal cell, each
//! normally an upper half block carrying two display pixels. The camera's
//! offscreen buffer lives in [`crate::pixels`].

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors and weight of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::BLACK,
            bold: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// Glyph whose foreground paints the upper pixel.
    pub const UPPER_HALF: char = '▀';

    /// Two vertically stacked display pixels.
    pub fn half_block(upper: Rgb, lower: Rgb) -> Self {
        Self {
            ch: Self::UPPER_HALF,
            style: CellStyle {
                fg: upper,
                bg: lower,
                bold: false,
            },
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::half_block(Rgb::BLACK, Rgb::BLACK)
    }
}

/// Row-major grid of cells, `cols x rows`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); usize::from(cols) * usize::from(rows)],
        }
    }

    pub fn width(&self) -> u16 {
        self.cols
    }

    pub fn height(&self) -> u16 {
        self.rows
    }

    /// Change the grid size, reusing the allocation. Contents are not
    /// preserved in any meaningful layout; callers redraw every cell.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if (cols, rows) != (self.cols, self.rows) {
            self.cols = cols;
            self.rows = rows;
            self.cells
                .resize(usize::from(cols) * usize::from(rows), Cell::default());
        }
    }

    /// Cells of row `y`, or an empty slice past the bottom.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.rows {
            return &[];
        }
        let w = usize::from(self.cols);
        let start = usize::from(y) * w;
        &self.cells[start..start + w]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(usize::from(x)).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.cols && y < self.rows {
            let i = usize::from(y) * usize::from(self.cols) + usize::from(x);
            self.cells[i] = cell;
        }
    }

    /// Write text left to right, clipped at the right edge.
    ///
    /// Returns the column after the last written character.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars().take(usize::from(self.cols.saturating_sub(x))) {
            self.set(cx, y, Cell { ch, style });
            cx += 1;
        }
        cx
    }
}

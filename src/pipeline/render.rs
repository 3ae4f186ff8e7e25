//! Grid rendering: sparse cell map → dense text grid.
//!
//! The grid is stored row-major in one flat `Vec`, so `(x, y)` lives at
//! `y * width + x`. Rows print top to bottom (increasing y), columns left to
//! right (increasing x), with no separator between columns.

use crate::pipeline::parse::{CellMap, Coord, Glyph};
use tracing::debug;

/// Dense `width × height` grid of cell strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<String>,
}

impl Grid {
    /// Allocate a grid with every cell set to `blank`.
    ///
    /// Callers are expected to have checked the size against
    /// [`crate::GridConfig::allows`] first.
    pub fn new(width: usize, height: usize, blank: &str) -> Self {
        Self {
            width,
            height,
            cells: vec![blank.to_string(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell contents at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord) -> Option<&str> {
        self.index(coord).map(|i| self.cells[i].as_str())
    }

    /// Put `glyph` at `coord`. Returns `false` (and changes nothing) when the
    /// coordinate is outside the grid.
    pub fn place(&mut self, coord: Coord, glyph: &Glyph) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = glyph.to_string();
                true
            }
            None => false,
        }
    }

    /// Place every cell of `cells`; returns how many were out of bounds.
    pub fn fill(&mut self, cells: &CellMap) -> usize {
        let skipped = cells
            .iter()
            .filter(|(coord, glyph)| !self.place(**coord, glyph))
            .count();
        if skipped > 0 {
            debug!("Skipped {} cells outside the {}x{} grid", skipped, self.width, self.height);
        }
        skipped
    }

    /// Each row joined without separators, one `\n` per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        // `chunks` panics on a zero chunk size.
        if self.width > 0 {
            for row in self.cells.chunks(self.width) {
                for cell in row {
                    out.push_str(cell);
                }
                out.push('\n');
            }
        } else {
            for _ in 0..self.height {
                out.push('\n');
            }
        }
        out
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.x < self.width && coord.y < self.height).then(|| coord.y * self.width + coord.x)
    }
}

/// Allocate, fill and serialise a grid in one call.
pub fn render_cells(width: usize, height: usize, cells: &CellMap, blank: &str) -> String {
    let mut grid = Grid::new(width, height, blank);
    grid.fill(cells);
    grid.to_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(entries: &[(usize, usize, char)]) -> CellMap {
        entries
            .iter()
            .map(|&(x, y, c)| (Coord::new(x, y), Glyph::from_char(c)))
            .collect()
    }

    #[test]
    fn renders_six_by_four() {
        let map = cells(&[(2, 1, '★'), (5, 3, '♦')]);
        let text = render_cells(6, 4, &map, " ");
        assert_eq!(text, "      \n  ★   \n      \n     ♦\n");
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn custom_blank_fills_empty_cells() {
        let map = cells(&[(0, 0, '█')]);
        assert_eq!(render_cells(3, 2, &map, "."), "█..\n...\n");
    }

    #[test]
    fn out_of_bounds_cells_are_skipped() {
        let map = cells(&[(0, 0, 'a'), (9, 0, 'b'), (0, 9, 'c')]);
        let mut grid = Grid::new(2, 2, " ");
        assert_eq!(grid.fill(&map), 2);
        assert_eq!(grid.get(Coord::new(0, 0)), Some("a"));
        assert_eq!(grid.get(Coord::new(9, 0)), None);
        assert_eq!(grid.to_text(), "a \n  \n");
    }

    #[test]
    fn multi_codepoint_glyph_occupies_one_cell() {
        let mut map = CellMap::new();
        map.insert(
            Coord::new(1, 0),
            Glyph::from_codepoints(&[0x2764, 0xFE0F]).unwrap(),
        );
        assert_eq!(render_cells(2, 1, &map, "-"), "-\u{2764}\u{FE0F}\n");
    }

    #[test]
    fn zero_width_grid_still_has_rows() {
        let grid = Grid::new(0, 2, " ");
        assert_eq!(grid.to_text(), "\n\n");
        assert_eq!(Grid::new(3, 0, " ").to_text(), "");
    }
}

//! Board module - manages the game grid
//!
//! A runtime-sized W x H grid of cell identities stored as a flat array in
//! row-major order for cache locality. 0 is empty; nonzero is the identity of
//! the piece kind that locked there. Dimensions never change after
//! construction; the grid is mutated only through `lock` and
//! `clear_completed_rows`.

use crate::core::piece::Piece;
use crate::core::shapes::ShapeMatrix;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat cell array, row-major (row * width + col)
    cells: Vec<u8>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: i8, row: i8) -> Option<usize> {
        if !self.inside(col, row) {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// True iff (col, row) lies within the grid bounds
    pub fn inside(&self, col: i8, row: i8) -> bool {
        col >= 0 && col < self.width as i8 && row >= 0 && row < self.height as i8
    }

    /// Cell identity at (col, row), or None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<u8> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row); returns false if out of bounds
    pub fn set(&mut self, col: i8, row: i8, value: u8) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check whether a piece fits at its position plus the given offsets.
    ///
    /// Columns must be in bounds for every occupied cell. Rows below 0 are
    /// exempt from row bounds and collision (a freshly spawned piece may
    /// overhang the top edge); rows at or past the floor, or landing on a
    /// nonzero cell, are rejected. `shape` overrides the piece's matrix for
    /// rotation probing.
    pub fn is_valid_placement(
        &self,
        piece: &Piece,
        col_off: i8,
        row_off: i8,
        shape: Option<&ShapeMatrix>,
    ) -> bool {
        for (col, row) in piece.cells(col_off, row_off, shape) {
            if col < 0 || col >= self.width as i8 {
                return false;
            }
            if row < 0 {
                continue;
            }
            if row >= self.height as i8 {
                return false;
            }
            if self.cells[row as usize * self.width as usize + col as usize] != 0 {
                return false;
            }
        }
        true
    }

    /// Write the piece's identity into every occupied cell with row >= 0.
    ///
    /// Cells above the visible grid are dropped silently; a piece locking up
    /// there shows up as a game-over condition on the next spawn, not as an
    /// error here.
    pub fn lock(&mut self, piece: &Piece) {
        let id = piece.id();
        for (col, row) in piece.cells(0, 0, None) {
            if row >= 0 {
                self.set(col, row, id);
            }
        }
    }

    /// Remove every row with no empty cell, shifting the rest down and
    /// refilling the top with empty rows. Returns the number of rows removed.
    pub fn clear_completed_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_row = height;
        let mut cleared = 0;

        // Two-pointer compaction from the bottom up, no allocation.
        for read_row in (0..height).rev() {
            let start = read_row * width;
            let complete = self.cells[start..start + width].iter().all(|&c| c != 0);
            if complete {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let dst = write_row * width;
                    self.cells.copy_within(start..start + width, dst);
                }
            }
        }

        // Empty rows enter at the top.
        self.cells[..write_row * width].fill(0);

        cleared
    }

    /// True iff the stack has reached the ceiling (any nonzero cell in row 0)
    pub fn is_game_over(&self) -> bool {
        self.cells[..self.width as usize].iter().any(|&c| c != 0)
    }

    /// A single row as a slice
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// The full flat cell array, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_index_calculation() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(10, 20);
        assert!(board.set(5, 10, PieceKind::T.id()));
        assert_eq!(board.get(5, 10), Some(PieceKind::T.id()));
        assert_eq!(board.get(-1, 0), None);
        assert!(!board.set(0, 20, 1));
    }

    #[test]
    fn test_lock_drops_rows_above_grid() {
        let mut board = Board::new(10, 20);
        let mut piece = Piece::new(PieceKind::O, 10);
        piece.col = 0;
        piece.row = -1;

        board.lock(&piece);

        // Only the bottom half of the O lands on the grid.
        assert_eq!(board.get(0, 0), Some(PieceKind::O.id()));
        assert_eq!(board.get(1, 0), Some(PieceKind::O.id()));
        assert_eq!(board.row(1).iter().filter(|&&c| c != 0).count(), 0);
    }

    #[test]
    fn test_clear_compaction_preserves_row_order() {
        let mut board = Board::new(4, 5);
        // Row 1 has a hole, rows 2 and 4 are complete, row 3 has a hole.
        for col in 0..4 {
            board.set(col, 2, 1);
            board.set(col, 4, 2);
        }
        board.set(0, 1, 3);
        board.set(3, 3, 4);

        assert_eq!(board.clear_completed_rows(), 2);

        // Partial rows keep their relative order, shifted to the bottom.
        assert_eq!(board.get(0, 3), Some(3));
        assert_eq!(board.get(3, 4), Some(4));
        assert!(board.row(0).iter().all(|&c| c == 0));
        assert!(board.row(1).iter().all(|&c| c == 0));
        assert!(board.row(2).iter().all(|&c| c == 0));
    }

    #[test]
    fn test_empty_row_is_not_completed() {
        let mut board = Board::new(6, 6);
        assert_eq!(board.clear_completed_rows(), 0);
    }
}

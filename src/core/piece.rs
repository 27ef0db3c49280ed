//! Piece module - a positioned, oriented instance of a shape
//!
//! Each piece owns a private copy of its shape matrix, so rotating one piece
//! can never corrupt the shared shape table or another piece.

use arrayvec::ArrayVec;

use crate::core::shapes::{self, ShapeMatrix};
use crate::types::PieceKind;

/// Upper bound on occupied cells per shape (largest matrix is 4x4)
pub const MAX_PIECE_CELLS: usize = 16;

/// Occupied absolute cells, row-major, left-to-right then top-to-bottom
pub type PieceCells = ArrayVec<(i8, i8), MAX_PIECE_CELLS>;

/// Active or queued falling piece
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    kind: PieceKind,
    shape: ShapeMatrix,
    /// Column of the matrix's top-left corner
    pub col: i8,
    /// Row of the top-left corner; negative while above the visible grid
    pub row: i8,
}

impl Piece {
    /// Create a piece centered horizontally on a grid of the given width
    pub fn new(kind: PieceKind, grid_width: u8) -> Self {
        let shape = shapes::owned_shape(kind);
        debug_assert!(shapes::is_rectangular(&shape));
        let col = centered_col(grid_width, &shape);
        Self {
            kind,
            shape,
            col,
            row: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Board-cell identity written at lock time
    pub fn id(&self) -> u8 {
        self.kind.id()
    }

    pub fn shape(&self) -> &ShapeMatrix {
        &self.shape
    }

    /// Width of the current (possibly rotated) matrix
    pub fn width(&self) -> usize {
        self.shape.first().map_or(0, |row| row.len())
    }

    /// Height of the current (possibly rotated) matrix
    pub fn height(&self) -> usize {
        self.shape.len()
    }

    /// Absolute coordinates of every occupied cell, offset by (col_off, row_off).
    ///
    /// When `shape` is given it is used in place of the piece's own matrix
    /// (for probing a rotation before committing it).
    pub fn cells(&self, col_off: i8, row_off: i8, shape: Option<&ShapeMatrix>) -> PieceCells {
        let shape = shape.unwrap_or(&self.shape);
        let mut out = PieceCells::new();
        for (dr, row) in shape.iter().enumerate() {
            for (dc, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    let _ = out.try_push((
                        self.col + dc as i8 + col_off,
                        self.row + dr as i8 + row_off,
                    ));
                }
            }
        }
        out
    }

    /// Matrix-local occupied cells (origin at the top-left corner)
    pub fn local_cells(&self) -> PieceCells {
        self.cells(-self.col, -self.row, None)
    }

    /// The current matrix rotated 90 degrees clockwise, without mutating self
    pub fn rotated(&self) -> ShapeMatrix {
        shapes::rotate_cw(&self.shape)
    }

    /// Commit an accepted rotation: new matrix plus the kick offset that validated
    pub fn apply_rotation(&mut self, shape: ShapeMatrix, kick: i8) {
        self.shape = shape;
        self.col += kick;
    }

    /// Re-center horizontally at the top of the grid (spawn position)
    pub fn recenter(&mut self, grid_width: u8) {
        self.col = centered_col(grid_width, &self.shape);
        self.row = 0;
    }
}

fn centered_col(grid_width: u8, shape: &ShapeMatrix) -> i8 {
    let shape_width = shape.first().map_or(0, |row| row.len());
    (grid_width / 2) as i8 - (shape_width / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_is_centered_at_top() {
        // I is 4 wide: 23/2 - 4/2 = 11 - 2 = 9.
        let piece = Piece::new(PieceKind::I, 23);
        assert_eq!(piece.col, 9);
        assert_eq!(piece.row, 0);

        // O is 2 wide on a width-10 grid: 5 - 1 = 4.
        let piece = Piece::new(PieceKind::O, 10);
        assert_eq!(piece.col, 4);
    }

    #[test]
    fn test_cells_are_row_major_with_offsets() {
        let mut piece = Piece::new(PieceKind::X, 10);
        piece.col = 2;
        piece.row = 3;

        // X: [[0,1],[1,1]] -> (3,3), (2,4), (3,4).
        let cells: Vec<_> = piece.cells(0, 0, None).into_iter().collect();
        assert_eq!(cells, vec![(3, 3), (2, 4), (3, 4)]);

        let shifted: Vec<_> = piece.cells(1, -1, None).into_iter().collect();
        assert_eq!(shifted, vec![(4, 2), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_local_cells_ignore_position() {
        let mut piece = Piece::new(PieceKind::X, 10);
        piece.col = 7;
        piece.row = -2;
        let cells: Vec<_> = piece.local_cells().into_iter().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_rotated_does_not_mutate() {
        let piece = Piece::new(PieceKind::I, 23);
        let before = piece.shape().clone();
        let rotated = piece.rotated();

        assert_eq!(piece.shape(), &before);
        assert_ne!(&rotated, piece.shape());
    }

    #[test]
    fn test_apply_rotation_commits_shape_and_kick() {
        let mut piece = Piece::new(PieceKind::I, 23);
        let rotated = piece.rotated();
        let col_before = piece.col;

        piece.apply_rotation(rotated, -2);
        assert_eq!(piece.col, col_before - 2);
        assert_eq!(piece.width(), 1);
        assert_eq!(piece.height(), 4);
    }

    #[test]
    fn test_override_shape_probes_without_commit() {
        let piece = Piece::new(PieceKind::W, 10);
        let rotated = piece.rotated();

        // W is [[1,0]]; rotated it is [[1],[0]] - same single occupied cell.
        let probed = piece.cells(0, 0, Some(&rotated));
        assert_eq!(probed.len(), 1);
        assert_eq!(piece.width(), 2, "probe must not change the live matrix");
    }

    #[test]
    fn test_recenter_resets_position() {
        let mut piece = Piece::new(PieceKind::L, 23);
        piece.col = 0;
        piece.row = 14;
        piece.recenter(23);
        assert_eq!(piece.col, 10);
        assert_eq!(piece.row, 0);
    }
}

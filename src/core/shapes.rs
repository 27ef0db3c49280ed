//! Shape table - canonical occupancy matrices for every piece kind
//!
//! Matrices are rectangular (all rows equal length) but not necessarily
//! square; rotating a non-square shape swaps its width and height.
//! Cells are 0/1 occupancy only - the identity written into the board at
//! lock time always comes from `PieceKind::id`, never from the matrix.

use crate::types::PieceKind;

/// A piece's private, rotatable copy of its shape
pub type ShapeMatrix = Vec<Vec<u8>>;

/// Canonical (unrotated) shape rows for a piece kind
pub fn base_shape(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
        PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::R => &[&[0, 1, 1], &[1, 1, 0]],
        PieceKind::S => &[&[0, 1, 0], &[1, 1, 1]],
        PieceKind::T => &[&[1, 1, 0], &[0, 1, 1]],
        PieceKind::U => &[&[1, 1, 1, 1], &[1, 1, 1, 1]],
        PieceKind::V => &[&[1, 0], &[1, 0]],
        PieceKind::W => &[&[1, 0]],
        PieceKind::X => &[&[0, 1], &[1, 1]],
        PieceKind::Y => &[&[0, 1], &[0, 1], &[0, 1]],
        PieceKind::Z => &[&[1, 1], &[1, 1], &[1, 1]],
        PieceKind::A => &[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]],
    }
}

/// Copy a canonical shape into an owned, mutable matrix
pub fn owned_shape(kind: PieceKind) -> ShapeMatrix {
    base_shape(kind).iter().map(|row| row.to_vec()).collect()
}

/// Rotate a matrix 90 degrees clockwise: reverse row order, then transpose
pub fn rotate_cw(shape: &[Vec<u8>]) -> ShapeMatrix {
    let rows = shape.len();
    let cols = shape.first().map_or(0, |row| row.len());

    let mut rotated = vec![vec![0u8; rows]; cols];
    for (r, row) in shape.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            rotated[c][rows - 1 - r] = cell;
        }
    }
    rotated
}

/// True iff every row has the same length (the construction-time invariant)
pub fn is_rectangular(shape: &[Vec<u8>]) -> bool {
    match shape.first() {
        Some(first) => shape.iter().all(|row| row.len() == first.len()),
        None => false,
    }
}

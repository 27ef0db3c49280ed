//! Read-only state snapshot consumed by the render collaborator.
//!
//! Renderers keep one `GameSnapshot` and refresh it in place every frame via
//! `GameState::snapshot_into`, so the only per-frame cost is copying the grid
//! into an already-sized buffer.

use crate::core::piece::PieceCells;
use crate::types::PieceKind;

/// A piece as seen by a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceView {
    pub kind: PieceKind,
    /// Color/identity index (1-based)
    pub id: u8,
    /// For the current piece these are absolute grid cells; for the next
    /// piece they are matrix-local offsets for the preview box.
    pub cells: PieceCells,
}

impl Default for PieceView {
    fn default() -> Self {
        Self {
            kind: PieceKind::I,
            id: PieceKind::I.id(),
            cells: PieceCells::new(),
        }
    }
}

/// Everything a renderer reads in one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cell identities, row-major
    pub grid: Vec<u8>,
    pub current: PieceView,
    pub next: PieceView,
    /// Landing row of the current piece if dropped now
    pub ghost_row: i8,
    /// Top row of the current piece (to offset ghost cells)
    pub current_row: i8,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Locked cell identity at (col, row); 0 outside the grid
    pub fn cell(&self, col: u8, row: u8) -> u8 {
        if col >= self.width || row >= self.height {
            return 0;
        }
        self.grid[row as usize * self.width as usize + col as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::GameState;

    #[test]
    fn test_refresh_in_place_reuses_buffer() {
        let state = GameState::new(3);
        let mut snap = GameSnapshot::default();

        state.snapshot_into(&mut snap);
        let cap = snap.grid.capacity();

        state.snapshot_into(&mut snap);
        assert_eq!(snap.grid.capacity(), cap);
        assert_eq!(snap.grid.len(), snap.width as usize * snap.height as usize);
    }

    #[test]
    fn test_cell_lookup_clamps_to_zero() {
        let snap = GameState::new(3).snapshot();
        assert_eq!(snap.cell(snap.width, 0), 0);
        assert_eq!(snap.cell(0, snap.height), 0);
    }
}

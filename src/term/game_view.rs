//! GameView: projects a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Cell identities index into a
//! fixed color table; index 8 doubles as the ghost outline color and index 0
//! is the empty cell.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

/// Identity-indexed cell colors (entry 0 = empty)
const COLORS: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(0, 240, 240),
    Rgb::new(0, 0, 240),
    Rgb::new(240, 160, 0),
    Rgb::new(240, 240, 0),
    Rgb::new(0, 100, 0),
    Rgb::new(128, 0, 128),
    Rgb::new(100, 0, 0),
    Rgb::new(240, 0, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(0, 128, 128),
    Rgb::new(0, 240, 0),
    Rgb::new(128, 240, 160),
    Rgb::new(240, 0, 128),
    Rgb::new(160, 240, 100),
    Rgb::new(128, 128, 128),
];

const GHOST_COLOR_INDEX: usize = 8;

fn color_for_id(id: u8) -> Rgb {
    COLORS[id as usize % COLORS.len()]
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render a snapshot into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = snap.width as u16 * self.cell_w;
        let board_px_h = snap.height as u16;

        // Board frame at the top-left, sidebar to its right.
        let origin_x: u16 = 1;
        let origin_y: u16 = 1;
        self.draw_border(&mut fb, 0, 0, board_px_w + 2, board_px_h + 2);

        let empty = CellStyle {
            fg: Rgb::new(60, 60, 70),
            bg: Rgb::new(20, 20, 26),
            bold: false,
        };

        // Locked cells.
        for row in 0..snap.height {
            for col in 0..snap.width {
                let id = snap.cell(col, row);
                if id != 0 {
                    self.fill_cell(&mut fb, origin_x, origin_y, col, row, ' ', block_style(id));
                } else {
                    self.fill_cell(&mut fb, origin_x, origin_y, col, row, ' ', empty);
                }
            }
        }

        // Ghost outline at the projected landing row.
        let ghost_style = CellStyle {
            fg: COLORS[GHOST_COLOR_INDEX],
            bg: Rgb::new(20, 20, 26),
            bold: false,
        };
        let ghost_drop = snap.ghost_row - snap.current_row;
        for &(col, row) in snap.current.cells.iter() {
            let row = row + ghost_drop;
            if col >= 0 && row >= 0 && (col as u8) < snap.width && (row as u8) < snap.height {
                self.fill_cell(&mut fb, origin_x, origin_y, col as u8, row as u8, '░', ghost_style);
            }
        }

        // Current piece on top of its ghost.
        for &(col, row) in snap.current.cells.iter() {
            if col >= 0 && row >= 0 && (col as u8) < snap.width && (row as u8) < snap.height {
                self.fill_cell(
                    &mut fb,
                    origin_x,
                    origin_y,
                    col as u8,
                    row as u8,
                    ' ',
                    block_style(snap.current.id),
                );
            }
        }

        // Sidebar.
        let side_x = board_px_w + 4;
        let label = CellStyle::default();
        fb.put_str(side_x, 1, "Next:", label);
        for &(col, row) in snap.next.cells.iter() {
            let x = side_x + col as u16 * self.cell_w;
            let y = 3 + row as u16;
            for dx in 0..self.cell_w {
                fb.put_char(x + dx, y, ' ', block_style(snap.next.id));
            }
        }

        let score_style = CellStyle {
            fg: Rgb::new(255, 255, 0),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(side_x, 8, &format!("Score: {}", snap.score), score_style);

        let alert = CellStyle {
            fg: Rgb::new(255, 0, 0),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        if snap.paused {
            fb.put_str(side_x, 10, "Paused", alert);
        }
        if snap.game_over {
            fb.put_str(side_x, 10, "Game Over!", alert);
            fb.put_str(side_x, 11, "Press R to restart", label);
        }

        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        col: u8,
        row: u8,
        ch: char,
        style: CellStyle,
    ) {
        let x = origin_x + col as u16 * self.cell_w;
        let y = origin_y + row as u16;
        for dx in 0..self.cell_w {
            fb.put_char(x + dx, y, ch, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }
}

fn block_style(id: u8) -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: color_for_id(id),
        bold: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::GameState;

    #[test]
    fn test_render_draws_border_and_score() {
        let snap = GameState::new(9).snapshot();
        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(120, 30));

        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));

        let side_x = snap.width as u16 * 2 + 4;
        let text: String = (0..8)
            .filter_map(|i| fb.get(side_x + i, 8).map(|c| c.ch))
            .collect();
        assert!(text.starts_with("Score:"));
    }

    #[test]
    fn test_render_paints_current_piece_cells() {
        let snap = GameState::new(9).snapshot();
        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(120, 30));

        let expected = block_style(snap.current.id);
        let &(col, row) = snap.current.cells.first().unwrap();
        let cell = fb.get(1 + col as u16 * 2, 1 + row as u16).unwrap();
        assert_eq!(cell.style, expected);
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let snap = GameState::new(9).snapshot();
        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(10, 4));
        assert_eq!(fb.width(), 10);
    }
}

//! Game state module - the engine state machine
//!
//! Owns the board, the current and next pieces, the bag, the score, and the
//! drop timer. Orchestrates spawn -> move/rotate -> drop -> lock -> clear ->
//! respawn. Every gameplay command is a no-op while paused or game over;
//! pause toggling always works and restart rebuilds the state wholesale.

use crate::core::bag::PieceBag;
use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::scoring::score_for_lines;
use crate::core::snapshot::{GameSnapshot, PieceView};
use crate::types::{GameAction, DROP_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH, ROTATION_KICKS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    bag: PieceBag,
    score: u32,
    paused: bool,
    game_over: bool,
    /// Elapsed ms since the last automatic descent
    drop_timer_ms: u32,
    drop_interval_ms: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut bag = PieceBag::new(seed);
        // Next is drawn first; seeded sequences depend on this order.
        let next = Piece::new(bag.next_kind(), GRID_WIDTH);
        let current = Piece::new(bag.next_kind(), GRID_WIDTH);

        Self {
            board: Board::new(GRID_WIDTH, GRID_HEIGHT),
            current,
            next,
            bag,
            score: 0,
            paused: false,
            game_over: false,
            drop_timer_ms: 0,
            drop_interval_ms: DROP_INTERVAL_MS,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Promote next to current, draw a fresh next, and re-center the new
    /// current at the top. A blocked spawn is the terminal game-over
    /// transition.
    fn spawn(&mut self) {
        let next = Piece::new(self.bag.next_kind(), self.board.width());
        self.current = std::mem::replace(&mut self.next, next);
        self.current.recenter(self.board.width());

        if !self.board.is_valid_placement(&self.current, 0, 0, None) {
            self.game_over = true;
        }
    }

    /// Try to move the current piece; commits only if the target placement is
    /// valid. Returns whether it moved.
    pub fn try_move(&mut self, d_col: i8, d_row: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        if self.board.is_valid_placement(&self.current, d_col, d_row, None) {
            self.current.col += d_col;
            self.current.row += d_row;
            return true;
        }
        false
    }

    /// Rotate the current piece clockwise, trying each horizontal kick offset
    /// in order. The first offset that validates commits both the rotated
    /// matrix and the kick; otherwise the piece is left untouched.
    pub fn rotate(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let rotated = self.current.rotated();
        for kick in ROTATION_KICKS {
            if self
                .board
                .is_valid_placement(&self.current, kick, 0, Some(&rotated))
            {
                self.current.apply_rotation(rotated, kick);
                return true;
            }
        }
        false
    }

    /// Descend one row, locking when the piece can no longer fall
    pub fn soft_drop(&mut self) {
        if self.paused || self.game_over {
            return;
        }
        if !self.try_move(0, 1) {
            self.lock_and_continue();
        }
    }

    /// Drop to the floor and lock immediately
    pub fn hard_drop(&mut self) {
        if self.paused || self.game_over {
            return;
        }
        while self.try_move(0, 1) {}
        self.lock_and_continue();
    }

    fn lock_and_continue(&mut self) {
        self.board.lock(&self.current);
        let lines = self.board.clear_completed_rows();
        self.score += score_for_lines(lines);
        self.spawn();
    }

    /// Advance timers by `elapsed_ms`; once the accumulated time exceeds the
    /// drop interval, perform one automatic descent and reset the timer to
    /// zero (full reset, not carry-over).
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.paused || self.game_over {
            return;
        }
        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms > self.drop_interval_ms {
            self.soft_drop();
            self.drop_timer_ms = 0;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Rebuild the whole state as a fresh value, continuing the RNG sequence
    pub fn reset(&mut self) {
        *self = Self::new(self.bag.seed());
    }

    /// Row where the current piece would land if dropped now.
    ///
    /// Simulates the drop on a throwaway copy; mutates nothing and works
    /// while paused.
    pub fn ghost_row(&self) -> i8 {
        let mut probe = self.current.clone();
        while self.board.is_valid_placement(&probe, 0, 1, None) {
            probe.row += 1;
        }
        probe.row
    }

    /// Route an input-collaborator command. Returns whether it had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                if self.paused || self.game_over {
                    return false;
                }
                self.soft_drop();
                true
            }
            GameAction::HardDrop => {
                if self.paused || self.game_over {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
            GameAction::Restart => {
                // Restart is only honored from the terminal state.
                if self.game_over {
                    self.reset();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Refresh a reusable snapshot for the render collaborator
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.grid.clear();
        out.grid.extend_from_slice(self.board.cells());
        out.current = PieceView {
            kind: self.current.kind(),
            id: self.current.id(),
            cells: self.current.cells(0, 0, None),
        };
        out.next = PieceView {
            kind: self.next.kind(),
            id: self.next.id(),
            cells: self.next.local_cells(),
        };
        out.ghost_row = self.ghost_row();
        out.current_row = self.current.row;
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    /// Allocate a fresh snapshot (convenience over `snapshot_into`)
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O.

pub mod bag;
pub mod board;
pub mod game;
pub mod piece;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types
pub use bag::{PieceBag, SimpleRng};
pub use board::Board;
pub use game::GameState;
pub use piece::Piece;
pub use snapshot::{GameSnapshot, PieceView};

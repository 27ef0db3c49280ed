//! Blockfall: a terminal falling-block puzzle with an extended 14-piece set.
//!
//! The engine lives in [`core`] and is pure and deterministic; [`input`] and
//! [`term`] are thin collaborators that map key events to commands and draw
//! state snapshots.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

//! Core board logic for the Hex engine
//!
//! This crate provides the authoritative game state and rules:
//! - `Board`: padded tile array, move application, and the asymmetric undo
//! - connectivity queries and edge-to-edge win detection
//! - `BoardMetadata`: display-oriented facts for UI collaborators
//!
//! The board is a value type: simulation code clones it freely and plays
//! the clone to completion without touching the authoritative state.

pub mod board;
pub mod connectivity;
pub mod error;
pub mod metadata;
pub mod tile;

// Re-export main types for convenience
pub use board::{Board, PlayOutcome, MAX_EDGE_SIZE, MIN_EDGE_SIZE};
pub use error::BoardError;
pub use metadata::BoardMetadata;
pub use tile::{Control, Player, Tile};

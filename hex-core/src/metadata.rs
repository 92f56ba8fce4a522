//! Board metadata for UI and configuration
//!
//! Display-oriented facts about a board that rendering and input
//! collaborators use to lay out the grid and label the players, without
//! reaching into game state.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Metadata about a board for UI display and configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMetadata {
    /// Playable side length
    pub edge_size: usize,

    /// Side length including the border ring
    pub padded_size: usize,

    /// Total cell count of the padded array
    pub cell_count: usize,

    /// Display names for each player, Red first
    pub player_names: Vec<String>,

    /// Single-character symbols for each player, Red first
    pub player_symbols: Vec<char>,

    /// Brief rules description for UI tooltips
    pub description: String,
}

impl BoardMetadata {
    pub fn for_board(board: &Board) -> Self {
        Self {
            edge_size: board.edge_size(),
            padded_size: board.padded_size(),
            cell_count: board.cell_count(),
            player_names: vec!["Red".to_string(), "Blue".to_string()],
            player_symbols: vec!['R', 'B'],
            description: "Connect your two edges with an unbroken chain!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_tracks_board_dimensions() {
        let board = Board::new(7).unwrap();
        let meta = BoardMetadata::for_board(&board);

        assert_eq!(meta.edge_size, 7);
        assert_eq!(meta.padded_size, 9);
        assert_eq!(meta.cell_count, 81);
        assert_eq!(meta.player_names, vec!["Red", "Blue"]);
        assert_eq!(meta.player_symbols, vec!['R', 'B']);
    }
}

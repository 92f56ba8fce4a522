//! Board state, move application, and undo.
//!
//! The playable area is wrapped in one ring of border cells: the four
//! corners are permanently blocked and the remaining border cells are
//! pre-colored with the owning player's color, so the win check reduces to
//! a connectivity query between two fixed border cells.
//!
//! # Board Layout
//!
//! For `edge_size = 3` the padded array is 5x5, row-major
//! (`idx = x + y * padded_size`):
//!
//! ```text
//! y=0: [##][ B][ B][ B][##]   <- Blue's top edge, corners blocked
//! y=1: [ R][ 6][ 7][ 8][ R]
//! y=2: [ R][11][12][13][ R]
//! y=3: [ R][16][17][18][ R]
//! y=4: [##][21][22][23][##]   <- Blue's bottom edge
//!       ^ Red's left edge          Red's right edge ^
//! ```

use crate::error::BoardError;
use crate::tile::{Control, Player, Tile};

/// Smallest supported playable edge length.
pub const MIN_EDGE_SIZE: usize = 3;
/// Largest supported playable edge length.
pub const MAX_EDGE_SIZE: usize = 13;

/// Result of applying a move.
///
/// `Won` is how a win surfaces to the caller: the board itself never stores
/// a winner flag, so session-level state stays with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Target was out of range, blocked, or already occupied. Nothing changed.
    Rejected,
    /// Tile placed, turn flipped.
    Placed,
    /// Tile placed and the win check found the mover connected their edges.
    Won(Player),
}

/// Complete Hex game state: tiles, whose turn it is, and the move history.
///
/// Cloning produces a fully independent deep copy; rollout simulation relies
/// on that to play clones to completion without aliasing the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    edge_size: usize,
    padded_size: usize,
    tiles: Vec<Tile>,
    turn: Player,
    history: Vec<usize>,
}

impl Board {
    /// Create a fresh board with `edge_size` playable cells per side.
    ///
    /// Fails with `BoardError::InvalidSize` for sizes outside
    /// [`MIN_EDGE_SIZE`, `MAX_EDGE_SIZE`] before any state is built.
    pub fn new(edge_size: usize) -> Result<Board, BoardError> {
        if !(MIN_EDGE_SIZE..=MAX_EDGE_SIZE).contains(&edge_size) {
            return Err(BoardError::InvalidSize {
                edge_size,
                min: MIN_EDGE_SIZE,
                max: MAX_EDGE_SIZE,
            });
        }

        let padded_size = edge_size + 2;
        let mut tiles = vec![Tile::Empty; padded_size * padded_size];
        for y in 0..padded_size {
            for x in 0..padded_size {
                let on_column_edge = x == 0 || x == padded_size - 1;
                let on_row_edge = y == 0 || y == padded_size - 1;
                tiles[x + y * padded_size] = match (on_column_edge, on_row_edge) {
                    (true, true) => Tile::Blocked,
                    (true, false) => Tile::Red,
                    (false, true) => Tile::Blue,
                    (false, false) => Tile::Empty,
                };
            }
        }

        Ok(Board {
            edge_size,
            padded_size,
            tiles,
            turn: Player::Red,
            history: Vec::new(),
        })
    }

    /// Playable side length.
    pub fn edge_size(&self) -> usize {
        self.edge_size
    }

    /// Side length including the border ring.
    pub fn padded_size(&self) -> usize {
        self.padded_size
    }

    /// Total number of cells in the padded array.
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// The full cell array, row-major, for rendering collaborators.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The cell at `index`, or `None` when out of range.
    pub fn tile(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// The player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Played cell indices in move order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Decompose an index into `(x, y)` within the padded frame.
    pub(crate) fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.padded_size, index / self.padded_size)
    }

    /// Whether `index` is one of the four permanently blocked corners.
    pub fn is_corner(&self, index: usize) -> bool {
        let p = self.padded_size;
        index == 0 || index == p - 1 || index == p * p - p || index == p * p - 1
    }

    /// All currently empty cells, ascending by index.
    ///
    /// Border cells are pre-colored and corners blocked, so every empty cell
    /// is a playable interior cell.
    pub fn empty_tiles(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == Tile::Empty)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Place the current player's tile at `index`.
    ///
    /// Returns `Rejected` without mutation when the target is out of range
    /// or not empty. On success the move is appended to the history and the
    /// turn flips. The win check runs only when `check_win` is set; rollouts
    /// pass `false` and evaluate the winner once the board is full.
    pub fn play(&mut self, index: usize, check_win: bool) -> PlayOutcome {
        if self.tile(index) != Some(Tile::Empty) {
            return PlayOutcome::Rejected;
        }

        let mover = self.turn;
        self.tiles[index] = mover.tile();
        self.history.push(index);
        let won = check_win && self.is_winner(mover);
        self.turn = mover.opponent();

        if won {
            PlayOutcome::Won(mover)
        } else {
            PlayOutcome::Placed
        }
    }

    /// Undo the most recent move, or the most recent turn pair when that
    /// move was made by an automated player.
    ///
    /// `control_of` tells the board how each seat is controlled. When the
    /// mover being undone is automated, the preceding human move is removed
    /// with it, so undo always leaves a human-controlled player to move.
    /// No-op on an empty history; undoing the only move restores the exact
    /// post-construction state.
    pub fn undo(&mut self, control_of: impl Fn(Player) -> Control) {
        let Some(last) = self.history.pop() else {
            return;
        };
        self.tiles[last] = Tile::Empty;

        if !self.history.is_empty()
            && control_of(Self::mover_of_ply(self.history.len())) == Control::Automated
        {
            if let Some(previous) = self.history.pop() {
                self.tiles[previous] = Tile::Empty;
            }
        }

        self.turn = Self::mover_of_ply(self.history.len());
    }

    /// Red moves on even plies, Blue on odd.
    fn mover_of_ply(ply: usize) -> Player {
        if ply % 2 == 0 {
            Player::Red
        } else {
            Player::Blue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_only(_: Player) -> Control {
        Control::Human
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_rejects_out_of_range_sizes() {
        for edge_size in [0, 1, 2, 14, 100] {
            assert_eq!(
                Board::new(edge_size),
                Err(BoardError::InvalidSize {
                    edge_size,
                    min: MIN_EDGE_SIZE,
                    max: MAX_EDGE_SIZE
                })
            );
        }
    }

    #[test]
    fn test_initial_cell_counts_for_all_sizes() {
        for edge_size in MIN_EDGE_SIZE..=MAX_EDGE_SIZE {
            let board = Board::new(edge_size).unwrap();
            let padded = edge_size + 2;
            assert_eq!(board.cell_count(), padded * padded);

            let blocked = board.tiles().iter().filter(|t| **t == Tile::Blocked).count();
            let red = board.tiles().iter().filter(|t| **t == Tile::Red).count();
            let blue = board.tiles().iter().filter(|t| **t == Tile::Blue).count();
            let empty = board.tiles().iter().filter(|t| **t == Tile::Empty).count();

            assert_eq!(blocked, 4, "edge_size={}", edge_size);
            assert_eq!(red + blue, 4 * edge_size, "edge_size={}", edge_size);
            assert_eq!(red, blue);
            assert_eq!(empty, edge_size * edge_size, "edge_size={}", edge_size);
        }
    }

    #[test]
    fn test_border_ownership() {
        let board = Board::new(5).unwrap();
        let p = board.padded_size();

        for y in 1..p - 1 {
            assert_eq!(board.tile(y * p), Some(Tile::Red), "left column y={}", y);
            assert_eq!(
                board.tile(p - 1 + y * p),
                Some(Tile::Red),
                "right column y={}",
                y
            );
        }
        for x in 1..p - 1 {
            assert_eq!(board.tile(x), Some(Tile::Blue), "top row x={}", x);
            assert_eq!(
                board.tile(x + (p - 1) * p),
                Some(Tile::Blue),
                "bottom row x={}",
                x
            );
        }
        for corner in [0, p - 1, p * p - p, p * p - 1] {
            assert!(board.is_corner(corner));
            assert_eq!(board.tile(corner), Some(Tile::Blocked));
        }
    }

    #[test]
    fn test_initial_turn_and_history() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.turn(), Player::Red);
        assert!(board.history().is_empty());
    }

    // =========================================================================
    // Playing moves
    // =========================================================================

    #[test]
    fn test_play_on_empty_cell_flips_turn() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(board.play(6, true), PlayOutcome::Placed);
        assert_eq!(board.tile(6), Some(Tile::Red));
        assert_eq!(board.turn(), Player::Blue);
        assert_eq!(board.history(), &[6]);

        assert_eq!(board.play(7, true), PlayOutcome::Placed);
        assert_eq!(board.tile(7), Some(Tile::Blue));
        assert_eq!(board.turn(), Player::Red);
        assert_eq!(board.history(), &[6, 7]);
    }

    #[test]
    fn test_play_rejects_without_mutation() {
        let mut board = Board::new(3).unwrap();
        board.play(6, true);
        let snapshot = board.clone();

        // Occupied, border, corner, and out-of-range targets all bounce.
        for target in [6, 1, 5, 0, 24, 25, 10_000] {
            assert_eq!(board.play(target, true), PlayOutcome::Rejected, "target={}", target);
            assert_eq!(board, snapshot, "target={}", target);
        }
    }

    #[test]
    fn test_empty_tiles_ascending_and_shrinking() {
        let mut board = Board::new(3).unwrap();
        let initial = board.empty_tiles();
        assert_eq!(initial.len(), 9);
        assert!(initial.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(initial, vec![6, 7, 8, 11, 12, 13, 16, 17, 18]);

        board.play(12, false);
        let after = board.empty_tiles();
        assert_eq!(after.len(), 8);
        assert!(!after.contains(&12));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new(5).unwrap();
        board.play(8, false);
        let mut copy = board.clone();
        copy.play(9, false);

        assert_eq!(board.history().len(), 1);
        assert_eq!(copy.history().len(), 2);
        assert_eq!(board.tile(9), Some(Tile::Empty));
    }

    // =========================================================================
    // Undo
    // =========================================================================

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut board = Board::new(3).unwrap();
        let snapshot = board.clone();
        board.undo(human_only);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_undo_single_move_restores_initial_state() {
        let mut board = Board::new(3).unwrap();
        let initial = board.clone();
        board.play(12, true);
        board.undo(human_only);
        assert_eq!(board, initial);
    }

    #[test]
    fn test_undo_human_move_removes_one_ply() {
        let mut board = Board::new(3).unwrap();
        board.play(6, true); // Red
        board.play(7, true); // Blue
        board.undo(human_only);

        assert_eq!(board.history(), &[6]);
        assert_eq!(board.tile(7), Some(Tile::Empty));
        assert_eq!(board.turn(), Player::Blue);
    }

    #[test]
    fn test_undo_automated_move_removes_turn_pair() {
        let mut board = Board::new(3).unwrap();
        board.play(6, true); // Red, human
        board.play(7, true); // Blue, automated
        board.undo(|player| match player {
            Player::Red => Control::Human,
            Player::Blue => Control::Automated,
        });

        assert!(board.history().is_empty());
        assert_eq!(board.tile(6), Some(Tile::Empty));
        assert_eq!(board.tile(7), Some(Tile::Empty));
        assert_eq!(board.turn(), Player::Red);
    }

    #[test]
    fn test_undo_automated_pair_mid_game() {
        let mut board = Board::new(3).unwrap();
        board.play(6, true); // Red, human
        board.play(7, true); // Blue, automated
        board.play(11, true); // Red, human
        board.play(12, true); // Blue, automated
        board.undo(|player| match player {
            Player::Red => Control::Human,
            Player::Blue => Control::Automated,
        });

        assert_eq!(board.history(), &[6, 7]);
        assert_eq!(board.tile(11), Some(Tile::Empty));
        assert_eq!(board.tile(12), Some(Tile::Empty));
        assert_eq!(board.turn(), Player::Red);
    }
}

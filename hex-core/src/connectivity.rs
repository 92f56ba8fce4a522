//! Connectivity queries and edge-to-edge win detection.
//!
//! Each cell has six neighbors on the hex grid. Applied to the row-major
//! `(x, y)` decomposition the neighbor offsets are:
//!
//! ```text
//! (0,-1) (1,-1)*          * not adjacent: the (1,-1)/(-1,1) diagonal
//! (-1,0)  cell  (1,0)       pair is excluded, leaving six directions
//! (-1,-1)*(0,1) (1,1)
//! ```
//!
//! A player wins by connecting their two border edges. Because the border
//! cells are pre-colored at construction, the whole left column is one red
//! group and the whole top row one blue group, so the win check is a single
//! connectivity query between two fixed border cells next to the corners.

use crate::board::Board;
use crate::error::BoardError;
use crate::tile::Player;

/// Hex neighbor offsets over the `(x, y)` decomposition of a cell index.
const NEIGHBOR_OFFSETS: [(isize, isize); 6] = [(1, 0), (1, 1), (0, 1), (-1, 0), (-1, -1), (0, -1)];

impl Board {
    /// Whether the cells at `a` and `b` hold the same color and are joined
    /// by a chain of that color.
    ///
    /// Fails with `BoardError::InvalidIndex` when either endpoint is a
    /// corner or out of range; that indicates a collaborator bug (bad
    /// coordinate translation), not an illegal move.
    pub fn connected(&self, a: usize, b: usize) -> Result<bool, BoardError> {
        self.check_endpoint(a)?;
        self.check_endpoint(b)?;
        Ok(self.same_group(a, b))
    }

    /// Whether `player` has connected their two board edges.
    ///
    /// Red's endpoints sit on the left and right border columns, Blue's on
    /// the top and bottom border rows, each adjacent to a corner.
    pub fn is_winner(&self, player: Player) -> bool {
        let p = self.padded_size();
        let (a, b) = match player {
            Player::Red => (p, 2 * p - 1),
            Player::Blue => (1, p * p - 2),
        };
        self.same_group(a, b)
    }

    fn check_endpoint(&self, index: usize) -> Result<(), BoardError> {
        if index >= self.cell_count() || self.is_corner(index) {
            return Err(BoardError::InvalidIndex { index });
        }
        Ok(())
    }

    /// Iterative flood search from `a` over same-colored cells, stopping
    /// early on reaching `b`. Visits each cell at most once; an explicit
    /// work-list keeps large boards clear of recursion depth limits.
    fn same_group(&self, a: usize, b: usize) -> bool {
        let color = self.tiles()[a];
        if color != self.tiles()[b] {
            return false;
        }

        let padded = self.padded_size() as isize;
        let mut visited = vec![false; self.cell_count()];
        let mut work = vec![a];
        visited[a] = true;

        while let Some(index) = work.pop() {
            if index == b {
                return true;
            }
            let (x, y) = self.coords(index);
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || nx >= padded || ny < 0 || ny >= padded {
                    continue;
                }
                let neighbor = (nx + ny * padded) as usize;
                if !visited[neighbor] && self.tiles()[neighbor] == color {
                    visited[neighbor] = true;
                    work.push(neighbor);
                }
            }
        }

        false
    }
}

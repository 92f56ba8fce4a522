//! Cell and player types shared across the engine.

use serde::{Deserialize, Serialize};

/// One of the two players. Red connects the left and right board edges,
/// Blue connects the top and bottom edges. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// The tile color this player places.
    pub fn tile(self) -> Tile {
        match self {
            Player::Red => Tile::Red,
            Player::Blue => Tile::Blue,
        }
    }
}

/// State of a single board cell.
///
/// `Blocked` marks the four corner cells of the padded frame; they are never
/// playable and belong to neither player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tile {
    Empty,
    Blocked,
    Red,
    Blue,
}

impl Tile {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Tile::Red => Some(Player::Red),
            Tile::Blue => Some(Player::Blue),
            Tile::Empty | Tile::Blocked => None,
        }
    }
}

/// How a seat is controlled, as far as the board's undo rule is concerned.
///
/// An automated move is inseparable from the human move that preceded it:
/// undoing past an automated mover removes the whole turn pair so that a
/// human is always left to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Human,
    Automated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::Red.opponent(), Player::Blue);
        assert_eq!(Player::Blue.opponent(), Player::Red);
    }

    #[test]
    fn test_tile_player_mapping() {
        assert_eq!(Tile::Red.player(), Some(Player::Red));
        assert_eq!(Tile::Blue.player(), Some(Player::Blue));
        assert_eq!(Tile::Empty.player(), None);
        assert_eq!(Tile::Blocked.player(), None);
        assert_eq!(Player::Red.tile(), Tile::Red);
        assert_eq!(Player::Blue.tile(), Tile::Blue);
    }
}

//! Per-seat player configuration.

use hex_core::{Control, Player};
use serde::{Deserialize, Serialize};

/// Difficulty tier for an automated seat.
///
/// Each tier fixes the total trial budget the rollout evaluator spends per
/// move; more trials sharpen the score estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Casual,
    Standard,
    Tournament,
}

impl Difficulty {
    /// Total rollout trials spent per automated move.
    pub fn trial_target(self) -> u32 {
        match self {
            Difficulty::Casual => 500,
            Difficulty::Standard => 1000,
            Difficulty::Tournament => 2000,
        }
    }

    /// Map an external numeric level (0, 1, 2) to a tier.
    pub fn from_level(level: u8) -> Option<Difficulty> {
        match level {
            0 => Some(Difficulty::Casual),
            1 => Some(Difficulty::Standard),
            2 => Some(Difficulty::Tournament),
            _ => None,
        }
    }

    /// The numeric level for external interfaces.
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Casual => 0,
            Difficulty::Standard => 1,
            Difficulty::Tournament => 2,
        }
    }
}

/// How one seat is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum PlayerConfig {
    Human,
    Automated { level: Difficulty },
}

impl PlayerConfig {
    /// The control kind the board's undo rule needs.
    pub fn control(self) -> Control {
        match self {
            PlayerConfig::Human => Control::Human,
            PlayerConfig::Automated { .. } => Control::Automated,
        }
    }
}

/// The configuration of both seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats {
    pub red: PlayerConfig,
    pub blue: PlayerConfig,
}

impl Seats {
    pub fn new(red: PlayerConfig, blue: PlayerConfig) -> Self {
        Self { red, blue }
    }

    /// Both seats human; the default for a fresh session.
    pub fn all_human() -> Self {
        Self::new(PlayerConfig::Human, PlayerConfig::Human)
    }

    /// The configuration of `player`'s seat.
    pub fn of(&self, player: Player) -> PlayerConfig {
        match player {
            Player::Red => self.red,
            Player::Blue => self.blue,
        }
    }

    /// Mutable access for reconfiguring one seat.
    pub fn of_mut(&mut self, player: Player) -> &mut PlayerConfig {
        match player {
            Player::Red => &mut self.red,
            Player::Blue => &mut self.blue,
        }
    }

    /// The control kind of `player`'s seat.
    pub fn control_of(&self, player: Player) -> Control {
        self.of(player).control()
    }
}

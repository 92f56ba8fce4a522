//! Session configuration loading from config.toml.
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`HEX_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! HEX_<SECTION>_<KEY>=value
//!
//! Examples:
//!     HEX_BOARD_EDGE_SIZE=11
//!     HEX_PLAYERS_BLUE_CONTROL=automated
//!     HEX_PLAYERS_BLUE_LEVEL=2
//!     HEX_ROLLOUT_TRIALS_PER_TICK=25
//! ```

use std::path::PathBuf;

use hex_core::Player;
use hex_rollout::RolloutConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::player::{Difficulty, PlayerConfig, Seats};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a member crate)
];

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// ============================================================================

fn d_edge_size() -> usize {
    11
}
fn d_control() -> String {
    "human".into()
}
fn d_level() -> u8 {
    1
}
fn d_alpha() -> f64 {
    0.5
}
fn d_trials_per_tick() -> u32 {
    10
}

/// Errors turning raw config values into session types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown control '{control}' for the {seat} seat (expected 'human' or 'automated')")]
    UnknownControl { seat: &'static str, control: String },

    #[error("difficulty level {level} for the {seat} seat outside 0..=2")]
    InvalidLevel { seat: &'static str, level: u8 },
}

/// Root configuration for a session.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub board: BoardSection,
    #[serde(default)]
    pub players: PlayersSection,
    #[serde(default)]
    pub rollout: RolloutSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardSection {
    #[serde(default = "d_edge_size")]
    pub edge_size: usize,
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            edge_size: d_edge_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlayersSection {
    #[serde(default)]
    pub red: SeatSection,
    #[serde(default)]
    pub blue: SeatSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeatSection {
    /// "human" or "automated"
    #[serde(default = "d_control")]
    pub control: String,
    /// Difficulty level 0..=2, used when control is "automated"
    #[serde(default = "d_level")]
    pub level: u8,
}

impl Default for SeatSection {
    fn default() -> Self {
        Self {
            control: d_control(),
            level: d_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RolloutSection {
    #[serde(default = "d_alpha")]
    pub alpha: f64,
    #[serde(default = "d_trials_per_tick")]
    pub trials_per_tick: u32,
}

impl Default for RolloutSection {
    fn default() -> Self {
        Self {
            alpha: d_alpha(),
            trials_per_tick: d_trials_per_tick(),
        }
    }
}

impl SeatSection {
    fn player_config(&self, seat: &'static str) -> Result<PlayerConfig, ConfigError> {
        match self.control.as_str() {
            "human" => Ok(PlayerConfig::Human),
            "automated" => {
                let level =
                    Difficulty::from_level(self.level).ok_or(ConfigError::InvalidLevel {
                        seat,
                        level: self.level,
                    })?;
                Ok(PlayerConfig::Automated { level })
            }
            other => Err(ConfigError::UnknownControl {
                seat,
                control: other.to_string(),
            }),
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from TOML text; missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<SessionConfig, toml::de::Error> {
        toml::from_str(text)
    }

    /// The configuration of `player`'s seat.
    pub fn seat(&self, player: Player) -> Result<PlayerConfig, ConfigError> {
        match player {
            Player::Red => self.players.red.player_config("red"),
            Player::Blue => self.players.blue.player_config("blue"),
        }
    }

    /// Both seats.
    pub fn seats(&self) -> Result<Seats, ConfigError> {
        Ok(Seats::new(self.seat(Player::Red)?, self.seat(Player::Blue)?))
    }

    /// The rollout configuration this config describes.
    pub fn rollout_config(&self) -> RolloutConfig {
        RolloutConfig::default()
            .with_alpha(self.rollout.alpha)
            .with_trials_per_tick(self.rollout.trials_per_tick)
    }
}

/// Load the session configuration from config.toml.
///
/// Searches in order: the path in the `HEX_CONFIG` environment variable,
/// then [`CONFIG_SEARCH_PATHS`]. After loading, environment variable
/// overrides are applied. Unreadable or unparsable files fall back to
/// defaults with a warning rather than failing the session.
pub fn load_config() -> SessionConfig {
    if let Ok(path) = std::env::var("HEX_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from HEX_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "HEX_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(&path);
        }
    }

    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(SessionConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &PathBuf) -> SessionConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(SessionConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(SessionConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $($field:ident).+, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$($field).+ = v;
        }
    };
    // Parseable field (usize, u32, f64, etc.)
    ($config:expr, $($field:ident).+, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$($field).+ = v;
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: HEX_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: SessionConfig) -> SessionConfig {
    env_override!(config, board.edge_size, "HEX_BOARD_EDGE_SIZE", parse);

    env_override!(config, players.red.control, "HEX_PLAYERS_RED_CONTROL");
    env_override!(config, players.red.level, "HEX_PLAYERS_RED_LEVEL", parse);
    env_override!(config, players.blue.control, "HEX_PLAYERS_BLUE_CONTROL");
    env_override!(config, players.blue.level, "HEX_PLAYERS_BLUE_LEVEL", parse);

    env_override!(config, rollout.alpha, "HEX_ROLLOUT_ALPHA", parse);
    env_override!(
        config,
        rollout.trials_per_tick,
        "HEX_ROLLOUT_TRIALS_PER_TICK",
        parse
    );

    config
}

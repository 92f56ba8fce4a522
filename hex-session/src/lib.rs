//! Turn and session management for the Hex engine.
//!
//! `GameSession` owns the authoritative board and orchestrates turns
//! between human and automated seats. Human moves arrive as validated cell
//! indices; automated moves are computed incrementally across `tick()`
//! calls from an external driver (a render/update loop), so a single call
//! never blocks long enough to starve it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hex_core::Player;
//! use hex_session::{Difficulty, GameSession, PlayerConfig, Seats, TickOutcome};
//!
//! let seats = Seats::new(
//!     PlayerConfig::Human,
//!     PlayerConfig::Automated { level: Difficulty::Standard },
//! );
//! let mut session = GameSession::new(11, seats, 42)?;
//!
//! session.human_move(30)?;
//! loop {
//!     match session.tick()? {
//!         TickOutcome::Progress { trials_completed, trials_target } => {
//!             // update a progress display
//!         }
//!         TickOutcome::Moved { .. } => break,
//!     }
//! }
//! ```

pub mod config;
pub mod controller;
pub mod player;

// Re-export main types
pub use config::{load_config, ConfigError, SessionConfig, CONFIG_SEARCH_PATHS};
pub use controller::{GameSession, SessionError, SessionState, TickOutcome};
pub use player::{Difficulty, PlayerConfig, Seats};

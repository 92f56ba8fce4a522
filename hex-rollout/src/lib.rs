//! Flat Monte Carlo move evaluation for the Hex engine.
//!
//! The automated player scores every empty cell by repeatedly completing
//! the game at random and crediting the cells that appeared on the winning
//! side. There is no search tree and no move policy: each trial is one
//! shuffled permutation of the empty cells, played out on a clone of the
//! live board, with the winner read off the full board at the end (Hex
//! admits no draws, so a full board always has exactly one winner).
//!
//! # Usage
//!
//! ```rust,ignore
//! use hex_core::Board;
//! use hex_rollout::{Evaluation, RolloutConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let board = Board::new(9).unwrap();
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let mut eval = Evaluation::new(&board, RolloutConfig::default());
//!
//! // The driver feeds in small batches so a tick never runs long.
//! while eval.trials_completed() < 1000 {
//!     eval.run_batch(&board, 10, &mut rng);
//! }
//! let best = eval.select_best(&mut rng).unwrap();
//! ```
//!
//! Scores accumulate across batches within one automated turn and are
//! discarded with the `Evaluation` itself; a new turn starts from a fresh
//! capture of the empty-cell set, so stale evidence never leaks.

pub mod config;
pub mod evaluation;
pub mod scores;
pub mod selector;

// Re-export main types
pub use config::RolloutConfig;
pub use evaluation::Evaluation;
pub use scores::ScoreTable;
pub use selector::{select_best, RolloutError};

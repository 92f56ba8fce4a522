//! Game session management
//!
//! `GameSession` wraps the board and the rollout evaluator behind a small
//! state machine, so the external driver only ever sees three situations:
//! waiting for a human index, computing an automated move tick by tick, or
//! game over.

use hex_core::{Board, BoardError, BoardMetadata, Control, PlayOutcome, Player, Tile};
use hex_rollout::{Evaluation, RolloutConfig, RolloutError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, SessionConfig};
use crate::player::{PlayerConfig, Seats};

/// Errors from driving the session out of order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no human move is expected in the current state")]
    NotHumansTurn,

    #[error("no automated computation is in progress")]
    NotComputing,

    #[error("undo is only available while a human is to move")]
    UndoUnavailable,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Selection(#[from] RolloutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The session's externally visible phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A human seat is to move; waiting for a validated cell index.
    AwaitingHuman,
    /// An automated seat is to move; feed `tick()` until it commits.
    Computing,
    /// The game ended. `control` records how the winning seat was played.
    GameOver { winner: Player, control: Control },
}

/// Result of one driver tick while an automated move is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Budget not yet exhausted; progress for display.
    Progress {
        trials_completed: u32,
        trials_target: u32,
    },
    /// The automated seat committed to `index`; `winner` is set when the
    /// move ended the game.
    Moved { index: usize, winner: Option<Player> },
}

/// A game session tracking the authoritative board and whose turn it is.
pub struct GameSession {
    board: Board,
    seats: Seats,
    rollout: RolloutConfig,
    rng: ChaCha20Rng,
    state: SessionState,
    /// Present exactly while `state` is `Computing`.
    eval: Option<Evaluation>,
    trials_target: u32,
}

impl GameSession {
    /// Create a session on a fresh board, seeded for reproducible
    /// automated play.
    pub fn new(edge_size: usize, seats: Seats, seed: u64) -> Result<Self, SessionError> {
        let board = Board::new(edge_size)?;
        let mut session = Self {
            board,
            seats,
            rollout: RolloutConfig::default(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            state: SessionState::AwaitingHuman,
            eval: None,
            trials_target: 0,
        };
        session.enter_turn_state();
        info!(edge_size, "new game session");
        Ok(session)
    }

    /// Create a session from a loaded configuration.
    pub fn from_config(config: &SessionConfig, seed: u64) -> Result<Self, SessionError> {
        let session = Self::new(config.board.edge_size, config.seats()?, seed)?;
        Ok(session.with_rollout_config(config.rollout_config()))
    }

    /// Builder pattern: replace the rollout configuration.
    pub fn with_rollout_config(mut self, rollout: RolloutConfig) -> Self {
        self.rollout = rollout;
        self.enter_turn_state();
        self
    }

    /// The authoritative board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The full cell array for rendering.
    pub fn cells(&self) -> &[Tile] {
        self.board.tiles()
    }

    /// Display-oriented board facts for UI collaborators.
    pub fn metadata(&self) -> BoardMetadata {
        BoardMetadata::for_board(&self.board)
    }

    /// Current session phase.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current seat configuration.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// `(trials_completed, trials_target)` while an automated move is being
    /// computed.
    pub fn progress(&self) -> Option<(u32, u32)> {
        self.eval
            .as_ref()
            .map(|eval| (eval.trials_completed(), self.trials_target))
    }

    /// Apply a human move at `index`.
    ///
    /// Only valid while the session awaits a human move. An illegal target
    /// comes back as `PlayOutcome::Rejected` with nothing changed; the
    /// input collaborator decides whether to re-prompt.
    pub fn human_move(&mut self, index: usize) -> Result<PlayOutcome, SessionError> {
        if self.state != SessionState::AwaitingHuman {
            return Err(SessionError::NotHumansTurn);
        }

        let outcome = self.board.play(index, true);
        match outcome {
            PlayOutcome::Rejected => {}
            PlayOutcome::Won(winner) => self.finish(winner),
            PlayOutcome::Placed => self.enter_turn_state(),
        }
        Ok(outcome)
    }

    /// Advance the automated move computation by one bounded batch.
    ///
    /// Runs at most `trials_per_tick` rollout trials, never overshooting
    /// the seat's tier budget. Once the budget is spent the best-scoring
    /// cell is played and the session transitions for the next seat.
    pub fn tick(&mut self) -> Result<TickOutcome, SessionError> {
        if self.state != SessionState::Computing {
            return Err(SessionError::NotComputing);
        }
        let Some(eval) = self.eval.as_mut() else {
            return Err(SessionError::NotComputing);
        };

        let remaining = self.trials_target.saturating_sub(eval.trials_completed());
        let batch = remaining.min(self.rollout.trials_per_tick);
        eval.run_batch(&self.board, batch, &mut self.rng);

        let trials_completed = eval.trials_completed();
        if trials_completed < self.trials_target {
            return Ok(TickOutcome::Progress {
                trials_completed,
                trials_target: self.trials_target,
            });
        }

        let index = eval.select_best(&mut self.rng)?;
        debug!(index, trials = trials_completed, "automated seat committed to move");
        self.eval = None;

        match self.board.play(index, true) {
            PlayOutcome::Won(winner) => {
                self.finish(winner);
                Ok(TickOutcome::Moved {
                    index,
                    winner: Some(winner),
                })
            }
            _ => {
                self.enter_turn_state();
                Ok(TickOutcome::Moved { index, winner: None })
            }
        }
    }

    /// Undo the last move, or the last turn pair when the undone mover is
    /// automated.
    ///
    /// Only available while a human is to move, so it can never race an
    /// in-flight computation. The state is recomputed afterwards for the
    /// (possibly different) player to move.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::AwaitingHuman {
            return Err(SessionError::UndoUnavailable);
        }

        let seats = self.seats;
        self.board.undo(|player| seats.control_of(player));
        self.enter_turn_state();
        Ok(())
    }

    /// Discard the current game and start over on a board of `edge_size`.
    ///
    /// Any partially accumulated rollout scores are dropped with the old
    /// evaluation before the new game becomes observable.
    pub fn new_game(&mut self, edge_size: usize) -> Result<(), SessionError> {
        let board = Board::new(edge_size)?;
        self.eval = None;
        self.trials_target = 0;
        self.board = board;
        self.enter_turn_state();
        info!(edge_size, "game reset");
        Ok(())
    }

    /// Reconfigure one seat.
    ///
    /// Mid-computation this discards the in-flight evaluation and restarts
    /// the turn under the new configuration; after game over only the
    /// stored configuration changes.
    pub fn set_player(&mut self, player: Player, config: PlayerConfig) {
        *self.seats.of_mut(player) = config;
        if !matches!(self.state, SessionState::GameOver { .. }) {
            self.enter_turn_state();
        }
    }

    /// Point the state machine at the seat now to move, building or
    /// dropping the evaluator as its control requires.
    fn enter_turn_state(&mut self) {
        match self.seats.of(self.board.turn()) {
            PlayerConfig::Human => {
                self.eval = None;
                self.trials_target = 0;
                self.state = SessionState::AwaitingHuman;
            }
            PlayerConfig::Automated { level } => {
                self.eval = Some(Evaluation::new(&self.board, self.rollout.clone()));
                self.trials_target = level.trial_target();
                self.state = SessionState::Computing;
            }
        }
    }

    fn finish(&mut self, winner: Player) {
        self.eval = None;
        self.trials_target = 0;
        let control = self.seats.control_of(winner);
        info!(?winner, ?control, "game over");
        self.state = SessionState::GameOver { winner, control };
    }
}

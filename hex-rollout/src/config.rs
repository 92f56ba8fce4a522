//! Rollout configuration parameters.

/// Configuration for flat Monte Carlo evaluation.
#[derive(Debug, Clone)]
pub struct RolloutConfig {
    /// Weight of opponent-move evidence relative to own-move evidence,
    /// in (0, 1). A cell the random opponent held in a lost playout hints
    /// at blocking value there, but more weakly than the mover's own
    /// winning cells; `alpha` sets that discount.
    pub alpha: f64,

    /// Trials per driver tick. Kept small so one tick never runs long
    /// enough to starve a cooperative render/update loop.
    pub trials_per_tick: u32,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            trials_per_tick: 10,
        }
    }
}

impl RolloutConfig {
    /// Create a config with large ticks for tests that drive the
    /// evaluation to completion in one call.
    pub fn for_testing() -> Self {
        Self {
            alpha: 0.5,
            trials_per_tick: 100,
        }
    }

    /// Builder pattern: set the opponent-evidence weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Builder pattern: set trials per tick.
    pub fn with_trials_per_tick(mut self, trials: u32) -> Self {
        self.trials_per_tick = trials;
        self
    }
}

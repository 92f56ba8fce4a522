//! Reduction of a score table to the chosen move.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::trace;

use crate::scores::ScoreTable;

/// Errors that can occur when reducing rollout scores to a move.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RolloutError {
    /// The score table holds no cells. Correct sequencing never selects on
    /// a full board, but the guard keeps misuse from picking a phantom move.
    #[error("no scored cells to select from")]
    EmptyScores,
}

/// Pick the highest-scoring cell, breaking ties uniformly at random.
///
/// Ties are common at low trial counts, so the tie-break keeps the
/// automated player from always favoring low indices.
pub fn select_best(table: &ScoreTable, rng: &mut ChaCha20Rng) -> Result<usize, RolloutError> {
    let mut best = f64::NEG_INFINITY;
    let mut candidates: Vec<usize> = Vec::new();

    for (index, score) in table.entries() {
        if score > best {
            best = score;
            candidates.clear();
            candidates.push(index);
        } else if score == best {
            candidates.push(index);
        }
    }

    let chosen = candidates.choose(rng).copied().ok_or(RolloutError::EmptyScores)?;
    trace!(
        index = chosen,
        score = best,
        ties = candidates.len(),
        "selected rollout move"
    );
    Ok(chosen)
}

//! Batched random playouts scoring the mover's candidate cells.

use hex_core::{Board, Player};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::config::RolloutConfig;
use crate::scores::ScoreTable;
use crate::selector::{select_best, RolloutError};

/// One automated turn's worth of rollout evidence.
///
/// Created when the automated player's turn begins; captures the mover and
/// the empty-cell set at that instant. Batches accumulate into the same
/// score table until the driver has spent its trial budget, then
/// [`select_best`](Evaluation::select_best) reduces the table to a move.
#[derive(Debug)]
pub struct Evaluation {
    mover: Player,
    config: RolloutConfig,
    table: ScoreTable,
}

impl Evaluation {
    /// Capture the evaluation baseline from the live board.
    pub fn new(board: &Board, config: RolloutConfig) -> Self {
        Self {
            mover: board.turn(),
            config,
            table: ScoreTable::new(board.empty_tiles(), board.cell_count()),
        }
    }

    /// The player whose move is being evaluated.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// The accumulated score table.
    pub fn scores(&self) -> &ScoreTable {
        &self.table
    }

    /// Trials folded in across all batches so far.
    pub fn trials_completed(&self) -> u32 {
        self.table.trials_completed()
    }

    /// Run `trials` independent random playouts from `board` and fold their
    /// evidence into the score table.
    ///
    /// Each trial clones the board and plays a fresh shuffled permutation
    /// of the captured empty cells as alternating moves with the win check
    /// off, then reads the winner from the full board. Cells at even
    /// permutation positions were the mover's simulated moves and score
    /// +1/-1 on a win/loss; odd positions were the opponent's and score
    /// the alpha-discounted opposite.
    pub fn run_batch(&mut self, board: &Board, trials: u32, rng: &mut ChaCha20Rng) {
        for _ in 0..trials {
            self.run_trial(board, rng);
        }
        trace!(
            trials,
            total = self.table.trials_completed(),
            "rollout batch complete"
        );
    }

    fn run_trial(&mut self, board: &Board, rng: &mut ChaCha20Rng) {
        let mut order = self.table.tiles().to_vec();
        order.shuffle(rng);

        let mut sim = board.clone();
        for &index in &order {
            sim.play(index, false);
        }

        let alpha = self.config.alpha;
        let (even_delta, odd_delta) = if sim.is_winner(self.mover) {
            (1.0, -alpha)
        } else {
            (-1.0, alpha)
        };
        for (position, &index) in order.iter().enumerate() {
            let delta = if position % 2 == 0 { even_delta } else { odd_delta };
            self.table.add(index, delta);
        }
        self.table.record_trial();
    }

    /// Reduce the accumulated scores to the chosen cell.
    pub fn select_best(&self, rng: &mut ChaCha20Rng) -> Result<usize, RolloutError> {
        select_best(&self.table, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_core::PlayOutcome;
    use rand::SeedableRng;

    /// Board with exactly one empty cell (8) where taking it wins for the
    /// mover (Red completes the y=1 row).
    fn one_gap_board() -> Board {
        let mut board = Board::new(3).unwrap();
        for index in [6, 11, 7, 12, 16, 13, 17, 18] {
            assert_ne!(board.play(index, false), PlayOutcome::Rejected);
        }
        assert_eq!(board.empty_tiles(), vec![8]);
        assert_eq!(board.turn(), Player::Red);
        board
    }

    #[test]
    fn test_captures_mover_and_empty_set() {
        let mut board = Board::new(3).unwrap();
        board.play(6, false);
        let eval = Evaluation::new(&board, RolloutConfig::default());

        assert_eq!(eval.mover(), Player::Blue);
        assert_eq!(eval.scores().tiles().len(), 8);
        assert_eq!(eval.trials_completed(), 0);
    }

    #[test]
    fn test_forced_win_scores_full_credit() {
        let board = one_gap_board();
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut eval = Evaluation::new(&board, RolloutConfig::default());

        eval.run_batch(&board, 50, &mut rng);

        // The single cell is always the mover's simulated move and always wins.
        assert_eq!(eval.trials_completed(), 50);
        assert!((eval.scores().score(8) - 50.0).abs() < 1e-9);
        assert_eq!(eval.select_best(&mut rng), Ok(8));
    }

    #[test]
    fn test_scores_accumulate_across_batches() {
        let board = one_gap_board();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut eval = Evaluation::new(&board, RolloutConfig::default());

        eval.run_batch(&board, 10, &mut rng);
        eval.run_batch(&board, 10, &mut rng);

        assert_eq!(eval.trials_completed(), 20);
        assert!((eval.scores().score(8) - 20.0).abs() < 1e-9);

        // A fresh evaluation starts from zero: nothing carries over.
        let eval = Evaluation::new(&board, RolloutConfig::default());
        assert_eq!(eval.trials_completed(), 0);
        assert_eq!(eval.scores().score(8), 0.0);
    }

    /// Bookkeeping bound from the increment scheme: every trial moves each
    /// cell's score by at most max(1, alpha), so totals stay within
    /// trials * max(1, alpha).
    #[test]
    fn test_two_cell_scores_stay_bounded() {
        let mut board = Board::new(3).unwrap();
        for index in [6, 7, 8, 11, 12, 13, 16] {
            assert_ne!(board.play(index, false), PlayOutcome::Rejected);
        }
        assert_eq!(board.empty_tiles(), vec![17, 18]);

        let trials = 100u32;
        let alpha = 0.5;
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let mut eval = Evaluation::new(&board, RolloutConfig::default().with_alpha(alpha));
        eval.run_batch(&board, trials, &mut rng);

        let bound = trials as f64 * alpha.max(1.0);
        for (index, score) in eval.scores().entries() {
            assert!(
                score.abs() <= bound + 1e-9,
                "cell {} score {} exceeds bound {}",
                index,
                score,
                bound
            );
        }
        // Per trial the two entries move by +1/-alpha or -1/+alpha, so the
        // total drifts by exactly (1 - alpha) per trial in magnitude.
        let total: f64 = eval.scores().entries().map(|(_, s)| s).sum();
        assert!(total.abs() <= trials as f64 * (1.0 - alpha) + 1e-9);
    }

    #[test]
    fn test_same_seed_reproduces_scores() {
        let mut board = Board::new(5).unwrap();
        board.play(16, false);
        board.play(17, false);

        let run = |seed: u64| {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let mut eval = Evaluation::new(&board, RolloutConfig::default());
            eval.run_batch(&board, 30, &mut rng);
            eval.scores().entries().collect::<Vec<_>>()
        };

        assert_eq!(run(123), run(123));
    }

    #[test]
    fn test_live_board_is_untouched() {
        let board = one_gap_board();
        let snapshot = board.clone();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut eval = Evaluation::new(&board, RolloutConfig::default());
        eval.run_batch(&board, 25, &mut rng);

        assert_eq!(board, snapshot);
    }
}

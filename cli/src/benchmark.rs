use std::fmt;
use std::time::{Duration, Instant};

use common::games::tictactoe::{Board, SearchAlgorithm, SearchStats, calculate_best_move_with_stats};
use common::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmTiming {
    pub algorithm: SearchAlgorithm,
    pub mean: Duration,
    pub nodes_per_search: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub trials: u32,
    pub minimax: AlgorithmTiming,
    pub alpha_beta: AlgorithmTiming,
}

/// Times one full move selection per algorithm on a fresh empty board,
/// `trials` times, and reports the mean wall-clock duration of each.
pub fn compare(trials: u32) -> Result<ComparisonReport, String> {
    if trials == 0 {
        return Err("Benchmark needs at least one trial".to_string());
    }

    let mut minimax = Accumulator::default();
    let mut alpha_beta = Accumulator::default();

    for trial in 1..=trials {
        minimax.run(SearchAlgorithm::Minimax, Board::new());
        alpha_beta.run(SearchAlgorithm::AlphaBeta, Board::new());
        log!("Trial {}/{} finished", trial, trials);
    }

    Ok(ComparisonReport {
        trials,
        minimax: minimax.finish(SearchAlgorithm::Minimax, trials),
        alpha_beta: alpha_beta.finish(SearchAlgorithm::AlphaBeta, trials),
    })
}

#[derive(Default)]
struct Accumulator {
    total: Duration,
    nodes: u64,
}

impl Accumulator {
    fn run(&mut self, algorithm: SearchAlgorithm, mut board: Board) {
        let mut stats = SearchStats::default();
        let started = Instant::now();
        calculate_best_move_with_stats(&mut board, algorithm, &mut stats);
        self.total += started.elapsed();
        self.nodes += stats.nodes;
    }

    fn finish(self, algorithm: SearchAlgorithm, trials: u32) -> AlgorithmTiming {
        AlgorithmTiming {
            algorithm,
            mean: self.total / trials,
            nodes_per_search: self.nodes / u64::from(trials),
        }
    }
}

impl fmt::Display for AlgorithmTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{}:", self.algorithm.name());
        write!(
            f,
            "{:<12} {:.6} sec ({} nodes)",
            label,
            self.mean.as_secs_f64(),
            self.nodes_per_search
        )
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance over {} trials:", self.trials)?;
        writeln!(f, "{}", self.minimax)?;
        write!(f, "{}", self.alpha_beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_trials_is_rejected() {
        assert!(compare(0).is_err());
    }

    #[test]
    fn test_single_trial_reports_both_algorithms() {
        let report = compare(1).unwrap();

        assert_eq!(report.trials, 1);
        assert_eq!(report.minimax.algorithm, SearchAlgorithm::Minimax);
        assert_eq!(report.alpha_beta.algorithm, SearchAlgorithm::AlphaBeta);
        assert_eq!(report.minimax.nodes_per_search, 549_945);
        assert!(report.alpha_beta.nodes_per_search < report.minimax.nodes_per_search);
    }

    #[test]
    fn test_report_layout() {
        let report = ComparisonReport {
            trials: 5,
            minimax: AlgorithmTiming {
                algorithm: SearchAlgorithm::Minimax,
                mean: Duration::from_micros(123_456),
                nodes_per_search: 549_945,
            },
            alpha_beta: AlgorithmTiming {
                algorithm: SearchAlgorithm::AlphaBeta,
                mean: Duration::from_micros(12_345),
                nodes_per_search: 30_000,
            },
        };

        let lines: Vec<String> = report.to_string().lines().map(str::to_string).collect();

        assert_eq!(lines[0], "Performance over 5 trials:");
        assert_eq!(lines[1], "Minimax:     0.123456 sec (549945 nodes)");
        assert_eq!(lines[2], "Alpha-Beta:  0.012345 sec (30000 nodes)");
    }
}

use super::alphabeta::alphabeta_with_stats;
use super::board::Board;
use super::minimax::minimax_with_stats;
use super::types::{BestMove, MAXIMIZER, SearchAlgorithm, SearchStats};

pub fn calculate_move(algorithm: SearchAlgorithm, board: &mut Board) -> Option<usize> {
    calculate_best_move(board, algorithm).map(|best| best.index)
}

pub fn select_best_move(board: &mut Board, use_pruning: bool) -> Option<usize> {
    calculate_move(SearchAlgorithm::from_pruning(use_pruning), board)
}

pub fn calculate_best_move(board: &mut Board, algorithm: SearchAlgorithm) -> Option<BestMove> {
    calculate_best_move_with_stats(board, algorithm, &mut SearchStats::default())
}

/// Plays one ply for the maximizer and searches the opponent's replies.
///
/// Moves are tried in ascending index order and a later move only replaces
/// the current best when it scores strictly higher, so ties go to the lowest
/// index. Returns `None` when the board has no empty cell.
pub fn calculate_best_move_with_stats(
    board: &mut Board,
    algorithm: SearchAlgorithm,
    stats: &mut SearchStats,
) -> Option<BestMove> {
    let mut best: Option<BestMove> = None;

    for idx in board.legal_moves() {
        let applied = board.apply_move(idx, MAXIMIZER);
        debug_assert!(applied, "legal move {} rejected", idx);

        let score = match algorithm {
            SearchAlgorithm::Minimax => minimax_with_stats(board, 0, false, stats),
            SearchAlgorithm::AlphaBeta => {
                alphabeta_with_stats(board, 0, i32::MIN, i32::MAX, false, stats)
            }
        };

        board.undo_move(idx);

        if best.is_none_or(|current| score > current.score) {
            best = Some(BestMove { index: idx, score });
        }
    }

    best
}

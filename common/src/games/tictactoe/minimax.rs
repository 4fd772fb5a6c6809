use super::board::Board;
use super::evaluator::evaluate;
use super::types::{MAXIMIZER, MINIMIZER, SearchStats};

/// Full-width minimax over every position below `board`.
pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    minimax_with_stats(board, depth, is_maximizing, &mut SearchStats::default())
}

pub fn minimax_with_stats(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if let Some(score) = evaluate(board, depth) {
        return score;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for idx in board.legal_moves() {
            let applied = board.apply_move(idx, MAXIMIZER);
            debug_assert!(applied, "legal move {} rejected", idx);
            let eval = minimax_with_stats(board, depth + 1, false, stats);
            board.undo_move(idx);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for idx in board.legal_moves() {
            let applied = board.apply_move(idx, MINIMIZER);
            debug_assert!(applied, "legal move {} rejected", idx);
            let eval = minimax_with_stats(board, depth + 1, true, stats);
            board.undo_move(idx);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

use super::board::Board;
use super::evaluator::evaluate;
use super::types::{MAXIMIZER, MINIMIZER, SearchStats};

/// Minimax with alpha-beta cutoffs. Called with `alpha = i32::MIN` and
/// `beta = i32::MAX` it returns exactly what [`super::minimax::minimax`]
/// returns for the same position.
pub fn alphabeta(
    board: &mut Board,
    depth: usize,
    alpha: i32,
    beta: i32,
    is_maximizing: bool,
) -> i32 {
    alphabeta_with_stats(
        board,
        depth,
        alpha,
        beta,
        is_maximizing,
        &mut SearchStats::default(),
    )
}

pub fn alphabeta_with_stats(
    board: &mut Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
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
            let eval = alphabeta_with_stats(board, depth + 1, alpha, beta, false, stats);
            board.undo_move(idx);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for idx in board.legal_moves() {
            let applied = board.apply_move(idx, MINIMIZER);
            debug_assert!(applied, "legal move {} rejected", idx);
            let eval = alphabeta_with_stats(board, depth + 1, alpha, beta, true, stats);
            board.undo_move(idx);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

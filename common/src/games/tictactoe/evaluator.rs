use super::board::Board;
use super::types::{MAXIMIZER, MINIMIZER};

pub const WIN_SCORE: i32 = 10;

/// Score of a terminal position reached `depth` plies below the search root.
///
/// Wins are worth less the later they happen and losses cost less the later
/// they happen, so among equal outcomes the search prefers quick wins and
/// delayed losses. Returns `None` if the game is not over.
pub fn evaluate(board: &Board, depth: usize) -> Option<i32> {
    let depth = depth as i32;
    if board.is_winner(MAXIMIZER) {
        return Some(WIN_SCORE - depth);
    }
    if board.is_winner(MINIMIZER) {
        return Some(depth - WIN_SCORE);
    }
    if board.is_draw() {
        return Some(0);
    }
    None
}

mod alphabeta;
mod board;
mod bot_controller;
mod evaluator;
mod minimax;
mod types;
mod win_detector;

#[cfg(test)]
mod test_positions;

pub use alphabeta::{alphabeta, alphabeta_with_stats};
pub use board::Board;
pub use bot_controller::{
    calculate_best_move, calculate_best_move_with_stats, calculate_move, select_best_move,
};
pub use evaluator::{WIN_SCORE, evaluate};
pub use minimax::{minimax, minimax_with_stats};
pub use types::{BestMove, MAXIMIZER, MINIMIZER, Mark, SearchAlgorithm, SearchStats};
pub use win_detector::{CELL_COUNT, WINNING_LINES, check_win, has_won};

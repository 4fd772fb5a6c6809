use std::collections::HashSet;

use super::board::Board;
use super::types::Mark;

/// Positions reachable by legal play from the empty board, once with X moving
/// first and once with O moving first. Each walk dedups on its own, so a board
/// reachable under both orders appears twice, once per side to move.
pub fn reachable_positions() -> Vec<Board> {
    let mut positions = Vec::new();
    for first in [Mark::X, Mark::O] {
        let mut seen = HashSet::new();
        collect(&mut Board::new(), first, &mut seen, &mut positions);
    }
    positions
}

fn collect(board: &mut Board, to_move: Mark, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
    if !seen.insert(*board) {
        return;
    }
    out.push(*board);
    if board.is_terminal() {
        return;
    }

    let next = to_move.opponent().unwrap();
    for idx in board.legal_moves() {
        board.apply_move(idx, to_move);
        collect(board, next, seen, out);
        board.undo_move(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(board: &Board, mark: Mark) -> usize {
        board.cells().iter().filter(|&&cell| cell == mark).count()
    }

    #[test]
    fn test_each_first_mover_yields_every_legal_position() {
        let positions = reachable_positions();

        assert_eq!(positions.len(), 2 * 5478);
    }

    #[test]
    fn test_positions_cover_both_move_orders() {
        let positions = reachable_positions();

        let x_ahead = positions
            .iter()
            .filter(|b| count(b, Mark::X) > count(b, Mark::O))
            .count();
        let o_ahead = positions
            .iter()
            .filter(|b| count(b, Mark::O) > count(b, Mark::X))
            .count();

        assert!(x_ahead > 0);
        assert_eq!(o_ahead, x_ahead);
        for board in &positions {
            assert!(count(board, Mark::X).abs_diff(count(board, Mark::O)) <= 1);
        }
    }
}

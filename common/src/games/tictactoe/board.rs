use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::Mark;
use super::win_detector::{CELL_COUNT, check_win, has_won};

/// A 3x3 board, cells indexed row-major from 0 (top left) to 8 (bottom right).
///
/// The search threads a single `&mut Board` through its recursion: every
/// successful [`Board::apply_move`] must be followed by exactly one
/// [`Board::undo_move`] on the same index before siblings are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn is_winner(&self, mark: Mark) -> bool {
        has_won(&self.cells, mark)
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn is_draw(&self) -> bool {
        self.is_board_full() && !self.is_winner(Mark::X) && !self.is_winner(Mark::O)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_winner(Mark::X) || self.is_winner(Mark::O) || self.is_draw()
    }

    /// Empty cells in ascending index order. Search tie-breaks depend on it.
    pub fn legal_moves(&self) -> Vec<usize> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for (idx, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(idx);
            }
        }
        moves
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index] == Mark::Empty
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_valid_move(index) {
            return false;
        }
        self.cells[index] = mark;
        true
    }

    pub fn undo_move(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    fn is_board_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT,
                chars.len()
            ));
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (idx, c) in chars.into_iter().enumerate() {
            cells[idx] = Mark::from_char(c)
                .ok_or_else(|| format!("Invalid cell '{}' at index {}", c, idx))?;
        }
        Ok(Self::from_cells(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut board = Board::new();

        assert!(board.apply_move(4, Mark::X));
        let before = board;
        assert!(!board.apply_move(4, Mark::O));

        assert_eq!(board, before);
        assert_eq!(board.cells()[4], Mark::X);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range_index() {
        let mut board = Board::new();

        assert!(!board.apply_move(9, Mark::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_undo_restores_cell() {
        let mut board = board("XO.......");
        let before = board;

        assert!(board.apply_move(8, Mark::X));
        board.undo_move(8);

        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves_ascending_and_match_empty_count() {
        let board = board("X.O.X.O..");

        assert_eq!(board.legal_moves(), vec![1, 3, 5, 7, 8]);
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn test_legal_moves_partition_over_full_game() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        let mut played = Vec::new();

        for k in (1..=9).rev() {
            let moves = board.legal_moves();
            assert_eq!(moves.len(), k);
            for idx in &played {
                assert!(!moves.contains(idx));
            }
            let idx = moves[moves.len() / 2];
            assert!(board.apply_move(idx, mark));
            played.push(idx);
            mark = mark.opponent().unwrap();
        }

        played.sort();
        assert_eq!(played, (0..9).collect::<Vec<_>>());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_winner_detection() {
        let board = board("XXXOO....");

        assert!(board.is_winner(Mark::X));
        assert!(!board.is_winner(Mark::O));
        assert!(!board.is_draw());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let board = board("XOXXOOOXX");

        assert!(board.is_draw());
        assert!(board.is_terminal());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board = board("XXXOOXOXO");

        assert!(!board.is_draw());
        assert!(board.is_winner(Mark::X));
    }

    #[test]
    fn test_parse_matches_from_cells() {
        let mut cells = [Mark::Empty; CELL_COUNT];
        cells[0] = Mark::X;
        cells[4] = Mark::O;

        assert_eq!(board("X...O...."), Board::from_cells(cells));
        assert_eq!(Board::from_cells(cells).cells(), &cells);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XO.....Z.".parse::<Board>().is_err());
        assert!("x_o ..O.X".parse::<Board>().is_ok());
    }
}

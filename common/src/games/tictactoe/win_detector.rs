use super::types::Mark;

pub const CELL_COUNT: usize = 9;

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_won(cells: &[Mark; CELL_COUNT], mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == mark))
}

pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Mark> {
    if has_won(cells, Mark::X) {
        return Some(Mark::X);
    }
    if has_won(cells, Mark::O) {
        return Some(Mark::O);
    }
    None
}

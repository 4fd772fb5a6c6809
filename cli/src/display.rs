use common::games::tictactoe::Board;

const ROW_SEPARATOR: &str = "--+---+--";

pub fn render_board(board: &Board) -> String {
    board
        .cells()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|mark| mark.to_char().to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", ROW_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_layout() {
        let rendered = render_board(&Board::new());

        assert_eq!(rendered, "  |   |  \n--+---+--\n  |   |  \n--+---+--\n  |   |  ");
    }

    #[test]
    fn test_marks_are_placed_row_major() {
        let board: Board = "X.O.X...O".parse().unwrap();

        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines, vec!["X |   | O", "--+---+--", "  | X |  ", "--+---+--", "  |   | O"]);
    }
}

use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, Position, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

// Lines are checked rows first, then columns, then the two diagonals;
// the first complete line is the one reported.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for row in 0..BOARD_SIZE {
        if let Some(mark) = check_row(board, row) {
            return Some(WinningLine::new(
                mark,
                Position::new(row, 0),
                Position::new(row, BOARD_SIZE - 1),
            ));
        }
    }

    for col in 0..BOARD_SIZE {
        if let Some(mark) = check_column(board, col) {
            return Some(WinningLine::new(
                mark,
                Position::new(0, col),
                Position::new(BOARD_SIZE - 1, col),
            ));
        }
    }

    if let Some(mark) = check_main_diagonal(board) {
        return Some(WinningLine::new(
            mark,
            Position::new(0, 0),
            Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
        ));
    }

    if let Some(mark) = check_anti_diagonal(board) {
        return Some(WinningLine::new(
            mark,
            Position::new(BOARD_SIZE - 1, 0),
            Position::new(0, BOARD_SIZE - 1),
        ));
    }

    None
}

pub fn game_outcome(board: &Board) -> GameStatus {
    if let Some(mark) = check_win(board) {
        return match mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

fn check_row(board: &Board, row: usize) -> Option<Mark> {
    line_owner(
        board,
        [
            Position::new(row, 0),
            Position::new(row, 1),
            Position::new(row, 2),
        ],
    )
}

fn check_column(board: &Board, col: usize) -> Option<Mark> {
    line_owner(
        board,
        [
            Position::new(0, col),
            Position::new(1, col),
            Position::new(2, col),
        ],
    )
}

fn check_main_diagonal(board: &Board) -> Option<Mark> {
    line_owner(
        board,
        [
            Position::new(0, 0),
            Position::new(1, 1),
            Position::new(2, 2),
        ],
    )
}

fn check_anti_diagonal(board: &Board) -> Option<Mark> {
    line_owner(
        board,
        [
            Position::new(2, 0),
            Position::new(1, 1),
            Position::new(0, 2),
        ],
    )
}

fn line_owner(board: &Board, line: [Position; BOARD_SIZE]) -> Option<Mark> {
    let first = board.mark_at(line[0]);
    if first == Mark::Empty {
        return None;
    }
    if line.iter().all(|&pos| board.mark_at(pos) == first) {
        Some(first)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(check_win(&board), None);
        assert_eq!(check_win_with_line(&board), None);
        assert_eq!(game_outcome(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_every_row_win_is_detected_with_line() {
        for row in 0..BOARD_SIZE {
            let mut board = Board::new();
            for col in 0..BOARD_SIZE {
                board.set_mark(Position::new(row, col), Mark::O);
            }
            let line = check_win_with_line(&board).expect("row win not detected");
            assert_eq!(line.mark, Mark::O);
            assert_eq!(line.start, Position::new(row, 0));
            assert_eq!(line.end, Position::new(row, 2));
            assert_eq!(game_outcome(&board), GameStatus::OWon);
        }
    }

    #[test]
    fn test_every_column_win_is_detected_with_line() {
        for col in 0..BOARD_SIZE {
            let mut board = Board::new();
            for row in 0..BOARD_SIZE {
                board.set_mark(Position::new(row, col), Mark::X);
            }
            let line = check_win_with_line(&board).expect("column win not detected");
            assert_eq!(line.mark, Mark::X);
            assert_eq!(line.start, Position::new(0, col));
            assert_eq!(line.end, Position::new(2, col));
            assert_eq!(game_outcome(&board), GameStatus::XWon);
        }
    }

    #[test]
    fn test_main_diagonal_win() {
        // X O X
        // O X O
        // . . X
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::O],
            [Mark::Empty, Mark::Empty, Mark::X],
        ]);
        let line = check_win_with_line(&board).expect("diagonal win not detected");
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 2));
        assert_eq!(game_outcome(&board), GameStatus::XWon);
    }

    #[test]
    fn test_anti_diagonal_win() {
        // O O X
        // O X .
        // X . .
        let board = Board::from_rows([
            [Mark::O, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::Empty],
            [Mark::X, Mark::Empty, Mark::Empty],
        ]);
        let line = check_win_with_line(&board).expect("anti-diagonal win not detected");
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_row_win_reported_before_column_win() {
        // Both row 0 and column 0 are complete; the row is reported.
        let board = Board::from_rows([
            [Mark::X, Mark::X, Mark::X],
            [Mark::X, Mark::O, Mark::O],
            [Mark::X, Mark::O, Mark::Empty],
        ]);
        let line = check_win_with_line(&board).expect("win not detected");
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_column_win_reported_before_diagonal_win() {
        // Both column 0 and the main diagonal are complete; the column is reported.
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::X, Mark::O],
            [Mark::X, Mark::O, Mark::X],
        ]);
        let line = check_win_with_line(&board).expect("win not detected");
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_main_diagonal_reported_before_anti_diagonal() {
        // Both diagonals are complete through the center; the main one is reported.
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::O],
            [Mark::X, Mark::O, Mark::X],
        ]);
        let line = check_win_with_line(&board).expect("win not detected");
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 2));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X X O
        // O O X
        // X O X
        let board = Board::from_rows([
            [Mark::X, Mark::X, Mark::O],
            [Mark::O, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::X],
        ]);
        assert_eq!(check_win(&board), None);
        assert_eq!(game_outcome(&board), GameStatus::Draw);
    }

    #[test]
    fn test_partial_board_without_line_is_in_progress() {
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::Empty],
            [Mark::Empty, Mark::X, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::Empty],
        ]);
        assert_eq!(check_win(&board), None);
        assert_eq!(game_outcome(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluation_is_stable_and_leaves_board_unchanged() {
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::O],
            [Mark::Empty, Mark::Empty, Mark::X],
        ]);
        let before = board;
        let first = check_win_with_line(&board);
        let second = check_win_with_line(&board);
        assert_eq!(first, second);
        assert_eq!(game_outcome(&board), game_outcome(&board));
        assert_eq!(board, before);
    }
}

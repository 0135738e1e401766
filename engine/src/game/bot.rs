use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{Mark, Position};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpeningStyle {
    RandomCell,
    FullSearch,
}

pub fn calculate_move(
    board: &Board,
    bot_mark: Mark,
    opening: OpeningStyle,
    rng: &mut SessionRng,
) -> Result<Position, String> {
    if opening == OpeningStyle::RandomCell
        && board.is_empty()
        && let Some(pos) = calculate_random_move(board, rng)
    {
        return Ok(pos);
    }

    calculate_minimax_move(board, bot_mark)
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

// Ties between equally scored moves go to the earliest cell in row-major
// order, which makes the selection fully deterministic.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Result<Position, String> {
    if bot_mark.opponent().is_none() {
        return Err("Bot mark must be X or O".to_string());
    }

    if check_win(board).is_some() {
        return Err("No legal move: the game is already won".to_string());
    }

    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err("No legal move: the board is full".to_string());
    }

    let mut best_score = i32::MIN;
    let mut best_move = available_moves[0];

    for pos in available_moves {
        let mut next = *board;
        next.set_mark(pos, bot_mark);
        let score = minimax(next, bot_mark, false);

        if score > best_score {
            best_score = score;
            best_move = pos;
        }
    }

    Ok(best_move)
}

fn minimax(board: Board, bot_mark: Mark, is_maximizing: bool) -> i32 {
    if let Some(winner) = check_win(&board) {
        return if winner == bot_mark {
            WIN_SCORE
        } else {
            LOSS_SCORE
        };
    }

    if board.is_full() {
        return DRAW_SCORE;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in board.available_moves() {
            let mut next = board;
            next.set_mark(pos, bot_mark);
            max_eval = max_eval.max(minimax(next, bot_mark, false));
        }
        max_eval
    } else {
        let opponent_mark = bot_mark.opponent().unwrap();
        let mut min_eval = i32::MAX;
        for pos in board.available_moves() {
            let mut next = board;
            next.set_mark(pos, opponent_mark);
            min_eval = min_eval.min(minimax(next, bot_mark, true));
        }
        min_eval
    }
}

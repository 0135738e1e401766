mod board;
mod bot;
mod game_state;
mod session_rng;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot::{OpeningStyle, calculate_minimax_move, calculate_move, calculate_random_move};
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use types::{FirstPlayerMode, GameStatus, Mark, Participant, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, game_outcome};

use super::board::{BOARD_SIZE, Board};
use super::session_rng::SessionRng;
use super::types::{FirstPlayerMode, GameStatus, Mark, Participant, Position, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_turn: Participant,
    status: GameStatus,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
}

impl GameState {
    pub fn new(first: Participant) -> Self {
        Self {
            board: Board::new(),
            current_turn: first,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn with_first_mode(mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let first = match mode {
            FirstPlayerMode::Human => Participant::Human,
            FirstPlayerMode::Computer => Participant::Computer,
            FirstPlayerMode::Random => {
                if rng.random_bool(0.5) {
                    Participant::Human
                } else {
                    Participant::Computer
                }
            }
        };
        Self::new(first)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_turn(&self) -> Participant {
        self.current_turn
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn winner(&self) -> Option<Participant> {
        match self.status {
            GameStatus::XWon => Some(Participant::Human),
            GameStatus::OWon => Some(Participant::Computer),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn place_mark(
        &mut self,
        participant: Participant,
        position: Position,
    ) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if participant != self.current_turn {
            return Err("Not your turn".to_string());
        }

        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if self.board.mark_at(position) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set_mark(position, participant.mark());
        self.last_move = Some(position);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_turn = self.current_turn.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.winning_line = Some(line);
            self.status = match line.mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

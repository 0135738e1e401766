use std::time::{Duration, Instant};

use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use tictactoe_engine::game::{
    GameState, GameStatus, OpeningStyle, Participant, Position, SessionRng,
};
use tictactoe_engine::log;

use crate::bot_worker::{BotWorker, MoveRequest};
use crate::colors;
use crate::config::Config;
use crate::game_ui::BoardUi;

const RECENT_RESULTS_CAPACITY: usize = 16;

enum Screen {
    Welcome,
    Playing,
    GameOver,
}

pub struct TicTacToeApp {
    config: Config,
    rng: SessionRng,
    screen: Screen,
    game: GameState,
    board_ui: BoardUi,
    bot_worker: BotWorker,
    move_requested: bool,
    thinking_since: Option<Instant>,
    pending_move: Option<Result<Position, String>>,
    started_at: Instant,
    wins: u32,
    losses: u32,
    ties: u32,
    games_played: u32,
    recent_results: AllocRingBuffer<String>,
}

impl TicTacToeApp {
    pub fn new(config: Config, rng: SessionRng) -> Self {
        Self {
            config,
            rng,
            screen: Screen::Welcome,
            game: GameState::new(Participant::Human),
            board_ui: BoardUi::new(),
            bot_worker: BotWorker::spawn(),
            move_requested: false,
            thinking_since: None,
            pending_move: None,
            started_at: Instant::now(),
            wins: 0,
            losses: 0,
            ties: 0,
            games_played: 0,
            recent_results: AllocRingBuffer::new(RECENT_RESULTS_CAPACITY),
        }
    }

    fn blink_on(&self) -> bool {
        let elapsed_ms = self.started_at.elapsed().as_millis() as u64;
        (elapsed_ms / self.config.ui.blink_interval_ms) % 2 == 0
    }

    fn start_new_game(&mut self) {
        self.game = GameState::with_first_mode(self.config.game.first_player, &mut self.rng);
        self.board_ui = BoardUi::new();
        self.move_requested = false;
        self.thinking_since = None;
        self.pending_move = None;
        self.screen = Screen::Playing;
        log!(
            "Game {} started, {:?} moves first",
            self.games_played + 1,
            self.game.current_turn()
        );
    }

    fn finish_game(&mut self) {
        let summary = match self.game.status() {
            GameStatus::InProgress => return,
            GameStatus::XWon => {
                self.wins += 1;
                "you won"
            }
            GameStatus::OWon => {
                self.losses += 1;
                "computer won"
            }
            GameStatus::Draw => {
                self.ties += 1;
                "tie"
            }
        };
        self.games_played += 1;
        self.recent_results
            .enqueue(format!("Game {}: {}", self.games_played, summary));
        log!("Game {} finished: {}", self.games_played, summary);
        self.screen = Screen::GameOver;
    }

    fn handle_human_click(&mut self, pos: Position) {
        match self.game.place_mark(Participant::Human, pos) {
            Ok(()) => {
                log!("Human marked ({}, {})", pos.row, pos.col);
                if self.game.is_over() {
                    self.finish_game();
                }
            }
            Err(e) => log!("Human move rejected: {}", e),
        }
    }

    fn drive_computer_turn(&mut self) {
        if !self.move_requested {
            let opening = if self.config.game.random_opening {
                OpeningStyle::RandomCell
            } else {
                OpeningStyle::FullSearch
            };
            self.bot_worker.request_move(MoveRequest {
                board: *self.game.board(),
                bot_mark: Participant::Computer.mark(),
                opening,
                seed: self.rng.random(),
            });
            self.move_requested = true;
            self.thinking_since = Some(Instant::now());
        }

        if self.pending_move.is_none()
            && let Some(result) = self.bot_worker.try_take_move()
        {
            self.pending_move = Some(result);
        }

        // The move is held back until the configured delay has passed, so
        // the computer never appears to answer instantly.
        let delay_elapsed = self
            .thinking_since
            .map(|since| since.elapsed() >= Duration::from_millis(self.config.ui.computer_delay_ms))
            .unwrap_or(true);

        if delay_elapsed
            && let Some(result) = self.pending_move.take()
        {
            self.move_requested = false;
            self.thinking_since = None;
            match result {
                Ok(pos) => {
                    match self.game.place_mark(Participant::Computer, pos) {
                        Ok(()) => log!("Computer marked ({}, {})", pos.row, pos.col),
                        Err(e) => log!("Computer move rejected: {}", e),
                    }
                    if self.game.is_over() {
                        self.finish_game();
                    }
                }
                Err(e) => log!("Computer failed to select a move: {}", e),
            }
        }
    }

    fn tally_line(&self) -> String {
        format!(
            "You {} : {} Computer    Ties {}",
            self.wins, self.losses, self.ties
        )
    }

    fn render_welcome(&mut self, ctx: &egui::Context) {
        let advance = ctx.input(|i| i.key_pressed(egui::Key::Space));
        let mut clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.heading(
                    egui::RichText::new("Tic Tac Toe")
                        .size(48.0)
                        .color(colors::MARKS),
                );
                ui.add_space(30.0);
                if self.blink_on() {
                    ui.label(egui::RichText::new("Click or press Space to play").size(18.0));
                }
            });
            clicked = ui
                .interact(
                    ui.max_rect(),
                    ui.id().with("welcome_screen"),
                    egui::Sense::click(),
                )
                .clicked();
        });

        if clicked || advance {
            self.start_new_game();
        }

        ctx.request_repaint();
    }

    fn render_game(&mut self, ctx: &egui::Context) {
        if self.game.current_turn() == Participant::Computer && !self.game.is_over() {
            self.drive_computer_turn();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                let status_text = match self.game.current_turn() {
                    Participant::Human => "Your turn",
                    Participant::Computer => "Computer is thinking...",
                };
                ui.label(egui::RichText::new(status_text).size(20.0));
                ui.add_space(20.0);

                let interactive =
                    self.game.current_turn() == Participant::Human && !self.game.is_over();
                if let Some(pos) =
                    self.board_ui
                        .render_board(ui, self.game.board(), interactive, None)
                {
                    self.handle_human_click(pos);
                }

                ui.add_space(20.0);
                ui.label(self.tally_line());
            });
        });

        if self.game.current_turn() == Participant::Computer && !self.game.is_over() {
            ctx.request_repaint();
        }
    }

    fn render_game_over(&mut self, ctx: &egui::Context) {
        let advance = ctx.input(|i| i.key_pressed(egui::Key::Space));
        let mut clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                let verdict = match self.game.status() {
                    GameStatus::XWon => "You won!",
                    GameStatus::OWon => "Computer won!",
                    GameStatus::Draw => "It's a tie!",
                    GameStatus::InProgress => "",
                };
                ui.heading(
                    egui::RichText::new(verdict)
                        .size(32.0)
                        .color(colors::STRIKE_OUT),
                );
                ui.add_space(10.0);

                self.board_ui
                    .render_board(ui, self.game.board(), false, self.game.winning_line());

                ui.add_space(10.0);
                ui.label(egui::RichText::new(self.tally_line()).size(18.0));

                if !self.recent_results.is_empty() {
                    ui.add_space(10.0);
                    egui::ScrollArea::vertical()
                        .id_salt("recent_results_scroll")
                        .max_height(120.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in &self.recent_results {
                                ui.label(entry);
                            }
                        });
                }

                ui.add_space(10.0);
                if self.blink_on() {
                    ui.label(
                        egui::RichText::new("Click or press Space to play again").size(18.0),
                    );
                }
            });
            clicked = ui
                .interact(
                    ui.max_rect(),
                    ui.id().with("game_over_screen"),
                    egui::Sense::click(),
                )
                .clicked();
        });

        if clicked || advance {
            self.start_new_game();
        }

        ctx.request_repaint();
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Welcome => self.render_welcome(ctx),
            Screen::Playing => self.render_game(ctx),
            Screen::GameOver => self.render_game_over(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::game::FirstPlayerMode;

    fn won_game() -> GameState {
        let mut game = GameState::new(Participant::Human);
        for (participant, row, col) in [
            (Participant::Human, 0, 0),
            (Participant::Computer, 1, 0),
            (Participant::Human, 0, 1),
            (Participant::Computer, 1, 1),
            (Participant::Human, 0, 2),
        ] {
            game.place_mark(participant, Position::new(row, col))
                .unwrap();
        }
        game
    }

    #[test]
    fn test_finish_game_updates_tallies() {
        let mut app = TicTacToeApp::new(Config::default(), SessionRng::new(1));
        app.game = won_game();

        app.finish_game();

        assert_eq!(app.wins, 1);
        assert_eq!(app.losses, 0);
        assert_eq!(app.ties, 0);
        assert_eq!(app.games_played, 1);
        assert!(matches!(app.screen, Screen::GameOver));
        assert_eq!(app.recent_results.iter().last().unwrap(), "Game 1: you won");
    }

    #[test]
    fn test_finish_game_ignores_running_game() {
        let mut app = TicTacToeApp::new(Config::default(), SessionRng::new(1));

        app.finish_game();

        assert_eq!(app.games_played, 0);
        assert!(matches!(app.screen, Screen::Welcome));
    }

    #[test]
    fn test_start_new_game_resets_round_state() {
        let mut app = TicTacToeApp::new(Config::default(), SessionRng::new(1));
        app.game = won_game();
        app.move_requested = true;
        app.pending_move = Some(Ok(Position::new(0, 0)));
        app.thinking_since = Some(Instant::now());

        app.start_new_game();

        assert!(matches!(app.screen, Screen::Playing));
        assert!(app.game.board().is_empty());
        assert!(!app.move_requested);
        assert!(app.pending_move.is_none());
        assert!(app.thinking_since.is_none());
    }

    #[test]
    fn test_configured_first_player_is_used() {
        let mut config = Config::default();
        config.game.first_player = FirstPlayerMode::Computer;
        let mut app = TicTacToeApp::new(config, SessionRng::new(1));

        app.start_new_game();

        assert_eq!(app.game.current_turn(), Participant::Computer);
    }
}

mod bot_worker;
mod colors;
mod config;
mod game_ui;
mod ui;

use clap::Parser;
use eframe::egui;
use tictactoe_engine::game::SessionRng;
use tictactoe_engine::{log, logger};

use config::Config;
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match config::get_config_manager().get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, falling back to defaults: {}", e);
            Config::default()
        }
    };

    let session_rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting Tic Tac Toe with session seed {}", session_rng.seed());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(config, session_rng)))),
    )?;

    Ok(())
}

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;
use std::time::Instant;

use tictactoe_engine::game::{Board, Mark, OpeningStyle, Position, SessionRng, calculate_move};
use tictactoe_engine::log;

pub struct MoveRequest {
    pub board: Board,
    pub bot_mark: Mark,
    pub opening: OpeningStyle,
    pub seed: u64,
}

// Move selection runs on its own thread so a search never blocks a frame.
// Each request carries a copy of the board and a seed drawn from the
// session generator.
pub struct BotWorker {
    request_tx: Sender<MoveRequest>,
    response_rx: Receiver<Result<Position, String>>,
}

impl BotWorker {
    pub fn spawn() -> Self {
        let (request_tx, request_rx) = channel::<MoveRequest>();
        let (response_tx, response_rx) = channel();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let started = Instant::now();
                let mut rng = SessionRng::new(request.seed);
                let result =
                    calculate_move(&request.board, request.bot_mark, request.opening, &mut rng);
                log!(
                    "Bot move calculated in {} ms",
                    started.elapsed().as_millis()
                );
                if response_tx.send(result).is_err() {
                    break;
                }
            }
        });

        Self {
            request_tx,
            response_rx,
        }
    }

    pub fn request_move(&self, request: MoveRequest) {
        let _ = self.request_tx.send(request);
    }

    pub fn try_take_move(&self) -> Option<Result<Position, String>> {
        match self.response_rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

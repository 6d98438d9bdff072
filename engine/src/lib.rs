mod board;
mod bot_controller;
mod game_state;
pub mod logger;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{best_move, minimax};
pub use game_state::GameState;
pub use types::{GameStatus, Mark, Position};
pub use win_detector::winner;

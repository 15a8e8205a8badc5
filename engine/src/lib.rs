pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod types;
pub mod win_detector;

pub use board::Board;
pub use bot_controller::{BotKind, calculate_move, evaluate, find_best_move, random_move};
pub use game_state::GameState;
pub use types::{DEFAULT_DIMENSION, DEFAULT_WIN_COUNT, Direction, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line};

mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{SearchResult, calculate_minimax_move, evaluate, search, select_computer_move};
pub use error::GameError;
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIDE, BOARD_SIZE, FirstPlayerMode, GameStatus, Player, Position, WinningLine};
pub use win_detector::{WINNING_LINES, check_win_with_line, is_line_win};

pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod session_rng;
pub mod types;
pub mod win_detector;

pub use board::{BOARD_CELLS, Board, LINES, empty_board, get_available_moves, is_board_full};
pub use bot_controller::{BotInput, SearchResult, calculate_minimax_move, calculate_move};
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use types::{Difficulty, GameStatus, Mark, Outcome, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};

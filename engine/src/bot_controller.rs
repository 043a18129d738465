use super::board::{Board, get_available_moves};
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::{Difficulty, Mark, Outcome};
use super::win_detector::evaluate;

/// Transient result of one search call: the best reachable score and the
/// cell that achieves it (`None` on terminal or full boards).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub cell: Option<usize>,
}

/// Snapshot handed to the bot by the caller. The caller keeps the
/// authoritative state; the bot never mutates anything it can observe.
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
        }
    }
}

/// Picks the bot's next cell according to the difficulty policy:
/// easy is uniformly random, medium flips a fair coin between random and
/// optimal on every call, unbeatable always searches. Returns `None` only
/// when the board has no empty cell.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                calculate_minimax_move(input)
            } else {
                calculate_random_move(input, rng)
            }
        }
        Difficulty::Unbeatable => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    rng.choose(&available_moves).copied()
}

/// Exhaustive adversarial search over the full game tree. 3x3 is small
/// enough that no pruning is needed.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let opponent_mark = input.bot_mark.opponent()?;
    if get_available_moves(&input.board).is_empty() {
        return None;
    }

    let mut board = input.board;
    minimax(&mut board, 0, true, input.bot_mark, opponent_mark).cell
}

/// Depth-first minimax with in-place place/undo backtracking. Every
/// placement made while descending is retracted before the next sibling is
/// tried, so the board leaves this function exactly as it entered.
fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> SearchResult {
    match evaluate(board) {
        Outcome::Win(mark) => {
            let score = if mark == bot_mark { 10 - depth } else { depth - 10 };
            return SearchResult { score, cell: None };
        }
        Outcome::Draw => return SearchResult { score: 0, cell: None },
        Outcome::Ongoing => {}
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return SearchResult { score: 0, cell: None };
    }

    let move_mark = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut best_cell = None;

    for cell in available_moves {
        board[cell] = move_mark;
        let score = minimax(board, depth + 1, !is_maximizing, bot_mark, opponent_mark).score;
        board[cell] = Mark::Empty;

        let improved = if is_maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
            best_score = score;
            best_cell = Some(cell);
        }
    }

    SearchResult {
        score: best_score,
        cell: best_cell,
    }
}

use tictactoe_engine::{GameState, GameStatus, Mark};

/// Draws the board as a 3x3 grid. Empty cells show their 1-based number,
/// winning cells are bracketed for highlight.
pub fn render_board(state: &GameState) -> String {
    let mut rows = Vec::with_capacity(3);

    for row in 0..3 {
        let mut cells = Vec::with_capacity(3);
        for col in 0..3 {
            let cell = row * 3 + col;
            cells.push(render_cell(state, cell));
        }
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

fn render_cell(state: &GameState, cell: usize) -> String {
    let mark = state.board[cell];
    if mark == Mark::Empty {
        return format!(" {} ", cell + 1);
    }

    let highlighted = state
        .winning_line
        .map(|line| line.contains(cell))
        .unwrap_or(false);

    if highlighted {
        format!("[{}]", mark)
    } else {
        format!(" {} ", mark)
    }
}

pub fn status_line(state: &GameState) -> String {
    match state.status {
        GameStatus::XWon => "Winner: X".to_string(),
        GameStatus::OWon => "Winner: O".to_string(),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => format!("Next player: {}", state.current_mark),
    }
}

pub fn score_line(score: &crate::score::Score) -> String {
    format!(
        "Score  X: {}  O: {}  Draws: {}",
        score.x_wins, score.o_wins, score.draws
    )
}

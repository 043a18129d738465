use super::types::Mark;

pub const BOARD_CELLS: usize = 9;

/// Row-major 3x3 board: index = row * 3 + col.
pub type Board = [Mark; BOARD_CELLS];

/// The 8 win triples, scanned in this fixed order: rows, then columns,
/// then diagonals. The order is load-bearing for which line gets reported
/// when a malformed board contains more than one.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

/// Indices of empty cells in ascending order.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    let mut moves = Vec::new();
    for (cell, &mark) in board.iter().enumerate() {
        if mark == Mark::Empty {
            moves.push(cell);
        }
    }
    moves
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

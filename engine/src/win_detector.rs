use super::board::{Board, LINES, is_board_full};
use super::types::{Mark, Outcome, WinningLine};

/// Returns the mark holding a completed line, if any. Lines are scanned in
/// the fixed `LINES` order and the first match wins.
pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Like `check_win`, but also reports which triple matched so the caller
/// can highlight it.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

/// Classifies a board: a completed line wins, a full board with no line is
/// a draw, anything else is still ongoing. Pure function of the input.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_win(board) {
        return Outcome::Win(mark);
    }
    if is_board_full(board) {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::empty_board;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&empty_board()), Outcome::Ongoing);
        assert_eq!(check_win(&empty_board()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in LINES {
            for mark in [X, O] {
                let mut board = empty_board();
                for cell in line {
                    board[cell] = mark;
                }
                assert_eq!(evaluate(&board), Outcome::Win(mark));
                let winning = check_win_with_line(&board).unwrap();
                assert_eq!(winning.mark, mark);
                assert_eq!(winning.cells, line);
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = [X, O, X, X, O, O, O, X, X];
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_partial_board_without_line_is_ongoing() {
        let board: Board = [X, O, E, E, X, E, E, E, O];
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board: Board = [X, X, X, O, O, X, O, X, O];
        assert_eq!(evaluate(&board), Outcome::Win(X));
    }

    #[test]
    fn test_first_matching_line_is_reported() {
        // Malformed board with a winning row and a winning diagonal for the
        // same mark: rows are scanned first.
        let board: Board = [X, X, X, O, X, O, O, O, X];
        let winning = check_win_with_line(&board).unwrap();
        assert_eq!(winning.cells, [0, 1, 2]);
    }

    #[test]
    fn test_column_win_reports_its_triple() {
        let board: Board = [O, X, E, O, X, E, O, E, X];
        let winning = check_win_with_line(&board).unwrap();
        assert_eq!(winning.mark, O);
        assert_eq!(winning.cells, [0, 3, 6]);
    }

    fn permute(board: &Board, perm: [usize; 9]) -> Board {
        let mut out = empty_board();
        for (i, &src) in perm.iter().enumerate() {
            out[i] = board[src];
        }
        out
    }

    fn rotate90(board: &Board) -> Board {
        permute(board, [6, 3, 0, 7, 4, 1, 8, 5, 2])
    }

    fn mirror(board: &Board) -> Board {
        permute(board, [2, 1, 0, 5, 4, 3, 8, 7, 6])
    }

    #[test]
    fn test_evaluate_is_symmetry_invariant() {
        let boards: [Board; 5] = [
            [X, X, X, O, O, E, E, E, E],
            [X, O, X, X, O, O, O, X, X],
            [X, O, E, E, X, E, E, E, O],
            [O, E, E, O, X, E, O, X, X],
            empty_board(),
        ];

        for board in boards {
            let expected = evaluate(&board);
            for flip in [false, true] {
                let mut oriented = if flip { mirror(&board) } else { board };
                for _ in 0..4 {
                    assert_eq!(evaluate(&oriented), expected);
                    oriented = rotate90(&oriented);
                }
            }
        }
    }
}

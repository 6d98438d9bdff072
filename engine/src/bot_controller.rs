use super::board::{BOARD_SIZE, Board};
use super::types::{Mark, Position};
use super::win_detector::winner;

/// Exhaustive game-tree value of the position: 1 if X forces a win,
/// -1 if O does, 0 for a draw. The winner check runs before the
/// full-board check so a board whose last move completed a line is a
/// win, not a draw. `depth` tracks recursion for callers but does not
/// influence the value, so a slow win scores the same as a fast one.
pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    let line_owner = winner(board);
    if line_owner == Mark::X {
        return 1;
    }
    if line_owner == Mark::O {
        return -1;
    }
    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if board.is_empty_cell(row, col) {
                    board.set(row, col, Mark::X);
                    let score = minimax(board, depth + 1, false);
                    board.set(row, col, Mark::Empty);
                    best_score = best_score.max(score);
                }
            }
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if board.is_empty_cell(row, col) {
                    board.set(row, col, Mark::O);
                    let score = minimax(board, depth + 1, true);
                    board.set(row, col, Mark::Empty);
                    best_score = best_score.min(score);
                }
            }
        }
        best_score
    }
}

/// Picks X's move: an immediately winning cell if one exists, else a
/// cell that blocks an immediate O win, else the minimax-best cell.
/// All scans run in row-major order and ties keep the first candidate.
/// Returns `None` when the board has no empty cell. The board is left
/// exactly as it was; applying the move is the caller's job.
pub fn best_move(board: &mut Board) -> Option<Position> {
    if let Some(pos) = find_winning_move(board, Mark::X) {
        return Some(pos);
    }

    // Taking the cell O needs denies the line; the move is still X's.
    if let Some(pos) = find_winning_move(board, Mark::O) {
        return Some(pos);
    }

    let mut best_score = i32::MIN;
    let mut best = None;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.is_empty_cell(row, col) {
                board.set(row, col, Mark::X);
                let score = minimax(board, 0, false);
                board.set(row, col, Mark::Empty);

                if score > best_score {
                    best_score = score;
                    best = Some(Position::new(row, col));
                }
            }
        }
    }

    best
}

fn find_winning_move(board: &mut Board, mark: Mark) -> Option<Position> {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.is_empty_cell(row, col) {
                board.set(row, col, mark);
                let won = winner(board) == mark;
                board.set(row, col, Mark::Empty);

                if won {
                    return Some(Position::new(row, col));
                }
            }
        }
    }
    None
}

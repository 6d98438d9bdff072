use super::board::{BOARD_SIZE, Board};
use super::types::Mark;

const LINE_SUM: i8 = BOARD_SIZE as i8;

/// Returns the owner of the first completed line, scanning rows 0..2,
/// then columns 0..2, then the main diagonal, then the anti-diagonal.
/// `Mark::Empty` means no line is complete.
pub fn winner(board: &Board) -> Mark {
    for row in 0..BOARD_SIZE {
        let sum: i8 = (0..BOARD_SIZE).map(|col| board.get(row, col).value()).sum();
        if sum.abs() == LINE_SUM {
            return board.get(row, 0);
        }
    }

    for col in 0..BOARD_SIZE {
        let sum: i8 = (0..BOARD_SIZE).map(|row| board.get(row, col).value()).sum();
        if sum.abs() == LINE_SUM {
            return board.get(0, col);
        }
    }

    let main_diagonal: i8 = (0..BOARD_SIZE).map(|i| board.get(i, i).value()).sum();
    if main_diagonal.abs() == LINE_SUM {
        return board.get(1, 1);
    }

    let anti_diagonal: i8 = (0..BOARD_SIZE)
        .map(|i| board.get(i, BOARD_SIZE - 1 - i).value())
        .sum();
    if anti_diagonal.abs() == LINE_SUM {
        return board.get(1, 1);
    }

    Mark::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winner(&Board::new()), Mark::Empty);
    }

    #[test]
    fn test_board_without_complete_line_has_no_winner() {
        let board = Board::from_rows([[X, O, X], [O, X, E], [E, E, O]]);
        assert_eq!(winner(&board), Mark::Empty);
    }

    #[test]
    fn test_detects_win_in_every_row() {
        for row in 0..BOARD_SIZE {
            let mut board = Board::new();
            for col in 0..BOARD_SIZE {
                board.set(row, col, Mark::X);
            }
            assert_eq!(winner(&board), Mark::X, "row {row}");
        }
    }

    #[test]
    fn test_detects_win_in_every_column() {
        for col in 0..BOARD_SIZE {
            let mut board = Board::new();
            for row in 0..BOARD_SIZE {
                board.set(row, col, Mark::O);
            }
            assert_eq!(winner(&board), Mark::O, "column {col}");
        }
    }

    #[test]
    fn test_detects_main_diagonal_win() {
        let board = Board::from_rows([[X, E, O], [E, X, O], [E, E, X]]);
        assert_eq!(winner(&board), Mark::X);
    }

    #[test]
    fn test_detects_anti_diagonal_win() {
        let board = Board::from_rows([[X, E, O], [X, O, E], [O, E, X]]);
        assert_eq!(winner(&board), Mark::O);
    }

    #[test]
    fn test_mixed_line_does_not_count() {
        // Two X and one O in a row must not register as anyone's line.
        let board = Board::from_rows([[X, X, O], [E, E, E], [E, E, E]]);
        assert_eq!(winner(&board), Mark::Empty);
    }

    #[test]
    fn test_full_board_with_line_still_reports_the_winner() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(board.is_full());
        assert_eq!(winner(&board), Mark::X);
    }

    // The two tests below poke boards that are unreachable under
    // alternating play. They document the current scan order rather
    // than promise it: two parallel complete lines resolve to the
    // earlier one in the scan.

    #[test]
    fn test_earlier_row_shadows_later_row_on_illegal_board() {
        let board = Board::from_rows([[X, X, X], [E, E, E], [O, O, O]]);
        assert_eq!(winner(&board), Mark::X);
    }

    #[test]
    fn test_earlier_column_shadows_later_column_on_illegal_board() {
        let board = Board::from_rows([[O, E, X], [O, E, X], [O, E, X]]);
        assert_eq!(winner(&board), Mark::O);
    }
}

use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, Position};
use super::win_detector::winner;

/// One game session. X is the computer and always moves first.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub last_move: Option<Position>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            last_move: None,
        }
    }

    /// Derived from the board on every call. The winner check runs
    /// before the full-board check, so a final move that both fills
    /// the board and completes a line reports a win, not a draw.
    pub fn status(&self) -> GameStatus {
        match winner(&self.board) {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => {
                if self.board.is_full() {
                    GameStatus::Draw
                } else {
                    GameStatus::InProgress
                }
            }
        }
    }

    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), String> {
        if self.status() != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_empty_cell(row, col) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(row, col, self.current_mark);
        self.last_move = Some(Position::new(row, col));
        self.switch_turn();

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

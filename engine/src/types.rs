#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Sign encoding: X (the computer) counts +1, O (the human) counts -1.
    /// A line whose values sum to +-3 is owned by a single side.
    pub fn value(self) -> i8 {
        match self {
            Mark::Empty => 0,
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

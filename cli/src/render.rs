use tictactoe_engine::{BOARD_SIZE, Board, Mark};

const ROW_DIVIDER: &str = "---------";

pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        let cells: Vec<&str> = (0..BOARD_SIZE)
            .map(|col| match board.get(row, col) {
                Mark::X => "X",
                Mark::O => "O",
                Mark::Empty => " ",
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
        out.push_str(ROW_DIVIDER);
        out.push('\n');
    }
    out
}

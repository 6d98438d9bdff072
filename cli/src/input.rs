use tictactoe_engine::Position;

/// Parses "row col" as two integers in [0, 2]. Occupancy is not
/// checked here; the session rejects taken cells.
pub fn parse_move(line: &str) -> Result<Position, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(
            "Invalid move. Enter row and column as two numbers between 0 and 2.".to_string(),
        );
    }

    let row: i32 = tokens[0].parse().map_err(|_| {
        "Invalid move. Enter row and column as two numbers between 0 and 2.".to_string()
    })?;
    let col: i32 = tokens[1].parse().map_err(|_| {
        "Invalid move. Enter row and column as two numbers between 0 and 2.".to_string()
    })?;

    if !(0..=2).contains(&row) || !(0..=2).contains(&col) {
        return Err("Row and column must be between 0 and 2. Please try again.".to_string());
    }

    Ok(Position::new(row as usize, col as usize))
}

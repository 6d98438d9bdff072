mod input;
mod render;

use std::io::{self, Write};

use clap::Parser;
use tictactoe_engine::{GameState, GameStatus, Position, best_move, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    println!("Welcome to Tic Tac Toe!");
    println!("You are 'O' and the computer is 'X'.");
    println!("Enter your move as two numbers separated by a space (row and column) between 0 and 2.");

    run_game()
}

fn run_game() -> Result<(), Box<dyn std::error::Error>> {
    let mut state = GameState::new();

    // X opens unconditionally. No shortcut applies on an empty board,
    // so the search settles on the first cell of the best-value class.
    if let Some(pos) = best_move(&mut state.board) {
        state.place_mark(pos.row, pos.col)?;
        log!("Computer opens at ({}, {})", pos.row, pos.col);
    }

    loop {
        print!("{}", render::format_board(&state.board));

        if state.status() == GameStatus::Draw {
            println!("It's a draw!");
            break;
        }

        let pos = read_human_move(&state)?;
        state.place_mark(pos.row, pos.col)?;

        if state.status() == GameStatus::OWon {
            print!("{}", render::format_board(&state.board));
            println!("You (O) win!");
            break;
        }

        if let Some(pos) = best_move(&mut state.board) {
            state.place_mark(pos.row, pos.col)?;
            log!("Computer plays at ({}, {})", pos.row, pos.col);

            if state.status() == GameStatus::XWon {
                print!("{}", render::format_board(&state.board));
                println!("Computer (X) wins!");
                break;
            }
        }
    }

    Ok(())
}

fn read_human_move(state: &GameState) -> io::Result<Position> {
    loop {
        print!("Enter your move (row col): ");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before the game finished",
            ));
        }

        match input::parse_move(&line) {
            Ok(pos) => {
                if state.board.is_empty_cell(pos.row, pos.col) {
                    return Ok(pos);
                }
                println!("Cell already occupied. Try again.");
            }
            Err(message) => println!("{}", message),
        }
    }
}

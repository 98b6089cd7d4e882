//! Console front-end for the rules core.
//!
//! Thin I/O glue: prints the board, reads algebraic-notation square
//! pairs, prompts for promotion choices, and drives the turn loop
//! against a second human or the engine. All rules decisions go through
//! the core's public operations.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use chess_rules::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two humans at one console.
    Players,
    /// White at the console, the engine playing black.
    Bot,
}

#[derive(Parser, Debug)]
#[command(name = "play", about = "Console chess against a friend or the engine")]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Bot)]
    mode: Mode,

    /// Search depth in plies for the engine.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=6))]
    depth: u32,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut session = GameSession::new();
    println!("{}", session.render());

    loop {
        let mover = session.turn();
        println!("{mover} player's turn.");

        let Some(mv) = read_player_move(&mut input, &session)? else {
            return Ok(()); // EOF
        };
        if session.apply(&mv) == MoveStatus::LeavesInCheck {
            println!("You are still in check, please save the king!");
            continue;
        }
        let opponent = mover.opponent();
        if session.is_in_checkmate(opponent) {
            println!("{}", session.render());
            println!("{mover} player wins!");
            return Ok(());
        }
        if session.is_in_check(opponent) {
            println!("{opponent} player is in check, please save the king!");
        }

        if args.mode == Mode::Bot && session.turn() == Color::Black {
            let report = find_best_move(&session, Color::Black, args.depth);
            let Some(reply) = report.best_move else {
                println!("The engine has no move left. White wins!");
                return Ok(());
            };
            println!(
                "Engine plays {reply} ({} nodes in {:?}).",
                report.nodes, report.elapsed
            );
            session.apply(&reply);
            if session.is_in_checkmate(Color::White) {
                println!("{}", session.render());
                println!("Black player wins!");
                return Ok(());
            }
            if session.is_in_check(Color::White) {
                println!("White player is in check, please save the king!");
            }
        }

        println!("{}", session.render());
    }
}

/// Prompt until the player names a legal move; `None` means EOF.
fn read_player_move(
    input: &mut impl BufRead,
    session: &GameSession,
) -> io::Result<Option<Move>> {
    'select: loop {
        let Some(from) = prompt_square(input, "Select the figure: ")? else {
            return Ok(None);
        };
        match session.board().figure_at(from) {
            None => {
                println!("Empty square, please select a square with a figure!");
                continue;
            }
            Some(figure) if figure.color != session.turn() => {
                println!("It's not your figure, please repeat!");
                continue;
            }
            Some(_) => {}
        }
        loop {
            print!("Select destination square (input '0' to select another figure): ");
            io::stdout().flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(None);
            };
            if line == "0" {
                continue 'select;
            }
            let to = match coordinate_from_notation(&line) {
                Ok(to) => to,
                Err(_) => {
                    println!("Wrong input, please repeat!");
                    continue;
                }
            };
            match session.select_move(from, to) {
                Ok(mv) if mv.is_promotion() => {
                    let Some(kind) = prompt_promotion(input)? else {
                        return Ok(None);
                    };
                    return Ok(Some(mv.with_promotion(kind)));
                }
                Ok(mv) => return Ok(Some(mv)),
                Err(_) => println!("Wrong destination square, please repeat!"),
            }
        }
    }
}

fn prompt_square(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<Coordinate>> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match coordinate_from_notation(&line) {
            Ok(coordinate) => return Ok(Some(coordinate)),
            Err(_) => println!("Wrong input, please repeat!"),
        }
    }
}

fn prompt_promotion(input: &mut impl BufRead) -> io::Result<Option<FigureKind>> {
    println!("Select the figure for pawn promotion:");
    loop {
        print!("(Q)ueen, k(N)ight, (R)ook, (B)ishop: ");
        io::stdout().flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.as_str() {
            "Q" | "q" => return Ok(Some(FigureKind::Queen)),
            "N" | "n" => return Ok(Some(FigureKind::Knight)),
            "R" | "r" => return Ok(Some(FigureKind::Rook)),
            "B" | "b" => return Ok(Some(FigureKind::Bishop)),
            _ => println!("Wrong input, please repeat!"),
        }
    }
}

/// One trimmed line of input; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

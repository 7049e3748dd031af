//! Play command - interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    board::{Coord, Player},
    engine::Engine,
    error::Error,
    session::Session,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Mark the human plays ('X' moves first)
    #[arg(long = "as", default_value = "X")]
    pub seat: Player,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let engine = Engine::initialize();
    let mut session = Session::new(&engine, args.seat);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        play_one_game(&mut session, &mut input)?;
        println!("{}", session.outcome()?);

        if !prompt_yes_no(&mut input, "Play again? [y/N] ")? {
            break;
        }
        session.reset();
    }

    Ok(())
}

fn play_one_game(session: &mut Session<'_>, input: &mut impl BufRead) -> Result<()> {
    println!("You play {}. Enter moves as 'row col' (0-2).", session.human());

    while !session.is_over() {
        if session.current().next_player == session.computer() {
            let coord = session.computer_move()?;
            println!("Computer plays {coord}");
            continue;
        }

        println!("\n{}", session.current().board);
        let Some(coord) = read_coord(input)? else {
            anyhow::bail!("input closed before the game finished");
        };

        match session.human_move(coord) {
            Ok(_) => {}
            Err(Error::NoSuchMove { coord }) => {
                println!("Cell {coord} is not available, try again.");
            }
            Err(other) => return Err(other.into()),
        }
    }

    println!("\n{}", session.current().board);
    Ok(())
}

/// Read a "row col" pair; `None` on end of input
fn read_coord(input: &mut impl BufRead) -> Result<Option<Coord>> {
    loop {
        print!("move> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_coord(&line) {
            Some(coord) => return Ok(Some(coord)),
            None => println!("Expected two numbers in 0-2, e.g. '1 1'."),
        }
    }
}

fn parse_coord(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let coord = Coord::new(row, col);
    coord.in_bounds().then_some(coord)
}

fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

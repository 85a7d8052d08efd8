use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::ProgressBar;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};
use std::time::Instant;

use magnetic_cave::board::{Move, Player};
use magnetic_cave::rules::GameState;
use magnetic_cave::solver::Solver;

mod cli;
use cli::*;

mod game;
use game::*;

fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer.trim().to_string())
}

fn choose_mode() -> Result<Mode> {
    loop {
        println!("Select play mode:");
        println!("1. Manual vs. Manual");
        println!("2. Manual vs. Computer");
        println!("3. Computer vs. Manual");
        println!("4. Exit");
        let answer = prompt("Enter the mode number: ")?;
        match answer.parse::<u8>().ok().and_then(Mode::from_number) {
            Some(mode) => return Ok(mode),
            None => println!("Invalid mode number. Try again."),
        }
    }
}

fn choose_depth() -> Result<usize> {
    loop {
        let answer = prompt("Enter the depth of the search for the computer: ")?;
        match answer.parse::<usize>() {
            Ok(depth) => return Ok(depth),
            Err(_) => println!("Invalid depth: {}, expected a whole number", answer),
        }
    }
}

fn computer_move(game: &Game, depth: usize) -> Result<Move> {
    println!("{}'s turn", game.to_move);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Computer is thinking...");
    spinner.enable_steady_tick(100);

    let start = Instant::now();
    let mut solver = Solver::new(game.board);
    let (_score, best_move) = solver.find_best_move(game.to_move, depth);
    let elapsed = start.elapsed();

    spinner.finish_and_clear();
    println!(
        "computer move found in {:.3} seconds",
        elapsed.as_secs_f64()
    );

    match best_move {
        Some(next) => Ok(next),
        // a depth of 0 searches nothing
        None => {
            warn!(depth, "search returned no move, playing the first legal move");
            game.board
                .legal_moves()
                .into_iter()
                .next()
                .ok_or_else(|| anyhow!("no legal moves left"))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut game = Game::new();

    println!("Welcome to Magnetic Cave!\n");
    game.display()?;

    let mode = match cli.mode.and_then(Mode::from_number) {
        Some(mode) => mode,
        None => choose_mode()?,
    };
    let computer = match mode {
        Mode::Exit => return Ok(()),
        Mode::ManualVsManual => None,
        Mode::ManualVsComputer => Some(Player::PlayerTwo),
        Mode::ComputerVsManual => Some(Player::PlayerOne),
    };
    let depth = match (mode.uses_computer(), cli.depth) {
        (false, _) => 0,
        (true, Some(depth)) => depth,
        (true, None) => choose_depth()?,
    };
    info!(?mode, depth, "starting game");

    // game loop
    loop {
        match game.state {
            GameState::Playing => {
                let next_move = if computer == Some(game.to_move) {
                    let next = computer_move(&game, depth)?;
                    println!("Computer played: {}", next);
                    next
                // human player
                } else {
                    println!("{}'s turn!", game.to_move);
                    let input = prompt("Enter your move (row and column): ")?;
                    match input.parse::<Move>() {
                        Err(err) => {
                            println!("{}", err);
                            continue;
                        }
                        Ok(next) => next,
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
                game.display()?;
            }

            // end states
            GameState::PlayerOneWin | GameState::PlayerTwoWin => {
                let winner = if game.state == GameState::PlayerOneWin {
                    Player::PlayerOne
                } else {
                    Player::PlayerTwo
                };
                match computer {
                    Some(player) if player == winner => println!("Computer wins!"),
                    Some(_) => println!("You win!"),
                    None => println!("{} wins!", winner),
                }
                break;
            }
            GameState::Draw => {
                println!("It's a tie!");
                break;
            }
        }
    }
    Ok(())
}

//! An engine for playing the board game 'Magnetic Cave'
//!
//! Magnetic Cave is a five-in-a-row game on an 8x8 board where a tile may only
//! be placed against one of the side walls or horizontally next to another tile.
//! The computer player uses a depth-limited minimax search with alpha-beta pruning.
//!
//! # Basic Usage
//!
//! ```
//! use magnetic_cave::{board::{Board, Player}, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut solver = Solver::new(Board::from_moves("1a1h")?);
//! let (_score, best_move) = solver.find_best_move(Player::PlayerOne, 2);
//!
//! assert!(best_move.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod rules;

pub mod evaluator;

pub mod solver;


/// The width and height of the game board in tiles
pub const BOARD_SIZE: usize = 8;

/// The number of tiles in a line needed to win
pub const WINNING_LENGTH: usize = 5;

// a winning line has to fit on the board, and moves are written as a single digit and letter
const_assert!(WINNING_LENGTH <= BOARD_SIZE);
const_assert!(BOARD_SIZE <= 9);

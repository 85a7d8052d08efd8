//! Static position scoring for the search
//!
//! Scores are from player one's point of view: positive scores favour player one,
//! negative scores favour player two.

use crate::board::{Board, Cell};
use crate::rules::{step, DIRECTIONS};
use crate::{BOARD_SIZE, WINNING_LENGTH};

/// Base score of a window holding 0, 1, 2, 3 or 4 tiles of a single player
const RUN_SCORES: [i32; 5] = [0, 1, 10, 100, 1000];

fn run_score(count: usize) -> i32 {
    // a complete line scores the same as four in a row
    RUN_SCORES[count.min(RUN_SCORES.len() - 1)]
}

/// Scores a single window from the number of player one (`ones`) and player two (`twos`) tiles in it
///
/// Windows with both players' tiles are dead and score nothing. Player one's windows
/// are weighted double, and ten times more again when one tile short of a win.
pub fn score_window(ones: usize, twos: usize) -> i32 {
    let mut score = match (ones, twos) {
        (0, twos) => -run_score(twos),
        (ones, 0) => run_score(ones),
        _ => return 0,
    };
    if ones > 0 {
        score *= 2;
    }
    if ones == WINNING_LENGTH - 1 && twos == 0 {
        score *= 10;
    }
    score
}

/// Counts the tiles of each player in the window starting at `(row, col)`,
/// or `None` if the window runs off the board
fn count_window(board: &Board, row: usize, col: usize, direction: (isize, isize)) -> Option<(usize, usize)> {
    let (mut ones, mut twos) = (0, 0);
    let mut position = (row, col);
    for i in 0..WINNING_LENGTH {
        if i > 0 {
            position = step(position.0, position.1, direction)?;
        }
        match board.cell(position.0, position.1) {
            Cell::PlayerOne => ones += 1,
            Cell::PlayerTwo => twos += 1,
            Cell::Empty => {}
        }
    }
    Some((ones, twos))
}

/// Sums the score of every window of `WINNING_LENGTH` cells on the board
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for &direction in DIRECTIONS.iter() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some((ones, twos)) = count_window(board, row, col, direction) {
                    score += score_window(ones, twos);
                }
            }
        }
    }
    score
}

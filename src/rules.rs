//! Win and draw detection

use crate::board::{Board, Cell, Player};
use crate::{BOARD_SIZE, WINNING_LENGTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// Row and column steps of the four line directions: horizontal, vertical,
/// diagonal going down-right and diagonal going down-left
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The first cell of every complete line of the board in the given direction
fn line_starts((dr, dc): (isize, isize)) -> Vec<(usize, usize)> {
    let last = BOARD_SIZE - 1;
    let mut starts = Vec::new();
    // lines leaving the top edge
    if dr != 0 {
        starts.extend((0..BOARD_SIZE).map(|col| (0, col)));
    }
    // lines leaving a side edge, skipping the corner already covered above
    match dc {
        1 => starts.extend((dr as usize..BOARD_SIZE).map(|row| (row, 0))),
        -1 => starts.extend((1..BOARD_SIZE).map(|row| (row, last))),
        _ => {}
    }
    starts
}

/// Steps from `(row, col)` in a direction, or `None` when leaving the board
pub(crate) fn step(row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
    let row = row as isize + dr;
    let col = col as isize + dc;
    if row < 0 || col < 0 || row >= BOARD_SIZE as isize || col >= BOARD_SIZE as isize {
        None
    } else {
        Some((row as usize, col as usize))
    }
}

impl Board {
    /// Checks for a run of at least `WINNING_LENGTH` tiles in any direction
    pub fn has_won(&self, player: Player) -> bool {
        let target = Cell::from(player);
        for &direction in DIRECTIONS.iter() {
            for (row, col) in line_starts(direction) {
                let mut run = 0;
                let mut position = Some((row, col));
                while let Some((row, col)) = position {
                    if self.cell(row, col) == target {
                        run += 1;
                        if run == WINNING_LENGTH {
                            return true;
                        }
                    } else {
                        run = 0;
                    }
                    position = step(row, col, direction);
                }
            }
        }
        false
    }

    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::PlayerOne) || self.has_won(Player::PlayerTwo) || self.is_full()
    }

    pub fn state(&self) -> GameState {
        if self.has_won(Player::PlayerOne) {
            GameState::PlayerOneWin
        } else if self.has_won(Player::PlayerTwo) {
            GameState::PlayerTwoWin
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }
}

use anyhow::{anyhow, bail, Result};

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::BOARD_SIZE;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// The character used to draw this player's tiles
    pub fn symbol(self) -> char {
        match self {
            Player::PlayerOne => '■',
            Player::PlayerTwo => '□',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::PlayerOne => Player::PlayerOne.symbol(),
            Cell::PlayerTwo => Player::PlayerTwo.symbol(),
            Cell::Empty => '_',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// A board coordinate, 0-indexed from the top left corner
///
/// Written as a 1-indexed row digit followed by a column letter, so `1a` is
/// the top left corner and `8h` the bottom right
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(row), Some(col), None) if row.is_ascii_digit() && col.is_ascii_alphabetic() => {
                let row = row.to_digit(10).unwrap_or(0) as usize;
                let col = (col.to_ascii_lowercase() as u8 - b'a') as usize;
                if row < 1 || row > BOARD_SIZE || col >= BOARD_SIZE {
                    bail!(
                        "Invalid move, {} is off the board. Rows are 1 to {} and columns a to {}",
                        s,
                        BOARD_SIZE,
                        (b'a' + BOARD_SIZE as u8 - 1) as char
                    );
                }
                Ok(Self::new(row - 1, col))
            }
            _ => Err(anyhow!(
                "could not parse '{}' as a move, expected a row number and a column letter like '4a'",
                s
            )),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row + 1, (b'a' + self.col as u8) as char)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; BOARD_SIZE * BOARD_SIZE], // cells are stored left-to-right, top-to-bottom
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Builds a board from a string of alternating moves, starting with player one
    ///
    /// e.g. `"1a1h2a"` places player one tiles at 1a and 2a, and a player two tile at 1h
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::PlayerOne;

        let chars: Vec<char> = moves.as_ref().chars().collect();
        for pair in chars.chunks(2) {
            let text: String = pair.iter().collect();
            let next: Move = text.parse()?;
            // abort if the position is won at any point
            if board.is_terminal() {
                bail!("Invalid position, game is over before {}", next);
            }
            if !board.is_legal_move(next.row, next.col) {
                bail!("Invalid move, {} can not be played", next);
            }
            board.place(next.row, next.col, player);
            player = player.opponent();
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * BOARD_SIZE + col]
    }

    /// Iterates over the rows of the board from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }

    pub fn is_vacant(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE && self.cell(row, col).is_empty()
    }

    /// A tile can only be placed against a side wall, or directly left or right of another tile
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        if !self.is_vacant(row, col) {
            return false;
        }
        let left_supported = col == 0 || !self.cell(row, col - 1).is_empty();
        let right_supported = col == BOARD_SIZE - 1 || !self.cell(row, col + 1).is_empty();
        left_supported || right_supported
    }

    /// Writes a tile without any legality check
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row * BOARD_SIZE + col] = player.into();
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row * BOARD_SIZE + col] = Cell::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Every legal move in row-major order
    ///
    /// The search tries moves in this order and keeps the first of several equally scored moves.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_legal_move(row, col) {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Places a tile that is removed again when the returned guard is dropped
    pub fn speculate(&mut self, next: Move, player: Player) -> Speculation<'_> {
        self.place(next.row, next.col, player);
        Speculation { board: self, next }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A board with one speculative tile on it, see [`Board::speculate`]
pub struct Speculation<'a> {
    board: &'a mut Board,
    next: Move,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.next.row, self.next.col);
    }
}

use anyhow::{bail, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use magnetic_cave::board::{Board, Cell, Move, Player};
use magnetic_cave::rules::GameState;
use magnetic_cave::BOARD_SIZE;

/// A game in progress, tracking whose turn it is
#[derive(Clone)]
pub struct Game {
    pub board: Board,
    pub to_move: Player,
    pub state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::PlayerOne,
            state: GameState::Playing,
        }
    }

    /// Plays a move for the current player after checking it is legal
    pub fn play_checked(&mut self, next: Move) -> Result<GameState> {
        if self.state != GameState::Playing {
            bail!("Invalid move, the game is over");
        }
        if !self.board.is_legal_move(next.row, next.col) {
            bail!(
                "Invalid move, {} must be empty and next to a wall or another tile",
                next
            );
        }
        self.board.place(next.row, next.col, self.to_move);
        self.to_move = self.to_move.opponent();
        self.state = self.board.state();

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let letters: String = (0..BOARD_SIZE)
            .map(|col| format!(" {}", (b'a' + col as u8) as char))
            .collect();
        let header = format!(" {}\n", letters);

        stdout.queue(PrintStyledContent(
            style(header.clone()).attribute(Attribute::Bold),
        ))?;
        for (idx, row) in self.board.rows().enumerate() {
            stdout.queue(PrintStyledContent(
                style(format!("{} ", idx + 1)).attribute(Attribute::Bold),
            ))?;
            for cell in row {
                stdout.queue(PrintStyledContent(
                    style(format!("{} ", cell.symbol())).with(match cell {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkGrey,
                    }),
                ))?;
            }
            stdout.queue(PrintStyledContent(
                style(format!("{}\n", idx + 1)).attribute(Attribute::Bold),
            ))?;
        }
        stdout.queue(PrintStyledContent(style(header).attribute(Attribute::Bold)))?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_alternate() -> Result<()> {
        let mut game = Game::new();
        game.play_checked("1a".parse()?)?;
        assert_eq!(game.to_move, Player::PlayerTwo);
        assert_eq!(game.board.cell(0, 0), Cell::PlayerOne);

        // illegal moves leave the turn unchanged
        assert!(game.play_checked("1a".parse()?).is_err());
        assert!(game.play_checked("3d".parse()?).is_err());
        assert_eq!(game.to_move, Player::PlayerTwo);
        Ok(())
    }

    #[test]
    fn game_ends_on_a_win() -> Result<()> {
        let mut game = Game::new();
        for text in ["1a", "8a", "1b", "8b", "1c", "8c", "1d", "8d"].iter() {
            assert_eq!(game.play_checked(text.parse()?)?, GameState::Playing);
        }
        assert_eq!(game.play_checked("1e".parse()?)?, GameState::PlayerOneWin);
        assert!(game.play_checked("8e".parse()?).is_err());
        Ok(())
    }
}

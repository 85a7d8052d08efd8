//! A minimax agent for the game of Magnetic Cave

use tracing::{debug, warn};

use crate::board::{Board, Move, Player};
use crate::evaluator::evaluate;

/// A score beyond anything the evaluator can produce
pub const INFINITY: i32 = i32::MAX;

/// An agent to choose moves in Magnetic Cave positions
///
/// # Notes
/// This agent uses a depth-limited minimax search with alpha-beta pruning. Player one
/// maximises the [evaluation] of the position and player two minimises it. Moves are
/// searched in row-major order and the first of several equally scored moves is kept,
/// so the same position and depth always give the same move.
///
/// Speculative moves are played directly on the solver's board and taken back before
/// the next sibling is searched, so the board is unchanged after every search.
///
/// [evaluation]: crate::evaluator::evaluate
#[derive(Clone)]
pub struct Solver {
    board: Board,

    /// The number of nodes searched by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` for a board
    pub fn new(board: Board) -> Self {
        Self {
            board,
            node_count: 0,
        }
    }

    /// Searches `depth` moves ahead with `player` to move
    ///
    /// Returns the minimax score of the position and the best move, or `None` when
    /// `depth` is 0 or the position is already over
    pub fn find_best_move(&mut self, player: Player, depth: usize) -> (i32, Option<Move>) {
        self.node_count = 0;
        let (score, best_move) = alpha_beta(
            &mut self.board,
            player,
            depth,
            -INFINITY,
            INFINITY,
            &mut self.node_count,
        );
        debug!(
            ?player,
            depth,
            score,
            best_move = %best_move.map(|m| m.to_string()).unwrap_or_else(|| "none".into()),
            nodes = self.node_count,
            "search finished"
        );
        (score, best_move)
    }

    /// Searches `depth` moves ahead with `player` to move, returning only the minimax score
    pub fn minimax(&mut self, player: Player, depth: usize) -> i32 {
        self.find_best_move(player, depth).0
    }
}

impl std::ops::Deref for Solver {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

/// Performs game tree search
///
/// Returns the score of the position and the best move for `player`
fn alpha_beta(
    board: &mut Board,
    player: Player,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    node_count: &mut usize,
) -> (i32, Option<Move>) {
    *node_count += 1;

    if depth == 0 || board.is_terminal() {
        return (evaluate(board), None);
    }

    let moves = board.legal_moves();
    // a non-full board always has a legal move at the left end of a gap
    if moves.is_empty() {
        warn!(?player, depth, "no legal moves in an unfinished position");
        return (evaluate(board), None);
    }

    let mut best_score = match player {
        Player::PlayerOne => -INFINITY,
        Player::PlayerTwo => INFINITY,
    };
    let mut best_move = None;

    for next in moves {
        let score = {
            let mut speculation = board.speculate(next, player);
            alpha_beta(
                &mut speculation,
                player.opponent(),
                depth - 1,
                alpha,
                beta,
                node_count,
            )
            .0
        };

        match player {
            Player::PlayerOne => {
                if score > best_score {
                    best_score = score;
                    best_move = Some(next);
                    alpha = alpha.max(best_score);
                }
            }
            Player::PlayerTwo => {
                if score < best_score {
                    best_score = score;
                    best_move = Some(next);
                    beta = beta.min(best_score);
                }
            }
        }

        // the opponent will never allow this position, skip the remaining moves
        if beta <= alpha {
            break;
        }
    }

    (best_score, best_move)
}

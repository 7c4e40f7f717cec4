//! Legality, check and checkmate.
//!
//! This module provides the [`RuleSet`] trait, the seam between a caller
//! holding the board and turn and the rules that judge its moves, and the
//! crate-level free functions that evaluate with the default
//! [`StandardChess`] configuration.

mod standard;

pub use standard::StandardChess;

use crate::{Bitboard, Board};
use chess_core::{Color, Move, Piece, Square};

/// Result of a finished game.
///
/// Only checkmate ends a game; draws are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black is checkmated.
    WhiteWins,
    /// White is checkmated.
    BlackWins,
}

impl GameResult {
    /// The result in which `winner` has checkmated the other side.
    pub const fn win_for(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Returns the winning color.
    pub const fn winner(self) -> Color {
        match self {
            GameResult::WhiteWins => Color::White,
            GameResult::BlackWins => Color::Black,
        }
    }
}

/// The rules a game is played under.
///
/// Implementations are stateless: the board and the side to move are passed
/// into every call, and nothing is remembered between calls.
///
/// # Example
///
/// ```
/// use chess_rules::{RuleSet, StandardChess};
/// use chess_core::{Color, Square};
///
/// let rules = StandardChess::new();
/// let board = rules.initial_board();
/// let e2 = Square::from_algebraic("e2").unwrap();
/// let e4 = Square::from_algebraic("e4").unwrap();
/// assert!(rules.is_legal_move(&board, e2, e4, Color::White));
/// assert!(!rules.is_legal_move(&board, e2, e4, Color::Black));
/// ```
pub trait RuleSet {
    /// Returns the starting board.
    fn initial_board(&self) -> Board;

    /// Returns the pseudo-legal destinations of the piece on `from`.
    fn destinations(&self, board: &Board, from: Square) -> Bitboard;

    /// Returns true if any piece of the side opposing `defending` can reach
    /// `king_square`.
    fn is_in_check(&self, board: &Board, king_square: Square, defending: Color) -> bool;

    /// Returns true if `turn` may move the piece on `from` to `to`.
    fn is_legal_move(&self, board: &Board, from: Square, to: Square, turn: Color) -> bool;

    /// Returns true if `turn` is in check and has no legal move.
    fn is_checkmate(&self, board: &Board, turn: Color) -> bool;

    /// Moves the piece on `from` to `to`, returning any captured piece.
    ///
    /// Does not check legality; use [`is_legal_move`](RuleSet::is_legal_move)
    /// first, or [`try_apply`](RuleSet::try_apply).
    fn apply(&self, board: &mut Board, from: Square, to: Square) -> Option<Piece> {
        board.apply(from, to)
    }

    /// Returns the board after `m`, or `None` if `m` is illegal for `turn`.
    fn try_apply(&self, board: &Board, m: Move, turn: Color) -> Option<Board> {
        if self.is_legal_move(board, m.from(), m.to(), turn) {
            let mut next = *board;
            self.apply(&mut next, m.from(), m.to());
            Some(next)
        } else {
            None
        }
    }

    /// Returns true if `color`'s king is on the board and in check.
    fn is_check(&self, board: &Board, color: Color) -> bool {
        board
            .king_square(color)
            .is_some_and(|king| self.is_in_check(board, king, color))
    }

    /// Returns the destinations of the piece on `from` that `turn` may
    /// legally play.
    fn legal_destinations(&self, board: &Board, from: Square, turn: Color) -> Bitboard {
        self.destinations(board, from)
            .into_iter()
            .filter(|&to| self.is_legal_move(board, from, to, turn))
            .collect()
    }

    /// Returns every legal move for `turn`.
    fn legal_moves(&self, board: &Board, turn: Color) -> Vec<Move> {
        board
            .pieces(turn)
            .flat_map(|(from, _)| {
                self.legal_destinations(board, from, turn)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Returns the game result if `turn` has been checkmated.
    fn game_result(&self, board: &Board, turn: Color) -> Option<GameResult> {
        self.is_checkmate(board, turn)
            .then(|| GameResult::win_for(turn.opposite()))
    }
}

/// Returns true if `king_square` is attacked by the side opposing
/// `defending`, under the standard rules.
pub fn is_in_check(board: &Board, king_square: Square, defending: Color) -> bool {
    StandardChess::new().is_in_check(board, king_square, defending)
}

/// Returns true if `turn` may move the piece on `from` to `to`, under the
/// standard rules.
pub fn is_legal_move(board: &Board, from: Square, to: Square, turn: Color) -> bool {
    StandardChess::new().is_legal_move(board, from, to, turn)
}

/// Returns true if `turn` is checkmated, under the standard rules.
pub fn is_checkmate(board: &Board, turn: Color) -> bool {
    StandardChess::new().is_checkmate(board, turn)
}

/// Returns every legal move for `turn`, under the standard rules.
pub fn legal_moves(board: &Board, turn: Color) -> Vec<Move> {
    StandardChess::new().legal_moves(board, turn)
}

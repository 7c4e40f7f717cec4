//! Standard chess rules implementation.

use super::RuleSet;
use crate::config::{MissingKingPolicy, PawnDoubleStep, RulesConfig};
use crate::movegen;
use crate::{Bitboard, Board};
use chess_core::{Color, Square};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Standard chess movement rules.
///
/// Covers piece geometry, turn ownership, self-check prevention and
/// checkmate. Castling, en passant, promotion and draws are not part of
/// this rule set.
///
/// Legality is decided by simulation: the move is played on a copy of the
/// board and the copy is searched for attacks on the mover's king.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardChess {
    config: RulesConfig,
}

impl StandardChess {
    /// Creates the rule set with the default configuration.
    pub const fn new() -> Self {
        StandardChess {
            config: RulesConfig {
                pawn_double_step: PawnDoubleStep::Standard,
                missing_king: MissingKingPolicy::Permissive,
            },
        }
    }

    /// Creates the rule set with the given configuration.
    pub const fn with_config(config: RulesConfig) -> Self {
        StandardChess { config }
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Returns true if `turn` has at least one legal move.
    pub fn has_legal_move(&self, board: &Board, turn: Color) -> bool {
        #[cfg(feature = "parallel")]
        {
            let candidates: Vec<(Square, Square)> = board
                .pieces(turn)
                .flat_map(|(from, _)| {
                    self.destinations(board, from)
                        .into_iter()
                        .map(move |to| (from, to))
                })
                .collect();
            candidates
                .par_iter()
                .any(|&(from, to)| self.is_legal_move(board, from, to, turn))
        }

        #[cfg(not(feature = "parallel"))]
        {
            board.pieces(turn).any(|(from, _)| {
                self.destinations(board, from)
                    .into_iter()
                    .any(|to| self.is_legal_move(board, from, to, turn))
            })
        }
    }
}

impl RuleSet for StandardChess {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn destinations(&self, board: &Board, from: Square) -> Bitboard {
        movegen::destinations(board, from, self.config.pawn_double_step)
    }

    fn is_in_check(&self, board: &Board, king_square: Square, defending: Color) -> bool {
        board
            .pieces(defending.opposite())
            .any(|(from, _)| self.destinations(board, from).contains(king_square))
    }

    fn is_legal_move(&self, board: &Board, from: Square, to: Square, turn: Color) -> bool {
        match board.piece_at(from) {
            Some(piece) if piece.color == turn => {}
            Some(piece) => {
                tracing::trace!(%from, %to, %turn, %piece, "rejected: not the mover's piece");
                return false;
            }
            None => {
                tracing::trace!(%from, %to, %turn, "rejected: no piece on source square");
                return false;
            }
        }

        if !self.destinations(board, from).contains(to) {
            tracing::trace!(%from, %to, "rejected: destination not reachable");
            return false;
        }

        let simulated = board.applied(from, to);
        match simulated.king_square(turn) {
            Some(king) => {
                let exposed = self.is_in_check(&simulated, king, turn);
                if exposed {
                    tracing::trace!(%from, %to, %king, "rejected: king left in check");
                }
                !exposed
            }
            None => {
                tracing::warn!(%from, %to, %turn, "no king on the board after simulated move");
                self.config.missing_king == MissingKingPolicy::Permissive
            }
        }
    }

    fn is_checkmate(&self, board: &Board, turn: Color) -> bool {
        let Some(king) = board.king_square(turn) else {
            return false;
        };
        if !self.is_in_check(board, king, turn) {
            return false;
        }
        !self.has_legal_move(board, turn)
    }
}

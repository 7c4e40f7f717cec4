//! Move generation.
//!
//! Every generator here is pseudo-legal: it respects each piece's geometry,
//! blocking and capture rules, but ignores whether the move leaves the
//! mover's own king in check. Filtering that out is the job of the
//! [`rules`](crate::rules) module.

mod rays;
pub mod perft;

use crate::config::PawnDoubleStep;
use crate::{Bitboard, Board};
use chess_core::{Color, PieceKind, Square};

use rays::{ray_walk, step_targets, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};

/// Returns the squares the piece on `from` could move to.
///
/// Returns an empty set if `from` is empty. Pawn double steps follow the
/// standard rule; use [`RuleSet::destinations`](crate::RuleSet::destinations)
/// on a configured [`StandardChess`](crate::StandardChess) for the legacy one.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Bitboard {
    destinations(board, from, PawnDoubleStep::Standard)
}

/// Dispatches on the occupant of `from`.
pub(crate) fn destinations(board: &Board, from: Square, double_step: PawnDoubleStep) -> Bitboard {
    let Some(piece) = board.piece_at(from) else {
        return Bitboard::EMPTY;
    };
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, color, double_step),
        PieceKind::Knight => knight_destinations(board, from, color),
        PieceKind::Bishop => bishop_destinations(board, from, color),
        PieceKind::Rook => rook_destinations(board, from, color),
        PieceKind::Queen => queen_destinations(board, from, color),
        PieceKind::King => king_destinations(board, from, color),
    }
}

/// Pawn moves for a pawn of `color` on `from`.
///
/// One step forward onto an empty square, two steps from the starting row,
/// and diagonal captures onto enemy pieces only.
pub fn pawn_destinations(
    board: &Board,
    from: Square,
    color: Color,
    double_step: PawnDoubleStep,
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        let one_free = board.is_vacant(one);
        if one_free {
            targets.set(one);
        }

        let passage_clear = match double_step {
            PawnDoubleStep::Standard => one_free,
            PawnDoubleStep::Legacy => true,
        };
        if from.row() == color.pawn_row() && passage_clear {
            if let Some(two) = from.offset(2 * dir, 0) {
                if board.is_vacant(two) {
                    targets.set(two);
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col) {
            if board.piece_at(to).is_some_and(|piece| piece.color != color) {
                targets.set(to);
            }
        }
    }

    targets
}

/// Knight jumps that land on an empty or enemy-held square.
pub fn knight_destinations(board: &Board, from: Square, color: Color) -> Bitboard {
    step_targets(board, from, color, &KNIGHT_OFFSETS)
}

/// Diagonal ray-walks.
pub fn bishop_destinations(board: &Board, from: Square, color: Color) -> Bitboard {
    ray_walk(board, from, color, &BISHOP_DIRECTIONS)
}

/// Orthogonal ray-walks.
pub fn rook_destinations(board: &Board, from: Square, color: Color) -> Bitboard {
    ray_walk(board, from, color, &ROOK_DIRECTIONS)
}

/// Union of the bishop and rook rays.
pub fn queen_destinations(board: &Board, from: Square, color: Color) -> Bitboard {
    bishop_destinations(board, from, color) | rook_destinations(board, from, color)
}

/// Adjacent squares that are empty or enemy-held. No castling, and no
/// check filtering.
pub fn king_destinations(board: &Board, from: Square, color: Color) -> Bitboard {
    step_targets(board, from, color, &KING_OFFSETS)
}

//! Offset tables and the ray-walk shared by sliding pieces.

use crate::{Bitboard, Board};
use chess_core::{Color, Square};

/// Knight jumps as (row, column) offsets.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// King steps as (row, column) offsets.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Diagonal directions.
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal directions.
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Returns true if `sq` is empty or holds a piece of the other color.
#[inline]
fn open_to(board: &Board, sq: Square, color: Color) -> bool {
    board.piece_at(sq).map_or(true, |piece| piece.color != color)
}

/// Single-step destinations: each offset that lands on the board and not on
/// a piece of `color`.
pub(crate) fn step_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&to| open_to(board, to, color))
        .collect()
}

/// Walks each direction square by square.
///
/// Empty squares are included and the walk continues; the first occupied
/// square ends the ray and is included only if it holds an enemy piece.
pub(crate) fn ray_walk(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => targets.set(next),
                Some(piece) => {
                    if piece.color != color {
                        targets.set(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn step_targets_skip_off_board() {
        let board = Board::empty();
        let corner = step_targets(&board, sq("a1"), Color::White, &KNIGHT_OFFSETS);
        let squares: Vec<Square> = corner.into_iter().collect();
        assert_eq!(squares, vec![sq("b3"), sq("c2")]);
    }

    #[test]
    fn ray_walk_open_board() {
        let board = Board::empty();
        assert_eq!(
            ray_walk(&board, sq("d4"), Color::White, &ROOK_DIRECTIONS).count(),
            14
        );
        assert_eq!(
            ray_walk(&board, sq("d4"), Color::White, &BISHOP_DIRECTIONS).count(),
            13
        );
    }

    #[test]
    fn ray_walk_stops_at_blockers() {
        // Friendly pawn on d6, enemy pawn on f4.
        let board = Board::from_fen("8/8/3P4/8/3R1p2/8/8/8").unwrap();
        let targets = ray_walk(&board, sq("d4"), Color::White, &ROOK_DIRECTIONS);
        assert!(targets.contains(sq("d5")));
        assert!(!targets.contains(sq("d6")));
        assert!(targets.contains(sq("e4")));
        assert!(targets.contains(sq("f4")));
        assert!(!targets.contains(sq("g4")));
        assert!(targets.contains(sq("d1")));
        assert!(targets.contains(sq("a4")));
        assert_eq!(targets.count(), 1 + 2 + 3 + 3);
    }
}

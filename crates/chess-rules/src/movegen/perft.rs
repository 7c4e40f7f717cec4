//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Up to depth 4 from the starting position no castling, en passant or
//! promotion is possible, so the published counts apply to these rules.

use crate::{Board, RuleSet};
use chess_core::Color;

/// Counts the number of leaf nodes at the given depth.
pub fn perft<R: RuleSet>(rules: &R, board: &Board, turn: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = rules.legal_moves(board, turn);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|m| {
            let next = board.applied(m.from(), m.to());
            perft(rules, &next, turn.opposite(), depth - 1)
        })
        .sum()
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide<R: RuleSet>(
    rules: &R,
    board: &Board,
    turn: Color,
    depth: u32,
) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = rules
        .legal_moves(board, turn)
        .into_iter()
        .map(|m| {
            let next = board.applied(m.from(), m.to());
            let nodes = if depth > 1 {
                perft(rules, &next, turn.opposite(), depth - 1)
            } else {
                1
            };
            (m.to_coordinates(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

//! Chess movement rules over an 8x8 mailbox board.
//!
//! This crate provides:
//! - [`Board`] - the grid of occupants, its starting layout and move application
//! - [`pseudo_legal_destinations`] - per-piece geometry, blocking and captures
//! - [`is_in_check`], [`is_legal_move`], [`is_checkmate`] - legality evaluation
//! - [`RuleSet`] - the seam a game driver judges moves through
//! - [`Game`] - turn alternation, selection and history on top of a rule set
//!
//! Row 0 is Black's home rank and row 7 White's. White pawns advance toward
//! decreasing rows. Castling, en passant, promotion and draws are not part
//! of these rules.
//!
//! # Example
//!
//! ```
//! use chess_rules::{is_checkmate, Board, Game};
//! use chess_core::Color;
//!
//! let mut game = Game::new();
//! for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.make_move_coordinates(m).unwrap();
//! }
//! assert!(is_checkmate(game.board(), Color::White));
//! assert_eq!(game.winner(), Some(Color::Black));
//!
//! assert!(!is_checkmate(&Board::initial(), Color::White));
//! ```

mod bitboard;
mod board;
pub mod config;
mod game;
pub mod movegen;
pub mod rules;

pub use bitboard::{Bitboard, BitboardIter};
pub use board::Board;
pub use chess_core::on_board;
pub use config::{ConfigError, MissingKingPolicy, PawnDoubleStep, RulesConfig};
pub use game::{Game, GameError, GameStatus, MoveRecord};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::pseudo_legal_destinations;
pub use rules::{
    is_checkmate, is_in_check, is_legal_move, legal_moves, GameResult, RuleSet, StandardChess,
};

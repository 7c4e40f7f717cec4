//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the rules crate and
//! its callers:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (row 0 is Black's home rank)
//! - [`Move`] for a from/to pair
//! - FEN piece-placement parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError, Placement};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{on_board, ParseSquareError, Square, BOARD_SIZE};

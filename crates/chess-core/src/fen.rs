//! FEN (Forsyth-Edwards Notation) piece-placement parsing and serialization.
//!
//! Only the fields the rules use are kept: the piece placement and,
//! optionally, the side to move. A full six-field FEN is accepted; its
//! castling, en passant and clock fields are ignored.

use crate::{Color, Piece};
use thiserror::Error;

/// Rows of optional pieces, row 0 being rank 8.
pub type Placement = [[Option<Piece>; 8]; 8];

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1, 2 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Board contents, indexed `[row][col]`.
    pub placement: Placement,
    /// Side to move, if the string carried one.
    pub side_to_move: Option<Color>,
}

impl Fen {
    /// The standard starting placement.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !matches!(parts.len(), 1 | 2 | 6) {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Self::parse_placement(parts[0])?;

        let side_to_move = match parts.get(1) {
            None => None,
            Some(&"w") => Some(Color::White),
            Some(&"b") => Some(Color::Black),
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(Fen {
            placement,
            side_to_move,
        })
    }

    fn parse_placement(placement: &str) -> Result<Placement, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                rows.len()
            )));
        }

        let mut squares: Placement = [[None; 8]; 8];
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if col < 8 {
                        squares[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(squares)
    }

    /// Converts the placement (and side to move, if any) back to a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for (row, cells) in self.placement.iter().enumerate() {
            let mut empty_count = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        if let Some(color) = self.side_to_move {
            fen.push(' ');
            fen.push(color.to_char());
        }

        fen
    }
}

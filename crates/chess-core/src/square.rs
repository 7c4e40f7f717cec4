//! Board square representation.

use std::fmt;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Returns true if both coordinates lie in `0..8`.
///
/// Takes signed coordinates so that offsets applied to a square can be
/// checked before a [`Square`] is built from them.
#[inline]
pub const fn on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
}

/// Errors that can occur when parsing a square name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("invalid square '{0}': expected a file a-h followed by a rank 1-8")]
    Malformed(String),
}

/// A square on the chess board, stored as `row * 8 + col`.
///
/// Row 0 is Black's home rank (rank 8) and row 7 is White's home rank
/// (rank 1); column 0 is the a-file. A `Square` is always on the board:
/// every constructor validates its input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column (each 0-7).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, returning `None` off-board.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Self> {
        if on_board(row, col) {
            Some(Square(row as u8 * BOARD_SIZE + col as u8))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Square::new(b'8' - rank, file - b'a')
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7, 0 being rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the column (0-7, 0 being the a-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns the square `(d_row, d_col)` away, if it is on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Square::from_coords(self.row() as i8 + d_row, self.col() as i8 + d_col)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }

    /// Iterates over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| ParseSquareError::Malformed(s.to_string()))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn offset_agrees_with_on_board(index in 0u8..64, d_row in -8i8..=8, d_col in -8i8..=8) {
            let sq = Square::from_index(index).unwrap();
            let row = sq.row() as i8 + d_row;
            let col = sq.col() as i8 + d_col;
            match sq.offset(d_row, d_col) {
                Some(target) => {
                    prop_assert!(on_board(row, col));
                    prop_assert_eq!(target.row() as i8, row);
                    prop_assert_eq!(target.col() as i8, col);
                }
                None => prop_assert!(!on_board(row, col)),
            }
        }
    }

    #[test]
    fn square_new() {
        let sq = Square::new(4, 4).unwrap();
        assert_eq!(sq.row(), 4);
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.index(), 36);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn on_board_bounds() {
        assert!(on_board(0, 0));
        assert!(on_board(7, 7));
        assert!(!on_board(-1, 0));
        assert!(!on_board(0, -1));
        assert!(!on_board(8, 3));
        assert!(!on_board(3, 8));
    }

    #[test]
    fn square_from_algebraic() {
        // a8 is Black's corner at row 0.
        assert_eq!(Square::from_algebraic("a8"), Square::new(0, 0));
        assert_eq!(Square::from_algebraic("h1"), Square::new(7, 7));
        assert_eq!(Square::from_algebraic("e4"), Square::new(4, 4));
        assert_eq!(Square::from_algebraic("G1"), Square::new(7, 6));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::new(0, 0).unwrap().to_algebraic(), "a8");
        assert_eq!(Square::new(7, 7).unwrap().to_algebraic(), "h1");
        assert_eq!(Square::new(5, 5).unwrap().to_algebraic(), "f3");
    }

    #[test]
    fn square_from_str() {
        assert_eq!("g1".parse::<Square>(), Ok(Square::new(7, 6).unwrap()));
        assert_eq!(
            "z9".parse::<Square>(),
            Err(ParseSquareError::Malformed("z9".to_string()))
        );
    }

    #[test]
    fn square_offset() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.offset(-1, 0), Square::from_algebraic("e5"));
        assert_eq!(e4.offset(2, 1), Square::from_algebraic("f2"));

        let a1 = Square::from_algebraic("a1").unwrap();
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_algebraic(), "a8");
        assert_eq!(squares[63].to_algebraic(), "h1");
    }
}

//! Square sets packed into a `u64`.
//!
//! The move generator answers "where can this piece go" with a [`Bitboard`]:
//! bit `n` stands for the square whose index is `n`, so a8 is bit 0 and h1
//! is bit 63.

use chess_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A set of board squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// The set with no squares.
    pub const EMPTY: Bitboard = Bitboard(0);

    #[inline]
    const fn mask(sq: Square) -> u64 {
        1u64 << sq.index()
    }

    /// Returns true if no square is in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Self::mask(sq) != 0
    }

    /// Adds a square to the set.
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= Self::mask(sq);
    }

    /// Removes and returns the square with the lowest index.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

/// Prints the set as a board diagram, rank 8 on top.
impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard {{")?;
        for sq in Square::all() {
            if sq.col() == 0 {
                write!(f, "  {}", 8 - sq.row())?;
            }
            write!(f, " {}", if self.contains(sq) { '*' } else { '.' })?;
            if sq.col() == 7 {
                writeln!(f)?;
            }
        }
        write!(f, "    a b c d e f g h\n}}")
    }
}

/// Squares of a [`Bitboard`] in index order.
#[derive(Debug, Clone)]
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        self.0.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, |mut set, sq| {
            set.set(sq);
            set
        })
    }
}

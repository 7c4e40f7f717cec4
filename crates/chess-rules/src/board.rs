//! Chess board representation.

use chess_core::{on_board, Color, Fen, FenError, Piece, PieceKind, Placement, Square};
use std::fmt;

use crate::Bitboard;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// `Board` is `Copy`: every copy owns its cells, so a board handed to a
/// simulation can never write through to the board it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Placement,
}

impl Board {
    /// Creates a board without pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    ///
    /// Black occupies rows 0-1 and White rows 6-7.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(color, kind));
                board.squares[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Creates a board from a FEN placement.
    ///
    /// A side-to-move field is accepted and ignored: the turn is not part
    /// of the board.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Ok(Board {
            squares: parsed.placement,
        })
    }

    /// Converts the board to a FEN placement string.
    pub fn to_fen(&self) -> String {
        Fen {
            placement: self.squares,
            side_to_move: None,
        }
        .to_fen()
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Returns the piece at raw coordinates; `None` when empty or off-board.
    pub fn piece_at_coords(&self, row: i8, col: i8) -> Option<Piece> {
        if !on_board(row, col) {
            return None;
        }
        self.squares[row as usize][col as usize]
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Puts a piece on a square, returning the piece it replaced.
    pub fn set(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.cell_mut(sq).replace(piece)
    }

    /// Removes and returns the piece on a square.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.cell_mut(sq).take()
    }

    /// Moves whatever stands on `from` to `to`.
    ///
    /// `from` is left empty and any piece on `to` is overwritten; the
    /// overwritten piece is returned. No legality check is made.
    pub fn apply(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.clear(from);
        std::mem::replace(self.cell_mut(to), moving)
    }

    /// Returns a copy of the board with the move applied.
    #[must_use]
    pub fn applied(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        next.apply(from, to);
        next
    }

    /// Returns the square of the given color's king, if it is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.occupants().find(|&(_, piece)| piece == king).map(|(sq, _)| sq)
    }

    /// Iterates over every occupied square in index order.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the squares and pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupants().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns a bitboard of all occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.occupants().map(|(sq, _)| sq).collect()
    }

    /// Returns a bitboard of the squares held by one color.
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces(color).map(|(sq, _)| sq).collect()
    }

    #[inline]
    fn cell_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.squares[sq.row() as usize][sq.col() as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', |piece| piece.to_fen_char());
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn initial_fen() {
        assert_eq!(Board::initial().to_fen(), Fen::STARTPOS);
        assert_eq!(Board::default(), Board::initial());
    }

    #[test]
    fn initial_piece_count() {
        let board = Board::initial();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.occupied_by(Color::White).count(), 16);
        assert_eq!(board.occupied_by(Color::Black).count(), 16);
    }

    #[test]
    fn piece_at() {
        let board = Board::initial();
        assert_eq!(
            board.piece_at(sq("e1")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(sq("d8")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(board.piece_at(sq("e4")), None);
    }

    #[test]
    fn piece_at_coords_off_board() {
        let board = Board::initial();
        assert_eq!(board.piece_at_coords(-1, 0), None);
        assert_eq!(board.piece_at_coords(0, 8), None);
        assert_eq!(
            board.piece_at_coords(0, 0),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn apply_moves_piece() {
        let mut board = Board::initial();
        let captured = board.apply(sq("g1"), sq("f3"));
        assert_eq!(captured, None);
        assert_eq!(
            board.piece_at(sq("f3")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert!(board.is_vacant(sq("g1")));
    }

    #[test]
    fn apply_overwrites_destination() {
        let mut board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3").unwrap();
        let captured = board.apply(sq("e4"), sq("d5"));
        assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(
            board.piece_at(sq("d5")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert!(board.is_vacant(sq("e4")));
        assert_eq!(board.occupied().count(), 3);
    }

    #[test]
    fn applied_leaves_original_untouched() {
        let board = Board::initial();
        let next = board.applied(sq("e2"), sq("e4"));
        assert_eq!(board, Board::initial());
        assert!(next.is_vacant(sq("e2")));
        assert!(!next.is_vacant(sq("e4")));
    }

    #[test]
    fn king_square() {
        let board = Board::initial();
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        let rook = Piece::new(Color::Black, PieceKind::Rook);
        assert_eq!(board.set(sq("a1"), rook), None);
        assert_eq!(board.piece_at(sq("a1")), Some(rook));
        assert_eq!(board.clear(sq("a1")), Some(rook));
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn from_fen_error() {
        assert!(Board::from_fen("8/8/8").is_err());
    }

    #[test]
    fn display_diagram() {
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r ");
        assert_eq!(lines[7], "1 R N B Q K B N R ");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}

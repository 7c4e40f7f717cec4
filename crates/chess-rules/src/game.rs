//! Turn-by-turn game management.
//!
//! [`Game`] owns the board and the side to move and uses a [`RuleSet`] as
//! the guard on every transition:
//! - a legal move is applied and the turn passes to the other side
//! - if the side now to move is checkmated, the game is over
//! - once over, no further moves are accepted
//!
//! It also keeps the two-step selection a board front-end uses: pick up a
//! piece of the side to move, then choose where to put it.

use crate::rules::{GameResult, RuleSet, StandardChess};
use crate::{Bitboard, Board};
use chess_core::{Color, Move, Piece, Square};
use thiserror::Error;

/// A move that was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The move played.
    pub mov: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece that stood on the destination, if any.
    pub captured: Option<Piece>,
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// The move string could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
    /// The game has already ended.
    #[error("game has already ended")]
    GameOver,
    /// A destination was chosen without a selected piece.
    #[error("no piece selected")]
    NoSelection,
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The given side is to move.
    ToMove(Color),
    /// The game has ended.
    Over(GameResult),
}

/// A chess game played under a rule set.
#[derive(Debug, Clone)]
pub struct Game<R = StandardChess> {
    board: Board,
    turn: Color,
    result: Option<GameResult>,
    selected: Option<Square>,
    history: Vec<MoveRecord>,
    rules: R,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_rules(StandardChess::new())
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a new game from the rule set's starting board, White to move.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        Game {
            board,
            turn: Color::White,
            result: None,
            selected: None,
            history: Vec::new(),
            rules,
        }
    }

    /// Creates a game from a custom position.
    ///
    /// If `turn` is already checkmated the game starts out over.
    pub fn from_board(rules: R, board: Board, turn: Color) -> Self {
        let result = rules.game_result(&board, turn);
        Game {
            board,
            turn,
            result,
            selected: None,
            history: Vec::new(),
            rules,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the rule set.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns where the game stands.
    pub fn status(&self) -> GameStatus {
        match self.result {
            Some(result) => GameStatus::Over(result),
            None => GameStatus::ToMove(self.turn),
        }
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the winner, if the game has ended.
    pub fn winner(&self) -> Option<Color> {
        self.result.map(GameResult::winner)
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.rules.is_check(&self.board, self.turn)
    }

    /// Returns every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.rules.legal_moves(&self.board, self.turn)
    }

    /// Returns the currently selected square.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Selects the piece on `sq` and returns its legal destinations.
    ///
    /// Only a piece of the side to move can be selected; any other square
    /// leaves the selection unchanged and returns `None`.
    pub fn select(&mut self, sq: Square) -> Option<Bitboard> {
        if self.is_over() {
            return None;
        }
        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.turn => {
                self.selected = Some(sq);
                Some(self.rules.legal_destinations(&self.board, sq, self.turn))
            }
            _ => None,
        }
    }

    /// Moves the selected piece to `to`.
    ///
    /// The selection is cleared whether or not the move succeeds.
    pub fn play_selected(&mut self, to: Square) -> Result<MoveRecord, GameError> {
        let from = self.selected.take().ok_or(GameError::NoSelection)?;
        self.make_move(from, to)
    }

    /// Makes a move given in coordinate notation (e.g., "e2e4").
    pub fn make_move_coordinates(&mut self, text: &str) -> Result<MoveRecord, GameError> {
        let m = Move::from_coordinates(text)
            .ok_or_else(|| GameError::InvalidNotation(text.to_string()))?;
        self.make_move(m.from(), m.to())
    }

    /// Plays `from` to `to` for the side to move.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }

        let mov = Move::new(from, to);
        if !self.rules.is_legal_move(&self.board, from, to, self.turn) {
            return Err(GameError::IllegalMove(mov));
        }
        let Some(piece) = self.board.piece_at(from) else {
            return Err(GameError::IllegalMove(mov));
        };

        let captured = self.rules.apply(&mut self.board, from, to);
        let record = MoveRecord {
            mov,
            piece,
            captured,
        };
        self.history.push(record);
        self.selected = None;
        self.turn = self.turn.opposite();

        tracing::debug!(%mov, %piece, captured = ?captured, "move applied");

        self.result = self.rules.game_result(&self.board, self.turn);
        if let Some(result) = self.result {
            tracing::info!("Checkmate! {} wins!", result.winner());
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::ToMove(Color::White));
        assert!(!game.is_over());
        assert!(!game.is_check());
        assert!(game.history().is_empty());
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn turn_alternates() {
        let mut game = Game::new();
        game.make_move_coordinates("e2e4").unwrap();
        assert_eq!(game.turn(), Color::Black);
        game.make_move_coordinates("e7e5").unwrap();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn illegal_move_keeps_state() {
        let mut game = Game::new();
        let before = *game.board();
        let err = game.make_move_coordinates("e2e5").unwrap_err();
        assert_eq!(err, GameError::IllegalMove(Move::from_coordinates("e2e5").unwrap()));
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn cannot_move_opponent_piece() {
        let mut game = Game::new();
        assert!(matches!(
            game.make_move_coordinates("e7e5"),
            Err(GameError::IllegalMove(_))
        ));
    }

    #[test]
    fn invalid_notation() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move_coordinates("e2"),
            Err(GameError::InvalidNotation("e2".to_string()))
        );
    }

    #[test]
    fn capture_is_recorded() {
        let mut game = Game::new();
        for m in ["e2e4", "d7d5"] {
            game.make_move_coordinates(m).unwrap();
        }
        let record = game.make_move_coordinates("e4d5").unwrap();
        assert_eq!(record.piece, Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(
            record.captured,
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::new();
        for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.make_move_coordinates(m).unwrap();
        }
        assert!(game.is_over());
        assert_eq!(game.status(), GameStatus::Over(GameResult::BlackWins));
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.make_move_coordinates("a2a3"), Err(GameError::GameOver));
    }

    #[test]
    fn select_then_play() {
        let mut game = Game::new();
        let targets = game.select(sq("g1")).unwrap();
        assert_eq!(targets.count(), 2);
        assert_eq!(game.selected(), Some(sq("g1")));

        let record = game.play_selected(sq("f3")).unwrap();
        assert_eq!(record.mov, Move::new(sq("g1"), sq("f3")));
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn select_rejects_opponent_and_empty() {
        let mut game = Game::new();
        assert!(game.select(sq("e7")).is_none());
        assert!(game.select(sq("e4")).is_none());
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn failed_selection_move_clears_selection() {
        let mut game = Game::new();
        game.select(sq("e2")).unwrap();
        assert!(game.play_selected(sq("e5")).is_err());
        assert_eq!(game.selected(), None);
        assert_eq!(game.play_selected(sq("e4")), Err(GameError::NoSelection));
    }

    #[test]
    fn from_board_already_mated() {
        let board = Board::from_fen("4R1k1/5ppp/8/8/8/8/8/6K1").unwrap();
        let game = Game::from_board(StandardChess::new(), board, Color::Black);
        assert_eq!(game.result(), Some(GameResult::WhiteWins));
    }

    #[test]
    fn from_board_in_progress() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3").unwrap();
        let mut game = Game::from_board(StandardChess::new(), board, Color::White);
        assert_eq!(game.status(), GameStatus::ToMove(Color::White));
        game.make_move_coordinates("a1a8").unwrap();
        assert!(game.is_check());
        assert!(!game.is_over());
    }
}

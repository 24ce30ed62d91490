//! Custom starting placements.

use chess_core::{Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when building a game from a custom placement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("square {0} is occupied twice")]
    SquareOccupied(Square),

    #[error("too many pieces: {0}")]
    TooManyPieces(usize),

    #[error("{0} has no king")]
    MissingKing(Color),

    #[error("{0} has more than one king")]
    ExtraKing(Color),

    #[error("{0} pawn on row {1}")]
    PawnOnBackRow(Color, u8),
}

/// A placement to start a [`Game`](crate::Game) from instead of the
/// standard arrangement.
///
/// All castling flags start as "not moved"; castling still requires the
/// king and rook to stand on their home squares.
///
/// ```
/// use chess_core::{Color, Piece, Square};
/// use chess_engine::{Game, Setup};
///
/// let sq = |c, r| Square::new(c, r).unwrap();
/// let game = Game::from_setup(
///     Setup::new()
///         .piece(sq(4, 0), Color::White, Piece::King)
///         .piece(sq(4, 7), Color::Black, Piece::King)
///         .piece(sq(0, 1), Color::White, Piece::Pawn),
/// )
/// .unwrap();
/// assert_eq!(game.pieces().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub(crate) pieces: Vec<(Square, Color, Piece)>,
    pub(crate) turn: Color,
    pub(crate) halfmove_clock: u32,
}

impl Setup {
    /// An empty placement with White to move.
    pub fn new() -> Self {
        Setup {
            pieces: Vec::new(),
            turn: Color::White,
            halfmove_clock: 0,
        }
    }

    /// Adds a piece.
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.push((square, color, piece));
        self
    }

    /// Sets the side to move.
    pub fn turn(mut self, turn: Color) -> Self {
        self.turn = turn;
        self
    }

    /// Sets the half-move clock, e.g. to resume a game close to the 50-move limit.
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Checks that the placement is a position the engine can play from.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.pieces.len() > crate::Board::MAX_PIECES {
            return Err(SetupError::TooManyPieces(self.pieces.len()));
        }

        let mut seen = [false; 64];
        for &(square, color, piece) in &self.pieces {
            let slot = &mut seen[square.index() as usize];
            if *slot {
                return Err(SetupError::SquareOccupied(square));
            }
            *slot = true;

            if piece == Piece::Pawn
                && (square.row() == color.back_rank() || square.row() == color.promotion_row())
            {
                return Err(SetupError::PawnOnBackRow(color, square.row()));
            }
        }

        for color in Color::ALL {
            let kings = self
                .pieces
                .iter()
                .filter(|&&(_, c, p)| c == color && p == Piece::King)
                .count();
            match kings {
                0 => return Err(SetupError::MissingKing(color)),
                1 => {}
                _ => return Err(SetupError::ExtraKing(color)),
            }
        }
        Ok(())
    }
}

impl Default for Setup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(column: u8, row: u8) -> Square {
        Square::new(column, row).unwrap()
    }

    fn kings() -> Setup {
        Setup::new()
            .piece(sq(4, 0), Color::White, Piece::King)
            .piece(sq(4, 7), Color::Black, Piece::King)
    }

    #[test]
    fn valid_setup() {
        assert_eq!(kings().validate(), Ok(()));
    }

    #[test]
    fn duplicate_square() {
        let setup = kings().piece(sq(4, 0), Color::White, Piece::Rook);
        assert_eq!(setup.validate(), Err(SetupError::SquareOccupied(sq(4, 0))));
    }

    #[test]
    fn king_count() {
        let setup = Setup::new().piece(sq(4, 0), Color::White, Piece::King);
        assert_eq!(setup.validate(), Err(SetupError::MissingKing(Color::Black)));

        let setup = kings().piece(sq(0, 7), Color::Black, Piece::King);
        assert_eq!(setup.validate(), Err(SetupError::ExtraKing(Color::Black)));
    }

    #[test]
    fn pawn_on_edge_row() {
        let setup = kings().piece(sq(0, 7), Color::White, Piece::Pawn);
        assert_eq!(
            setup.validate(),
            Err(SetupError::PawnOnBackRow(Color::White, 7))
        );
    }
}

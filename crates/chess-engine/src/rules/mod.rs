//! Rules of standard chess.
//!
//! Every function here is a read-only query over a [`Board`](crate::Board)
//! and its [`GameState`](crate::GameState). Move application lives in
//! [`Game`](crate::Game), which is the only place either is mutated.

mod check;
mod material;
mod shape;

pub use check::{has_legal_move, is_king_attacked, legal_destinations, leaves_mover_in_check};
pub use material::is_insufficient_material;
pub use shape::{is_legal_shape, path_is_clear};

use std::fmt;

/// Outcome of a move request.
///
/// `InvalidMove` and `StillInCheck` mean the move was rejected and nothing
/// changed. Every other value means the move was applied; the terminal ones
/// classify the position it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResult {
    /// Applied; the game goes on.
    Success,
    /// Rejected: no own piece on the source, or the move breaks the
    /// piece's movement rules.
    InvalidMove,
    /// Rejected: the move would leave the mover's king attacked.
    StillInCheck,
    /// Applied; a pawn promoted and the game goes on.
    Promotion,
    /// Applied; the side to move is mated.
    Checkmate,
    /// Applied; the side to move has no legal move and is not in check.
    Stalemate,
    /// Applied; 100 half-moves without a pawn move or capture.
    Draw50Moves,
    /// Applied; neither side can mate with what is left.
    DrawInsufficientMaterial,
    /// Applied; the position has occurred three times.
    DrawThreefoldRepetition,
}

impl MoveResult {
    /// Returns true if the move took effect on the board.
    #[inline]
    pub const fn is_applied(self) -> bool {
        !matches!(self, MoveResult::InvalidMove | MoveResult::StillInCheck)
    }

    /// Returns true if the game is over after this move.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            MoveResult::Checkmate
                | MoveResult::Stalemate
                | MoveResult::Draw50Moves
                | MoveResult::DrawInsufficientMaterial
                | MoveResult::DrawThreefoldRepetition
        )
    }

    /// Returns true for the drawn outcomes, stalemate included.
    #[inline]
    pub const fn is_draw(self) -> bool {
        self.is_terminal() && !matches!(self, MoveResult::Checkmate)
    }

    /// Stable name of the result.
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveResult::Success => "Success",
            MoveResult::InvalidMove => "InvalidMove",
            MoveResult::StillInCheck => "StillInCheck",
            MoveResult::Promotion => "Promotion",
            MoveResult::Checkmate => "Checkmate",
            MoveResult::Stalemate => "Stalemate",
            MoveResult::Draw50Moves => "Draw50Moves",
            MoveResult::DrawInsufficientMaterial => "DrawInsufficientMaterial",
            MoveResult::DrawThreefoldRepetition => "DrawThreefoldRepetition",
        }
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_results_are_not_applied() {
        assert!(!MoveResult::InvalidMove.is_applied());
        assert!(!MoveResult::StillInCheck.is_applied());
        assert!(MoveResult::Success.is_applied());
        assert!(MoveResult::Checkmate.is_applied());
    }

    #[test]
    fn terminal_results() {
        assert!(!MoveResult::Success.is_terminal());
        assert!(!MoveResult::Promotion.is_terminal());
        assert!(!MoveResult::InvalidMove.is_terminal());
        assert!(MoveResult::Checkmate.is_terminal());
        assert!(!MoveResult::Checkmate.is_draw());
        assert!(MoveResult::Stalemate.is_draw());
        assert!(MoveResult::DrawThreefoldRepetition.is_draw());
    }

    #[test]
    fn display() {
        assert_eq!(MoveResult::Draw50Moves.to_string(), "Draw50Moves");
    }
}

//! Check detection and the legal-move scans built on it.

use chess_core::{Color, Piece, Square};

use super::is_legal_shape;
use crate::{Board, GameState, PlacedPiece};

/// Returns true if any enemy piece could move onto `color`'s king.
///
/// A board without that king answers false.
pub fn is_king_attacked(board: &Board, state: &GameState, color: Color) -> bool {
    let Some(king) = board.king(color) else {
        return false;
    };
    let target = king.square();
    board
        .pieces_of(color.opposite())
        .any(|enemy| is_legal_shape(board, state, enemy, target))
}

/// Returns true if moving `mover` to `to` would leave its own king attacked.
///
/// The move is played on a scratch copy of the board: the mover and any piece
/// on `to` are lifted, and the mover (a queen if it is a promoting pawn) is
/// placed on `to`. En passant victims and castling rooks are not moved.
/// The scratch board is dropped before returning.
pub fn leaves_mover_in_check(
    board: &Board,
    state: &GameState,
    mover: &PlacedPiece,
    to: Square,
) -> bool {
    let mut scratch = board.clone();
    scratch.remove_at(mover.square());
    scratch.remove_at(to);
    if mover.promotes_on(to) {
        scratch.place(to, mover.color(), Piece::Queen);
    } else {
        scratch.place_tagged(to, mover.color(), mover.piece(), mover.tag());
    }
    is_king_attacked(&scratch, state, mover.color())
}

/// Returns true if `mover` can legally move to `to`.
#[inline]
fn is_legal(board: &Board, state: &GameState, mover: &PlacedPiece, to: Square) -> bool {
    is_legal_shape(board, state, mover, to) && !leaves_mover_in_check(board, state, mover, to)
}

/// Returns true if `color` has at least one legal move.
///
/// Scans every own piece against all 64 squares.
pub fn has_legal_move(board: &Board, state: &GameState, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|mover| Square::all().any(|to| is_legal(board, state, mover, to)))
}

/// All squares `mover` can legally move to, in square index order.
pub fn legal_destinations(board: &Board, state: &GameState, mover: &PlacedPiece) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal(board, state, mover, to))
        .collect()
}

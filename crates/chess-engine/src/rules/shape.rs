//! Movement patterns: is a move shape-legal on the current board?
//!
//! Shape legality covers each rank's pattern, path clearance and the
//! castling / en passant special cases. It does not ask whether the mover's
//! own king is left attacked; see [`leaves_mover_in_check`](super::leaves_mover_in_check).

use chess_core::{Color, Piece, Square};

use super::is_king_attacked;
use crate::position::{CastleSide, KING_HOME_COLUMN};
use crate::{Board, GameState, PlacedPiece};

/// Returns true if `mover` may move to `to` by its rank's rules.
pub fn is_legal_shape(board: &Board, state: &GameState, mover: &PlacedPiece, to: Square) -> bool {
    let from = mover.square();
    if from == to {
        return false;
    }
    let target = board.piece_at(to);
    if target.is_some_and(|t| t.color() == mover.color()) {
        return false;
    }

    let dx = to.column() as i8 - from.column() as i8;
    let dy = to.row() as i8 - from.row() as i8;

    match mover.piece() {
        Piece::Pawn => pawn_shape(board, state, mover.color(), from, to, target.is_some()),
        Piece::Knight => matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1)),
        Piece::Bishop => dx.abs() == dy.abs() && path_is_clear(board, from, to),
        Piece::Rook => (dx == 0 || dy == 0) && path_is_clear(board, from, to),
        Piece::Queen => {
            (dx == 0 || dy == 0 || dx.abs() == dy.abs()) && path_is_clear(board, from, to)
        }
        Piece::King => {
            (dx.abs() <= 1 && dy.abs() <= 1)
                || castling_side(board, state, mover.color(), from, to).is_some()
        }
    }
}

fn pawn_shape(
    board: &Board,
    state: &GameState,
    color: Color,
    from: Square,
    to: Square,
    capturing: bool,
) -> bool {
    let dir = color.pawn_direction();
    let dx = to.column() as i8 - from.column() as i8;
    let dy = to.row() as i8 - from.row() as i8;

    match (dx.abs(), dy) {
        (0, d) if d == dir => !capturing,
        (0, d) if d == 2 * dir => {
            !capturing
                && from.row() == color.pawn_home_row()
                && from.offset(0, dir).is_some_and(|skipped| board.is_empty_at(skipped))
        }
        (1, d) if d == dir => capturing || state.en_passant() == Some(to),
        _ => false,
    }
}

/// Returns the castle a two-column king move from `from` to `to` performs,
/// if castling is currently allowed.
///
/// Requires the king on its home square, the king and that rook unmoved,
/// the rook still on its corner, every square between them empty, and the
/// king not in check. Squares the king crosses or lands on are not tested
/// for attacks.
///
/// The rook-on-corner test is stricter than the has-moved flags alone: an
/// unmoved rook that was captured on its corner no longer allows castling.
pub(crate) fn castling_side(
    board: &Board,
    state: &GameState,
    color: Color,
    from: Square,
    to: Square,
) -> Option<CastleSide> {
    let row = color.back_rank();
    if from.column() != KING_HOME_COLUMN || from.row() != row || to.row() != row {
        return None;
    }
    let side = CastleSide::from_king_target(to.column())?;
    if !state.castling().can_castle(color, side) {
        return None;
    }

    let rook_square = Square::new(side.rook_from_column(), row)?;
    let rook = board.piece_at(rook_square)?;
    let allowed = rook.color() == color
        && rook.piece() == Piece::Rook
        && path_is_clear(board, from, rook_square)
        && !is_king_attacked(board, state, color);
    allowed.then_some(side)
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// The squares must share a row, column or diagonal.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_x = (to.column() as i8 - from.column() as i8).signum();
    let step_y = (to.row() as i8 - from.row() as i8).signum();

    let mut current = from;
    loop {
        let Some(next) = current.offset(step_x, step_y) else {
            return false;
        };
        if next == to {
            return true;
        }
        if !board.is_empty_at(next) {
            return false;
        }
        current = next;
    }
}

//! Insufficient-material draw detection.

use chess_core::Piece;

use crate::Board;

/// Returns true if the material left cannot deliver mate.
///
/// Only a small, certain subset is recognised:
/// - bare kings
/// - kings plus a single bishop or knight
/// - kings plus exactly two bishops standing on same-colored squares
///
/// Anything else, including other drawn four-piece endings, is not flagged.
pub fn is_insufficient_material(board: &Board) -> bool {
    match board.len() {
        2 => true,
        3 => {
            board
                .iter()
                .filter(|p| matches!(p.piece(), Piece::Bishop | Piece::Knight))
                .count()
                == 1
        }
        4 => {
            let mut parities = board
                .iter()
                .filter(|p| p.piece() == Piece::Bishop)
                .map(|p| p.square().parity());
            match (parities.next(), parities.next(), parities.next()) {
                (Some(a), Some(b), None) => a == b,
                _ => false,
            }
        }
        _ => false,
    }
}

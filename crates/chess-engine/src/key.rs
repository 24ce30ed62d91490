//! Position keys for repetition counting.
//!
//! A key encodes piece placement and the side to move, nothing else:
//! castling and en passant availability are not part of it, so two
//! placements that differ only in those rights share a key.

use std::fmt;
use std::fmt::Write as _;

use chess_core::Color;

use crate::Board;

/// Deterministic encoding of piece placement plus side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey(String);

impl PositionKey {
    /// Builds the key for `board` with `turn` to move.
    ///
    /// Pieces are listed in (row, column) order as color, rank, column and
    /// row followed by `;`, then the side to move: `wR00;wN10;...;w`.
    pub fn of(board: &Board, turn: Color) -> Self {
        let mut pieces: Vec<_> = board.iter().collect();
        pieces.sort_by_key(|p| p.square());

        let mut key = String::with_capacity(pieces.len() * 5 + 1);
        for p in pieces {
            // Writing to a String cannot fail.
            let _ = write!(
                key,
                "{}{}{}{};",
                p.color().key_char(),
                p.piece().key_char(),
                p.square().column(),
                p.square().row()
            );
        }
        key.push(turn.key_char());
        PositionKey(key)
    }

    #[cfg(test)]
    pub(crate) fn from_raw(raw: &str) -> Self {
        PositionKey(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, Square};

    fn sq(column: u8, row: u8) -> Square {
        Square::new(column, row).unwrap()
    }

    #[test]
    fn key_is_sorted_by_row_then_column() {
        let mut board = Board::empty();
        board.place(sq(4, 7), Color::Black, Piece::King);
        board.place(sq(7, 0), Color::White, Piece::Rook);
        board.place(sq(4, 0), Color::White, Piece::King);
        let key = PositionKey::of(&board, Color::Black);
        assert_eq!(key.as_str(), "wK40;wR70;bK47;b");
    }

    #[test]
    fn key_ignores_identity_and_insertion_order() {
        let mut a = Board::empty();
        a.place(sq(0, 0), Color::White, Piece::King);
        a.place(sq(7, 7), Color::Black, Piece::King);

        let mut b = Board::empty();
        b.place(sq(7, 7), Color::Black, Piece::King);
        b.place(sq(0, 0), Color::White, Piece::King);

        assert_eq!(PositionKey::of(&a, Color::White), PositionKey::of(&b, Color::White));
        assert_ne!(PositionKey::of(&a, Color::White), PositionKey::of(&a, Color::Black));
    }
}

//! Game state carried alongside the board.

use std::collections::HashMap;

use chess_core::{Color, Piece, Square};

use crate::PositionKey;

/// Column the king starts on for both colors.
pub const KING_HOME_COLUMN: u8 = 4;

/// Which rook a king castles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Towards column 7.
    Kingside,
    /// Towards column 0.
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    const fn index(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }

    /// Column the rook starts on.
    #[inline]
    pub const fn rook_from_column(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the rook lands on after castling.
    #[inline]
    pub const fn rook_to_column(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Column the king lands on after castling.
    #[inline]
    pub const fn king_to_column(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// The castle side whose king destination is `column`.
    pub const fn from_king_target(column: u8) -> Option<Self> {
        match column {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// The castle side whose rook starts on `column`.
    pub const fn from_rook_origin(column: u8) -> Option<Self> {
        match column {
            7 => Some(CastleSide::Kingside),
            0 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Has-moved flags for each king and each castling rook.
///
/// Flags only ever go from "not moved" to "moved"; only a reset clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    king_moved: [bool; 2],
    rook_moved: [[bool; 2]; 2],
}

impl CastlingRights {
    /// Rights with nothing moved yet.
    pub const NONE_MOVED: CastlingRights = CastlingRights {
        king_moved: [false; 2],
        rook_moved: [[false; 2]; 2],
    };

    #[inline]
    pub const fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    #[inline]
    pub const fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    /// Returns true if neither the king nor the rook on `side` has moved.
    #[inline]
    pub const fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.rook_moved[color.index()][side.index()] = true;
    }

    /// Updates the flags for a piece of `color` leaving `from`.
    ///
    /// Any king move marks the king; a rook marks its side only when it
    /// leaves that side's corner.
    pub fn record_departure(&mut self, color: Color, piece: Piece, from: Square) {
        match piece {
            Piece::King => self.mark_king_moved(color),
            Piece::Rook if from.row() == color.back_rank() => {
                if let Some(side) = CastleSide::from_rook_origin(from.column()) {
                    self.mark_rook_moved(color, side);
                }
            }
            _ => {}
        }
    }
}

/// Everything besides piece placement that a move reads or updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The side to move.
    pub(crate) turn: Color,

    /// King and rook has-moved flags.
    pub(crate) castling: CastlingRights,

    /// Square skipped by a double pawn advance on the previous move.
    pub(crate) en_passant: Option<Square>,

    /// Half-moves since the last pawn move, capture, or promotion.
    pub(crate) halfmove_clock: u32,

    /// Occurrence count of every position reached so far.
    pub(crate) history: HashMap<PositionKey, u32>,
}

impl GameState {
    /// State at the start of a game: White to move, nothing recorded.
    pub fn new() -> Self {
        GameState {
            turn: Color::White,
            castling: CastlingRights::NONE_MOVED,
            en_passant: None,
            halfmove_clock: 0,
            history: HashMap::new(),
        }
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// How many times `key` has been reached.
    pub fn occurrences(&self, key: &PositionKey) -> u32 {
        self.history.get(key).copied().unwrap_or(0)
    }

    /// Counts one more occurrence of `key` and returns the new count.
    pub(crate) fn record_position(&mut self, key: PositionKey) -> u32 {
        let count = self.history.entry(key).or_insert(0);
        *count += 1;
        *count
    }
}

impl Default for GameState {
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

    #[test]
    fn castle_side_columns() {
        assert_eq!(CastleSide::from_king_target(6), Some(CastleSide::Kingside));
        assert_eq!(CastleSide::from_king_target(2), Some(CastleSide::Queenside));
        assert_eq!(CastleSide::from_king_target(4), None);
        for side in CastleSide::ALL {
            assert_eq!(CastleSide::from_king_target(side.king_to_column()), Some(side));
            assert_eq!(CastleSide::from_rook_origin(side.rook_from_column()), Some(side));
        }
    }

    #[test]
    fn king_move_blocks_both_sides() {
        let mut rights = CastlingRights::NONE_MOVED;
        assert!(rights.can_castle(Color::White, CastleSide::Kingside));
        rights.record_departure(Color::White, Piece::King, sq(4, 0));
        assert!(!rights.can_castle(Color::White, CastleSide::Kingside));
        assert!(!rights.can_castle(Color::White, CastleSide::Queenside));
        assert!(rights.can_castle(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn rook_move_blocks_its_side_only() {
        let mut rights = CastlingRights::NONE_MOVED;
        rights.record_departure(Color::Black, Piece::Rook, sq(0, 7));
        assert!(rights.rook_moved(Color::Black, CastleSide::Queenside));
        assert!(!rights.rook_moved(Color::Black, CastleSide::Kingside));
        assert!(rights.can_castle(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn rook_away_from_corner_changes_nothing() {
        let mut rights = CastlingRights::NONE_MOVED;
        rights.record_departure(Color::White, Piece::Rook, sq(7, 3));
        rights.record_departure(Color::White, Piece::Queen, sq(3, 0));
        assert_eq!(rights, CastlingRights::NONE_MOVED);
    }

    #[test]
    fn record_position_counts() {
        let mut state = GameState::new();
        let key = PositionKey::from_raw("wK40;w");
        assert_eq!(state.occurrences(&key), 0);
        assert_eq!(state.record_position(key.clone()), 1);
        assert_eq!(state.record_position(key.clone()), 2);
        assert_eq!(state.occurrences(&key), 2);
    }
}

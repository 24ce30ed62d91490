//! Chess piece representation.

use crate::Color;

/// The six ranks of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Ranks a pawn may promote to.
    pub const PROMOTIONS: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

    /// Returns true if a pawn may promote to this rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen
        )
    }

    /// Returns the display tag a view uses to pick the piece image,
    /// e.g. `"Queen-white"`.
    pub const fn display_tag(self, color: Color) -> &'static str {
        match (self, color) {
            (Piece::Pawn, Color::White) => "Pawn-white",
            (Piece::Pawn, Color::Black) => "Pawn-black",
            (Piece::Knight, Color::White) => "Knight-white",
            (Piece::Knight, Color::Black) => "Knight-black",
            (Piece::Bishop, Color::White) => "Bishop-white",
            (Piece::Bishop, Color::Black) => "Bishop-black",
            (Piece::Rook, Color::White) => "Rook-white",
            (Piece::Rook, Color::Black) => "Rook-black",
            (Piece::Queen, Color::White) => "Queen-white",
            (Piece::Queen, Color::Black) => "Queen-black",
            (Piece::King, Color::White) => "King-white",
            (Piece::King, Color::Black) => "King-black",
        }
    }

    /// Returns the single character used in position keys.
    pub const fn key_char(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }

    /// Returns the name used on the wire (`"QUEEN"`).
    pub const fn wire_name(self) -> &'static str {
        match self {
            Piece::Pawn => "PAWN",
            Piece::Knight => "KNIGHT",
            Piece::Bishop => "BISHOP",
            Piece::Rook => "ROOK",
            Piece::Queen => "QUEEN",
            Piece::King => "KING",
        }
    }

    /// Parses a wire name, ignoring ASCII case.
    pub fn from_wire_name(name: &str) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|piece| piece.wire_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_tags() {
        assert_eq!(Piece::Queen.display_tag(Color::White), "Queen-white");
        assert_eq!(Piece::Pawn.display_tag(Color::Black), "Pawn-black");
        assert_eq!(Piece::King.display_tag(Color::Black), "King-black");
    }

    #[test]
    fn wire_names() {
        assert_eq!(Piece::from_wire_name("QUEEN"), Some(Piece::Queen));
        assert_eq!(Piece::from_wire_name("knight"), Some(Piece::Knight));
        assert_eq!(Piece::from_wire_name("Rook"), Some(Piece::Rook));
        assert_eq!(Piece::from_wire_name("dragon"), None);
        for piece in Piece::ALL {
            assert_eq!(Piece::from_wire_name(piece.wire_name()), Some(piece));
        }
    }

    #[test]
    fn promotion_targets() {
        assert!(!Piece::Pawn.is_promotion_target());
        assert!(!Piece::King.is_promotion_target());
        for piece in Piece::PROMOTIONS {
            assert!(piece.is_promotion_target());
        }
    }
}

//! The position store: the set of pieces currently on the board.

use chess_core::{Color, Piece, Square};

/// Identity of a placed piece.
///
/// Every placement gets a fresh id, so a piece that moves becomes a new
/// value with a new identity and two pieces never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u32);

/// A piece standing on a square. Immutable once placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedPiece {
    id: PieceId,
    square: Square,
    color: Color,
    piece: Piece,
    tag: &'static str,
}

impl PlacedPiece {
    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Display tag a view uses to pick the piece image.
    #[inline]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns true if this is a pawn and `to` is its promotion row.
    #[inline]
    pub fn promotes_on(&self, to: Square) -> bool {
        self.piece == Piece::Pawn && to.row() == self.color.promotion_row()
    }
}

/// Back row layout from column 0 to column 7.
const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Set of at most 32 placed pieces, at most one per square.
///
/// Lookups are linear scans; the store is small and queried far less often
/// than a search engine would query it.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pieces: Vec<PlacedPiece>,
    next_id: u32,
}

impl Board {
    /// Maximum number of pieces on a board.
    pub const MAX_PIECES: usize = 32;

    /// Creates an empty board.
    pub fn empty() -> Self {
        Board {
            pieces: Vec::with_capacity(Self::MAX_PIECES),
            next_id: 0,
        }
    }

    /// Creates a board with the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_rank();
            let pawns = color.pawn_home_row();
            for (column, piece) in (0u8..).zip(BACK_ROW) {
                if let Some(square) = Square::new(column, back) {
                    board.place(square, color, piece);
                }
                if let Some(square) = Square::new(column, pawns) {
                    board.place(square, color, Piece::Pawn);
                }
            }
        }
        board
    }

    /// Returns the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&PlacedPiece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    /// Returns true if no piece stands on `square`.
    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns the king of the given color, if present.
    pub fn king(&self, color: Color) -> Option<&PlacedPiece> {
        self.pieces
            .iter()
            .find(|p| p.color == color && p.piece == Piece::King)
    }

    /// Iterates over all pieces.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.pieces.iter()
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &PlacedPiece> {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    /// Number of pieces on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Places a new piece with its standard display tag.
    pub(crate) fn place(&mut self, square: Square, color: Color, piece: Piece) -> PieceId {
        self.place_tagged(square, color, piece, piece.display_tag(color))
    }

    /// Places a new piece carrying the given display tag.
    pub(crate) fn place_tagged(
        &mut self,
        square: Square,
        color: Color,
        piece: Piece,
        tag: &'static str,
    ) -> PieceId {
        debug_assert!(self.is_empty_at(square), "square {} already occupied", square);
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.push(PlacedPiece {
            id,
            square,
            color,
            piece,
            tag,
        });
        id
    }

    /// Removes and returns the piece on `square`.
    pub(crate) fn remove_at(&mut self, square: Square) -> Option<PlacedPiece> {
        let index = self.pieces.iter().position(|p| p.square == square)?;
        Some(self.pieces.swap_remove(index))
    }
}

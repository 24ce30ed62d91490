//! Board square representation.

use std::fmt;

/// A square on the chess board, addressed by column and row.
///
/// Both coordinates run 0-7. Column 0 is the queenside edge and row 0 is
/// White's back row, so White's king starts on (4,0) and Black's on (4,7).
/// A `Square` can only be built in range.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    // Field order gives the (row, column) ordering used by position keys.
    row: u8,
    column: u8,
}

impl Square {
    /// Creates a square, or `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if column < 8 && row < 8 {
            Some(Square { row, column })
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates.
    #[inline]
    pub fn from_signed(column: i8, row: i8) -> Option<Self> {
        let column = u8::try_from(column).ok()?;
        let row = u8::try_from(row).ok()?;
        Self::new(column, row)
    }

    /// Creates a square from index (0-63), row-major from (0,0).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square {
                row: index / 8,
                column: index % 8,
            })
        } else {
            None
        }
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 8 + self.column
    }

    /// Returns the square displaced by the given amounts, if still on the board.
    #[inline]
    pub fn offset(self, columns: i8, rows: i8) -> Option<Self> {
        Self::from_signed(self.column as i8 + columns, self.row as i8 + rows)
    }

    /// Square colour parity: 0 for dark squares, 1 for light ones.
    #[inline]
    pub const fn parity(self) -> u8 {
        (self.column + self.row) % 2
    }

    /// Iterates over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{})", self.column, self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.column, self.row)
    }
}

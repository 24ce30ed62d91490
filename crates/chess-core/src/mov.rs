//! Move commands in the transport wire format.
//!
//! A move travels between peers as one text line of comma-separated fields:
//! `fromCol,fromRow,toCol,toRow` optionally followed by the rank a pawn
//! promotes to, e.g. `4,6,4,7,QUEEN`. The relay forwards the line verbatim;
//! each side parses it here and validates the move through its own engine.

use crate::{Piece, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a move line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveCommandError {
    #[error("invalid move line: expected 4 or 5 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("coordinate out of range: {0}")]
    CoordinateOutOfRange(u8),

    #[error("unknown promotion rank: {0}")]
    UnknownRank(String),

    #[error("cannot promote to {0}")]
    InvalidPromotion(Piece),
}

/// A requested move: source, destination and optional promotion rank.
///
/// This is a request, not a validated move; the engine decides legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCommand {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl MoveCommand {
    /// Creates a move command without a promotion rank.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        MoveCommand {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a move command carrying a promotion rank.
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Piece) -> Self {
        MoveCommand {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Parses one wire line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Self, MoveCommandError> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() != 4 && fields.len() != 5 {
            return Err(MoveCommandError::InvalidFieldCount(fields.len()));
        }

        let mut coords = [0u8; 4];
        for (slot, field) in coords.iter_mut().zip(&fields) {
            let value = field
                .parse::<u8>()
                .map_err(|_| MoveCommandError::InvalidCoordinate(field.to_string()))?;
            if value > 7 {
                return Err(MoveCommandError::CoordinateOutOfRange(value));
            }
            *slot = value;
        }

        let promotion = match fields.get(4) {
            Some(name) => {
                let piece = Piece::from_wire_name(name)
                    .ok_or_else(|| MoveCommandError::UnknownRank(name.to_string()))?;
                if !piece.is_promotion_target() {
                    return Err(MoveCommandError::InvalidPromotion(piece));
                }
                Some(piece)
            }
            None => None,
        };

        // Range was checked above, so both squares exist.
        let square = |column: u8, row: u8| {
            Square::new(column, row).ok_or(MoveCommandError::CoordinateOutOfRange(column.max(row)))
        };
        Ok(MoveCommand {
            from: square(coords[0], coords[1])?,
            to: square(coords[2], coords[3])?,
            promotion,
        })
    }

    /// Returns the wire line for this command.
    pub fn to_wire(self) -> String {
        self.to_string()
    }
}

impl FromStr for MoveCommand {
    type Err = MoveCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.from.column(),
            self.from.row(),
            self.to.column(),
            self.to.row()
        )?;
        if let Some(piece) = self.promotion {
            write!(f, ",{}", piece.wire_name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(column: u8, row: u8) -> Square {
        Square::new(column, row).unwrap()
    }

    #[test]
    fn parse_plain_move() {
        let cmd = MoveCommand::parse("4,1,4,3").unwrap();
        assert_eq!(cmd.from, sq(4, 1));
        assert_eq!(cmd.to, sq(4, 3));
        assert_eq!(cmd.promotion, None);
    }

    #[test]
    fn parse_promotion() {
        let cmd = MoveCommand::parse("0,6,0,7,KNIGHT").unwrap();
        assert_eq!(cmd.promotion, Some(Piece::Knight));

        let cmd: MoveCommand = " 1,1,1,0,queen \n".parse().unwrap();
        assert_eq!(cmd.promotion, Some(Piece::Queen));
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(MoveCommand::new(sq(6, 0), sq(5, 2)).to_string(), "6,0,5,2");
        assert_eq!(
            MoveCommand::with_promotion(sq(4, 6), sq(4, 7), Piece::Rook).to_wire(),
            "4,6,4,7,ROOK"
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            MoveCommand::parse("1,2,3"),
            Err(MoveCommandError::InvalidFieldCount(3))
        );
        assert_eq!(
            MoveCommand::parse("1,2,3,4,QUEEN,extra"),
            Err(MoveCommandError::InvalidFieldCount(6))
        );
        assert_eq!(
            MoveCommand::parse("a,2,3,4"),
            Err(MoveCommandError::InvalidCoordinate("a".to_string()))
        );
        assert_eq!(
            MoveCommand::parse("-1,2,3,4"),
            Err(MoveCommandError::InvalidCoordinate("-1".to_string()))
        );
        assert_eq!(
            MoveCommand::parse("1,2,3,8"),
            Err(MoveCommandError::CoordinateOutOfRange(8))
        );
        assert_eq!(
            MoveCommand::parse("1,6,1,7,DRAGON"),
            Err(MoveCommandError::UnknownRank("DRAGON".to_string()))
        );
        assert_eq!(
            MoveCommand::parse("1,6,1,7,KING"),
            Err(MoveCommandError::InvalidPromotion(Piece::King))
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics(line in "\\PC{0,24}") {
                let _ = MoveCommand::parse(&line);
            }

            #[test]
            fn wire_text_parses_back(
                from in 0u8..64,
                to in 0u8..64,
                promotion in prop::option::of(prop::sample::select(Piece::PROMOTIONS.to_vec())),
            ) {
                let command = MoveCommand {
                    from: Square::from_index(from).unwrap(),
                    to: Square::from_index(to).unwrap(),
                    promotion,
                };
                prop_assert_eq!(MoveCommand::parse(&command.to_wire()), Ok(command));
            }
        }
    }
}

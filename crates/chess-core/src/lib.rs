//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the engine and its
//! collaborators:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates
//! - [`MoveCommand`] for the comma-separated move wire format

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::{MoveCommand, MoveCommandError};
pub use piece::Piece;
pub use square::Square;

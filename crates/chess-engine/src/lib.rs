//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the position store, a small set of placed pieces
//! - [`GameState`] - turn, castling flags, en passant target, clocks and history
//! - [`Game`] - the rules state machine that validates and applies moves
//! - [`rules`] - read-only legality, check and draw queries
//!
//! # Architecture
//!
//! Pieces are stored as a plain list of immutable values, each with its own
//! identity. Legality is decided by a single dispatcher over the piece rank
//! plus a self-check filter that replays the move on a scratch copy of the
//! board. A move is only applied once it has passed every check, so callers
//! never observe a half-applied move.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_engine::{Game, MoveResult};
//!
//! let sq = |c, r| Square::new(c, r).unwrap();
//! let mut game = Game::new();
//!
//! // 1. e4
//! assert_eq!(game.move_piece(sq(4, 1), sq(4, 3), None), MoveResult::Success);
//! assert_eq!(game.player_in_turn(), Color::Black);
//!
//! // Black cannot move a white piece.
//! assert_eq!(game.move_piece(sq(3, 1), sq(3, 3), None), MoveResult::InvalidMove);
//! ```

mod board;
mod game;
mod key;
mod position;
pub mod rules;
mod setup;

pub use board::{Board, PieceId, PlacedPiece};
pub use game::Game;
pub use key::PositionKey;
pub use position::{CastleSide, CastlingRights, GameState, KING_HOME_COLUMN};
pub use rules::MoveResult;
pub use setup::{Setup, SetupError};

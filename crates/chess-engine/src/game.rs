//! Game management: the one mutable rules state machine.
//!
//! [`Game`] owns the [`Board`] and the [`GameState`] of a single game. The
//! only mutating entry points are [`Game::reset`] and [`Game::move_piece`];
//! the latter validates a move completely before touching anything, so a
//! rejected move leaves the game exactly as it was.
//!
//! The game does not stop accepting moves after a terminal result. Callers
//! that want a "game over" lock keep it themselves.

use chess_core::{Color, MoveCommand, Piece, Square};
use tracing::{debug, info, trace};

use crate::position::CastleSide;
use crate::rules::{self, MoveResult};
use crate::{Board, CastlingRights, GameState, PlacedPiece, PositionKey, Setup, SetupError};

/// A chess game between two sides sharing one board.
///
/// Access is single-writer: `move_piece` and `reset` take `&mut self`, so a
/// networked session must apply local and remote moves one at a time.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        let mut game = Game {
            board: Board::empty(),
            state: GameState::new(),
        };
        game.reset();
        game
    }

    /// Creates a game from a custom placement.
    pub fn from_setup(setup: Setup) -> Result<Self, SetupError> {
        setup.validate()?;

        let mut board = Board::empty();
        for &(square, color, piece) in &setup.pieces {
            board.place(square, color, piece);
        }
        let mut state = GameState::new();
        state.turn = setup.turn;
        state.halfmove_clock = setup.halfmove_clock;
        state.record_position(PositionKey::of(&board, state.turn));

        debug!(pieces = board.len(), turn = %state.turn, "game created from setup");
        Ok(Game { board, state })
    }

    /// Discards the current game and sets up the standard starting position.
    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.state = GameState::new();
        self.state.record_position(PositionKey::of(&self.board, self.state.turn));
        info!("game reset to the starting position");
    }

    /// Returns the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&PlacedPiece> {
        self.board.piece_at(square)
    }

    /// Iterates over every piece on the board.
    pub fn pieces(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.board.iter()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of turn, rights, clocks and history.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The side to move.
    pub fn player_in_turn(&self) -> Color {
        self.state.turn
    }

    /// Returns true if `color`'s king is attacked in the current position.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        rules::is_king_attacked(&self.board, &self.state, color)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.is_king_attacked(self.state.turn)
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.state.halfmove_clock
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.state.en_passant
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling
    }

    /// Key of the current position.
    pub fn position_key(&self) -> PositionKey {
        PositionKey::of(&self.board, self.state.turn)
    }

    /// How many times the current position has been reached.
    pub fn repetition_count(&self) -> u32 {
        self.state.occurrences(&self.position_key())
    }

    /// Squares the piece on `from` can legally move to.
    ///
    /// Empty when `from` is empty or holds a piece of the side not to move.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        match self.board.piece_at(from) {
            Some(mover) if mover.color() == self.state.turn => {
                rules::legal_destinations(&self.board, &self.state, mover)
            }
            _ => Vec::new(),
        }
    }

    /// Returns true if moving the piece on `from` to `to` would promote it.
    ///
    /// Says nothing about legality; a view uses it to decide whether to ask
    /// for a promotion rank before calling [`move_piece`](Self::move_piece).
    pub fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        self.board
            .piece_at(from)
            .is_some_and(|mover| mover.promotes_on(to))
    }

    /// Applies a move received in wire form.
    pub fn apply_command(&mut self, command: &MoveCommand) -> MoveResult {
        self.move_piece(command.from, command.to, command.promotion)
    }

    /// Attempts to move the piece on `from` to `to`.
    ///
    /// `promotion` names the rank a pawn reaching the far row becomes; it
    /// defaults to a queen and is ignored for other moves.
    ///
    /// Returns [`MoveResult::InvalidMove`] or [`MoveResult::StillInCheck`]
    /// without changing anything when the move is illegal. Otherwise the
    /// move, including castling rook relocation and en passant capture, is
    /// applied in full and the resulting position is classified.
    pub fn move_piece(&mut self, from: Square, to: Square, promotion: Option<Piece>) -> MoveResult {
        let Some(mover) = self.board.piece_at(from).cloned() else {
            trace!(%from, %to, "rejected: no piece on source square");
            return MoveResult::InvalidMove;
        };
        if mover.color() != self.state.turn {
            trace!(%from, %to, turn = %self.state.turn, "rejected: not this side's turn");
            return MoveResult::InvalidMove;
        }
        if !rules::is_legal_shape(&self.board, &self.state, &mover, to) {
            trace!(%from, %to, piece = %mover.piece(), "rejected: illegal shape");
            return MoveResult::InvalidMove;
        }
        if rules::leaves_mover_in_check(&self.board, &self.state, &mover, to) {
            trace!(%from, %to, piece = %mover.piece(), "rejected: king left in check");
            return MoveResult::StillInCheck;
        }

        let promotes = mover.promotes_on(to);
        let placed = if promotes {
            match promotion.unwrap_or(Piece::Queen) {
                piece if piece.is_promotion_target() => piece,
                piece => {
                    trace!(%from, %to, %piece, "rejected: invalid promotion rank");
                    return MoveResult::InvalidMove;
                }
            }
        } else {
            mover.piece()
        };

        // Everything below mutates; all checks are done.
        let color = mover.color();
        let captured = self.apply(&mover, to, placed, promotes);

        self.state.halfmove_clock = if mover.piece() == Piece::Pawn || captured || promotes {
            0
        } else {
            self.state.halfmove_clock + 1
        };
        self.state.turn = color.opposite();

        let repetitions = self.state.record_position(PositionKey::of(&self.board, self.state.turn));
        let result = self.classify(promotes, repetitions);

        debug!(
            %from,
            %to,
            piece = %mover.piece(),
            captured,
            halfmove_clock = self.state.halfmove_clock,
            repetitions,
            %result,
            "move applied"
        );
        result
    }

    /// Moves the pieces for an already validated move and updates castling
    /// flags and the en passant target. Returns true if something was captured.
    fn apply(&mut self, mover: &PlacedPiece, to: Square, placed: Piece, promotes: bool) -> bool {
        let from = mover.square();
        let color = mover.color();
        let dir = color.pawn_direction();
        let is_pawn = mover.piece() == Piece::Pawn;

        let en_passant = is_pawn
            && from.column() != to.column()
            && self.board.is_empty_at(to)
            && self.state.en_passant == Some(to);

        let castle = if mover.piece() == Piece::King && from.column().abs_diff(to.column()) == 2 {
            CastleSide::from_king_target(to.column())
        } else {
            None
        };
        if let Some(side) = castle {
            self.relocate_castling_rook(color, side);
        }
        self.state.castling.record_departure(color, mover.piece(), from);

        let mut captured = false;
        if en_passant {
            if let Some(victim_square) = to.offset(0, -dir) {
                let is_enemy_pawn = self
                    .board
                    .piece_at(victim_square)
                    .is_some_and(|p| p.piece() == Piece::Pawn && p.color() != color);
                if is_enemy_pawn {
                    self.board.remove_at(victim_square);
                    captured = true;
                }
            }
        } else if self.board.remove_at(to).is_some() {
            captured = true;
        }
        self.board.remove_at(from);

        if promotes {
            self.board.place(to, color, placed);
        } else {
            self.board.place_tagged(to, color, placed, mover.tag());
        }

        self.state.en_passant = if is_pawn && from.row().abs_diff(to.row()) == 2 {
            from.offset(0, dir)
        } else {
            None
        };

        captured
    }

    /// Moves the rook on `side` to its post-castle square and marks both the
    /// king and that rook as moved.
    fn relocate_castling_rook(&mut self, color: Color, side: CastleSide) {
        self.state.castling.mark_king_moved(color);

        let row = color.back_rank();
        let (Some(rook_from), Some(rook_to)) = (
            Square::new(side.rook_from_column(), row),
            Square::new(side.rook_to_column(), row),
        ) else {
            return;
        };
        let is_own_rook = self
            .board
            .piece_at(rook_from)
            .is_some_and(|p| p.piece() == Piece::Rook && p.color() == color);
        if !is_own_rook {
            return;
        }
        if let Some(rook) = self.board.remove_at(rook_from) {
            self.board.place_tagged(rook_to, color, Piece::Rook, rook.tag());
            self.state.castling.mark_rook_moved(color, side);
        }
    }

    /// Classifies the position after a move, first match wins:
    /// stalemate, insufficient material, threefold repetition, 50-move rule,
    /// checkmate, promotion, success.
    fn classify(&self, promoted: bool, repetitions: u32) -> MoveResult {
        let side = self.state.turn;
        let in_check = rules::is_king_attacked(&self.board, &self.state, side);
        let can_move = rules::has_legal_move(&self.board, &self.state, side);

        if !in_check && !can_move {
            MoveResult::Stalemate
        } else if rules::is_insufficient_material(&self.board) {
            MoveResult::DrawInsufficientMaterial
        } else if repetitions >= 3 {
            MoveResult::DrawThreefoldRepetition
        } else if self.state.halfmove_clock >= 100 {
            MoveResult::Draw50Moves
        } else if in_check && !can_move {
            MoveResult::Checkmate
        } else if promoted {
            MoveResult::Promotion
        } else {
            MoveResult::Success
        }
    }
}

//! Property tests: random move attempts and random legal games.

use std::collections::HashSet;

use chess_core::{Color, Square};
use chess_engine::{CastlingRights, Game, MoveResult, PositionKey};
use proptest::prelude::*;
use proptest::sample::Index;

fn square() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(|i| Square::from_index(i).unwrap())
}

fn legal_moves(game: &Game) -> Vec<(Square, Square)> {
    let turn = game.player_in_turn();
    let froms: Vec<Square> = game
        .pieces()
        .filter(|p| p.color() == turn)
        .map(|p| p.square())
        .collect();
    froms
        .into_iter()
        .flat_map(|from| {
            game.legal_destinations(from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Everything a rejected move must leave untouched.
#[derive(Debug, PartialEq)]
struct Snapshot {
    key: PositionKey,
    turn: Color,
    clock: u32,
    en_passant: Option<Square>,
    rights: CastlingRights,
    pieces: usize,
    repetitions: u32,
}

impl Snapshot {
    fn of(game: &Game) -> Self {
        Snapshot {
            key: game.position_key(),
            turn: game.player_in_turn(),
            clock: game.halfmove_clock(),
            en_passant: game.en_passant_target(),
            rights: game.castling_rights(),
            pieces: game.pieces().count(),
            repetitions: game.repetition_count(),
        }
    }
}

fn assert_board_consistent(game: &Game) {
    let squares: HashSet<Square> = game.pieces().map(|p| p.square()).collect();
    assert_eq!(squares.len(), game.pieces().count(), "two pieces share a square");
    assert!(game.pieces().count() <= 32);
    for color in Color::ALL {
        let kings = game
            .pieces()
            .filter(|p| p.color() == color && p.piece() == chess_core::Piece::King)
            .count();
        assert!(kings <= 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rejected_attempts_change_nothing(
        attempts in prop::collection::vec((square(), square()), 1..40)
    ) {
        let mut game = Game::new();
        for (from, to) in attempts {
            let before = Snapshot::of(&game);
            let result = game.move_piece(from, to, None);
            if result.is_applied() {
                prop_assert_eq!(game.player_in_turn(), before.turn.opposite());
            } else {
                prop_assert_eq!(Snapshot::of(&game), before);
            }
            assert_board_consistent(&game);
        }
    }

    #[test]
    fn random_games_accept_listed_moves_and_ignore_rejected_ones(
        steps in prop::collection::vec((any::<Index>(), square(), any::<Index>()), 0..60)
    ) {
        let mut game = Game::new();
        for (attempt_from, attempt_to, pick) in steps {
            // A random destination for one of the mover's own pieces, tried
            // mid-game where check, en passant and castling are live.
            let own: Vec<Square> = game
                .pieces()
                .filter(|p| p.color() == game.player_in_turn())
                .map(|p| p.square())
                .collect();
            if own.is_empty() {
                break;
            }
            let from = *attempt_from.get(&own);
            let before = Snapshot::of(&game);
            let attempt = game.move_piece(from, attempt_to, None);
            if !attempt.is_applied() {
                prop_assert_eq!(Snapshot::of(&game), before);
            }
            assert_board_consistent(&game);

            let moves = legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            let (from, to) = *pick.get(&moves);
            let mover = game.player_in_turn();

            let result = game.move_piece(from, to, None);
            prop_assert!(result.is_applied(), "{} -> {} gave {}", from, to, result);
            prop_assert!(game.piece_at(from).is_none());
            prop_assert_eq!(game.piece_at(to).map(|p| p.color()), Some(mover));
            prop_assert!(game.repetition_count() >= 1);
            assert_board_consistent(&game);

            match result {
                MoveResult::Checkmate | MoveResult::Stalemate => {
                    prop_assert!(legal_moves(&game).is_empty());
                    break;
                }
                _ => {}
            }
        }
    }
}

//! Stonehenge rules integration tests.

use std::collections::HashSet;

use stonehenge_solver::core::{GameRng, Player};
use stonehenge_solver::error::Error;
use stonehenge_solver::games::stonehenge::{
    cell_count, ley_line_count, ley_lines_for, Axis, CellId, Claim, MAX_SIDE,
};
use stonehenge_solver::games::{StonehengeConfig, StonehengeGame};
use stonehenge_solver::rules::{Game, GameResult, GameState};

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_line_partition_every_side() {
    for side in 1..=MAX_SIDE {
        let lines = ley_lines_for(side).unwrap();
        assert_eq!(lines.len(), 3 * (side + 1));
        assert_eq!(lines.len(), ley_line_count(side));

        for axis in Axis::ALL {
            let mut seen = HashSet::new();
            for line in lines.iter().filter(|l| l.axis == axis) {
                assert!(!line.is_empty());
                for &cell in &line.cells {
                    assert!(seen.insert(cell), "{:?} twice on {:?} at side {}", cell, axis, side);
                }
            }
            assert_eq!(seen.len(), cell_count(side), "axis {:?} side {}", axis, side);
        }
    }
}

#[test]
fn test_line_lengths_bounded() {
    for side in 1..=MAX_SIDE {
        for line in ley_lines_for(side).unwrap() {
            assert!(line.len() >= 1 && line.len() <= side + 1);
        }
    }
}

#[test]
fn test_geometry_is_pure() {
    let a: Vec<Vec<CellId>> = ley_lines_for(4)
        .unwrap()
        .into_iter()
        .map(|l| l.cells.to_vec())
        .collect();
    let b: Vec<Vec<CellId>> = ley_lines_for(4)
        .unwrap()
        .into_iter()
        .map(|l| l.cells.to_vec())
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_side_out_of_range() {
    assert!(matches!(
        StonehengeGame::with_side(MAX_SIDE + 1),
        Err(Error::InvalidSideLength { side: 6 })
    ));
}

// =============================================================================
// Play
// =============================================================================

#[test]
fn test_claim_a_on_smallest_board() {
    let mut game = StonehengeGame::with_side(1).unwrap();
    let a = game.parse_move("A").unwrap();
    game.play(&a).unwrap();

    let state = game.current_state();
    assert_eq!(state.cell(a), Claim::Owned(Player::One));
    assert_eq!(state.current_player(), Player::Two);

    // Every line through A is captured by p1.
    for idx in state.board().lines_through(a) {
        assert_eq!(state.line(idx), Claim::Owned(Player::One));
    }
    assert_eq!(game.outcome(state), Some(GameResult::Winner(Player::One)));
}

#[test]
fn test_claimed_cell_rejected() {
    let mut game = StonehengeGame::with_side(2).unwrap();
    let c = game.parse_move("C").unwrap();
    game.play(&c).unwrap();

    assert!(matches!(game.play(&c), Err(Error::IllegalMove { .. })));
    assert_eq!(game.current_state().current_player(), Player::Two);
}

#[test]
fn test_random_playouts_terminate() {
    let mut rng = GameRng::new(2024);

    for side in 1..=MAX_SIDE {
        for _ in 0..10 {
            let mut game = StonehengeGame::with_side(side).unwrap();
            let mut turns = 0;

            while !game.is_over(game.current_state()) {
                let moves = game.current_state().legal_moves();
                assert!(!moves.is_empty(), "stuck at side {}", side);
                let mv = *rng.choose(&moves).unwrap();
                game.play(&mv).unwrap();
                turns += 1;
            }

            assert!(turns <= cell_count(side));
            let winner = game.current_state().current_player().other();
            assert!(game.is_current_winner(winner));
            assert!(!game.is_current_winner(winner.other()));
        }
    }
}

#[test]
fn test_second_player_can_start() {
    let config = StonehengeConfig::default()
        .with_side_length(1)
        .with_first_player(Player::Two);
    let mut game = StonehengeGame::new(config).unwrap();

    let c = game.parse_move("c").unwrap();
    game.play(&c).unwrap();
    assert_eq!(
        game.outcome(game.current_state()),
        Some(GameResult::Winner(Player::Two))
    );
}

#[test]
fn test_render_shows_free_labels() {
    let mut game = StonehengeGame::with_side(3).unwrap();
    for text in ["A", "F", "L"] {
        let mv = game.parse_move(text).unwrap();
        game.play(&mv).unwrap();
    }

    let rendered = game.current_state().to_string();
    for label in game.current_state().cell_labels() {
        assert!(rendered.contains(label));
    }
    for taken in ['A', 'F', 'L'] {
        assert!(!rendered.contains(taken));
    }
    assert!(rendered.ends_with("to move: p2"));
}

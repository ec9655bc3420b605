//! Random-play properties of Stonehenge and the searches.

use std::collections::BTreeSet;

use proptest::prelude::*;

use stonehenge_solver::games::stonehenge::Claim;
use stonehenge_solver::games::{StonehengeGame, StonehengeState};
use stonehenge_solver::rules::{Game, GameState};
use stonehenge_solver::search::{IterativeNegamax, Negamax, RecursiveNegamax, SearchConfig};

/// Play `picks` (each taken modulo the legal move count) from the start,
/// stopping early once the game is over. Returns every visited state.
fn playout(game: &StonehengeGame, picks: &[usize]) -> Vec<StonehengeState> {
    let mut states = vec![game.initial_state()];
    for &pick in picks {
        let state = states.last().unwrap();
        if game.is_over(state) {
            break;
        }
        let moves = state.legal_moves();
        let next = state.apply_move(&moves[pick % moves.len()]).unwrap();
        states.push(next);
    }
    states
}

fn pick_list(max: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..max)
}

proptest! {
    #[test]
    fn prop_capture_is_monotonic(side in 1usize..=5, picks in pick_list(30)) {
        let game = StonehengeGame::with_side(side).unwrap();
        let states = playout(&game, &picks);

        for pair in states.windows(2) {
            let before: Vec<Claim> = pair[0].line_claims().collect();
            let after: Vec<Claim> = pair[1].line_claims().collect();
            for (b, a) in before.iter().zip(&after) {
                if !b.is_unclaimed() {
                    prop_assert_eq!(b, a);
                }
            }
        }
    }

    #[test]
    fn prop_each_move_uses_one_cell(side in 1usize..=5, picks in pick_list(30)) {
        let game = StonehengeGame::with_side(side).unwrap();
        let states = playout(&game, &picks);

        for pair in states.windows(2) {
            prop_assert_eq!(pair[1].legal_moves().len() + 1, pair[0].legal_moves().len());
            prop_assert_eq!(pair[1].current_player(), pair[0].current_player().other());
        }
    }

    #[test]
    fn prop_finished_stays_finished(side in 1usize..=5, picks in pick_list(30)) {
        let game = StonehengeGame::with_side(side).unwrap();
        let states = playout(&game, &picks);
        let last = states.last().unwrap();

        if game.is_over(last) {
            for mv in last.legal_moves() {
                prop_assert!(game.is_over(&last.apply_move(&mv).unwrap()));
            }
        }
    }

    #[test]
    fn prop_render_lists_legal_moves(side in 1usize..=5, picks in pick_list(30)) {
        let game = StonehengeGame::with_side(side).unwrap();
        let state = playout(&game, &picks).pop().unwrap();

        let rendered: BTreeSet<_> = state
            .to_string()
            .chars()
            .filter(char::is_ascii_uppercase)
            .filter_map(|c| game.parse_move(&c.to_string()))
            .collect();
        let legal: BTreeSet<_> = state.legal_moves().into_iter().collect();
        prop_assert_eq!(rendered, legal);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_searches_agree_on_side_three(picks in prop::collection::vec(any::<usize>(), 5..8)) {
        let game = StonehengeGame::with_side(3).unwrap();
        let state = playout(&game, &picks).pop().unwrap();
        prop_assume!(!game.is_over(&state));

        let mut recursive = RecursiveNegamax::new(SearchConfig::default());
        let mut iterative = IterativeNegamax::new(SearchConfig::default());

        prop_assert_eq!(
            recursive.evaluate(&game, &state).unwrap(),
            iterative.evaluate(&game, &state).unwrap()
        );
        prop_assert_eq!(
            recursive.best_move_from(&game, &state).unwrap(),
            iterative.best_move_from(&game, &state).unwrap()
        );
    }
}

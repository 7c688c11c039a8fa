//! Engine tests - move rules, flags, and universal properties

use proptest::prelude::*;

use tui_2048::core::{Board, GameState};
use tui_2048::types::{Direction, GameAction, Tile, BOARD_SIZE, WIN_VALUE};

fn game(values: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> GameState {
    GameState::with_board(Board::from_values(values).expect("valid board"), 42)
}

fn line(state: &GameState, row: usize) -> [u32; BOARD_SIZE] {
    state.board().to_values()[row]
}

#[test]
fn test_reset_yields_two_small_tiles() {
    for seed in 0..200 {
        let state = GameState::new(seed);
        assert_eq!(state.board().tile_count(), 2, "seed {}", seed);
        assert_eq!(state.score(), 0);
        assert!(!state.has_won());
        assert!(!state.is_game_over());
        for (_, _, cell) in state.board().iter() {
            if let Some(tile) = cell {
                assert!(tile == Tile::TWO || tile == Tile::FOUR, "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_no_triple_merge() {
    let mut state = game([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    assert!(state.apply_move(Direction::Left));
    assert_eq!(&line(&state, 0)[..2], &[4, 4]);
    assert_eq!(state.score(), 8);
}

#[test]
fn test_two_pairs() {
    let mut state = game([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]);
    assert!(state.apply_move(Direction::Left));
    assert_eq!(&line(&state, 0)[..2], &[4, 8]);
    assert_eq!(state.score(), 12);
}

#[test]
fn test_each_direction_collapses_toward_its_edge() {
    // A single tile in the middle ends up against each edge.
    let cases = [
        (Direction::Up, (0, 1)),
        (Direction::Down, (3, 1)),
        (Direction::Left, (1, 0)),
        (Direction::Right, (1, 3)),
    ];
    for (direction, (row, col)) in cases {
        let mut state = game([[0; 4], [0, 8, 0, 0], [0; 4], [0; 4]]);
        assert!(state.apply_move(direction), "{:?}", direction);
        assert_eq!(state.tile_at(row, col), Tile::new(8), "{:?}", direction);
        assert_eq!(state.board().tile_count(), 2);
    }
}

#[test]
fn test_spawn_fills_cell_freed_by_merge() {
    // Merging one pair frees one cell, which the spawn refills.
    let mut state = game([
        [2, 2, 4, 8],
        [16, 32, 64, 128],
        [256, 512, 1024, 4],
        [8, 16, 32, 64],
    ]);
    assert!(state.apply_move(Direction::Left));
    assert_eq!(state.board().tile_count(), 16);
    let event = state.last_event().unwrap();
    assert_eq!(event.spawned.map(|(r, c, _)| (r, c)), Some((0, 3)));
}

#[test]
fn test_win_reported_once_and_sticky() {
    let mut state = game([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert!(state.apply_move(Direction::Left));
    assert!(state.has_won());
    assert!(state.board().contains(WIN_VALUE));

    assert!(state.apply_action(GameAction::ContinueAfterWin));
    assert!(state.is_continuing_after_win());

    // Moves remain legal after the win.
    let moved = Direction::ALL.iter().any(|&d| state.apply_move(d));
    assert!(moved);
    assert!(state.has_won());
}

#[test]
fn test_game_over_then_reset() {
    let mut state = game([
        [0, 8, 16, 32],
        [64, 128, 256, 512],
        [8, 16, 32, 64],
        [128, 256, 512, 1024],
    ]);
    assert!(state.apply_move(Direction::Left));
    assert!(state.is_game_over());
    assert!(!state.apply_move(Direction::Right));

    state.reset();
    assert!(!state.is_game_over());
    assert_eq!(state.board().tile_count(), 2);
}

#[test]
fn test_full_board_with_equal_neighbours_not_over() {
    let state = game([
        [2, 4, 8, 16],
        [4, 8, 16, 32],
        [8, 16, 32, 64],
        [16, 32, 64, 64],
    ]);
    assert!(state.board().is_full());
    assert!(!state.is_game_over());
}

#[test]
fn test_largest_tiles_do_not_merge() {
    let top = 1u32 << 31;
    let mut state = game([[top, top, 0, 0], [0; 4], [0; 4], [0; 4]]);

    // Already packed against the left edge and unable to merge.
    assert!(!state.apply_move(Direction::Left));
    assert_eq!(line(&state, 0), [top, top, 0, 0]);
    assert_eq!(state.score(), 0);

    assert!(state.apply_move(Direction::Right));
    assert_eq!(&line(&state, 0)[2..], &[top, top]);
    assert_eq!(state.last_event().unwrap().merges, 0);
    for (_, _, cell) in state.board().iter() {
        if let Some(tile) = cell {
            assert!(tile.value().is_power_of_two());
        }
    }
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Right),
        Just(Direction::Down),
        Just(Direction::Left),
    ]
}

fn board_strategy() -> impl Strategy<Value = [[u32; BOARD_SIZE]; BOARD_SIZE]> {
    // 0 = empty, otherwise 2^1..=2^11
    let cell = prop_oneof![Just(0u32), (1u32..=11).prop_map(|e| 1 << e)];
    proptest::array::uniform4(proptest::array::uniform4(cell))
}

proptest! {
    #[test]
    fn prop_successful_move_adds_one_tile_unless_full(
        values in board_strategy(),
        direction in direction_strategy(),
        seed in any::<u64>(),
    ) {
        let mut state = GameState::with_board(Board::from_values(values).unwrap(), seed);
        let before = *state.board();

        if state.apply_move(direction) {
            let event = state.last_event().unwrap();
            let after = state.board().tile_count();
            // merges remove one tile each, the spawn adds one back
            let expected = before.tile_count() - event.merges as usize + 1;
            prop_assert_eq!(after, expected);
            prop_assert!(event.spawned.is_some());
        } else {
            prop_assert_eq!(*state.board(), before);
            prop_assert_eq!(state.score(), 0);
            prop_assert!(state.last_event().is_none());
        }
    }

    #[test]
    fn prop_score_grows_by_merge_points(
        seed in any::<u64>(),
        directions in proptest::collection::vec(direction_strategy(), 1..200),
    ) {
        let mut state = GameState::new(seed);
        for direction in directions {
            let score = state.score();
            let won = state.has_won();
            let over = state.is_game_over();
            if state.apply_move(direction) {
                let event = state.last_event().unwrap();
                prop_assert_eq!(state.score(), score + event.points);
                prop_assert!(state.has_won() || !won);
            } else {
                prop_assert_eq!(state.score(), score);
                prop_assert_eq!(state.has_won(), won);
                prop_assert_eq!(state.is_game_over(), over);
            }
        }
    }

    #[test]
    fn prop_tiles_stay_valid(
        seed in any::<u64>(),
        directions in proptest::collection::vec(direction_strategy(), 1..300),
    ) {
        let mut state = GameState::new(seed);
        for direction in directions {
            state.apply_move(direction);
            prop_assert!(state.board().tile_count() <= 16);
            for (_, _, cell) in state.board().iter() {
                if let Some(tile) = cell {
                    prop_assert!(tile.value() >= 2 && tile.value().is_power_of_two());
                }
            }
        }
    }

    #[test]
    fn prop_game_over_iff_stuck(
        seed in any::<u64>(),
        directions in proptest::collection::vec(direction_strategy(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        for direction in directions {
            state.apply_move(direction);
            prop_assert_eq!(state.is_game_over(), !state.board().can_move());
        }
    }

    #[test]
    fn prop_best_score_never_decreases(
        seed in any::<u64>(),
        start_best in 0u32..5000,
        actions in proptest::collection::vec(
            prop_oneof![
                8 => direction_strategy().prop_map(GameAction::Move),
                1 => Just(GameAction::NewGame),
                1 => Just(GameAction::ContinueAfterWin),
            ],
            1..300,
        ),
    ) {
        let mut state = GameState::new(seed);
        state.set_best_score(start_best);
        let mut best = state.best_score();
        for action in actions {
            state.apply_action(action);
            prop_assert!(state.best_score() >= best);
            prop_assert!(state.best_score() >= state.score());
            best = state.best_score();
        }
    }

    #[test]
    fn prop_same_seed_same_game(
        seed in any::<u64>(),
        directions in proptest::collection::vec(direction_strategy(), 1..200),
    ) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        for direction in directions {
            prop_assert_eq!(a.apply_move(direction), b.apply_move(direction));
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}

//! Board engine integration tests.

use rust_2048::core::{EngineError, Grid, SpawnSource, Tile, CELLS};
use rust_2048::engine::{BoardEngine, GameStatus, SpawnedTile};
use rust_2048::{combine, compact, Direction, GameRng};

fn grid(cells: [Tile; CELLS]) -> Grid {
    Grid::from_cells(cells).unwrap()
}

fn engine_at(cells: [Tile; CELLS]) -> BoardEngine {
    BoardEngine::from_grid(grid(cells), 0, GameRng::new(42))
}

/// Always picks the last empty cell and always spawns a 2.
struct LastCell;

impl SpawnSource for LastCell {
    fn choose_index(&mut self, len: usize) -> usize {
        len - 1
    }

    fn chance(&mut self, _probability: f64) -> bool {
        false
    }
}

// =============================================================================
// Line Kernel
// =============================================================================

#[test]
fn test_compact_pads_right() {
    assert_eq!(compact([0, 2, 0, 4]), [2, 4, 0, 0]);
}

#[test]
fn test_combine_four_equal() {
    assert_eq!(combine([2, 2, 2, 2]), ([4, 0, 4, 0], 8));
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_left_merge_scenario() {
    let mut engine = engine_at([2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    let result = engine.apply_move(Direction::Left);

    assert!(result.changed);
    assert_eq!(result.score_delta, 4);
    assert_eq!(
        result.grid,
        grid([4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    );
}

#[test]
fn test_every_direction_on_one_board() {
    let start = [
        2, 0, 2, 4, //
        0, 4, 0, 4, //
        2, 0, 0, 0, //
        2, 4, 8, 8, //
    ];

    let cases = [
        (
            Direction::Left,
            [4, 4, 0, 0, 8, 0, 0, 0, 2, 0, 0, 0, 2, 4, 16, 0],
            4 + 8 + 16,
        ),
        (
            Direction::Right,
            [0, 0, 4, 4, 0, 0, 0, 8, 0, 0, 0, 2, 0, 2, 4, 16],
            4 + 8 + 16,
        ),
        (
            Direction::Up,
            [4, 8, 2, 8, 2, 0, 8, 8, 0, 0, 0, 0, 0, 0, 0, 0],
            4 + 8 + 8,
        ),
        (
            Direction::Down,
            [0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 8, 4, 8, 8, 8],
            4 + 8 + 8,
        ),
    ];

    for (dir, expected, delta) in cases {
        let mut engine = engine_at(start);
        let result = engine.apply_move(dir);
        assert_eq!(result.grid, grid(expected), "{dir}");
        assert_eq!(result.score_delta, delta, "{dir}");
        assert!(result.changed, "{dir}");
    }
}

#[test]
fn test_repeated_move_reaches_fixed_point() {
    let mut engine = engine_at([2, 2, 4, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    let first = engine.apply_move(Direction::Left);
    assert_eq!(first.grid.cells()[..4], [4, 4, 8, 0]);
    let second = engine.apply_move(Direction::Left);
    assert_eq!(second.grid.cells()[..4], [8, 8, 0, 0]);
    let third = engine.apply_move(Direction::Left);
    assert_eq!(third.grid.cells()[..4], [16, 0, 0, 0]);

    let fixed = engine.apply_move(Direction::Left);
    assert!(!fixed.changed);
    assert_eq!(fixed.score_delta, 0);
    assert_eq!(engine.score(), 4 + 8 + 16);
}

#[test]
fn test_invalid_direction_leaves_board() {
    let mut engine = engine_at([2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let before = engine.grid();

    for bad in ["", "UPWARD", "diag", "5"] {
        let err = engine.apply_named_move(bad).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)), "{bad:?}");
    }
    assert!(Direction::try_from(7u8).is_err());

    assert_eq!(engine.grid(), before);
    assert_eq!(engine.score(), 0);
}

// =============================================================================
// Spawning
// =============================================================================

#[test]
fn test_spawn_fills_board_then_signals_full() {
    let mut engine = BoardEngine::with_source(LastCell);

    for expected_index in (0..CELLS).rev() {
        let spawned = engine.spawn_tile().unwrap();
        assert_eq!(spawned, SpawnedTile { index: expected_index, value: 2 });
    }

    let full = engine.grid();
    assert!(full.is_full());
    assert_eq!(engine.spawn_tile(), Err(EngineError::BoardFull));
    assert_eq!(engine.grid(), full);
}

#[test]
fn test_seeded_spawns_are_reproducible() {
    let run = |seed| {
        let mut engine = BoardEngine::new(seed);
        (0..10)
            .map(|_| engine.spawn_tile().unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(2024), run(2024));
    assert_ne!(run(1), run(2));
}

#[test]
fn test_spawn_ratio_is_roughly_one_in_ten() {
    let mut engine = BoardEngine::new(77);
    let mut fours = 0;
    let trials = 4000;

    for _ in 0..trials {
        let spawned = engine.spawn_tile().unwrap();
        if spawned.value == 4 {
            fours += 1;
        }
        // Clear the board again by rebuilding it.
        engine = BoardEngine::from_grid(Grid::EMPTY, 0, engine.source().clone());
    }

    // Expected 400; allow a wide band.
    assert!((250..=550).contains(&fours), "fours = {fours}");
}

#[test]
fn test_restored_rng_replays_spawns() {
    let mut engine = BoardEngine::new(5);
    engine.spawn_tile().unwrap();

    let state = engine.source().state();
    let grid = engine.grid();
    let expected: Vec<_> = (0..5).map(|_| engine.spawn_tile().unwrap()).collect();

    let mut replay = BoardEngine::from_grid(grid, 0, GameRng::from_state(&state));
    let actual: Vec<_> = (0..5).map(|_| replay.spawn_tile().unwrap()).collect();

    assert_eq!(expected, actual);
}

// =============================================================================
// Terminal Detection
// =============================================================================

#[test]
fn test_full_board_without_pairs_is_over() {
    let engine = engine_at([
        2, 4, 8, 16, //
        32, 64, 128, 256, //
        2, 4, 8, 16, //
        32, 64, 128, 256, //
    ]);

    assert!(!engine.has_moves_available());
    assert_eq!(engine.status(), GameStatus::Over);
}

#[test]
fn test_full_board_with_pair_is_playing() {
    let engine = engine_at([
        2, 4, 8, 16, //
        32, 64, 128, 256, //
        2, 4, 8, 16, //
        32, 64, 128, 16, //
    ]);

    assert!(engine.has_moves_available());
    assert_eq!(engine.status(), GameStatus::Playing);
}

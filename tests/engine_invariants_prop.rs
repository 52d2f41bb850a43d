//! Property tests for the move kernel and the board engine.
//!
//! Invariants covered:
//! - Sliding preserves the tile sum and keeps every tile a power of two.
//! - Compaction never reorders tiles; a merge pass never merges twice.
//! - A move that does not change the board is a fixed point.
//! - The score equals the sum of all move deltas.
//! - Spawns land only in cells that were empty.
//! - On a non-empty board, `has_moves_available` agrees with `legal_moves`.

use proptest::prelude::*;
use rust_2048::core::{is_valid_tile, Grid, Tile, CELLS, EMPTY};
use rust_2048::{combine, compact, slide_line, BoardEngine, Direction, GameRng};

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        3 => Just(EMPTY),
        5 => (1u32..=11).prop_map(|e| 1 << e),
    ]
}

fn line() -> impl Strategy<Value = [Tile; 4]> {
    prop::array::uniform4(tile())
}

fn any_grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform16(tile()).prop_map(|cells| Grid::from_cells(cells).unwrap())
}

fn direction() -> impl Strategy<Value = Direction> {
    (0u8..4).prop_map(|code| Direction::try_from(code).unwrap())
}

proptest! {
    #[test]
    fn compact_keeps_order_and_pads(values in line()) {
        let out = compact(values);
        let before: Vec<_> = values.iter().copied().filter(|&v| v != EMPTY).collect();
        let after: Vec<_> = out.iter().copied().filter(|&v| v != EMPTY).collect();

        prop_assert_eq!(&before, &after);
        prop_assert!(out[before.len()..].iter().all(|&v| v == EMPTY));
    }

    #[test]
    fn combine_merges_each_tile_at_most_once(values in line()) {
        let compacted = compact(values);
        let (out, gained) = combine(compacted);

        let sum_in: u64 = compacted.iter().map(|&v| u64::from(v)).sum();
        let sum_out: u64 = out.iter().map(|&v| u64::from(v)).sum();
        prop_assert_eq!(sum_in, sum_out);

        // Each merge consumes two tiles and produces one worth their sum,
        // so the merge count bounds both the delta and the tile loss.
        let tiles_in = compacted.iter().filter(|&&v| v != EMPTY).count();
        let tiles_out = out.iter().filter(|&&v| v != EMPTY).count();
        let merges = tiles_in - tiles_out;
        prop_assert!(merges <= 2);
        prop_assert!(gained <= sum_in);
        prop_assert_eq!(merges == 0, gained == 0);
    }

    #[test]
    fn slide_line_output_is_compact(values in line()) {
        let (out, _) = slide_line(values);
        prop_assert_eq!(compact(out), out);
        prop_assert!(out.iter().all(|&v| is_valid_tile(v)));
    }

    #[test]
    fn shift_preserves_sum_and_tiles(grid in any_grid(), dir in direction()) {
        let (next, _) = grid.shift(dir);
        prop_assert_eq!(grid.tile_sum(), next.tile_sum());
        prop_assert!(next.cells().iter().all(|&v| is_valid_tile(v)));
        prop_assert!(next.empty_count() >= grid.empty_count());
    }

    #[test]
    fn unchanged_move_is_a_fixed_point(grid in any_grid(), dir in direction()) {
        let mut engine = BoardEngine::from_grid(grid, 0, GameRng::new(0));

        // Each changing move merges or moves at least one tile toward the edge,
        // so sixteen rounds are more than enough to settle.
        let mut settled = false;
        for _ in 0..16 {
            if !engine.apply_move(dir).changed {
                settled = true;
                break;
            }
        }
        prop_assert!(settled);

        let again = engine.apply_move(dir);
        prop_assert!(!again.changed);
        prop_assert_eq!(again.score_delta, 0);
    }

    #[test]
    fn score_is_sum_of_deltas(seed in any::<u64>(), codes in prop::collection::vec(0u8..4, 0..80)) {
        let mut engine = BoardEngine::new(seed);
        engine.spawn_tile().unwrap();
        engine.spawn_tile().unwrap();

        let mut total = 0u64;
        for code in codes {
            let dir = Direction::try_from(code).unwrap();
            let before = engine.score();
            let result = engine.apply_move(dir);
            total += result.score_delta;

            prop_assert!(engine.score() >= before);
            prop_assert!(engine.grid().cells().iter().all(|&v| is_valid_tile(v)));

            if result.changed {
                engine.spawn_tile().unwrap();
            }
        }

        prop_assert_eq!(engine.score(), total);
    }

    #[test]
    fn spawn_lands_on_empty_cell(grid in any_grid(), seed in any::<u64>()) {
        let mut engine = BoardEngine::from_grid(grid, 0, GameRng::new(seed));

        match engine.spawn_tile() {
            Ok(spawned) => {
                prop_assert_eq!(grid.cells()[spawned.index], EMPTY);
                prop_assert!(spawned.value == 2 || spawned.value == 4);

                let after = engine.grid();
                prop_assert_eq!(after.empty_count() + 1, grid.empty_count());
                for i in (0..CELLS).filter(|&i| i != spawned.index) {
                    prop_assert_eq!(after.cells()[i], grid.cells()[i]);
                }
            }
            Err(_) => {
                prop_assert!(grid.is_full());
                prop_assert_eq!(engine.grid(), grid);
            }
        }
    }

    #[test]
    fn availability_matches_legal_moves(grid in any_grid()) {
        prop_assume!(grid.empty_count() < CELLS);
        let engine = BoardEngine::from_grid(grid, 0, GameRng::new(0));

        let any_legal = engine.legal_moves().iter().any(|&legal| legal);
        prop_assert_eq!(engine.has_moves_available(), any_legal);
    }
}

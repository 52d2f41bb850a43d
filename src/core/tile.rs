//! Tile values.
//!
//! A tile is `0` (empty) or a power of two `>= 2`. The board never stores
//! anything else; grids built from external data are checked with
//! [`is_valid_tile`].

/// A single cell value.
pub type Tile = u32;

/// The empty cell.
pub const EMPTY: Tile = 0;

/// Largest value accepted when building a grid from external data.
///
/// Merges on a validated grid stay far below `u32::MAX`: sixteen cells of
/// at most `MAX_TILE` sum to `2^24`, and merging preserves the sum.
pub const MAX_TILE: Tile = 1 << 20;

/// Check that a value may appear in a grid.
#[must_use]
pub const fn is_valid_tile(value: Tile) -> bool {
    value == EMPTY || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Base-2 exponent of a tile (`2 -> 1`, `2048 -> 11`); `0` for empty cells.
#[must_use]
pub const fn exponent(value: Tile) -> u32 {
    if value == EMPTY {
        0
    } else {
        value.trailing_zeros()
    }
}

/// Background color for a tile.
///
/// Presentation layers can use this as-is or ignore it; it only has to be
/// deterministic.
///
/// ```
/// use rust_2048::core::tile_color;
///
/// assert_eq!(tile_color(0), "#cdc1b4");
/// assert_eq!(tile_color(2), "#3c8c8c");
/// assert_eq!(tile_color(32), "#fc8c8c");
/// ```
#[must_use]
pub fn tile_color(value: Tile) -> String {
    if value == EMPTY {
        return "#cdc1b4".to_string();
    }
    format!("#{:x}c8c8c", (exponent(value) * 3) % 16)
}

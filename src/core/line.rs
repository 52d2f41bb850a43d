//! Slide and merge a single line of four tiles.
//!
//! Lines are always processed toward index 0; the direction table decides
//! which grid cells a line is read from.

use super::grid::SIDE;
use super::tile::{Tile, EMPTY};

/// Four tiles in traversal order.
pub type Row = [Tile; SIDE];

/// Remove gaps, keeping non-zero tiles in order and padding with zeros.
///
/// ```
/// use rust_2048::core::compact;
///
/// assert_eq!(compact([0, 2, 0, 4]), [2, 4, 0, 0]);
/// ```
#[must_use]
pub fn compact(line: Row) -> Row {
    let mut out = [EMPTY; SIDE];
    for (slot, value) in out
        .iter_mut()
        .zip(line.into_iter().filter(|&v| v != EMPTY))
    {
        *slot = value;
    }
    out
}

/// Merge adjacent equal tiles left to right.
///
/// A merged pair becomes `(double, 0)` and the scan skips past it, so a
/// tile produced by a merge is never merged again in the same pass.
/// Returns the new line and the sum of all merged values.
///
/// ```
/// use rust_2048::core::combine;
///
/// assert_eq!(combine([2, 2, 2, 2]), ([4, 0, 4, 0], 8));
/// ```
#[must_use]
pub fn combine(mut line: Row) -> (Row, u64) {
    let mut gained = 0u64;
    let mut i = 0;

    while i + 1 < SIDE {
        if line[i] != EMPTY && line[i] == line[i + 1] {
            let merged = line[i] * 2;
            line[i] = merged;
            line[i + 1] = EMPTY;
            gained += u64::from(merged);
            i += 2;
        } else {
            i += 1;
        }
    }

    (line, gained)
}

/// Full move kernel for one line: compact, combine, compact again.
#[must_use]
pub fn slide_line(line: Row) -> (Row, u64) {
    let (merged, gained) = combine(compact(line));
    (compact(merged), gained)
}

//! The 4x4 grid.
//!
//! `Grid` is a plain `Copy` value: sixteen tiles in row-major order
//! (`index = row * 4 + col`). The engine owns one and hands out copies.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;
use super::error::EngineError;
use super::line::slide_line;
use super::tile::{is_valid_tile, Tile, EMPTY};

/// Width and height of the board.
pub const SIDE: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Indices of empty cells. Never longer than the board.
pub type EmptyCells = SmallVec<[usize; CELLS]>;

/// A 4x4 board of tiles.
///
/// Deserializing goes through [`Grid::from_cells`], so invalid tiles are
/// rejected there too.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[Tile; CELLS]")]
pub struct Grid([Tile; CELLS]);

impl Grid {
    /// The empty board.
    pub const EMPTY: Grid = Grid([EMPTY; CELLS]);

    /// Build a grid from sixteen row-major values.
    ///
    /// Every value must be `0` or a power of two `>= 2`.
    pub fn from_cells(cells: [Tile; CELLS]) -> Result<Self, EngineError> {
        if let Some((index, &value)) = cells.iter().enumerate().find(|(_, &v)| !is_valid_tile(v)) {
            return Err(EngineError::InvalidTile { index, value });
        }
        Ok(Self(cells))
    }

    /// Build a grid from four rows, top to bottom.
    ///
    /// ```
    /// use rust_2048::core::Grid;
    ///
    /// let grid = Grid::from_rows([
    ///     [2, 2, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 4, 0],
    ///     [0, 0, 0, 0],
    /// ]).unwrap();
    /// assert_eq!(grid.get(2, 2), 4);
    /// ```
    pub fn from_rows(rows: [[Tile; SIDE]; SIDE]) -> Result<Self, EngineError> {
        let mut cells = [EMPTY; CELLS];
        for (row, values) in rows.iter().enumerate() {
            cells[row * SIDE..(row + 1) * SIDE].copy_from_slice(values);
        }
        Self::from_cells(cells)
    }

    /// Row-major cell values.
    #[must_use]
    pub fn cells(&self) -> &[Tile; CELLS] {
        &self.0
    }

    /// Consume the grid, returning its cells.
    #[must_use]
    pub fn into_cells(self) -> [Tile; CELLS] {
        self.0
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> [[Tile; SIDE]; SIDE] {
        std::array::from_fn(|r| std::array::from_fn(|c| self.0[r * SIDE + c]))
    }

    /// Tile at `(row, col)`.
    ///
    /// # Panics
    /// If `row` or `col` is not below [`SIDE`].
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        assert!(row < SIDE && col < SIDE, "cell ({row}, {col}) is off the board");
        self.0[row * SIDE + col]
    }

    /// Place `value` at `index`. Crate-internal: callers guarantee a valid tile.
    pub(crate) fn set(&mut self, index: usize, value: Tile) {
        debug_assert!(is_valid_tile(value));
        self.0[index] = value;
    }

    /// Indices of empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.0.iter().filter(|&&v| v == EMPTY).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.0.contains(&EMPTY)
    }

    /// Largest tile on the board (`0` when empty).
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.0.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tiles.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.0.iter().map(|&v| u64::from(v)).sum()
    }

    /// Slide every line toward `dir`, returning the new grid and the points
    /// gained from merges. Does not spawn.
    ///
    /// ```
    /// use rust_2048::core::{Direction, Grid};
    ///
    /// let grid = Grid::from_rows([
    ///     [2, 2, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    /// ]).unwrap();
    /// let (next, gained) = grid.shift(Direction::Left);
    /// assert_eq!(next.get(0, 0), 4);
    /// assert_eq!(gained, 4);
    /// ```
    #[must_use]
    pub fn shift(self, dir: Direction) -> (Grid, u64) {
        let mut next = self;
        let mut gained = 0u64;

        for line in dir.lines() {
            let values = line.map(|idx| self.0[idx]);
            let (slid, points) = slide_line(values);
            for (idx, value) in line.into_iter().zip(slid) {
                next.0[idx] = value;
            }
            gained += points;
        }

        (next, gained)
    }

    /// True if any cell is empty or any two orthogonally adjacent cells hold
    /// the same non-zero value.
    ///
    /// This is a read-only adjacency scan, not a simulation of the four moves.
    #[must_use]
    pub fn has_moves_available(&self) -> bool {
        if !self.is_full() {
            return true;
        }

        for row in 0..SIDE {
            for col in 0..SIDE {
                let tile = self.0[row * SIDE + col];
                if tile == EMPTY {
                    continue;
                }
                if col + 1 < SIDE && tile == self.0[row * SIDE + col + 1] {
                    return true;
                }
                if row + 1 < SIDE && tile == self.0[(row + 1) * SIDE + col] {
                    return true;
                }
            }
        }

        false
    }
}

impl TryFrom<[Tile; CELLS]> for Grid {
    type Error = EngineError;

    fn try_from(cells: [Tile; CELLS]) -> Result<Self, Self::Error> {
        Grid::from_cells(cells)
    }
}

impl TryFrom<&[Tile]> for Grid {
    type Error = EngineError;

    fn try_from(cells: &[Tile]) -> Result<Self, Self::Error> {
        let cells: [Tile; CELLS] = cells.try_into().map_err(|_| {
            EngineError::InvalidArgument(format!(
                "grid needs exactly {CELLS} cells, got {}",
                cells.len()
            ))
        })?;
        Grid::from_cells(cells)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows().iter()).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if tile == EMPTY {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{tile:>5}")?;
                }
            }
        }
        Ok(())
    }
}

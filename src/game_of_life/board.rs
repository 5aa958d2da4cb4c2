//! Sparse board representation for Game of Life

use super::error::{LifeError, Result};
use super::rules::GameOfLifeRules;
use itertools::{iproduct, Itertools};
use std::collections::HashSet;
use std::fmt;

/// A cell coordinate `(x, y)`, 0-indexed
pub type Cell = (i32, i32);

/// The set of live cells at one generation
pub type LiveSet = HashSet<Cell>;

/// A bounded board holding only its live cells.
///
/// Every coordinate in `cells` lies within `[0, width) x [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cells: LiveSet,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_cells(width, height, LiveSet::new())
    }

    /// Create a board from a set of cells, discarding any outside the bounds
    pub fn with_cells(width: i32, height: i32, cells: LiveSet) -> Result<Self> {
        check_dimensions(width, height)?;
        let mut board = Self {
            width,
            height,
            cells: LiveSet::new(),
        };
        board.replace_cells(cells);
        Ok(board)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cells(&self) -> &LiveSet {
        &self.cells
    }

    /// Whether `(x, y)` lies on the board
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn live_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Live cells sorted by `(x, y)`
    pub fn sorted_cells(&self) -> Vec<Cell> {
        self.cells.iter().copied().sorted().collect()
    }

    /// Swap in a new live set wholesale. Out-of-bounds cells are dropped.
    pub fn replace_cells(&mut self, cells: LiveSet) {
        self.cells = cells
            .into_iter()
            .filter(|&(x, y)| self.in_bounds(x, y))
            .collect();
    }

    /// In-bounds Moore neighbours of `(x, y)`; the board does not wrap
    pub fn in_bounds_neighbors(&self, x: i32, y: i32) -> impl Iterator<Item = Cell> + '_ {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&(nx, ny)| self.in_bounds(nx, ny))
    }

    /// Count live cells among the in-bounds neighbours of `(x, y)`
    pub fn neighbor_count(&self, x: i32, y: i32) -> u8 {
        let count = self
            .in_bounds_neighbors(x, y)
            .filter(|cell| self.cells.contains(cell))
            .count() as u8;
        debug_assert!(GameOfLifeRules::is_valid_neighbor_count(count));
        count
    }

    /// Compute the successor live set without touching `self`.
    ///
    /// Only live cells and their in-bounds neighbours are examined, so the
    /// cost scales with the population rather than the board area.
    pub fn next_generation(&self) -> LiveSet {
        let mut candidates: HashSet<Cell> = self.cells.clone();
        for &(x, y) in &self.cells {
            candidates.extend(self.in_bounds_neighbors(x, y));
        }

        candidates
            .into_iter()
            .filter(|&(x, y)| {
                GameOfLifeRules::should_be_alive(self.is_alive(x, y), self.neighbor_count(x, y))
            })
            .collect()
    }

    /// Change the dimensions, discarding cells that fall outside.
    /// Coordinates are never rescaled.
    pub fn resize(&mut self, new_width: i32, new_height: i32) -> Result<()> {
        check_dimensions(new_width, new_height)?;
        self.width = new_width;
        self.height = new_height;
        let cells = std::mem::take(&mut self.cells);
        self.replace_cells(cells);
        Ok(())
    }
}

fn check_dimensions(width: i32, height: i32) -> Result<()> {
    if width <= 0 || height <= 0 {
        return Err(LifeError::InvalidDimension { width, height });
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = if self.is_alive(x, y) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

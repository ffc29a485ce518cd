//! A single cell of the Game of Life grid

use std::fmt;

/// Glyph rendered for a live cell
pub const ALIVE_GLYPH: char = '+';
/// Glyph rendered for a dead cell
pub const DEAD_GLYPH: char = '-';

/// A cell tracks its own liveness and the liveness it will adopt in the
/// next generation.
///
/// The staged state is only meaningful between [`Cell::compute_next`] and
/// [`Cell::commit`] within one generation advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    column: usize,
    alive: bool,
    pending_alive: bool,
}

impl Cell {
    /// Create a new, initially dead cell at the given coordinates
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            alive: false,
            pending_alive: false,
        }
    }

    /// Current liveness
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Set the cell alive
    pub fn make_alive(&mut self) {
        self.alive = true;
    }

    /// Set the cell dead
    pub fn make_dead(&mut self) {
        self.alive = false;
    }

    /// Row coordinate within the grid
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column coordinate within the grid
    pub fn column(&self) -> usize {
        self.column
    }

    /// Stage the next liveness from the number of live neighbors.
    ///
    /// Fewer than 2 or more than 3 neighbors kills the cell, exactly 3
    /// makes it alive, and exactly 2 keeps whatever it currently is.
    pub fn compute_next(&mut self, neighbor_live_count: u8) {
        self.pending_alive = match neighbor_live_count {
            n if n < 2 || n > 3 => false,
            3 => true,
            _ => self.alive,
        };
    }

    /// Adopt the liveness staged by [`Cell::compute_next`]
    pub fn commit(&mut self) {
        self.alive = self.pending_alive;
    }

    /// The glyph for this cell's current state
    pub fn glyph(&self) -> char {
        if self.alive {
            ALIVE_GLYPH
        } else {
            DEAD_GLYPH
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

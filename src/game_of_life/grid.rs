//! Fixed-size grid of cells and the generation advance

use super::Cell;
use crate::error::LifeError;
use itertools::Itertools;
use rayon::prelude::*;
use std::fmt;

/// A fixed-size, non-wrapping rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of dead cells.
    ///
    /// Both dimensions must be positive, and the grid must fit in memory;
    /// neither failure panics.
    pub fn new(rows: usize, columns: usize) -> Result<Self, LifeError> {
        if rows == 0 || columns == 0 {
            return Err(LifeError::InvalidDimensions {
                rows: rows as i64,
                columns: columns as i64,
            });
        }

        let too_large = LifeError::TooLarge { rows, columns };
        let count = rows.checked_mul(columns).ok_or_else(|| too_large.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| too_large)?;
        cells.extend(
            (0..rows)
                .cartesian_product(0..columns)
                .map(|(row, column)| Cell::new(row, column)),
        );

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row-major storage index, or `None` when the coordinates fall outside the grid
    #[inline]
    fn index(&self, row: isize, column: isize) -> Option<usize> {
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    /// Look up the cell at the given coordinates.
    ///
    /// Out-of-range coordinates, including negative ones, yield `None`.
    pub fn get_cell(&self, row: isize, column: isize) -> Option<&Cell> {
        self.index(row, column).map(|idx| &self.cells[idx])
    }

    /// Mutable lookup, used to place the initial population
    pub fn get_cell_mut(&mut self, row: isize, column: isize) -> Option<&mut Cell> {
        self.index(row, column).map(move |idx| &mut self.cells[idx])
    }

    /// Mark the cell at the given coordinates alive
    pub fn set_alive(&mut self, row: isize, column: isize) -> Result<(), LifeError> {
        self.cell_or_err(row, column)?.make_alive();
        Ok(())
    }

    /// Mark the cell at the given coordinates dead
    pub fn set_dead(&mut self, row: isize, column: isize) -> Result<(), LifeError> {
        self.cell_or_err(row, column)?.make_dead();
        Ok(())
    }

    fn cell_or_err(&mut self, row: isize, column: isize) -> Result<&mut Cell, LifeError> {
        let (rows, columns) = (self.rows, self.columns);
        self.get_cell_mut(row, column).ok_or(LifeError::NoSuchCell {
            row: row as i64,
            column: column as i64,
            rows,
            columns,
        })
    }

    /// Count the live cells among the (up to) 8 neighbors of a cell.
    ///
    /// Neighbors outside the grid contribute nothing, so edge and corner
    /// cells simply have fewer candidates.
    pub fn count_live_neighbors(&self, row: usize, column: usize) -> u8 {
        let (row, column) = (row as isize, column as isize);

        (-1isize..=1)
            .cartesian_product(-1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter_map(|(dr, dc)| self.get_cell(row + dr, column + dc))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance every cell by one generation.
    ///
    /// Phase 1 stages the next state of every cell from counts taken against
    /// the current generation; phase 2 commits them. No cell is committed
    /// until every cell has been staged.
    pub fn advance(&mut self) {
        let columns = self.columns;
        let counts: Vec<u8> = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.count_live_neighbors(idx / columns, idx % columns))
            .collect();

        for (cell, count) in self.cells.iter_mut().zip(counts) {
            cell.compute_next(count);
        }

        for cell in self.cells.iter_mut() {
            cell.commit();
        }
    }

    /// Number of live cells, recounted on every call
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of all live cells in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.row(), cell.column()))
            .collect()
    }

    /// Row-major liveness of every cell
    pub fn snapshot(&self) -> Vec<bool> {
        self.cells.iter().map(Cell::is_alive).collect()
    }

    /// Iterate over the rows of the grid, top to bottom
    pub fn cell_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cell_rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! A single game: the grid plus its generation counter

use super::{Cell, Grid};
use anyhow::Result;
use log::trace;

/// Manages one Game of Life universe as it evolves
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    generation: u64,
}

/// Why a [`Game::run`] loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of generations was reached
    GenerationLimit,
    /// An evolution left every cell unchanged
    Static,
    /// The observer asked to stop
    Halted,
}

/// Outcome of a [`Game::run`] loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations_run: u64,
    pub final_generation: u64,
    pub final_population: usize,
    pub stop_reason: StopReason,
}

impl Game {
    /// Start a game at generation 0 from an already populated grid
    pub fn new(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn get_cell(&self, row: isize, column: isize) -> Option<&Cell> {
        self.grid.get_cell(row, column)
    }

    /// Evolve the universe by one generation.
    ///
    /// Returns `true` if any cell changed state.
    pub fn evolve(&mut self) -> bool {
        let before = self.grid.snapshot();
        self.grid.advance();
        self.generation += 1;

        let changed = before != self.grid.snapshot();
        trace!(
            "generation {}: population {}, changed: {}",
            self.generation,
            self.grid.population(),
            changed
        );
        changed
    }

    /// Play the game for up to `max_generations` evolutions.
    ///
    /// `show` sees the initial state and every state after an evolution.
    /// `next_move` is asked before each evolution and may return `Ok(false)`
    /// to halt. With `stop_when_static`, the loop ends as soon as an
    /// evolution changes nothing, without asking for another move.
    pub fn run<S, M>(
        &mut self,
        max_generations: u64,
        stop_when_static: bool,
        mut show: S,
        mut next_move: M,
    ) -> Result<RunSummary>
    where
        S: FnMut(&Game) -> Result<()>,
        M: FnMut(&Game) -> Result<bool>,
    {
        let mut generations_run = 0;
        let mut stop_reason = StopReason::GenerationLimit;

        show(self)?;
        while generations_run < max_generations {
            if !next_move(self)? {
                stop_reason = StopReason::Halted;
                break;
            }

            let changed = self.evolve();
            generations_run += 1;
            show(self)?;

            if stop_when_static && !changed {
                stop_reason = StopReason::Static;
                break;
            }
        }

        Ok(RunSummary {
            generations_run,
            final_generation: self.generation,
            final_population: self.population(),
            stop_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Game {
        let mut grid = Grid::new(3, 3).unwrap();
        for c in 0..3 {
            grid.set_alive(1, c).unwrap();
        }
        Game::new(grid)
    }

    #[test]
    fn test_generation_counter() {
        let mut game = Game::new(Grid::new(3, 3).unwrap());
        assert_eq!(game.generation(), 0);

        // An empty universe still counts generations
        assert!(!game.evolve());
        assert_eq!(game.generation(), 1);
        assert!(!game.evolve());
        assert_eq!(game.generation(), 2);
    }

    #[test]
    fn test_evolve_reports_change() {
        let mut game = blinker();
        assert!(game.evolve());
        assert_eq!(game.population(), 3);
        assert!(game.get_cell(0, 1).unwrap().is_alive());
        assert!(!game.get_cell(1, 0).unwrap().is_alive());
    }

    #[test]
    fn test_run_until_limit() {
        let mut game = blinker();
        let mut shown = Vec::new();
        let mut moves = 0;
        let summary = game
            .run(
                4,
                true,
                |g| {
                    shown.push(g.generation());
                    Ok(())
                },
                |_| {
                    moves += 1;
                    Ok(true)
                },
            )
            .unwrap();

        assert_eq!(shown, vec![0, 1, 2, 3, 4]);
        // No move is requested after the last generation
        assert_eq!(moves, 4);
        assert_eq!(summary.stop_reason, StopReason::GenerationLimit);
        assert_eq!(summary.generations_run, 4);
        assert_eq!(summary.final_generation, 4);
        assert_eq!(summary.final_population, 3);
    }

    #[test]
    fn test_run_stops_when_static() {
        let mut grid = Grid::new(4, 4).unwrap();
        for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            grid.set_alive(r, c).unwrap();
        }
        let mut game = Game::new(grid);

        let summary = game.run(10, true, |_| Ok(()), |_| Ok(true)).unwrap();
        assert_eq!(summary.stop_reason, StopReason::Static);
        assert_eq!(summary.generations_run, 1);
        assert_eq!(summary.final_population, 4);

        let summary = game.run(3, false, |_| Ok(()), |_| Ok(true)).unwrap();
        assert_eq!(summary.stop_reason, StopReason::GenerationLimit);
        assert_eq!(summary.final_generation, 4);
    }

    #[test]
    fn test_static_universe_wins_over_pending_quit() {
        let mut game = Game::new(Grid::new(3, 3).unwrap());
        let mut asked_at = Vec::new();

        // Would quit if asked again after the first (unchanging) evolution
        let summary = game
            .run(5, true, |_| Ok(()), |g| {
                asked_at.push(g.generation());
                Ok(g.generation() < 1)
            })
            .unwrap();

        assert_eq!(summary.stop_reason, StopReason::Static);
        assert_eq!(summary.generations_run, 1);
        assert_eq!(asked_at, vec![0]);
    }

    #[test]
    fn test_run_halted_by_next_move() {
        let mut game = blinker();
        let summary = game
            .run(10, false, |_| Ok(()), |g| Ok(g.generation() < 2))
            .unwrap();
        assert_eq!(summary.stop_reason, StopReason::Halted);
        assert_eq!(summary.generations_run, 2);

        let mut game = blinker();
        let summary = game.run(10, false, |_| Ok(()), |_| Ok(false)).unwrap();
        assert_eq!(summary.stop_reason, StopReason::Halted);
        assert_eq!(summary.generations_run, 0);
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn test_run_propagates_show_error() {
        let mut game = blinker();
        let result = game.run(
            10,
            false,
            |g| {
                if g.generation() == 1 {
                    anyhow::bail!("display failed");
                }
                Ok(())
            },
            |_| Ok(true),
        );
        assert!(result.is_err());
        assert_eq!(game.generation(), 1);
    }
}

//! Conway's Game of Life
//!
//! A fixed-size, non-wrapping grid of cells that evolves one generation at a
//! time, plus the file format, configuration and display helpers used by the
//! `game_of_life` binary.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Cell, Game, Grid};

use anyhow::Result;
use std::path::Path;

/// Load an initial state file and evolve it for the given number of generations
pub fn simulate<P: AsRef<Path>>(initial_state: P, generations: u64) -> Result<Game> {
    let mut game = game_of_life::load_game_from_file(initial_state)?;
    for _ in 0..generations {
        game.evolve();
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_simulate_blinker() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("blinker.txt");
        std::fs::write(&path, "3 3\n1 0\n1 1\n1 2\n").unwrap();

        let game = simulate(&path, 3).unwrap();
        assert_eq!(game.generation(), 3);
        assert_eq!(game.grid().live_cells(), vec![(0, 1), (1, 1), (2, 1)]);
    }
}

//! File I/O for initial Game of Life states
//!
//! Format: whitespace-separated integers. The first two give the grid
//! dimensions (`rows columns`); every following pair is the `row column`
//! coordinate of an initially live cell, one pair per line.

use super::{Game, Grid};
use crate::error::LifeError;
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// Load a game from an initial state file
pub fn load_game_from_file<P: AsRef<Path>>(path: P) -> Result<Game> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("File not found: {}", path.as_ref().display()))?;

    parse_game_from_string(&content)
        .with_context(|| format!("Failed to parse initial state file: {}", path.as_ref().display()))
}

/// Parse a game from the initial state text format
pub fn parse_game_from_string(content: &str) -> Result<Game> {
    let mut tokens = content
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| line.split_whitespace().map(move |token| (idx + 1, token)));

    let (rows, columns) = match (tokens.next(), tokens.next()) {
        (Some((_, r)), Some((_, c))) => match (r.parse::<i64>(), c.parse::<i64>()) {
            (Ok(rows), Ok(columns)) => (rows, columns),
            _ => anyhow::bail!("Invalid dimensions at line 1"),
        },
        _ => anyhow::bail!("Invalid dimensions at line 1"),
    };

    if rows <= 0 || columns <= 0 {
        return Err(LifeError::InvalidDimensions { rows, columns }.into());
    }

    let mut grid = Grid::new(rows as usize, columns as usize)?;

    while let Some((line, row_token)) = tokens.next() {
        let coordinates = tokens.next().and_then(|(_, column_token)| {
            Some((row_token.parse::<i64>().ok()?, column_token.parse::<i64>().ok()?))
        });
        let (row, column) = coordinates.with_context(|| {
            format!("From initial state file, could not read coordinates at line {}", line)
        })?;

        debug!("Setting initially live cell at {}, {}", row, column);
        grid.set_alive(row as isize, column as isize)
            .with_context(|| format!("Invalid live cell at line {}", line))?;
    }

    Ok(Game::new(grid))
}

/// Save the current live cells of a game in the initial state format
pub fn save_game_to_file<P: AsRef<Path>>(game: &Game, path: P) -> Result<()> {
    let content = game_to_string(game);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write game to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Render a game in the initial state format
pub fn game_to_string(game: &Game) -> String {
    let mut result = format!("{} {}\n", game.rows(), game.columns());
    for (row, column) in game.grid().live_cells() {
        result.push_str(&format!("{} {}\n", row, column));
    }
    result
}

/// Create example initial state files
pub fn create_example_files<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        // Oscillator with period 2
        ("blinker.txt", "3 3\n1 0\n1 1\n1 2\n"),
        // Still life
        ("block.txt", "4 4\n1 1\n1 2\n2 1\n2 2\n"),
        // Spaceship, settles into a block against the far corner
        ("glider.txt", "8 8\n0 1\n1 2\n2 0\n2 1\n2 2\n"),
        ("beacon.txt", "6 6\n1 1\n1 2\n2 1\n3 4\n4 3\n4 4\n"),
    ];

    for (name, content) in examples {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}

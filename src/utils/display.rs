//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::{Game, Grid, RunSummary, StopReason};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Format games and grids for display
pub struct GameFormatter;

impl GameFormatter {
    /// Format a grid using the configured glyphs
    pub fn format_grid(grid: &Grid, display: &DisplayConfig) -> String {
        if display.show_coordinates {
            return Self::format_grid_with_coords(grid, display);
        }

        let mut output = String::with_capacity(grid.rows() * (grid.columns() + 1));
        for row in grid.cell_rows() {
            for cell in row {
                output.push(Self::glyph(cell.is_alive(), display));
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column numbers
    pub fn format_grid_with_coords(grid: &Grid, display: &DisplayConfig) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for column in 0..grid.columns() {
            output.push_str(&format!("{:2}", column % 10));
        }
        output.push('\n');

        for (index, row) in grid.cell_rows().enumerate() {
            output.push_str(&format!("{:2} ", index));
            for cell in row {
                output.push(' ');
                output.push(Self::glyph(cell.is_alive(), display));
            }
            output.push('\n');
        }

        output
    }

    /// One-line status for the current generation
    pub fn format_status(game: &Game) -> String {
        format!(
            "Generation {}, population {}",
            game.generation(),
            game.population()
        )
    }

    /// Status line followed by the rendered grid
    pub fn format_game(game: &Game, display: &DisplayConfig) -> String {
        format!(
            "{}\n{}",
            Self::format_status(game),
            Self::format_grid(game.grid(), display)
        )
    }

    /// Describe how a run ended
    pub fn format_summary(summary: &RunSummary) -> String {
        let reason = match summary.stop_reason {
            StopReason::GenerationLimit => "generation limit reached",
            StopReason::Static => "universe is static",
            StopReason::Halted => "stopped by user",
        };
        format!(
            "Ran {} generation(s), ending at generation {} with population {} ({})",
            summary.generations_run, summary.final_generation, summary.final_population, reason
        )
    }

    fn glyph(alive: bool, display: &DisplayConfig) -> char {
        if alive {
            display.alive_glyph
        } else {
            display.dead_glyph
        }
    }
}

/// Machine-readable view of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub generation: u64,
    pub population: usize,
    pub rows: usize,
    pub columns: usize,
    pub live_cells: Vec<(usize, usize)>,
}

impl GenerationSnapshot {
    pub fn from_game(game: &Game) -> Self {
        Self {
            generation: game.generation(),
            population: game.population(),
            rows: game.rows(),
            columns: game.columns(),
            live_cells: game.grid().live_cells(),
        }
    }

    /// Serialize as a single line of JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

const GREEN: u8 = 32;
const BLUE: u8 = 34;
const RED: u8 = 31;

/// ANSI coloring for console messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOutput {
    enabled: bool,
}

impl ColorOutput {
    /// Color unless `NO_COLOR` is set or the terminal is `dumb`
    pub fn from_env() -> Self {
        let dumb = std::env::var("TERM").map_or(false, |term| term == "dumb");
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none() && !dumb,
        }
    }

    /// Never color
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, GREEN)
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, BLUE)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, RED)
    }

    fn paint(&self, text: &str, code: u8) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

//! Configuration settings for the Game of Life driver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Upper bound on the number of evolutions in one run
    pub max_generations: u64,
    /// End the run as soon as an evolution changes nothing
    pub stop_when_static: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
    pub show_coordinates: bool,
    pub format: OutputFormat,
    /// Wait for the user between generations
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub initial_state_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                max_generations: 10,
                stop_when_static: true,
            },
            display: DisplayConfig::default(),
            input: InputConfig {
                initial_state_file: PathBuf::from("input/initial_states/blinker.txt"),
            },
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            alive_glyph: crate::game_of_life::cell::ALIVE_GLYPH,
            dead_glyph: crate::game_of_life::cell::DEAD_GLYPH,
            show_coordinates: false,
            format: OutputFormat::Text,
            interactive: true,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate_display()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings, including that the initial state file exists
    pub fn validate(&self) -> Result<()> {
        self.validate_display()?;

        if !self.input.initial_state_file.exists() {
            anyhow::bail!(
                "Initial state file does not exist: {}",
                self.input.initial_state_file.display()
            );
        }

        Ok(())
    }

    fn validate_display(&self) -> Result<()> {
        let display = &self.display;
        if display.alive_glyph.is_whitespace() || display.dead_glyph.is_whitespace() {
            anyhow::bail!("Cell glyphs must be visible characters");
        }
        if display.alive_glyph == display.dead_glyph {
            anyhow::bail!(
                "Alive and dead glyphs must differ, both are '{}'",
                display.alive_glyph
            );
        }
        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.max_generations = generations;
        }
        if cli_overrides.no_stop_when_static {
            self.simulation.stop_when_static = false;
        }
        if let Some(ref input_file) = cli_overrides.input_file {
            self.input.initial_state_file = input_file.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.display.format = format;
        }
        if cli_overrides.auto {
            self.display.interactive = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<u64>,
    pub no_stop_when_static: bool,
    pub input_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub auto: bool,
}

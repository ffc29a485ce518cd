//! Configuration management for the Game of Life driver

pub mod settings;

pub use settings::{CliOverrides, DisplayConfig, InputConfig, OutputFormat, Settings, SimulationConfig};

//! Game of Life core functionality

pub mod cell;
pub mod game;
pub mod grid;
pub mod io;

pub use cell::Cell;
pub use game::{Game, RunSummary, StopReason};
pub use grid::Grid;
pub use io::{create_example_files, load_game_from_file, parse_game_from_string, save_game_to_file};

//! Main CLI application for the Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, DisplayConfig, OutputFormat, Settings},
    game_of_life::{create_example_files, load_game_from_file, Game, RunSummary},
    utils::{ColorOutput, GameFormatter, GenerationSnapshot},
};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life on a fixed-size grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve an initial state generation by generation
    Play {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Initial state file (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Maximum number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Keep evolving after the universe stops changing
        #[arg(long)]
        no_stop_when_static: bool,

        /// Advance without waiting for Enter between generations
        #[arg(short, long)]
        auto: bool,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and initial state files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print an initial state without evolving it
    Show {
        /// Initial state file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ColorOutput::from_env().error(&format!("Error: {:#}", err)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let verbose = matches!(cli.command, Commands::Play { verbose: true, .. });
    // Logs go to stderr so stdout stays machine-readable
    simple_logger::SimpleLogger::new()
        .with_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init()
        .context("Failed to initialize logger")?;
    info!("Starting game_of_life v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Play {
            config, input, generations, no_stop_when_static, auto, format, ..
        } => {
            let overrides = CliOverrides {
                generations,
                no_stop_when_static,
                input_file: input,
                format,
                auto,
            };
            play_command(config, overrides)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Show { input } => {
            show_command(input)
        }
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        warn!("Config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn play_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);

    settings.validate()
        .context("Configuration validation failed")?;
    debug!("Settings: {:?}", settings);

    let mut game = load_game_from_file(&settings.input.initial_state_file)
        .context("Failed to load initial state")?;
    info!(
        "Loaded {}x{} grid with {} live cells",
        game.rows(), game.columns(), game.population()
    );

    let stdin = std::io::stdin();
    let summary = play_game(
        &mut game,
        &settings,
        &mut stdin.lock(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )?;

    if settings.display.format == OutputFormat::Text {
        println!(
            "{}",
            ColorOutput::from_env().success(&GameFormatter::format_summary(&summary))
        );
    }
    info!("Finished at generation {}", summary.final_generation);

    Ok(())
}

/// Run the play loop. Generations go to `output`, move prompts to `prompt`.
fn play_game<R: BufRead, W: Write, P: Write>(
    game: &mut Game,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
    prompt: &mut P,
) -> Result<RunSummary> {
    let display = &settings.display;

    game.run(
        settings.simulation.max_generations,
        settings.simulation.stop_when_static,
        |game| emit_generation(&mut *output, game, display),
        |_| {
            if display.interactive {
                trigger_move(&mut *input, &mut *prompt)
            } else {
                Ok(true)
            }
        },
    )
}

/// Write one generation in the configured format
fn emit_generation<W: Write>(output: &mut W, game: &Game, display: &DisplayConfig) -> Result<()> {
    match display.format {
        OutputFormat::Text => writeln!(output, "{}", GameFormatter::format_game(game, display))?,
        OutputFormat::Json => {
            let snapshot = GenerationSnapshot::from_game(game);
            writeln!(output, "{}", snapshot.to_json()?)?;
        }
    }
    output.flush()?;
    Ok(())
}

/// Wait for approval of the next move. Returns `false` if the user quits.
fn trigger_move<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "Press Enter for the next generation (q to quit): ")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)
        .context("Failed to read from standard input")?;

    Ok(read > 0 && !line.trim().eq_ignore_ascii_case("q"))
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let colors = ColorOutput::from_env();
    println!("{}", colors.info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/initial_states");

    for dir in [&config_dir, &input_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_files(&input_dir)
        .context("Failed to create example initial states")?;
    println!("Created example initial states in: {}", input_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut glider_config = Settings::default();
    glider_config.simulation.max_generations = 40;
    glider_config.display.interactive = false;
    glider_config.input.initial_state_file = PathBuf::from("input/initial_states/glider.txt");
    glider_config.to_file(&examples_dir.join("glider.yaml"))?;

    let mut beacon_config = Settings::default();
    beacon_config.simulation.stop_when_static = false;
    beacon_config.display.show_coordinates = true;
    beacon_config.input.initial_state_file = PathBuf::from("input/initial_states/beacon.txt");
    beacon_config.to_file(&examples_dir.join("beacon.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", colors.success("Setup complete!"));
    println!("Run: cargo run -- play --config config/default.yaml");

    Ok(())
}

fn show_command(input_path: PathBuf) -> Result<()> {
    let game = load_game_from_file(&input_path)
        .with_context(|| format!("Failed to load initial state from {}", input_path.display()))?;

    println!("Initial state ({}x{}):", game.rows(), game.columns());
    println!(
        "{}",
        GameFormatter::format_grid_with_coords(game.grid(), &DisplayConfig::default())
    );
    println!("Living cells: {}", game.population());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_of_life::game_of_life::{parse_game_from_string, StopReason};
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life",
            "play",
            "--config", "test.yaml",
            "--generations", "5",
            "--format", "json",
            "--auto",
        ]);
        assert!(cli.is_ok());

        let bad = Cli::try_parse_from(["game_of_life", "play", "--format", "xml"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_trigger_move() {
        let mut output = Vec::new();
        assert!(trigger_move(&mut "\n".as_bytes(), &mut output).unwrap());
        assert!(String::from_utf8(output).unwrap().contains("Press Enter"));

        let mut sink = Vec::new();
        assert!(!trigger_move(&mut "q\n".as_bytes(), &mut sink).unwrap());
        assert!(!trigger_move(&mut "".as_bytes(), &mut sink).unwrap());
    }

    #[test]
    fn test_emit_generation_json() {
        let game = parse_game_from_string("2 2\n1 1\n").unwrap();
        let display = DisplayConfig {
            format: OutputFormat::Json,
            ..DisplayConfig::default()
        };

        let mut output = Vec::new();
        emit_generation(&mut output, &game, &display).unwrap();
        let line = String::from_utf8(output).unwrap();
        let snapshot = GenerationSnapshot::from_json(line.trim()).unwrap();
        assert_eq!(snapshot.live_cells, vec![(1, 1)]);
    }

    #[test]
    fn test_json_play_writes_only_snapshots() {
        let mut settings = Settings::default();
        settings.simulation.max_generations = 3;
        settings.display.format = OutputFormat::Json;

        for interactive in [true, false] {
            settings.display.interactive = interactive;
            let mut game = parse_game_from_string("3 3\n1 0\n1 1\n1 2\n").unwrap();
            let mut output = Vec::new();
            let mut prompt = Vec::new();

            let summary = play_game(
                &mut game,
                &settings,
                &mut "\n\n\n".as_bytes(),
                &mut output,
                &mut prompt,
            )
            .unwrap();
            assert_eq!(summary.generations_run, 3);

            let stdout = String::from_utf8(output).unwrap();
            let generations: Vec<u64> = stdout
                .lines()
                .map(|line| GenerationSnapshot::from_json(line).unwrap().generation)
                .collect();
            assert_eq!(generations, vec![0, 1, 2, 3]);
            assert_eq!(prompt.is_empty(), !interactive);
        }
    }

    #[test]
    fn test_static_play_does_not_prompt_again() {
        let mut settings = Settings::default();
        settings.simulation.max_generations = 5;

        let mut game = parse_game_from_string("4 4\n1 1\n1 2\n2 1\n2 2\n").unwrap();
        let mut output = Vec::new();
        let mut prompt = Vec::new();

        // A second answer would quit, but the block is static after one move
        let summary = play_game(
            &mut game,
            &settings,
            &mut "\nq\n".as_bytes(),
            &mut output,
            &mut prompt,
        )
        .unwrap();

        assert_eq!(summary.stop_reason, StopReason::Static);
        assert_eq!(summary.generations_run, 1);
        assert_eq!(String::from_utf8(prompt).unwrap().matches("Press Enter").count(), 1);
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/glider.yaml").exists());
        assert!(temp_dir.path().join("input/initial_states/blinker.txt").exists());
    }
}

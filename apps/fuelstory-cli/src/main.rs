//! fuelstory - render and inspect the fuel-economy narrative from the terminal
//!
//! Scene passes are printed as JSON for a drawing front end; tooltips and
//! navigation are printed as plain text. Logs go to stderr.

mod actions;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use fuelstory_core::{SceneCoordinator, StoryConfig, StoryError};
use fuelstory_io::{DatasetBundle, IoError};

use actions::parse_action;

#[derive(Parser)]
#[command(name = "fuelstory")]
#[command(about = "Four-scene narrative over EPA fuel economy data")]
#[command(version)]
struct Cli {
    /// Configuration file (default: <config_dir>/fuelstory/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the CSV tables
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a scene pass as JSON
    Render {
        /// Scene number (1-4)
        #[arg(short, long, default_value_t = 1)]
        scene: u8,
    },

    /// Print the tooltip for a pointer position
    Inspect {
        /// Scene number (1-4)
        #[arg(short, long, default_value_t = 1)]
        scene: u8,

        /// Horizontal position
        #[arg(short, long)]
        x: f64,

        /// Vertical position (default: middle of the plot)
        #[arg(short, long)]
        y: Option<f64>,

        /// Read the position as canvas pixels, margins included
        #[arg(long)]
        canvas: bool,
    },

    /// Apply navigation actions and print the scene reached after each
    Walk {
        /// `next`, `prev`, or a scene number
        #[arg(required = true)]
        actions: Vec<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Story(#[from] StoryError),

    #[error("Failed to load data: {0}")]
    Data(#[from] IoError),

    #[error("Serialization failed: {0}")]
    Serialize(String),

    #[error("Unknown action: {0} (expected next, prev, or 1-4)")]
    UnknownAction(String),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;

    if let Commands::Config = cli.command {
        let toml = config
            .to_toml()
            .map_err(|e| CliError::Serialize(e.to_string()))?;
        print!("{toml}");
        return Ok(());
    }

    let bundle = DatasetBundle::load_dir(&config.data.dir, &config.data.files)?;
    tracing::info!(records = bundle.total_records(), "data loaded");
    let mut coordinator = SceneCoordinator::new(Arc::new(bundle), config)?;

    match cli.command {
        Commands::Render { scene } => {
            let pass = coordinator.go_to(scene)?;
            let json = serde_json::to_string_pretty(pass)
                .map_err(|e| CliError::Serialize(e.to_string()))?;
            println!("{json}");
        }
        Commands::Inspect {
            scene,
            x,
            y,
            canvas,
        } => {
            coordinator.go_to(scene)?;
            let plot = coordinator.pass().plot;
            let token = coordinator.token();
            let found = if canvas {
                let y = y.unwrap_or(plot.margin.top + plot.height / 2.0);
                coordinator.inspect_canvas(token, x, y)
            } else {
                coordinator.inspect(token, x, y.unwrap_or(plot.height / 2.0))
            };
            if found.is_hit() {
                for line in found.lines() {
                    println!("{line}");
                }
            } else {
                println!("(nothing at {x}, {})", y.map_or("middle".to_string(), |v| v.to_string()));
            }
        }
        Commands::Walk { actions } => {
            println!("start: {}", coordinator.current());
            for word in &actions {
                let action =
                    parse_action(word).ok_or_else(|| CliError::UnknownAction(word.clone()))?;
                let pass = action.apply(&mut coordinator)?;
                println!("{word}: {} [{}]", pass.scene, pass.annotation.title);
            }
        }
        Commands::Config => {}
    }

    Ok(())
}

/// Explicit file, then the default location if it exists, then defaults
fn load_config(cli: &Cli) -> Result<StoryConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => StoryConfig::load(path)?,
        None => match StoryConfig::default_path().filter(|p| p.exists()) {
            Some(path) => StoryConfig::load(path)?,
            None => StoryConfig::default(),
        },
    };

    if let Some(dir) = &cli.data {
        config.data.dir = dir.clone();
    }
    Ok(config)
}

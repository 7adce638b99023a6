use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tui_snake::game::{Difficulty, GameConfig};
use tui_snake::modes::HumanMode;
use tui_snake::persistence::{JsonFileStore, DEFAULT_HIGH_SCORE_FILE};

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: usize,

    /// Difficulty tier (sets the base step interval)
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Speed in percent of the difficulty's base speed
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u16).range(1..=200))]
    speed: u16,

    /// File the high score is kept in
    #[arg(long, default_value = DEFAULT_HIGH_SCORE_FILE)]
    high_score_file: PathBuf,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

/// Log to a file: the terminal belongs to the game while it runs
fn init_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = GameConfig::new(cli.width, cli.height)
        .with_difficulty(cli.difficulty)
        .with_speed_percent(cli.speed);
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid game configuration")?;

    let store = JsonFileStore::new(cli.high_score_file);
    let mut human_mode = HumanMode::new(config, store, cli.seed)?;
    human_mode.run().await?;

    Ok(())
}

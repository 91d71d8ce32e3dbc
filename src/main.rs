use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use term_snake::game::{Difficulty, GameConfig};
use term_snake::input::prompt_difficulty;
use term_snake::modes::HumanMode;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Speed preset; asked interactively when omitted
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Board width, walls included
    #[arg(long)]
    width: Option<usize>,

    /// Board height, walls included
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between ticks, overrides the preset
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Speed up as the snake grows
    #[arg(long)]
    accelerate: bool,

    /// TOML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Defaults or config file, then the difficulty preset, then explicit flags
    fn build_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(difficulty) = self.select_difficulty()? {
            info!(%difficulty, "difficulty selected");
            config.apply_difficulty(difficulty);
        }

        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.tick_delay_ms = delay_ms;
            config.min_tick_delay_ms = config.min_tick_delay_ms.min(delay_ms);
        }
        if self.accelerate {
            config.accelerate = true;
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }

    fn select_difficulty(&self) -> Result<Option<Difficulty>> {
        if self.difficulty.is_some() {
            return Ok(self.difficulty);
        }

        // A config file or an explicit delay already decides the speed
        if self.config.is_some() || self.delay_ms.is_some() {
            return Ok(None);
        }

        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Ok(Some(Difficulty::default()));
        }

        let difficulty = prompt_difficulty(&mut stdin.lock(), &mut io::stdout())
            .context("Failed to read difficulty")?;
        Ok(Some(difficulty))
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "term_snake=info".into()))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.build_config()?;

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    let state = human_mode.state();
    info!(length = state.length(), reason = ?state.end_reason, "session finished");
    println!("Game Over! Final Length: {}", state.length());

    Ok(())
}

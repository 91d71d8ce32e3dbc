use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::difficulty::Difficulty;

/// Smallest accepted board dimension, walls included
pub const MIN_BOARD_DIMENSION: usize = 3;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

/// Where new food is allowed to appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSpawn {
    /// Any interior cell not covered by the snake
    #[default]
    AvoidSnake,
    /// Any interior cell, food may appear under the snake
    Anywhere,
}

/// Configuration for one run of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width; walls sit at x = 0 and x = width
    pub board_width: usize,
    /// Board height; walls sit at y = 0 and y = height
    pub board_height: usize,
    /// Delay between ticks at the start of the run
    pub tick_delay_ms: u64,
    /// Shrink the delay as the snake grows
    pub accelerate: bool,
    /// Lower bound for the delay when accelerating
    pub min_tick_delay_ms: u64,
    pub food_spawn: FoodSpawn,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 40,
            board_height: 20,
            tick_delay_ms: 100,
            accelerate: false,
            min_tick_delay_ms: 30,
            food_spawn: FoodSpawn::AvoidSnake,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Default::default()
        }
    }

    /// Default board with the speed settings of a preset
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let mut config = Self::default();
        config.apply_difficulty(difficulty);
        config
    }

    /// Overwrite the speed settings with those of a preset, keeping the board
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.tick_delay_ms = difficulty.tick_delay_ms();
        self.accelerate = difficulty.accelerates();
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check the invariants the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < MIN_BOARD_DIMENSION || self.board_height < MIN_BOARD_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board must be at least {min}x{min}, got {}x{}",
                self.board_width,
                self.board_height,
                min = MIN_BOARD_DIMENSION,
            )));
        }

        if i32::try_from(self.board_width).is_err() || i32::try_from(self.board_height).is_err() {
            return Err(ConfigError::Validation(format!(
                "board {}x{} is too large",
                self.board_width, self.board_height
            )));
        }

        if self.tick_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "tick_delay_ms must be positive".to_string(),
            ));
        }

        if self.min_tick_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "min_tick_delay_ms must be positive".to_string(),
            ));
        }

        if self.min_tick_delay_ms > self.tick_delay_ms {
            return Err(ConfigError::Validation(format!(
                "min_tick_delay_ms ({}) exceeds tick_delay_ms ({})",
                self.min_tick_delay_ms, self.tick_delay_ms
            )));
        }

        Ok(())
    }

    /// Tick delay for a snake of the given length
    pub fn delay_for_length(&self, length: usize) -> u64 {
        if !self.accelerate {
            return self.tick_delay_ms;
        }

        let length = u64::try_from(length).unwrap_or(u64::MAX);
        self.tick_delay_ms
            .saturating_sub(length)
            .max(self.min_tick_delay_ms)
    }
}

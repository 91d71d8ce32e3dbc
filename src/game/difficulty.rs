use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

/// Static per-run speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    /// Slow ticks, constant speed
    Easy,
    /// Medium ticks, constant speed
    #[default]
    Medium,
    /// Fast ticks that get faster as the snake grows
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected 1-3, easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Delay between two ticks in milliseconds
    pub fn tick_delay_ms(&self) -> u64 {
        match self {
            Difficulty::Easy => 180,
            Difficulty::Medium => 130,
            Difficulty::Hard => 90,
        }
    }

    /// Whether the tick delay shrinks with the snake length
    pub fn accelerates(&self) -> bool {
        matches!(self, Difficulty::Hard)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts the menu number (1-3), the full name or its first letter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "e" | "easy" => Ok(Difficulty::Easy),
            "2" | "m" | "medium" => Ok(Difficulty::Medium),
            "3" | "h" | "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.trim().to_string())),
        }
    }
}

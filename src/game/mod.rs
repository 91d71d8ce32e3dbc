//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal or rendering
//! dependencies. The play mode calls [`GameEngine::advance`] once per tick.

pub mod action;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{ConfigError, FoodSpawn, GameConfig};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{Board, EndReason, GameState, Position, Snake};

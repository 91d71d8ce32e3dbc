//! Term Snake - the classic Snake game in a terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard mapping and the difficulty prompt (input module)
//! - TUI rendering (render module)
//! - Per-run counters (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

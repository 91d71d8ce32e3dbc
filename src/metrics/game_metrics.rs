use std::time::{Duration, Instant};

use crate::game::StepResult;

/// Per-run counters shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub food_eaten: u32,
    paused_since: Option<Instant>,
    paused_total: Duration,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            food_eaten: 0,
            paused_since: None,
            paused_total: Duration::ZERO,
        }
    }

    /// Refresh the elapsed play time, excluding pauses
    pub fn update(&mut self) {
        let current_pause = self
            .paused_since
            .map(|since| since.elapsed())
            .unwrap_or(Duration::ZERO);

        self.elapsed_time = self
            .start_time
            .elapsed()
            .saturating_sub(self.paused_total + current_pause);
    }

    pub fn on_tick(&mut self, result: &StepResult) {
        self.ticks += 1;
        if result.info.ate_food {
            self.food_eaten += 1;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_since.is_some()
    }

    /// Flip between paused and running, returns the new paused flag
    pub fn toggle_pause(&mut self) -> bool {
        match self.paused_since.take() {
            Some(since) => {
                self.paused_total += since.elapsed();
                false
            }
            None => {
                self.paused_since = Some(Instant::now());
                true
            }
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

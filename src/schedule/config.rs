use crate::foundation::{
    error::{CodecastError, CodecastResult},
    math::round_frames,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Timing inputs for the frame scheduler.
pub struct SchedulerConfig {
    /// Output frames per second; must be finite and > 0.
    pub fps: f64,
    /// Typing speed in characters per second; must be finite and > 0.
    pub chars_per_second: f64,
    /// Total time budget for each file-switch transition.
    pub switch_file_pause_ms: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            fps: 30.0,
            chars_per_second: 60.0,
            switch_file_pause_ms: 6000,
        }
    }
}

impl SchedulerConfig {
    /// Reject rates the scheduler cannot pace with.
    pub fn validate(&self) -> CodecastResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(CodecastError::validation(format!(
                "fps must be finite and > 0 (got {})",
                self.fps
            )));
        }
        if !self.chars_per_second.is_finite() || self.chars_per_second <= 0.0 {
            return Err(CodecastError::validation(format!(
                "chars_per_second must be finite and > 0 (got {})",
                self.chars_per_second
            )));
        }
        Ok(())
    }

    /// Frames each visible typing increment is held for (at least 1).
    pub fn frames_per_char(&self) -> u64 {
        round_frames(self.fps / self.chars_per_second).max(1)
    }

    /// Characters batched into one visible increment (at least 1).
    pub fn chars_per_frame(&self) -> usize {
        usize::try_from(round_frames(self.chars_per_second / self.fps))
            .unwrap_or(usize::MAX)
            .max(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/config.rs"]
mod tests;

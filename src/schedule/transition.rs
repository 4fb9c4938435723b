use crate::{
    foundation::math::{floor_frames, round_frames},
    schedule::config::SchedulerConfig,
};

/// Length of the fade-out phase, in seconds.
pub const FADE_OUT_SECS: f64 = 1.0;
/// Length of the fade-in phase, in seconds.
pub const FADE_IN_SECS: f64 = 0.5;
/// Share of the pause budget always reserved for reading the outgoing file.
pub const MIN_READING_SHARE: f64 = 0.2;

/// Progress value at the boundary between fade-out and fade-in.
const FADE_MIDPOINT: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Frame budget of one file-switch transition: reading, then fade-out, then fade-in.
pub struct TransitionPlan {
    /// Frames with the outgoing file fully visible (progress 0).
    pub reading_frames: u64,
    /// Frames ramping progress from 0 toward 0.5.
    pub fade_out_frames: u64,
    /// Frames ramping progress from 0.5 toward 1.
    pub fade_in_frames: u64,
}

impl TransitionPlan {
    /// Derive phase lengths from the configured pause budget.
    ///
    /// Fade lengths are fixed; reading takes whatever the budget leaves, but never less than
    /// [`MIN_READING_SHARE`] of it. Short budgets therefore stretch the transition.
    pub fn for_config(config: &SchedulerConfig) -> Self {
        let total_pause_frames =
            round_frames(config.switch_file_pause_ms as f64 / 1000.0 * config.fps);
        let fade_out_frames = round_frames(config.fps * FADE_OUT_SECS);
        let fade_in_frames = round_frames(config.fps * FADE_IN_SECS);
        let min_reading_frames = floor_frames(total_pause_frames as f64 * MIN_READING_SHARE);
        let reading_frames = total_pause_frames
            .saturating_sub(fade_out_frames)
            .saturating_sub(fade_in_frames)
            .max(min_reading_frames);

        Self {
            reading_frames,
            fade_out_frames,
            fade_in_frames,
        }
    }

    /// Frames in the whole transition.
    pub fn total_frames(&self) -> u64 {
        self.reading_frames + self.fade_out_frames + self.fade_in_frames
    }

    /// Leading reading frames dropped when the transition opens the video.
    pub fn skipped_at_start(&self) -> u64 {
        self.reading_frames / 2
    }

    /// Transition progress at step `i` (0-based) of the transition, for `i < total_frames()`.
    pub fn progress_at(&self, i: u64) -> f64 {
        let fade_in_start = self.reading_frames + self.fade_out_frames;
        if i < self.reading_frames {
            0.0
        } else if i < fade_in_start {
            let p = (i - self.reading_frames) as f64 / self.fade_out_frames as f64;
            FADE_MIDPOINT * p
        } else if self.fade_in_frames == 0 {
            1.0
        } else {
            let p = (i - fade_in_start) as f64 / self.fade_in_frames as f64;
            FADE_MIDPOINT + (1.0 - FADE_MIDPOINT) * p
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/transition.rs"]
mod tests;

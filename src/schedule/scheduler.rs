use std::collections::BTreeMap;

use crate::{
    foundation::core::{FrameIndex, LineNumber},
    foundation::error::CodecastResult,
    schedule::{config::SchedulerConfig, frame::Frame, transition::TransitionPlan},
    typing::events::TypingEvent,
};

/// Running cursor of the scheduler; owned by a single [`schedule_frames`] call.
#[derive(Debug)]
struct Cursor {
    frame: FrameIndex,
    active_file: Option<String>,
    previous_file: Option<String>,
    transition_progress: f64,
    files: BTreeMap<String, String>,
    languages: BTreeMap<String, String>,
    highlight_lines: BTreeMap<String, Vec<LineNumber>>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            frame: FrameIndex::ZERO,
            active_file: None,
            previous_file: None,
            transition_progress: 1.0,
            files: BTreeMap::new(),
            languages: BTreeMap::new(),
            highlight_lines: BTreeMap::new(),
        }
    }
}

impl Cursor {
    fn push_frame(&mut self, out: &mut Vec<Frame>) {
        out.push(Frame {
            frame: self.frame,
            active_file: self.active_file.clone(),
            previous_file: self.previous_file.clone(),
            transition_progress: self.transition_progress,
            files: self.files.clone(),
            languages: self.languages.clone(),
            highlight_lines: self.highlight_lines.clone(),
        });
        self.frame = self.frame.next();
    }

    fn hold(&mut self, frames: u64, out: &mut Vec<Frame>) {
        for _ in 0..frames {
            self.push_frame(out);
        }
    }

    fn apply_highlights(&mut self, event: &TypingEvent) {
        if let Some(lines) = event.highlight_lines() {
            self.highlight_lines
                .insert(event.filename().to_string(), lines.to_vec());
        }
    }

    fn switch_file(
        &mut self,
        filename: &str,
        language: &str,
        plan: &TransitionPlan,
        out: &mut Vec<Frame>,
    ) {
        let outgoing = self.active_file.take();
        self.files.entry(filename.to_string()).or_default();
        self.languages
            .insert(filename.to_string(), language.to_string());

        let skip = if self.frame.is_start() {
            plan.skipped_at_start()
        } else {
            0
        };

        self.previous_file = outgoing;
        self.active_file = Some(filename.to_string());
        for i in skip..plan.total_frames() {
            self.transition_progress = plan.progress_at(i);
            self.push_frame(out);
        }

        self.transition_progress = 1.0;
        self.previous_file = None;
    }
}

/// Pace typing events into a dense, frame-indexed script.
///
/// Each file switch plays a [`TransitionPlan`]; each batch of up to
/// [`SchedulerConfig::chars_per_frame`] same-file characters is appended at once and held
/// for [`SchedulerConfig::frames_per_char`] frames. A batch takes its highlights from its
/// first character.
#[tracing::instrument(skip(events), fields(events = events.len()))]
pub fn schedule_frames(
    events: &[TypingEvent],
    config: &SchedulerConfig,
) -> CodecastResult<Vec<Frame>> {
    config.validate()?;

    let frames_per_char = config.frames_per_char();
    let chars_per_frame = config.chars_per_frame();
    let plan = TransitionPlan::for_config(config);

    let mut cursor = Cursor::default();
    let mut frames = Vec::new();
    let mut events = events.iter().peekable();

    while let Some(event) = events.next() {
        cursor.apply_highlights(event);

        match event {
            TypingEvent::SwitchFile {
                filename, language, ..
            } => cursor.switch_file(filename, language, &plan, &mut frames),
            TypingEvent::TypeChar { filename, ch, .. } => {
                let mut batch = String::from(*ch);
                let mut taken = 1;
                while taken < chars_per_frame {
                    let Some(next) = events.next_if(|next| {
                        matches!(next, TypingEvent::TypeChar { filename: f, .. } if f == filename)
                    }) else {
                        break;
                    };
                    batch.extend(next.typed_char());
                    taken += 1;
                }

                cursor
                    .files
                    .entry(filename.clone())
                    .or_default()
                    .push_str(&batch);
                cursor.hold(frames_per_char, &mut frames);
            }
        }
    }

    tracing::debug!(frames = frames.len(), "scheduled frames");
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;

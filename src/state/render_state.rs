use std::collections::BTreeMap;

use crate::{foundation::core::LineNumber, timeline::events::TimelineEvent};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Whole-document state at one point of timeline playback.
///
/// Maps only grow: a filename, once introduced, is never removed.
pub struct RenderState {
    /// Currently active file.
    pub active_file: Option<String>,
    /// Full current text per file.
    pub files: BTreeMap<String, String>,
    /// Language tag per file.
    pub languages: BTreeMap<String, String>,
    /// Highlighted lines per file.
    pub highlight_lines: BTreeMap<String, Vec<LineNumber>>,
}

impl RenderState {
    /// Current text of `filename`, if the file has been introduced.
    pub fn file(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(String::as_str)
    }

    /// Return the state after applying `event`; `self` is left untouched.
    pub fn apply(&self, event: &TimelineEvent) -> Self {
        let mut next = self.clone();
        next.apply_in_place(event);
        next
    }

    pub(crate) fn apply_in_place(&mut self, event: &TimelineEvent) {
        match event {
            TimelineEvent::SwitchFile {
                filename,
                language,
                highlight_lines,
            } => {
                self.active_file = Some(filename.clone());
                self.files.entry(filename.clone()).or_default();
                self.languages.insert(filename.clone(), language.clone());
                match highlight_lines {
                    Some(lines) => {
                        self.highlight_lines.insert(filename.clone(), lines.clone());
                    }
                    None => {
                        self.highlight_lines.entry(filename.clone()).or_default();
                    }
                }
            }
            TimelineEvent::InsertText {
                filename,
                content,
                highlight_lines,
            } => {
                let prev = self.files.get(filename).map(String::as_str).unwrap_or("");
                let next = merge_inserted(prev, content);
                self.files.insert(filename.clone(), next);
                self.highlight_lines.insert(
                    filename.clone(),
                    highlight_lines.clone().unwrap_or_default(),
                );
            }
        }
    }
}

/// Content that starts with the current text replaces it; anything else is appended on a
/// fresh line.
///
/// This check is independent of the timeline builder's own prefix test, so a non-linear
/// revision (inserted whole) lands after the old text instead of replacing it.
fn merge_inserted(prev: &str, content: &str) -> String {
    if content.starts_with(prev) {
        return content.to_string();
    }
    let mut out = String::with_capacity(prev.len() + 1 + content.len());
    out.push_str(prev);
    if !prev.is_empty() && !prev.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(content);
    out
}

/// Pure reducer: the state after `event`.
pub fn apply_event(state: &RenderState, event: &TimelineEvent) -> RenderState {
    state.apply(event)
}

#[cfg(test)]
#[path = "../../tests/unit/state/render_state.rs"]
mod tests;

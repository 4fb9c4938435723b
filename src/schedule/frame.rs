use std::collections::BTreeMap;

use crate::foundation::core::{FrameIndex, LineNumber};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One self-contained render state of the output script.
pub struct Frame {
    /// Position in the script; `frames[i].frame == FrameIndex(i)`.
    pub frame: FrameIndex,
    /// File being shown (or faded in). `None` only before the first switch.
    pub active_file: Option<String>,
    /// Outgoing file during a switch transition.
    pub previous_file: Option<String>,
    /// Switch progress in `[0, 1]`; exactly 1 outside transitions.
    pub transition_progress: f64,
    /// Full text per file.
    pub files: BTreeMap<String, String>,
    /// Language tag per file.
    pub languages: BTreeMap<String, String>,
    /// Highlighted lines per file.
    pub highlight_lines: BTreeMap<String, Vec<LineNumber>>,
}

impl Frame {
    /// True while a file-switch transition is in effect.
    pub fn is_transitioning(&self) -> bool {
        self.previous_file.is_some() || self.transition_progress < 1.0
    }

    /// Text of the active file, if any.
    pub fn active_text(&self) -> Option<&str> {
        let name = self.active_file.as_deref()?;
        self.files.get(name).map(String::as_str)
    }
}

use crate::foundation::core::LineNumber;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
/// One step of authored playback, in playback order.
pub enum TimelineEvent {
    /// Make `filename` the active file.
    SwitchFile {
        /// File to activate.
        filename: String,
        /// Language tag for the file.
        language: String,
        /// Highlight set to apply on activation, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        highlight_lines: Option<Vec<LineNumber>>,
    },
    /// Text inserted into `filename`.
    ///
    /// `content` is normally the suffix beyond the previous revision, but is the revision's
    /// entire text when that revision did not extend its predecessor.
    InsertText {
        /// Target file.
        filename: String,
        /// Inserted text (delta, or full snapshot on a non-linear edit).
        content: String,
        /// Highlight set for the file after this insertion.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        highlight_lines: Option<Vec<LineNumber>>,
    },
}

impl TimelineEvent {
    /// File the event applies to.
    pub fn filename(&self) -> &str {
        match self {
            Self::SwitchFile { filename, .. } | Self::InsertText { filename, .. } => filename,
        }
    }

    /// Highlight set carried by the event, if any.
    pub fn highlight_lines(&self) -> Option<&[LineNumber]> {
        match self {
            Self::SwitchFile {
                highlight_lines, ..
            }
            | Self::InsertText {
                highlight_lines, ..
            } => highlight_lines.as_deref(),
        }
    }
}

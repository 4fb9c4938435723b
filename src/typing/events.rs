use crate::foundation::core::LineNumber;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
/// Character-granularity playback event consumed by the frame scheduler.
pub enum TypingEvent {
    /// Transition to `filename`.
    SwitchFile {
        /// File to activate.
        filename: String,
        /// Language tag for the file.
        language: String,
        /// Highlight set for the file once activated.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        highlight_lines: Option<Vec<LineNumber>>,
    },
    /// One character typed into `filename`.
    TypeChar {
        /// Target file.
        filename: String,
        /// The typed character.
        #[serde(rename = "char")]
        ch: char,
        /// Highlight set for the file while this character is typed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        highlight_lines: Option<Vec<LineNumber>>,
    },
}

impl TypingEvent {
    /// File the event applies to.
    pub fn filename(&self) -> &str {
        match self {
            Self::SwitchFile { filename, .. } | Self::TypeChar { filename, .. } => filename,
        }
    }

    /// Highlight set carried by the event, if any.
    pub fn highlight_lines(&self) -> Option<&[LineNumber]> {
        match self {
            Self::SwitchFile {
                highlight_lines, ..
            }
            | Self::TypeChar {
                highlight_lines, ..
            } => highlight_lines.as_deref(),
        }
    }

    /// The typed character, for [`TypingEvent::TypeChar`].
    pub fn typed_char(&self) -> Option<char> {
        match self {
            Self::TypeChar { ch, .. } => Some(*ch),
            Self::SwitchFile { .. } => None,
        }
    }
}

//! codecast turns authored code-snippet revisions into a deterministic typing animation.
//!
//! A markdown document holds code blocks tagged with `filename=`; successive blocks for the
//! same file are full-text revisions. codecast replays them as if typed, one character at a
//! time, and emits a dense frame list that a render surface samples at a fixed frame rate.
//!
//! # Pipeline overview
//!
//! 1. **Model**: `markdown -> Vec<FileBlock>` ([`parse_snippet`])
//! 2. **Timeline**: `FileBlock`s -> `switch-file` / `insert-text` events ([`build_timeline`])
//! 3. **Simulate**: events -> one [`RenderState`] snapshot per event ([`simulate_timeline`])
//! 4. **Type**: snapshots -> per-character [`TypingEvent`]s ([`generate_typing_events`])
//! 5. **Schedule**: typing events -> [`Frame`]s, with cross-fades on file switches
//!    ([`schedule_frames`])
//!
//! Every stage is a pure function: the same document always yields the same frames.
//! Rendering, syntax highlighting and encoding are left to the consumer.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod foundation;
mod pipeline;
mod schedule;
mod state;
mod timeline;
mod typing;

/// Standalone walkthrough of codecast's concepts and timing model.
pub mod guide;

pub use document::frontmatter::{
    DEFAULT_CHARS_PER_SECOND, DEFAULT_DOCUMENT_SWITCH_PAUSE_MS, DEFAULT_FPS, DEFAULT_HEIGHT,
    DEFAULT_THEME, DEFAULT_WIDTH, RenderSettings, SnippetConfig, parse_frontmatter,
    split_frontmatter,
};
pub use document::highlight::{MAX_HIGHLIGHT_SPAN, parse_highlight_ranges};
pub use document::markdown::{CodeBlockNode, parse_code_blocks};
pub use document::snippet::{
    CodeBlockMeta, DEFAULT_LANGUAGE, FileBlock, ParsedSnippet, Revision, SnippetModel,
    THEME_SENTINEL, build_snippet_model, parse_snippet, parse_snippet_file,
};
pub use foundation::core::{FrameIndex, LineNumber};
pub use foundation::error::{CodecastError, CodecastResult};
pub use pipeline::{RenderScript, document_file_to_frames, document_to_frames, snippet_to_frames};
pub use schedule::config::SchedulerConfig;
pub use schedule::frame::Frame;
pub use schedule::scheduler::schedule_frames;
pub use schedule::transition::{FADE_IN_SECS, FADE_OUT_SECS, MIN_READING_SHARE, TransitionPlan};
pub use state::render_state::{RenderState, apply_event};
pub use state::simulator::{StateSnapshot, simulate_timeline};
pub use timeline::builder::build_timeline;
pub use timeline::diff::diff_inserted_text;
pub use timeline::events::TimelineEvent;
pub use typing::events::TypingEvent;
pub use typing::generator::generate_typing_events;

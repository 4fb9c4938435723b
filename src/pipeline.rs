use std::path::Path;

use crate::{
    document::{
        frontmatter::RenderSettings,
        snippet::{FileBlock, ParsedSnippet, parse_snippet, parse_snippet_file},
    },
    foundation::error::CodecastResult,
    schedule::{config::SchedulerConfig, frame::Frame, scheduler::schedule_frames},
    state::simulator::simulate_timeline,
    timeline::builder::build_timeline,
    typing::generator::generate_typing_events,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Everything a render surface needs: resolved settings and the dense frame list.
pub struct RenderScript {
    /// Presentation settings resolved from the document.
    pub settings: RenderSettings,
    /// Frames in index order; its length is the script duration.
    pub frames: Vec<Frame>,
}

impl RenderScript {
    /// Duration in frames.
    pub fn len_frames(&self) -> u64 {
        self.frames.len() as u64
    }

    /// Duration in seconds at the scheduled frame rate.
    pub fn duration_secs(&self) -> f64 {
        self.frames.len() as f64 / self.settings.fps
    }

    /// Serialize the script as pretty-printed JSON.
    pub fn to_json(&self) -> CodecastResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a script previously written by [`RenderScript::to_json`].
    pub fn from_json(json: &str) -> CodecastResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Run files through timeline, simulation, typing expansion, and scheduling.
#[tracing::instrument(skip(files, config), fields(files = files.len()))]
pub fn snippet_to_frames(
    files: &[FileBlock],
    config: &SchedulerConfig,
) -> CodecastResult<Vec<Frame>> {
    let timeline = build_timeline(files);
    let snapshots = simulate_timeline(&timeline);
    let typing = generate_typing_events(&snapshots)?;
    schedule_frames(&typing, config)
}

/// Parse a markdown document and schedule it with its frontmatter settings.
#[tracing::instrument(skip(raw), fields(bytes = raw.len()))]
pub fn document_to_frames(raw: &str) -> CodecastResult<RenderScript> {
    render_script(parse_snippet(raw)?)
}

/// Read a markdown document from disk and schedule it like [`document_to_frames`].
#[tracing::instrument(skip(path))]
pub fn document_file_to_frames(path: impl AsRef<Path>) -> CodecastResult<RenderScript> {
    render_script(parse_snippet_file(path)?)
}

fn render_script(snippet: ParsedSnippet) -> CodecastResult<RenderScript> {
    let frames = snippet_to_frames(&snippet.files, &snippet.config.scheduler_config())?;
    let settings = snippet.config.render_settings(snippet.theme_css);
    tracing::debug!(frames = frames.len(), fps = settings.fps, "built render script");
    Ok(RenderScript { settings, frames })
}

use std::collections::BTreeMap;

use crate::{
    foundation::error::CodecastResult,
    schedule::config::SchedulerConfig,
};

/// Frame rate used when a document does not set `fps`.
pub const DEFAULT_FPS: f64 = 30.0;
/// Typing speed used when a document does not set `chars_per_second`.
pub const DEFAULT_CHARS_PER_SECOND: f64 = 60.0;
/// File-switch pause used when a document does not set `switch_file_pause_ms`.
pub const DEFAULT_DOCUMENT_SWITCH_PAUSE_MS: u64 = 1000;
/// Output width used when a document does not set `width`.
pub const DEFAULT_WIDTH: u32 = 1920;
/// Output height used when a document does not set `height`.
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Theme name used when a document does not set `theme`.
pub const DEFAULT_THEME: &str = "github-dark";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-document settings read from the YAML frontmatter.
///
/// Every key is optional; unknown keys are preserved in [`SnippetConfig::extra`].
pub struct SnippetConfig {
    /// Output frame rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    /// Typing speed in characters per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chars_per_second: Option<f64>,
    /// Output width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Output height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Font family or font path for the render surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Syntax theme name for the render surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Total budget for each file-switch transition, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_file_pause_ms: Option<u64>,
    /// Keys this crate does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fully resolved settings handed to the render surface alongside the frame list.
pub struct RenderSettings {
    /// Frame rate the frame list was scheduled at.
    pub fps: f64,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Syntax theme name.
    pub theme: String,
    /// Optional font override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Theme stylesheet extracted from the document, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_css: Option<String>,
}

impl SnippetConfig {
    /// Parse a frontmatter YAML body. Blank input yields the all-default config.
    pub fn from_yaml(yaml: &str) -> CodecastResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Scheduler timing resolved as frontmatter over document defaults.
    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            fps: self.fps.unwrap_or(DEFAULT_FPS),
            chars_per_second: self.chars_per_second.unwrap_or(DEFAULT_CHARS_PER_SECOND),
            switch_file_pause_ms: self
                .switch_file_pause_ms
                .unwrap_or(DEFAULT_DOCUMENT_SWITCH_PAUSE_MS),
        }
    }

    /// Presentation settings resolved as frontmatter over defaults.
    pub fn render_settings(&self, theme_css: Option<String>) -> RenderSettings {
        RenderSettings {
            fps: self.fps.unwrap_or(DEFAULT_FPS),
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            height: self.height.unwrap_or(DEFAULT_HEIGHT),
            theme: self
                .theme
                .clone()
                .unwrap_or_else(|| DEFAULT_THEME.to_string()),
            font: self.font.clone(),
            theme_css,
        }
    }
}

/// Split a leading `---` delimited frontmatter block from a markdown document.
///
/// Returns `(yaml, body)`. Documents that do not open with a `---` line, or never close
/// it, have no frontmatter and are returned whole as the body.
pub fn split_frontmatter(raw: &str) -> (Option<&str>, &str) {
    let Some(after_open) = strip_delimiter_line(raw) else {
        return (None, raw);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, raw)
}

fn strip_delimiter_line(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix("---")?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Parse the frontmatter of `raw` (if any) and return it with the remaining markdown body.
pub fn parse_frontmatter(raw: &str) -> CodecastResult<(SnippetConfig, &str)> {
    let (yaml, body) = split_frontmatter(raw);
    let config = match yaml {
        Some(yaml) => SnippetConfig::from_yaml(yaml)?,
        None => SnippetConfig::default(),
    };
    Ok((config, body))
}

#[cfg(test)]
#[path = "../../tests/unit/document/frontmatter.rs"]
mod tests;

use std::path::Path;

use anyhow::Context;

use crate::{
    document::{
        frontmatter::{SnippetConfig, parse_frontmatter},
        highlight::parse_highlight_ranges,
        markdown::{CodeBlockNode, parse_code_blocks},
    },
    foundation::core::LineNumber,
    foundation::error::{CodecastError, CodecastResult},
};

/// Filename reserved for a theme stylesheet block; such blocks never become files.
pub const THEME_SENTINEL: &str = "_theme.css";

/// Language recorded for code blocks without a language tag.
pub const DEFAULT_LANGUAGE: &str = "text";

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One authored full-text snapshot of a file.
pub struct Revision {
    /// Full file text at this revision.
    pub code: String,
    /// Lines to highlight while this revision is on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_lines: Option<Vec<LineNumber>>,
}

impl Revision {
    /// A revision without highlights.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            highlight_lines: None,
        }
    }

    /// A revision with an explicit highlight set.
    pub fn with_highlights(code: impl Into<String>, lines: Vec<LineNumber>) -> Self {
        Self {
            code: code.into(),
            highlight_lines: Some(lines),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A source file's complete authored history, oldest revision first.
pub struct FileBlock {
    /// Unique file key.
    pub filename: String,
    /// Language tag from the file's first code block.
    pub language: String,
    /// Ordered revisions.
    pub revisions: Vec<Revision>,
}

impl FileBlock {
    /// A file with no revisions yet.
    pub fn new(filename: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            language: language.into(),
            revisions: Vec::new(),
        }
    }

    /// Builder-style revision append.
    pub fn revision(mut self, revision: Revision) -> Self {
        self.revisions.push(revision);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Per-file revision lists extracted from a document's code blocks.
pub struct SnippetModel {
    /// Files in order of first appearance.
    pub files: Vec<FileBlock>,
    /// Theme stylesheet block contents, if the document had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_css: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A fully parsed markdown document.
pub struct ParsedSnippet {
    /// Frontmatter settings.
    pub config: SnippetConfig,
    /// Files in order of first appearance.
    pub files: Vec<FileBlock>,
    /// Theme stylesheet block contents, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_css: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Conventions recognized in a code block's metadata string.
pub struct CodeBlockMeta {
    /// Value of `filename=<token>`.
    pub filename: Option<String>,
    /// Parsed `highlight={<range-spec>}`.
    pub highlight_lines: Option<Vec<LineNumber>>,
}

impl CodeBlockMeta {
    /// Read `filename=` and `highlight={..}` from a metadata string.
    pub fn parse(meta: &str) -> Self {
        let filename = meta.match_indices("filename=").find_map(|(at, key)| {
            let rest = &meta[at + key.len()..];
            let token = rest.split(char::is_whitespace).next().unwrap_or_default();
            (!token.is_empty()).then(|| token.to_string())
        });

        let highlight_lines = meta.match_indices("highlight={").find_map(|(at, key)| {
            let rest = &meta[at + key.len()..];
            let (body, _) = rest.split_once('}')?;
            (!body.is_empty()).then(|| parse_highlight_ranges(body))
        });

        Self {
            filename,
            highlight_lines,
        }
    }
}

/// Group code blocks into per-file revision lists.
///
/// A block with `filename=` starts (or resumes) that file; a block without one adds a
/// revision to the most recently named file. Blocks named [`THEME_SENTINEL`] are captured as
/// the theme stylesheet instead.
#[tracing::instrument(skip(blocks), fields(blocks = blocks.len()))]
pub fn build_snippet_model(blocks: &[CodeBlockNode]) -> CodecastResult<SnippetModel> {
    let mut model = SnippetModel::default();
    let mut current: Option<usize> = None;

    for (block_index, block) in blocks.iter().enumerate() {
        let meta = CodeBlockMeta::parse(block.meta.as_deref().unwrap_or_default());

        if meta.filename.as_deref() == Some(THEME_SENTINEL) {
            model.theme_css = Some(block.value.clone());
            continue;
        }

        let revision = Revision {
            code: block.value.clone(),
            highlight_lines: meta.highlight_lines,
        };

        let slot = match meta.filename {
            Some(filename) => {
                match model.files.iter().position(|f| f.filename == filename) {
                    Some(existing) => existing,
                    None => {
                        let language = block.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
                        model.files.push(FileBlock::new(filename, language));
                        model.files.len() - 1
                    }
                }
            }
            None => current.ok_or_else(|| CodecastError::missing_filename(block_index))?,
        };

        model.files[slot].revisions.push(revision);
        current = Some(slot);
    }

    tracing::debug!(files = model.files.len(), "built snippet model");
    Ok(model)
}

/// Parse a whole markdown document: frontmatter, code blocks, and the file model.
#[tracing::instrument(skip(raw), fields(bytes = raw.len()))]
pub fn parse_snippet(raw: &str) -> CodecastResult<ParsedSnippet> {
    let (config, body) = parse_frontmatter(raw)?;
    let blocks = parse_code_blocks(body);
    let SnippetModel { files, theme_css } = build_snippet_model(&blocks)?;
    Ok(ParsedSnippet {
        config,
        files,
        theme_css,
    })
}

/// Read a markdown document from disk and parse it like [`parse_snippet`].
pub fn parse_snippet_file(path: impl AsRef<Path>) -> CodecastResult<ParsedSnippet> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read snippet document from '{}'", path.display()))
        .map_err(CodecastError::from)?;
    parse_snippet(&raw)
}

#[cfg(test)]
#[path = "../../tests/unit/document/snippet.rs"]
mod tests;

use std::collections::BTreeSet;

use crate::{
    foundation::core::LineNumber,
    foundation::error::CodecastResult,
    state::{render_state::RenderState, simulator::StateSnapshot},
    timeline::{diff::diff_inserted_text, events::TimelineEvent},
    typing::events::TypingEvent,
};

/// Expand state snapshots into per-character typing events.
///
/// A file's first non-empty content is typed out whole; later growth is typed as the
/// suffix beyond the previous snapshot. Content that does not grow produces no events.
///
/// # Errors
///
/// [`crate::CodecastError::NonLinearEdit`] when a file grows without extending its previous
/// text.
#[tracing::instrument(skip(snapshots), fields(snapshots = snapshots.len()))]
pub fn generate_typing_events(snapshots: &[StateSnapshot]) -> CodecastResult<Vec<TypingEvent>> {
    let mut events = Vec::new();
    let mut previous: Option<&RenderState> = None;
    let mut materialized = BTreeSet::<&str>::new();

    for snapshot in snapshots {
        let state = &snapshot.state;
        match &snapshot.event {
            TimelineEvent::SwitchFile {
                filename, language, ..
            } => {
                events.push(TypingEvent::SwitchFile {
                    filename: filename.clone(),
                    language: language.clone(),
                    highlight_lines: state.highlight_lines.get(filename).cloned(),
                });
            }
            TimelineEvent::InsertText { filename, .. } => {
                let before = previous.and_then(|p| p.file(filename));
                let after = state.file(filename).unwrap_or("");
                let highlights = state.highlight_lines.get(filename);

                if !materialized.contains(filename.as_str())
                    && before.is_none()
                    && !after.is_empty()
                {
                    materialized.insert(filename.as_str());
                    push_chars(&mut events, filename, after, highlights);
                } else {
                    let before = before.unwrap_or("");
                    if after.len() > before.len() {
                        let inserted = diff_inserted_text(before, after)?;
                        push_chars(&mut events, filename, inserted, highlights);
                    }
                }
            }
        }
        previous = Some(state);
    }

    tracing::debug!(events = events.len(), "generated typing events");
    Ok(events)
}

fn push_chars(
    out: &mut Vec<TypingEvent>,
    filename: &str,
    text: &str,
    highlights: Option<&Vec<LineNumber>>,
) {
    out.extend(text.chars().map(|ch| TypingEvent::TypeChar {
        filename: filename.to_string(),
        ch,
        highlight_lines: highlights.cloned(),
    }));
}

#[cfg(test)]
#[path = "../../tests/unit/typing/generator.rs"]
mod tests;

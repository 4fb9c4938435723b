use crate::{document::snippet::FileBlock, timeline::events::TimelineEvent};

/// Flatten per-file revision lists into a playback timeline.
///
/// Each file contributes one [`TimelineEvent::SwitchFile`] followed by one
/// [`TimelineEvent::InsertText`] per revision. A revision that extends its predecessor
/// inserts only the new suffix; one that does not is inserted whole. Revisions that add
/// nothing are skipped.
#[tracing::instrument(skip(files), fields(files = files.len()))]
pub fn build_timeline(files: &[FileBlock]) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    for file in files {
        events.push(TimelineEvent::SwitchFile {
            filename: file.filename.clone(),
            language: file.language.clone(),
            highlight_lines: None,
        });

        let mut last_content = "";
        for revision in &file.revisions {
            let delta = revision
                .code
                .strip_prefix(last_content)
                .unwrap_or(&revision.code);

            if delta.is_empty() {
                tracing::trace!(file = %file.filename, "skipping revision with empty delta");
            } else {
                events.push(TimelineEvent::InsertText {
                    filename: file.filename.clone(),
                    content: delta.to_string(),
                    highlight_lines: revision.highlight_lines.clone(),
                });
            }

            last_content = revision.code.as_str();
        }
    }

    tracing::debug!(events = events.len(), "built timeline");
    events
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;

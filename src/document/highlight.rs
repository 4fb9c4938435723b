use std::collections::BTreeSet;

use crate::foundation::core::LineNumber;

/// Widest `start-end` range accepted; anything larger is treated as a malformed token.
pub const MAX_HIGHLIGHT_SPAN: u32 = 65_536;

/// Parse a compact highlight spec such as `"2,4-6,8"` into sorted, de-duplicated line numbers.
///
/// Tokens are comma-separated and either a single integer or an inclusive `start-end` range.
/// Malformed tokens (non-numeric, negative, reversed ranges) are dropped rather than reported:
/// partial highlight information is preferred over failing the whole document.
pub fn parse_highlight_ranges(spec: &str) -> Vec<LineNumber> {
    let mut lines = BTreeSet::new();

    for part in spec.split(',').map(str::trim) {
        if part.is_empty() {
            continue;
        }
        if part.contains('-') {
            let mut bounds = part.split('-').map(str::trim);
            let start = bounds.next().and_then(parse_line);
            let end = bounds.next().and_then(parse_line);
            match (start, end) {
                (Some(start), Some(end)) if end.saturating_sub(start) <= MAX_HIGHLIGHT_SPAN => {
                    lines.extend(start..=end);
                }
                _ => tracing::trace!(token = part, "dropping malformed highlight range"),
            }
        } else {
            match parse_line(part) {
                Some(line) => {
                    lines.insert(line);
                }
                None => tracing::trace!(token = part, "dropping malformed highlight line"),
            }
        }
    }

    lines.into_iter().collect()
}

fn parse_line(s: &str) -> Option<LineNumber> {
    s.parse::<LineNumber>().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/document/highlight.rs"]
mod tests;

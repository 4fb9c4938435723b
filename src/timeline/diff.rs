use crate::foundation::error::{CodecastError, CodecastResult};

/// Return the text `next` appends to `previous`.
///
/// `next` must be a linear continuation of `previous`; anything else (a deletion, a rewrite)
/// is a [`CodecastError::NonLinearEdit`].
pub fn diff_inserted_text<'a>(previous: &str, next: &'a str) -> CodecastResult<&'a str> {
    next.strip_prefix(previous)
        .ok_or_else(|| CodecastError::non_linear_edit(previous, next))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/diff.rs"]
mod tests;

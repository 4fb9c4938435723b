/// Convenience result type used across codecast.
pub type CodecastResult<T> = Result<T, CodecastError>;

/// Top-level error taxonomy used by every pipeline stage.
#[derive(thiserror::Error, Debug)]
pub enum CodecastError {
    /// The first code block of a document does not declare `filename=`.
    #[error("missing filename: code block {block_index} must declare `filename=`")]
    MissingFilename {
        /// Zero-based index of the offending block among the document's code blocks.
        block_index: usize,
    },

    /// A revision does not extend its predecessor where an incremental diff was required.
    #[error(
        "non-linear edit: next text ({next_len} bytes) does not extend previous text ({previous_len} bytes)"
    )]
    NonLinearEdit {
        /// Byte length of the text that was expected to be a prefix.
        previous_len: usize,
        /// Byte length of the text that failed to extend it.
        next_len: usize,
    },

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CodecastError {
    /// Build a [`CodecastError::MissingFilename`] value.
    pub fn missing_filename(block_index: usize) -> Self {
        Self::MissingFilename { block_index }
    }

    /// Build a [`CodecastError::NonLinearEdit`] value from the two offending texts.
    pub fn non_linear_edit(previous: &str, next: &str) -> Self {
        Self::NonLinearEdit {
            previous_len: previous.len(),
            next_len: next.len(),
        }
    }

    /// Build a [`CodecastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CodecastError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_yaml::Error> for CodecastError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::serde(format!("frontmatter: {err}"))
    }
}

impl From<serde_json::Error> for CodecastError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Zero-based index of a frame in a scheduled script.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The first frame of every script.
    pub const ZERO: Self = Self(0);

    /// The index immediately after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// True for the very first frame of a script.
    pub fn is_start(self) -> bool {
        self.0 == 0
    }
}

/// One-based source line number, as written in `highlight={..}` metadata.
pub type LineNumber = u32;

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

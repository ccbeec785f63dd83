use thiserror::Error;

/// Errors surfaced by frame computation and the layout builder.
///
/// All variants are deterministic validation failures: the engine
/// performs no I/O, so a failed call leaves nothing to roll back.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Page, margin, gutter, or column-split inputs yield a
    /// non-positive or overlapping frame.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A frame break was requested when no further frame exists.
    #[error("invalid layout state: {0}")]
    InvalidLayoutState(&'static str),

    /// `build` was called with no blocks appended.
    #[error("layout document has no blocks")]
    EmptyDocument,
}

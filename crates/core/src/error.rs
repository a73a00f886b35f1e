//! Error types shared across the workspace.
//!
//! Degenerate geometry is deliberately *not* represented here: offset and
//! union failures are recovered locally by the engine (empty region or
//! unchanged input), so `Error` only covers caller mistakes.

/// Errors surfaced by the layout engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A polygon or outline is structurally unusable (too few vertices,
    /// zero area).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A caller-supplied scalar is non-finite, zero or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

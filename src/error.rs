//! Error types for YAML dumping.

use thiserror::Error;

/// Result type alias for styled-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while dumping a value to YAML text.
///
/// Style annotation mismatches are deliberately *not* represented here:
/// annotating a value with a style that does not fit its shape is a
/// warning-level condition that leaves the value unstyled (see the
/// crate-level helpers). Every `Error` variant is fatal to the dump that
/// produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// The YAML engine failed while emitting the node tree.
    #[error("YAML emission failed: {0}")]
    Emit(#[from] libyaml_safer::Error),

    /// The emitter produced output that is not valid UTF-8.
    ///
    /// Not expected with a UTF-8 output encoding; surfaced rather than
    /// swallowed so a dump never returns mangled text.
    #[error("emitter produced non-UTF-8 output: {0}")]
    NonUtf8(#[from] std::string::FromUtf8Error),
}

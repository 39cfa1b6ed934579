//! Error types for the content writer.
//!
//! Every fallible operation in the crate returns [`Result`]. Failures of the
//! underlying stream surface as [`Error::Io`] and are never retried.

/// Result type alias for content writer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while writing a page content stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying stream failed to accept an operator.
    #[error("Underlying write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Text was shown before any font was configured.
    #[error("No font selected: call set_fonts before showing text")]
    NoFontSelected,

    /// An operator was sent to a stream that has already been closed.
    #[error("Content stream is already closed")]
    StreamClosed,

    /// Invalid writer configuration
    #[error("Invalid writer configuration: {0}")]
    Config(String),
}

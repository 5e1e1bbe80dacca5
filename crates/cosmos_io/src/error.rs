//! Error types for cosmos_io.
//!
//! Every variant is fatal to the driver loop: a record that cannot be
//! delivered stops the feed instead of being dropped.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    /// Writing or flushing the output failed (e.g. broken pipe)
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The receiving end of a channel sink was dropped
    #[error("Record channel closed")]
    ChannelClosed,
}

/// Result type alias for cosmos_io operations.
pub type Result<T> = std::result::Result<T, EmitError>;

impl EmitError {
    /// True when the downstream consumer went away rather than the record
    /// being malformed.
    #[must_use]
    pub fn is_disconnect(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
            Self::ChannelClosed => true,
            Self::Json(_) => false,
        }
    }
}

//! # Error Types
//!
//! Error types for camera array planning, reconciliation and rendering.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - Planning errors are raised before any slot is touched
//! - Stale slots are compacted, not reported as errors

use thiserror::Error;

/// Errors that can occur while planning or driving a camera array.
#[derive(Debug, Error)]
pub enum CameraArrayError {
    /// A quantity would be divided by zero.
    #[error("Division by zero: {divisor} must be non-zero")]
    DivisionByZero {
        /// Name of the zero parameter
        divisor: &'static str,
    },

    /// A parameter is NaN or infinite.
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A required upstream binding is missing.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The planned slot count exceeds the configured limit.
    #[error("Too many camera slots: {count} (max: {max})")]
    TooManySlots {
        /// Requested count
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// A scene handle no longer refers to a live object.
    #[error("Stale scene handle: {0}")]
    StaleHandle(String),

    /// The host scene rejected an operation.
    #[error("Scene operation failed: {0}")]
    Scene(String),

    /// An image encoding name was not recognized.
    #[error("Unknown image encoding: {0}")]
    UnknownEncoding(String),

    /// The host renderer failed for one slot.
    #[error("Render failed for '{slot}': {source}")]
    RenderFailed {
        /// Slot name
        slot: String,
        /// Host error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Filesystem error while preparing the output directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for camera array operations.
pub type CameraResult<T> = Result<T, CameraArrayError>;

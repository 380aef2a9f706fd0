//! # Mesh Errors
//!
//! Error types for cylinder mesh generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// A resolution parameter is below its minimum of one segment
    #[error("Invalid {name}: {value} (must be at least 1)")]
    InvalidResolution { name: &'static str, value: u32 },

    /// Degenerate geometry (non-positive or non-finite dimensions)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A required upstream binding is missing
    #[error("Precondition failed: {message}")]
    Precondition { message: String },

    /// The host returned a normal buffer of the wrong length
    #[error("Normal count mismatch: expected {expected}, got {actual}")]
    NormalCountMismatch { expected: usize, actual: usize },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid resolution error.
    pub fn invalid_resolution(name: &'static str, value: u32) -> Self {
        Self::InvalidResolution { name, value }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a precondition error.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

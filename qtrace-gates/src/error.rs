//! Error types for gate construction

use thiserror::Error;

/// Errors that can occur while building gate matrices
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    /// Rotation axis with zero (or non-finite) length
    #[error("Rotation axis must have nonzero length, got ({x}, {y}, {z})")]
    ZeroAxis { x: f64, y: f64, z: f64 },
}

/// Result type for gate construction
pub type Result<T> = std::result::Result<T, GateError>;

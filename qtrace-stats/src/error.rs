//! Error types for the statistics layer

use qtrace_core::MatrixError;
use qtrace_state::StateError;
use thiserror::Error;

/// Errors that can occur while deriving statistics
///
/// Numerical-inconsistency failures are fatal to the statistic being
/// computed, never to the process; small negative eigenvalues and tiny
/// imaginary parts of provably real quantities are clamped before any
/// of these are raised.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Density matrix breaks Hermitian symmetry beyond tolerance
    #[error("Density matrix is not Hermitian within tolerance {tolerance}")]
    NotHermitian { tolerance: f64 },

    /// Density matrix trace deviates from 1 beyond tolerance
    #[error("Density matrix trace is {trace}, expected 1")]
    TraceDeviation { trace: f64 },

    /// Eigenvalue below the clamping window
    #[error("Eigenvalue {value} is negative beyond tolerance")]
    NegativeEigenvalue { value: f64 },

    /// Tolerance configuration rejected at the engine boundary
    #[error("Invalid tolerance: {reason}")]
    InvalidTolerance { reason: String },

    /// Density matrix of the wrong size for the requested statistic
    #[error("Density matrix dimension is {actual}, expected {expected}")]
    WrongDimension { expected: usize, actual: usize },

    /// The eigendecomposition oracle did not converge
    #[error("Eigendecomposition failed to converge for a {dimension}x{dimension} matrix")]
    EigensolverFailed { dimension: usize },

    /// Underlying state-layer failure
    #[error(transparent)]
    State(#[from] StateError),

    /// Underlying matrix-algebra failure
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Result type for the statistics layer
pub type Result<T> = std::result::Result<T, StatsError>;

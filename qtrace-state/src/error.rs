//! Error types for state-vector operations

use qtrace_core::MatrixError;
use thiserror::Error;

/// Errors that can occur during state evolution and partial tracing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Qubit count outside the supported range
    #[error("Invalid qubit count {requested}, supported range is 1..={max}")]
    InvalidQubitCount { requested: usize, max: usize },

    /// Wire index outside the register
    #[error("Invalid wire index {wire} for {num_qubits}-qubit state")]
    InvalidWire { wire: usize, num_qubits: usize },

    /// The same wire named twice in one operation
    #[error("Duplicate wire {wire} in operation")]
    DuplicateWire { wire: usize },

    /// Control wire listed among the targets
    #[error("Control wire {wire} overlaps a target wire")]
    ControlOverlapsTarget { wire: usize },

    /// Buffer length disagrees with the declared qubit count
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Dimension is not a power of two
    #[error("Invalid dimension {dimension}, expected a power of 2")]
    InvalidDimension { dimension: usize },

    /// Gate matrix is neither 2x2 nor 4x4
    #[error("Gate matrix is {rows}x{cols}, expected 2x2 or 4x4")]
    InvalidGateShape { rows: usize, cols: usize },

    /// Wrong number of target wires for the gate shape
    #[error("Gate acts on {expected} wire(s), but {actual} target(s) were given")]
    WrongTargetCount { expected: usize, actual: usize },

    /// Basis index outside the state dimension
    #[error("Basis index {index} out of range for dimension {dimension}")]
    InvalidBasisIndex { index: usize, dimension: usize },

    /// Partial trace asked to keep an empty qubit subset
    #[error("Reduced density matrix requires a non-empty kept subset")]
    EmptyKeptSubset,

    /// Underlying matrix-algebra failure
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Result type for state-vector operations
pub type Result<T> = std::result::Result<T, StateError>;

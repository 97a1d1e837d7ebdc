//! State-vector evolution and partial tracing for qtrace
//!
//! This crate owns the simulator's hot paths: the qubit-wise evolver
//! that applies 2x2 and 4x4 gates (with arbitrary positive/negative
//! control masks) to a length-2^n amplitude buffer, the SWAP
//! permutation, and the partial-trace engine that produces reduced
//! density matrices directly from the state vector.
//!
//! # Example
//!
//! ```
//! use qtrace_gates::constants;
//! use qtrace_state::{evolver, ControlMask, StateVector};
//!
//! // Bell pair: H on wire 0, then X on wire 1 controlled by wire 0
//! let psi = StateVector::new(2).unwrap();
//! let psi = evolver::apply_single_qubit(&psi, &constants::HADAMARD, 0, &ControlMask::none()).unwrap();
//! let psi = evolver::apply_single_qubit(&psi, &constants::PAULI_X, 1, &ControlMask::on(0)).unwrap();
//!
//! let reduced = psi.reduced_density_matrix(&[0]).unwrap();
//! assert!((reduced.purity() - 0.5).abs() < 1e-12);
//! ```

pub mod controls;
pub mod density_matrix;
pub mod error;
pub mod evolver;
pub mod partial_trace;
pub mod state_vector;

pub use controls::{Control, ControlMask, Polarity};
pub use density_matrix::DensityMatrix;
pub use error::{Result, StateError};
pub use evolver::{
    apply_gate, apply_single_qubit, apply_swap, apply_two_qubit, expand_two_qubit,
};
pub use partial_trace::{reduced_from_density, reduced_from_state};
pub use state_vector::{StateVector, MAX_QUBITS};

//! Quantum gate library for qtrace
//!
//! Constant matrices for the fixed gate set (Paulis, Hadamard, the
//! square and fourth roots with their adjoints, CX, SWAP) plus
//! parameterized factories (phase gates, axis rotations, generalized
//! two-angle families, Pauli-exponent gates).
//!
//! Angle arguments are in degrees at this boundary; exponents are
//! dimensionless. The CX constant stores the wire-0-as-control
//! orientation; construct a [`GateLibrary`] with the textbook flag to
//! get the reversed orientation for a whole run.
//!
//! # Example
//!
//! ```
//! use qtrace_gates::{constants, parametric};
//!
//! let h = constants::HADAMARD;
//! let rx = parametric::rotation_x(90.0);
//! assert!((h[0][0].re - rx[0][0].re).abs() < 1e-12);
//! ```

pub mod constants;
pub mod error;
pub mod library;
pub mod parametric;

pub use error::{GateError, Result};
pub use library::GateLibrary;

//! Core numeric primitives for the qtrace simulator
//!
//! This crate provides the dense complex-matrix type shared by every
//! layer of the simulator, together with the matrix error taxonomy and
//! the process-wide numeric tolerances. Higher crates build the gate
//! library (`qtrace-gates`), state evolution and partial tracing
//! (`qtrace-state`), and derived statistics (`qtrace-stats`) on top.
//!
//! # Conventions
//!
//! Basis index bit 0 is qubit 0, the top wire of a drawn circuit. A
//! Kronecker factor list ordered `[q_{n-1}, ..., q_0]` therefore reads
//! bottom wire first, and `ComplexMatrix::reverse_endianness` converts
//! an operator between the two wire orderings.

pub mod error;
pub mod matrix;
pub mod tolerance;

pub use error::{MatrixError, Result};
pub use matrix::{reverse_bits, ComplexMatrix, Matrix2x2, Matrix4x4};
pub use tolerance::Tolerance;

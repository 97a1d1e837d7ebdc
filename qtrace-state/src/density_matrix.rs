//! Density matrices for reduced and pure states
//!
//! A density matrix ρ is Hermitian, positive semi-definite, and has
//! unit trace. Here it appears in two roles: the outer product |ψ⟩⟨ψ|
//! of a pure state, and the reduced state the partial-trace engine
//! produces on a qubit subset. Storage is a flat row-major buffer of
//! 2^m x 2^m complex entries.

use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use num_complex::Complex64;
use qtrace_core::ComplexMatrix;
use std::fmt;

/// Density matrix over m qubits
pub struct DensityMatrix {
    /// Number of qubits
    num_qubits: usize,

    /// Dimension (2^num_qubits)
    dimension: usize,

    /// Matrix entries in row-major order, length dimension²
    matrix: Vec<Complex64>,
}

impl DensityMatrix {
    /// Create the pure state |0...0⟩⟨0...0|
    ///
    /// # Errors
    /// Returns an error for an unsupported qubit count.
    pub fn new(num_qubits: usize) -> Result<Self> {
        let mut dm = Self::zeros(num_qubits)?;
        dm.matrix[0] = Complex64::new(1.0, 0.0);
        Ok(dm)
    }

    /// Create an all-zero matrix (not a valid state until filled)
    pub(crate) fn zeros(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > crate::state_vector::MAX_QUBITS {
            return Err(StateError::InvalidQubitCount {
                requested: num_qubits,
                max: crate::state_vector::MAX_QUBITS,
            });
        }
        let dimension = 1usize << num_qubits;
        Ok(Self {
            num_qubits,
            dimension,
            matrix: vec![Complex64::new(0.0, 0.0); dimension * dimension],
        })
    }

    /// Build the pure-state density matrix ρ = |ψ⟩⟨ψ|
    pub fn from_state_vector(psi: &StateVector) -> Result<Self> {
        let mut dm = Self::zeros(psi.num_qubits())?;
        let amps = psi.amplitudes();
        for (i, &a) in amps.iter().enumerate() {
            for (j, &b) in amps.iter().enumerate() {
                dm.matrix[i * dm.dimension + j] = a * b.conj();
            }
        }
        Ok(dm)
    }

    /// The maximally mixed state I / 2^m
    pub fn maximally_mixed(num_qubits: usize) -> Result<Self> {
        let mut dm = Self::zeros(num_qubits)?;
        let value = Complex64::new(1.0 / dm.dimension as f64, 0.0);
        for i in 0..dm.dimension {
            dm.matrix[i * dm.dimension + i] = value;
        }
        Ok(dm)
    }

    /// Build from a square [`ComplexMatrix`] of power-of-two dimension
    ///
    /// # Errors
    /// Returns an error for a non-square or non-power-of-two shape.
    pub fn from_matrix(matrix: &ComplexMatrix) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        if rows != cols || !rows.is_power_of_two() || rows < 2 {
            return Err(StateError::InvalidDimension { dimension: rows });
        }
        let num_qubits = rows.trailing_zeros() as usize;
        let mut dm = Self::zeros(num_qubits)?;
        dm.matrix.copy_from_slice(matrix.data());
        Ok(dm)
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Matrix dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get the element ρ[row, col]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix[row * self.dimension + col]
    }

    /// Set the element ρ[row, col]
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.matrix[row * self.dimension + col] = value;
    }

    /// Row-major view of the full matrix
    #[inline]
    pub fn matrix(&self) -> &[Complex64] {
        &self.matrix
    }

    /// The matrix as a general [`ComplexMatrix`]
    pub fn to_matrix(&self) -> ComplexMatrix {
        ComplexMatrix::from_data(self.dimension, self.dimension, self.matrix.clone())
            .expect("buffer length fixed at construction")
    }

    /// Trace of the matrix (real part; 1 for a valid state)
    pub fn trace(&self) -> f64 {
        let mut tr = Complex64::new(0.0, 0.0);
        for i in 0..self.dimension {
            tr += self.get(i, i);
        }
        tr.re
    }

    /// Purity tr(ρ²)
    ///
    /// 1 for pure states; bounded below by 1/2^m.
    pub fn purity(&self) -> f64 {
        let mut trace = Complex64::new(0.0, 0.0);
        for i in 0..self.dimension {
            for j in 0..self.dimension {
                trace += self.get(i, j) * self.get(j, i);
            }
        }
        trace.re
    }

    /// The diagonal as real outcome probabilities
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.dimension).map(|i| self.get(i, i).re).collect()
    }

    /// Check Hermitian symmetry within the given tolerance
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        for i in 0..self.dimension {
            for j in i..self.dimension {
                if (self.get(i, j) - self.get(j, i).conj()).norm() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Check validity: Hermitian, unit trace, nonnegative diagonal
    pub fn is_valid(&self, tolerance: f64) -> bool {
        if (self.trace() - 1.0).abs() > tolerance {
            return false;
        }
        if !self.is_hermitian(tolerance) {
            return false;
        }
        for i in 0..self.dimension {
            if self.get(i, i).re < -tolerance {
                return false;
            }
        }
        true
    }
}

impl fmt::Debug for DensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DensityMatrix {{ qubits: {}, dim: {}, purity: {:.4} }}",
            self.num_qubits,
            self.dimension,
            self.purity()
        )
    }
}

//! Eigendecomposition oracle
//!
//! The statistics layer needs real spectra of small Hermitian matrices
//! (2x2 for single-qubit entropy, 4x4 for concurrence, 2^m x 2^m for
//! multi-qubit descriptors with m ≤ 6 in practice). The dependency is
//! injected behind a narrow trait so a different linear-algebra
//! backend can be swapped in without touching any statistic.

use crate::error::{Result, StatsError};
use nalgebra::DMatrix;
use num_complex::Complex64;
use qtrace_core::{ComplexMatrix, MatrixError};

/// Result of a Hermitian eigendecomposition
#[derive(Debug, Clone)]
pub struct Eigendecomposition {
    /// Real eigenvalues, in the solver's order
    pub values: Vec<f64>,

    /// Orthonormal eigenvectors as matrix columns; column k belongs to
    /// values[k]
    pub vectors: ComplexMatrix,
}

/// Oracle returning eigenvalues and eigenvectors of a Hermitian matrix
pub trait Eigensolver {
    /// Decompose a Hermitian matrix
    ///
    /// # Errors
    /// Returns an error for non-square input or failed convergence.
    fn decompose(&self, matrix: &ComplexMatrix) -> Result<Eigendecomposition>;
}

/// Default dense Hermitian eigensolver
#[derive(Debug, Clone)]
pub struct DenseEigensolver {
    /// Convergence threshold on off-diagonal magnitudes
    pub convergence: f64,

    /// Iteration cap before reporting failure
    pub max_iterations: usize,
}

impl Default for DenseEigensolver {
    fn default() -> Self {
        Self {
            convergence: f64::EPSILON,
            max_iterations: 10_000,
        }
    }
}

impl DenseEigensolver {
    /// Create a solver with the default convergence settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl Eigensolver for DenseEigensolver {
    fn decompose(&self, matrix: &ComplexMatrix) -> Result<Eigendecomposition> {
        if !matrix.is_square() {
            return Err(StatsError::Matrix(MatrixError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            }));
        }
        let dim = matrix.rows();

        let dense: DMatrix<Complex64> = DMatrix::from_fn(dim, dim, |i, j| matrix.get(i, j));
        let eigen = dense
            .try_symmetric_eigen(self.convergence, self.max_iterations)
            .ok_or(StatsError::EigensolverFailed { dimension: dim })?;

        let values = eigen.eigenvalues.iter().copied().collect();
        let mut vectors = ComplexMatrix::zeros(dim, dim);
        for i in 0..dim {
            for j in 0..dim {
                vectors.set(i, j, eigen.eigenvectors[(i, j)]);
            }
        }
        Ok(Eigendecomposition { values, vectors })
    }
}

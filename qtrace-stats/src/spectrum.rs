//! Spectrum-based helpers shared by the statistics
//!
//! Both entropy and concurrence go through the eigendecomposition
//! oracle; this module centralizes the eigenvalue clamping policy:
//! values in (-ε, 0) are numerical noise and become 0, values below
//! -ε are a failure of the upstream computation.

use crate::eigen::Eigensolver;
use crate::error::{Result, StatsError};
use num_complex::Complex64;
use qtrace_core::{ComplexMatrix, Tolerance};
use qtrace_state::DensityMatrix;

/// Clamp an eigenvalue that should be nonnegative
///
/// # Errors
/// Returns an error if the value is below -tolerance.
pub(crate) fn clamp_nonnegative(value: f64, tolerance: f64) -> Result<f64> {
    if value < -tolerance {
        return Err(StatsError::NegativeEigenvalue { value });
    }
    Ok(value.max(0.0))
}

/// Von Neumann entropy -Σ λ log₂ λ from the spectrum of ρ
///
/// Eigenvalues below the clamping tolerance contribute 0 (the
/// 0·log₂(0) ≡ 0 convention).
///
/// # Errors
/// Returns an error for a meaningfully negative eigenvalue or a failed
/// decomposition.
pub fn von_neumann_entropy<E: Eigensolver + ?Sized>(
    rho: &DensityMatrix,
    solver: &E,
    tolerance: &Tolerance,
) -> Result<f64> {
    let eigen = solver.decompose(&rho.to_matrix())?;
    let mut entropy = 0.0;
    for &value in &eigen.values {
        let lambda = clamp_nonnegative(value, tolerance.eigenvalue)?;
        if lambda > tolerance.eigenvalue {
            entropy -= lambda * lambda.log2();
        }
    }
    Ok(entropy)
}

/// Square root of a positive semi-definite Hermitian matrix
///
/// √M = V diag(√λ) V† with negative-noise eigenvalues clamped to 0.
///
/// # Errors
/// Returns an error for a meaningfully negative eigenvalue or a failed
/// decomposition.
pub(crate) fn sqrt_psd<E: Eigensolver + ?Sized>(
    matrix: &ComplexMatrix,
    solver: &E,
    tolerance: &Tolerance,
) -> Result<ComplexMatrix> {
    let eigen = solver.decompose(matrix)?;
    let dim = matrix.rows();

    let mut diag = ComplexMatrix::zeros(dim, dim);
    for (k, &value) in eigen.values.iter().enumerate() {
        let lambda = clamp_nonnegative(value, tolerance.eigenvalue)?;
        diag.set(k, k, Complex64::new(lambda.sqrt(), 0.0));
    }

    Ok(eigen
        .vectors
        .matmul(&diag)?
        .matmul(&eigen.vectors.dagger())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eigen::DenseEigensolver;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_entropy_of_pure_state() {
        let rho = DensityMatrix::new(1).unwrap();
        let entropy =
            von_neumann_entropy(&rho, &DenseEigensolver::new(), &Tolerance::default()).unwrap();
        assert_abs_diff_eq!(entropy, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_entropy_of_maximally_mixed() {
        for qubits in 1..=3 {
            let rho = DensityMatrix::maximally_mixed(qubits).unwrap();
            let entropy =
                von_neumann_entropy(&rho, &DenseEigensolver::new(), &Tolerance::default()).unwrap();
            assert_abs_diff_eq!(entropy, qubits as f64, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_sqrt_squares_back() {
        let rho = DensityMatrix::maximally_mixed(1).unwrap();
        let root = sqrt_psd(
            &rho.to_matrix(),
            &DenseEigensolver::new(),
            &Tolerance::default(),
        )
        .unwrap();
        let squared = root.matmul(&root).unwrap();
        assert!(squared.approx_eq(&rho.to_matrix(), TOL));
    }

    #[test]
    fn test_clamp_policy() {
        assert_eq!(clamp_nonnegative(-1e-9, 1e-7).unwrap(), 0.0);
        assert!(matches!(
            clamp_nonnegative(-1e-3, 1e-7),
            Err(StatsError::NegativeEigenvalue { .. })
        ));
    }
}

//! Two-qubit descriptors
//!
//! Purity, von Neumann entropy, ZZ correlation, and the Wootters
//! concurrence of a 4x4 reduced density matrix. The pair sub-index
//! keeps the lower-numbered kept wire as bit 0, matching the global
//! ordering convention.

use crate::eigen::Eigensolver;
use crate::error::Result;
use crate::spectrum::{clamp_nonnegative, sqrt_psd, von_neumann_entropy};
use crate::validation::{require_dimension, validate_density};
use qtrace_core::{ComplexMatrix, Tolerance};
use qtrace_gates::constants::PAULI_Y;
use qtrace_state::DensityMatrix;

/// Scalar descriptors of a qubit pair
#[derive(Debug, Clone, PartialEq)]
pub struct PairDescriptors {
    /// tr(ρ²), in [1/4, 1]
    pub purity: f64,

    /// -Σ λ log₂ λ over the 4x4 spectrum, in [0, 2] bits
    pub von_neumann_entropy: f64,

    /// ⟨Z_i Z_j⟩ - ⟨Z_i⟩⟨Z_j⟩, read from the diagonal
    pub correlation: f64,

    /// Wootters concurrence, in [0, 1]
    pub concurrence: f64,
}

/// Compute all pair descriptors from a 4x4 density matrix
///
/// # Errors
/// Returns an error for a dimension other than 4, a Hermitian or trace
/// violation, or an oracle failure.
pub fn pair_descriptors<E: Eigensolver + ?Sized>(
    rho: &DensityMatrix,
    solver: &E,
    tolerance: &Tolerance,
) -> Result<PairDescriptors> {
    require_dimension(rho, 4)?;
    validate_density(rho, tolerance)?;

    Ok(PairDescriptors {
        purity: rho.purity().clamp(0.0, 1.0),
        von_neumann_entropy: von_neumann_entropy(rho, solver, tolerance)?,
        correlation: zz_correlation(rho),
        concurrence: concurrence(rho, solver, tolerance)?,
    })
}

/// ⟨Z_i Z_j⟩ - ⟨Z_i⟩⟨Z_j⟩ from the diagonal of ρ and its marginals
fn zz_correlation(rho: &DensityMatrix) -> f64 {
    let mut zz = 0.0;
    let mut z_first = 0.0;
    let mut z_second = 0.0;
    for (index, probability) in rho.diagonal().into_iter().enumerate() {
        let sign_first = 1.0 - 2.0 * ((index & 1) as f64);
        let sign_second = 1.0 - 2.0 * (((index >> 1) & 1) as f64);
        zz += probability * sign_first * sign_second;
        z_first += probability * sign_first;
        z_second += probability * sign_second;
    }
    zz - z_first * z_second
}

/// Wootters concurrence
///
/// With ρ̃ = (Y⊗Y)·ρ*·(Y⊗Y), the four relevant values are the square
/// roots of the eigenvalues of ρ·ρ̃. Those eigenvalues equal the
/// spectrum of the Hermitian product √ρ·ρ̃·√ρ, so only the Hermitian
/// oracle is needed. Concurrence = max(0, λ₁ - λ₂ - λ₃ - λ₄) with the
/// λ sorted descending.
fn concurrence<E: Eigensolver + ?Sized>(
    rho: &DensityMatrix,
    solver: &E,
    tolerance: &Tolerance,
) -> Result<f64> {
    let matrix = rho.to_matrix();

    let y = ComplexMatrix::from(PAULI_Y);
    let yy = y.kron(&y);
    let rho_tilde = yy.matmul(&matrix.conjugate())?.matmul(&yy)?;

    let sqrt_rho = sqrt_psd(&matrix, solver, tolerance)?;
    let hermitian_product = sqrt_rho.matmul(&rho_tilde)?.matmul(&sqrt_rho)?;

    let eigen = solver.decompose(&hermitian_product)?;
    let mut lambdas = Vec::with_capacity(eigen.values.len());
    for &value in &eigen.values {
        lambdas.push(clamp_nonnegative(value, tolerance.eigenvalue)?.sqrt());
    }
    lambdas.sort_by(|a, b| b.partial_cmp(a).unwrap());

    Ok((lambdas[0] - lambdas[1] - lambdas[2] - lambdas[3]).max(0.0))
}

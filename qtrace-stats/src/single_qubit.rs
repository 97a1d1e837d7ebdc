//! Single-qubit descriptors
//!
//! Everything a 2x2 reduced density matrix ρ = [[a, b], [b*, d]] can
//! say about one wire: outcome probability, relative phase, Bloch
//! coordinates, purity, and the two entropies. The Bloch convention
//! follows ρ = (I + x·X + y·Y + z·Z)/2 with the wire-0-as-LSB bit
//! order, which gives x = 2·Re(b), y = -2·Im(b), z = a - d.

use crate::eigen::Eigensolver;
use crate::error::Result;
use crate::spectrum::von_neumann_entropy;
use crate::validation::{require_dimension, validate_density};
use qtrace_core::Tolerance;
use qtrace_state::DensityMatrix;

/// Scalar and vector descriptors of one qubit
#[derive(Debug, Clone, PartialEq)]
pub struct SingleQubitDescriptors {
    /// Probability of measuring |1⟩, clamped to [0, 1]
    pub probability_one: f64,

    /// arg(ρ01) in radians; 0 by convention when |ρ01| is below the
    /// magnitude tolerance
    pub phase: f64,

    /// Bloch coordinates (x, y, z); length √(2·purity - 1) ≤ 1
    pub bloch: [f64; 3],

    /// tr(ρ²), in [1/2, 1]
    pub purity: f64,

    /// 1 - tr(ρ²)
    pub linear_entropy: f64,

    /// -Σ λ log₂ λ over the 2x2 spectrum, in [0, 1] bits
    pub von_neumann_entropy: f64,
}

impl SingleQubitDescriptors {
    /// Length of the Bloch vector
    pub fn bloch_length(&self) -> f64 {
        let [x, y, z] = self.bloch;
        (x * x + y * y + z * z).sqrt()
    }
}

/// Compute all single-qubit descriptors from a 2x2 density matrix
///
/// # Errors
/// Returns an error for a dimension other than 2, a Hermitian or trace
/// violation, or an oracle failure.
pub fn single_qubit_descriptors<E: Eigensolver + ?Sized>(
    rho: &DensityMatrix,
    solver: &E,
    tolerance: &Tolerance,
) -> Result<SingleQubitDescriptors> {
    require_dimension(rho, 2)?;
    validate_density(rho, tolerance)?;

    let a = rho.get(0, 0).re;
    let d = rho.get(1, 1).re;
    let b = rho.get(0, 1);

    let phase = if b.norm() > tolerance.magnitude {
        b.arg()
    } else {
        0.0
    };

    let purity = (a * a + d * d + 2.0 * b.norm_sqr()).clamp(0.0, 1.0);

    Ok(SingleQubitDescriptors {
        probability_one: d.clamp(0.0, 1.0),
        phase,
        bloch: [2.0 * b.re, -2.0 * b.im, a - d],
        purity,
        linear_entropy: 1.0 - purity,
        von_neumann_entropy: von_neumann_entropy(rho, solver, tolerance)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eigen::DenseEigensolver;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;
    use qtrace_state::StateVector;

    const TOL: f64 = 1e-10;
    const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    fn descriptors_of(amplitudes: &[Complex64]) -> SingleQubitDescriptors {
        let psi = StateVector::from_amplitudes(1, amplitudes).unwrap();
        let rho = DensityMatrix::from_state_vector(&psi).unwrap();
        single_qubit_descriptors(&rho, &DenseEigensolver::new(), &Tolerance::default()).unwrap()
    }

    #[test]
    fn test_ground_state() {
        let stats = descriptors_of(&[Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]);
        assert_abs_diff_eq!(stats.probability_one, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(stats.phase, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(stats.bloch[2], 1.0, epsilon = TOL);
        assert_abs_diff_eq!(stats.purity, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(stats.linear_entropy, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(stats.von_neumann_entropy, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_plus_state_points_along_x() {
        let stats = descriptors_of(&[
            Complex64::new(INV_SQRT2, 0.0),
            Complex64::new(INV_SQRT2, 0.0),
        ]);
        assert_abs_diff_eq!(stats.probability_one, 0.5, epsilon = TOL);
        assert_abs_diff_eq!(stats.bloch[0], 1.0, epsilon = TOL);
        assert_abs_diff_eq!(stats.bloch[1], 0.0, epsilon = TOL);
        assert_abs_diff_eq!(stats.bloch[2], 0.0, epsilon = TOL);
        assert_abs_diff_eq!(stats.purity, 1.0, epsilon = TOL);
    }

    #[test]
    fn test_phase_of_circular_state() {
        // (|0⟩ + i|1⟩)/√2: ρ01 = -i/2, so arg(ρ01) = -π/2 and y = +1
        let stats = descriptors_of(&[
            Complex64::new(INV_SQRT2, 0.0),
            Complex64::new(0.0, INV_SQRT2),
        ]);
        assert_abs_diff_eq!(stats.phase, -std::f64::consts::FRAC_PI_2, epsilon = TOL);
        assert_abs_diff_eq!(stats.bloch[1], 1.0, epsilon = TOL);
    }

    #[test]
    fn test_maximally_mixed_qubit() {
        let rho = DensityMatrix::maximally_mixed(1).unwrap();
        let stats =
            single_qubit_descriptors(&rho, &DenseEigensolver::new(), &Tolerance::default())
                .unwrap();
        assert_abs_diff_eq!(stats.purity, 0.5, epsilon = TOL);
        assert_abs_diff_eq!(stats.linear_entropy, 0.5, epsilon = TOL);
        assert_abs_diff_eq!(stats.von_neumann_entropy, 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(stats.bloch_length(), 0.0, epsilon = TOL);
        // Zero off-diagonal: phase defaults to 0
        assert_abs_diff_eq!(stats.phase, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_bloch_length_tracks_purity() {
        // Partially mixed state diag(0.8, 0.2)
        let mut rho = DensityMatrix::maximally_mixed(1).unwrap();
        rho.set(0, 0, Complex64::new(0.8, 0.0));
        rho.set(1, 1, Complex64::new(0.2, 0.0));
        let stats =
            single_qubit_descriptors(&rho, &DenseEigensolver::new(), &Tolerance::default())
                .unwrap();
        assert_abs_diff_eq!(
            stats.bloch_length(),
            (2.0 * stats.purity - 1.0).sqrt(),
            epsilon = TOL
        );
    }

    #[test]
    fn test_wrong_dimension_rejected() {
        let rho = DensityMatrix::maximally_mixed(2).unwrap();
        assert!(single_qubit_descriptors(
            &rho,
            &DenseEigensolver::new(),
            &Tolerance::default()
        )
        .is_err());
    }
}

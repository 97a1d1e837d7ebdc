//! Stabilizer Rényi entropy ("magic")
//!
//! The second stabilizer Rényi entropy over m qubits is built from the
//! expectations of all 4^m Pauli strings P_s:
//!
//!   Ξ_s = ⟨P_s⟩² / 2^m,   SSRE = -log₂(Σ_s Ξ_s²) - m
//!
//! It is nonnegative and vanishes exactly on stabilizer states, which
//! makes it a measure of non-Clifford resource content. A Pauli string
//! has one nonzero entry per column, so each expectation costs O(2^m)
//! and the whole descriptor O(8^m) — practical for the m ≤ 6 reduced
//! states this layer handles.

use crate::error::Result;
use crate::validation::validate_density;
use num_complex::Complex64;
use qtrace_core::Tolerance;
use qtrace_state::DensityMatrix;

/// Per-qubit Pauli codes packed two bits at a time: 0=I, 1=X, 2=Y, 3=Z
const PAULI_I: usize = 0;
const PAULI_X: usize = 1;
const PAULI_Y: usize = 2;

/// Second stabilizer Rényi entropy of a density matrix
///
/// # Errors
/// Returns an error for a Hermitian or trace violation.
pub fn stabilizer_renyi_entropy(rho: &DensityMatrix, tolerance: &Tolerance) -> Result<f64> {
    validate_density(rho, tolerance)?;

    let num_qubits = rho.num_qubits();
    let dim = rho.dimension();
    let num_strings = 1usize << (2 * num_qubits);

    let mut xi_square_sum = 0.0;
    for string in 0..num_strings {
        let expectation = pauli_expectation(rho, string, num_qubits);
        let xi = expectation * expectation / dim as f64;
        xi_square_sum += xi * xi;
    }

    let entropy = -xi_square_sum.log2() - num_qubits as f64;
    // Stabilizer states land exactly on zero up to rounding noise.
    if entropy < 0.0 && entropy > -tolerance.eigenvalue {
        Ok(0.0)
    } else {
        Ok(entropy)
    }
}

/// tr(ρ · P_s) for the Pauli string coded in `string`
///
/// P_s maps |c⟩ to a phase times |c ⊕ xmask⟩, where xmask collects the
/// X and Y positions, so the trace needs one ρ entry per column.
fn pauli_expectation(rho: &DensityMatrix, string: usize, num_qubits: usize) -> f64 {
    let mut xmask = 0usize;
    for qubit in 0..num_qubits {
        let code = (string >> (2 * qubit)) & 3;
        if code == PAULI_X || code == PAULI_Y {
            xmask |= 1 << qubit;
        }
    }

    let mut acc = Complex64::new(0.0, 0.0);
    for col in 0..rho.dimension() {
        let mut phase = Complex64::new(1.0, 0.0);
        for qubit in 0..num_qubits {
            let code = (string >> (2 * qubit)) & 3;
            let bit = (col >> qubit) & 1;
            phase *= match (code, bit) {
                (PAULI_Y, 0) => Complex64::new(0.0, 1.0),
                (PAULI_Y, _) => Complex64::new(0.0, -1.0),
                (PAULI_I, _) | (PAULI_X, _) => Complex64::new(1.0, 0.0),
                (_, 0) => Complex64::new(1.0, 0.0),
                _ => Complex64::new(-1.0, 0.0),
            };
        }
        acc += rho.get(col, col ^ xmask) * phase;
    }
    // Hermitian ρ and Hermitian P make this real; the imaginary part
    // is rounding noise.
    acc.re
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;
    use qtrace_state::StateVector;

    const TOL: f64 = 1e-10;
    const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    fn ssre_of(num_qubits: usize, amplitudes: &[Complex64]) -> f64 {
        let psi = StateVector::from_amplitudes(num_qubits, amplitudes).unwrap();
        let rho = DensityMatrix::from_state_vector(&psi).unwrap();
        stabilizer_renyi_entropy(&rho, &Tolerance::default()).unwrap()
    }

    #[test]
    fn test_computational_basis_has_no_magic() {
        assert_abs_diff_eq!(
            ssre_of(1, &[Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]),
            0.0,
            epsilon = TOL
        );
        assert_abs_diff_eq!(
            ssre_of(2, &[
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 0.0),
            ]),
            0.0,
            epsilon = TOL
        );
    }

    #[test]
    fn test_clifford_preparations_have_no_magic() {
        // |+⟩
        assert_abs_diff_eq!(
            ssre_of(1, &[
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(INV_SQRT2, 0.0),
            ]),
            0.0,
            epsilon = TOL
        );
        // (|0⟩ + i|1⟩)/√2
        assert_abs_diff_eq!(
            ssre_of(1, &[
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(0.0, INV_SQRT2),
            ]),
            0.0,
            epsilon = TOL
        );
    }

    #[test]
    fn test_t_state_magic() {
        // T|+⟩: ⟨X⟩ = ⟨Y⟩ = 1/√2, ⟨Z⟩ = 0 → SSRE = log₂(4/3)
        let half = Complex64::new(INV_SQRT2, 0.0);
        let phase = Complex64::new(0.5, 0.5);
        let ssre = ssre_of(1, &[half, phase]);
        assert_abs_diff_eq!(ssre, (4.0f64 / 3.0).log2(), epsilon = 1e-9);
    }

    #[test]
    fn test_pauli_expectation_identity_is_trace() {
        let rho = DensityMatrix::maximally_mixed(2).unwrap();
        assert_abs_diff_eq!(pauli_expectation(&rho, 0, 2), 1.0, epsilon = TOL);
    }

    #[test]
    fn test_pauli_expectation_z_on_ground_state() {
        let rho = DensityMatrix::new(1).unwrap();
        // Code 3 is Z: ⟨Z⟩ = +1 on |0⟩
        assert_abs_diff_eq!(pauli_expectation(&rho, 3, 1), 1.0, epsilon = TOL);
        // Code 1 is X: ⟨X⟩ = 0 on |0⟩
        assert_abs_diff_eq!(pauli_expectation(&rho, 1, 1), 0.0, epsilon = TOL);
    }
}

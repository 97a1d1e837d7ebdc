//! Partial-trace engine
//!
//! Computes the reduced density matrix on a kept qubit subset K,
//! either directly from a state vector in O(2^(n+m)) time and O(4^m)
//! memory, or from a full density matrix. The direct-from-ψ path is
//! the default for large registers: a full density matrix at n = 13
//! already costs about a gibibyte.
//!
//! Both paths share one bit permutation: `scatter` places the bits of
//! a reduced index at the kept wire positions and the bits of the
//! trace summation index at the remaining positions.

use crate::density_matrix::DensityMatrix;
use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use num_complex::Complex64;

/// Reduced density matrix computed directly from a state vector
///
/// With `keep = true`, `qubits` is the kept subset; otherwise `qubits`
/// lists the wires to trace out and the complement is kept. The result
/// is indexed with the lowest kept wire as its bit 0.
///
/// # Errors
/// Returns an error for out-of-range or duplicate wires, or if the
/// kept subset comes out empty.
pub fn reduced_from_state(
    psi: &StateVector,
    qubits: &[usize],
    keep: bool,
) -> Result<DensityMatrix> {
    let (kept, traced) = split_wires(psi.num_qubits(), qubits, keep)?;
    let reduced_dim = 1usize << kept.len();
    let trace_dim = 1usize << traced.len();
    let amps = psi.amplitudes();

    let mut reduced = DensityMatrix::zeros(kept.len())?;
    for a in 0..reduced_dim {
        let row_bits = scatter(a, &kept);
        for b in a..reduced_dim {
            let col_bits = scatter(b, &kept);

            let mut acc = Complex64::new(0.0, 0.0);
            for t in 0..trace_dim {
                let fill = scatter(t, &traced);
                acc += amps[row_bits | fill] * amps[col_bits | fill].conj();
            }

            reduced.set(a, b, acc);
            // The result is Hermitian; mirror the upper triangle.
            if a != b {
                reduced.set(b, a, acc.conj());
            }
        }
    }
    Ok(reduced)
}

/// Reduced density matrix computed from a full density matrix
///
/// Same contract as [`reduced_from_state`], summing
/// D[scatter(a, t), scatter(b, t)] over the traced index t.
///
/// # Errors
/// Returns an error for out-of-range or duplicate wires, or if the
/// kept subset comes out empty.
pub fn reduced_from_density(
    rho: &DensityMatrix,
    qubits: &[usize],
    keep: bool,
) -> Result<DensityMatrix> {
    let (kept, traced) = split_wires(rho.num_qubits(), qubits, keep)?;
    let reduced_dim = 1usize << kept.len();
    let trace_dim = 1usize << traced.len();

    let mut reduced = DensityMatrix::zeros(kept.len())?;
    for a in 0..reduced_dim {
        let row_bits = scatter(a, &kept);
        for b in 0..reduced_dim {
            let col_bits = scatter(b, &kept);

            let mut acc = Complex64::new(0.0, 0.0);
            for t in 0..trace_dim {
                let fill = scatter(t, &traced);
                acc += rho.get(row_bits | fill, col_bits | fill);
            }
            reduced.set(a, b, acc);
        }
    }
    Ok(reduced)
}

impl StateVector {
    /// Convenience wrapper for [`reduced_from_state`] with `keep = true`
    pub fn reduced_density_matrix(&self, kept_qubits: &[usize]) -> Result<DensityMatrix> {
        reduced_from_state(self, kept_qubits, true)
    }
}

impl DensityMatrix {
    /// Convenience wrapper for [`reduced_from_density`]
    pub fn partial_trace(&self, qubits: &[usize], keep: bool) -> Result<DensityMatrix> {
        reduced_from_density(self, qubits, keep)
    }
}

/// Scatter the bits of `value` to the given bit positions
///
/// Bit j of `value` lands at position `positions[j]`.
#[inline]
fn scatter(value: usize, positions: &[usize]) -> usize {
    let mut out = 0usize;
    for (j, &position) in positions.iter().enumerate() {
        if value & (1 << j) != 0 {
            out |= 1 << position;
        }
    }
    out
}

/// Resolve the kept and traced wire sets, both sorted ascending
fn split_wires(
    num_qubits: usize,
    qubits: &[usize],
    keep: bool,
) -> Result<(Vec<usize>, Vec<usize>)> {
    let mut selected = 0usize;
    for &wire in qubits {
        if wire >= num_qubits {
            return Err(StateError::InvalidWire { wire, num_qubits });
        }
        let bit = 1usize << wire;
        if selected & bit != 0 {
            return Err(StateError::DuplicateWire { wire });
        }
        selected |= bit;
    }

    let kept_bits = if keep {
        selected
    } else {
        !selected & ((1 << num_qubits) - 1)
    };
    if kept_bits == 0 {
        return Err(StateError::EmptyKeptSubset);
    }

    let kept = (0..num_qubits).filter(|q| kept_bits & (1 << q) != 0).collect();
    let traced = (0..num_qubits).filter(|q| kept_bits & (1 << q) == 0).collect();
    Ok((kept, traced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-10;
    const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    fn bell_state() -> StateVector {
        let amps = vec![
            Complex64::new(INV_SQRT2, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(INV_SQRT2, 0.0),
        ];
        StateVector::from_amplitudes(2, &amps).unwrap()
    }

    #[test]
    fn test_bell_reduces_to_maximally_mixed() {
        let psi = bell_state();
        for wire in 0..2 {
            let reduced = psi.reduced_density_matrix(&[wire]).unwrap();
            assert_eq!(reduced.dimension(), 2);
            assert_abs_diff_eq!(reduced.get(0, 0).re, 0.5, epsilon = TOL);
            assert_abs_diff_eq!(reduced.get(1, 1).re, 0.5, epsilon = TOL);
            assert_abs_diff_eq!(reduced.get(0, 1).norm(), 0.0, epsilon = TOL);
            assert!(reduced.is_valid(TOL));
        }
    }

    #[test]
    fn test_keep_and_trace_out_agree() {
        let psi = bell_state();
        let kept = reduced_from_state(&psi, &[0], true).unwrap();
        let traced = reduced_from_state(&psi, &[1], false).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(
                    (kept.get(i, j) - traced.get(i, j)).norm(),
                    0.0,
                    epsilon = TOL
                );
            }
        }
    }

    #[test]
    fn test_state_and_density_paths_agree() {
        // Unbalanced three-qubit state
        let mut amps = vec![Complex64::new(0.0, 0.0); 8];
        amps[0] = Complex64::new(0.5, 0.0);
        amps[3] = Complex64::new(0.5, 0.5);
        amps[6] = Complex64::new(0.0, -0.5);
        amps[7] = Complex64::new(0.5, 0.0);
        let psi = StateVector::from_amplitudes(3, &amps).unwrap();
        let rho = DensityMatrix::from_state_vector(&psi).unwrap();

        let from_state = reduced_from_state(&psi, &[0, 2], true).unwrap();
        let from_density = reduced_from_density(&rho, &[0, 2], true).unwrap();

        assert_eq!(from_state.dimension(), 4);
        for i in 0..4 {
            for j in 0..4 {
                assert_abs_diff_eq!(
                    (from_state.get(i, j) - from_density.get(i, j)).norm(),
                    0.0,
                    epsilon = TOL
                );
            }
        }
    }

    #[test]
    fn test_transitivity() {
        // Tracing out wire 0 and then wire 1 equals tracing out {0, 1}.
        let mut amps = vec![Complex64::new(0.0, 0.0); 8];
        amps[1] = Complex64::new(0.6, 0.0);
        amps[4] = Complex64::new(0.0, 0.48);
        amps[7] = Complex64::new(0.64, 0.0);
        let psi = StateVector::from_amplitudes(3, &amps).unwrap();

        let in_one_step = reduced_from_state(&psi, &[0, 1], false).unwrap();

        let intermediate = reduced_from_state(&psi, &[0], false).unwrap();
        // After dropping wire 0, old wire 1 is bit 0 of the reduced index.
        let in_two_steps = intermediate.partial_trace(&[0], false).unwrap();

        assert_eq!(in_one_step.dimension(), 2);
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(
                    (in_one_step.get(i, j) - in_two_steps.get(i, j)).norm(),
                    0.0,
                    epsilon = TOL
                );
            }
        }
    }

    #[test]
    fn test_product_state_stays_pure() {
        // |+⟩ ⊗ |0⟩: each marginal has purity 1
        let amps = vec![
            Complex64::new(INV_SQRT2, 0.0),
            Complex64::new(INV_SQRT2, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        let psi = StateVector::from_amplitudes(2, &amps).unwrap();
        for wire in 0..2 {
            let reduced = psi.reduced_density_matrix(&[wire]).unwrap();
            assert_abs_diff_eq!(reduced.purity(), 1.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_keep_everything_is_outer_product() {
        let psi = bell_state();
        let reduced = reduced_from_state(&psi, &[0, 1], true).unwrap();
        let outer = DensityMatrix::from_state_vector(&psi).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_abs_diff_eq!(
                    (reduced.get(i, j) - outer.get(i, j)).norm(),
                    0.0,
                    epsilon = TOL
                );
            }
        }
    }

    #[test]
    fn test_invalid_subsets_rejected() {
        let psi = bell_state();
        assert!(matches!(
            reduced_from_state(&psi, &[2], true),
            Err(StateError::InvalidWire { .. })
        ));
        assert!(matches!(
            reduced_from_state(&psi, &[0, 0], true),
            Err(StateError::DuplicateWire { .. })
        ));
        assert!(matches!(
            reduced_from_state(&psi, &[], true),
            Err(StateError::EmptyKeptSubset)
        ));
        assert!(matches!(
            reduced_from_state(&psi, &[0, 1], false),
            Err(StateError::EmptyKeptSubset)
        ));
    }
}

//! Qubit-wise gate application kernels
//!
//! Gates act on a state vector without ever materializing a 2^n x 2^n
//! operator: a 2x2 gate touches amplitude pairs separated by the
//! target stride, a 4x4 gate touches quadruples spanning its two
//! target bits. Every kernel honors a [`ControlMask`] by acting as the
//! identity on basis indices that contradict a control, and returns a
//! fresh output vector; the input is never mutated.
//!
//! Above [`PARALLEL_THRESHOLD`] amplitudes the kernels shard the index
//! range across rayon workers; the sharding touches non-overlapping
//! index groups, so the parallel and sequential paths are
//! bit-identical.

use crate::controls::ControlMask;
use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use num_complex::Complex64;
use qtrace_core::{ComplexMatrix, Matrix2x2, Matrix4x4};
use rayon::prelude::*;

/// Minimum state dimension for the rayon kernel paths
pub const PARALLEL_THRESHOLD: usize = 1 << 14;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Apply a gate given as a [`ComplexMatrix`], dispatching on its shape
///
/// A 2x2 matrix takes one target wire, a 4x4 matrix takes two. For the
/// 4x4 case the first listed target is the sub-index LSB, so the
/// library CX applied to targets `[a, b]` controls on wire `a` and
/// flips wire `b`.
///
/// # Errors
/// Returns an error for a gate shape other than 2x2 or 4x4, a target
/// count not matching the shape, or any wire/control violation.
pub fn apply_gate(
    psi: &StateVector,
    gate: &ComplexMatrix,
    targets: &[usize],
    controls: &ControlMask,
) -> Result<StateVector> {
    match gate.shape() {
        (2, 2) => {
            if targets.len() != 1 {
                return Err(StateError::WrongTargetCount {
                    expected: 1,
                    actual: targets.len(),
                });
            }
            let m: Matrix2x2 = [
                [gate.get(0, 0), gate.get(0, 1)],
                [gate.get(1, 0), gate.get(1, 1)],
            ];
            apply_single_qubit(psi, &m, targets[0], controls)
        }
        (4, 4) => {
            if targets.len() != 2 {
                return Err(StateError::WrongTargetCount {
                    expected: 2,
                    actual: targets.len(),
                });
            }
            let mut m: Matrix4x4 = [[ZERO; 4]; 4];
            for (i, row) in m.iter_mut().enumerate() {
                for (j, entry) in row.iter_mut().enumerate() {
                    *entry = gate.get(i, j);
                }
            }
            apply_two_qubit(psi, &m, (targets[0], targets[1]), controls)
        }
        (rows, cols) => Err(StateError::InvalidGateShape { rows, cols }),
    }
}

/// Apply a 2x2 gate to one wire
///
/// # Errors
/// Returns an error if the target is out of range or the control mask
/// is invalid for this operation.
pub fn apply_single_qubit(
    psi: &StateVector,
    gate: &Matrix2x2,
    target: usize,
    controls: &ControlMask,
) -> Result<StateVector> {
    let num_qubits = psi.num_qubits();
    if target >= num_qubits {
        return Err(StateError::InvalidWire {
            wire: target,
            num_qubits,
        });
    }
    controls.validate(num_qubits, &[target])?;

    let dim = psi.dimension();
    let stride = 1usize << target;
    let (cbits, cexpected) = controls.compile();
    let src = psi.amplitudes();
    let mut out = vec![ZERO; dim];

    if dim >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(stride * 2)
            .zip(src.par_chunks(stride * 2))
            .enumerate()
            .for_each(|(chunk, (dst, block))| {
                single_qubit_block(gate, stride, chunk * stride * 2, cbits, cexpected, block, dst);
            });
    } else {
        for (chunk, (dst, block)) in out
            .chunks_mut(stride * 2)
            .zip(src.chunks(stride * 2))
            .enumerate()
        {
            single_qubit_block(gate, stride, chunk * stride * 2, cbits, cexpected, block, dst);
        }
    }

    Ok(StateVector::from_raw(num_qubits, out))
}

/// Update one 2*stride block of amplitude pairs
#[inline]
fn single_qubit_block(
    gate: &Matrix2x2,
    stride: usize,
    base: usize,
    cbits: usize,
    cexpected: usize,
    src: &[Complex64],
    dst: &mut [Complex64],
) {
    for j in 0..stride {
        let a = src[j];
        let b = src[j + stride];
        // Controls never sit on the target bit, so both pair members
        // agree on the control test.
        if (base + j) & cbits != cexpected {
            dst[j] = a;
            dst[j + stride] = b;
        } else {
            dst[j] = gate[0][0] * a + gate[0][1] * b;
            dst[j + stride] = gate[1][0] * a + gate[1][1] * b;
        }
    }
}

/// Apply a 4x4 gate to two wires
///
/// The first target is the sub-index LSB: the gate's basis ordering is
/// |t1 t0⟩ with t0 least significant, matching the global convention.
///
/// # Errors
/// Returns an error for equal or out-of-range targets, or an invalid
/// control mask.
pub fn apply_two_qubit(
    psi: &StateVector,
    gate: &Matrix4x4,
    targets: (usize, usize),
    controls: &ControlMask,
) -> Result<StateVector> {
    let num_qubits = psi.num_qubits();
    let (t0, t1) = targets;
    if t0 == t1 {
        return Err(StateError::DuplicateWire { wire: t0 });
    }
    for wire in [t0, t1] {
        if wire >= num_qubits {
            return Err(StateError::InvalidWire { wire, num_qubits });
        }
    }
    controls.validate(num_qubits, &[t0, t1])?;

    let dim = psi.dimension();
    let mask0 = 1usize << t0;
    let mask1 = 1usize << t1;
    let pair_mask = mask0 | mask1;
    let (cbits, cexpected) = controls.compile();
    let src = psi.amplitudes();

    // Pull-style update: each output amplitude reads the four inputs
    // of its quadruple, so the index range shards trivially.
    let compute = |r: usize| -> Complex64 {
        if r & cbits != cexpected {
            return src[r];
        }
        let row = ((r >> t1) & 1) << 1 | ((r >> t0) & 1);
        let base = r & !pair_mask;
        let mut sum = ZERO;
        for (col, &g) in gate[row].iter().enumerate() {
            let idx = base
                | if col & 1 != 0 { mask0 } else { 0 }
                | if col & 2 != 0 { mask1 } else { 0 };
            sum += g * src[idx];
        }
        sum
    };

    let out: Vec<Complex64> = if dim >= PARALLEL_THRESHOLD {
        (0..dim).into_par_iter().map(compute).collect()
    } else {
        (0..dim).map(compute).collect()
    };

    Ok(StateVector::from_raw(num_qubits, out))
}

/// Exchange two wires by permuting amplitudes
///
/// ψ'[r] = ψ[σ(r)] with σ swapping the two wire bits; a contradicted
/// control mask leaves the amplitude in place.
///
/// # Errors
/// Returns an error for equal or out-of-range wires, or an invalid
/// control mask.
pub fn apply_swap(
    psi: &StateVector,
    wires: (usize, usize),
    controls: &ControlMask,
) -> Result<StateVector> {
    let num_qubits = psi.num_qubits();
    let (w0, w1) = wires;
    if w0 == w1 {
        return Err(StateError::DuplicateWire { wire: w0 });
    }
    for wire in [w0, w1] {
        if wire >= num_qubits {
            return Err(StateError::InvalidWire { wire, num_qubits });
        }
    }
    controls.validate(num_qubits, &[w0, w1])?;

    let dim = psi.dimension();
    let swap_mask = (1usize << w0) | (1usize << w1);
    let (cbits, cexpected) = controls.compile();
    let src = psi.amplitudes();

    let compute = |r: usize| -> Complex64 {
        if r & cbits != cexpected {
            return src[r];
        }
        let b0 = (r >> w0) & 1;
        let b1 = (r >> w1) & 1;
        if b0 == b1 {
            src[r]
        } else {
            src[r ^ swap_mask]
        }
    };

    let out: Vec<Complex64> = if dim >= PARALLEL_THRESHOLD {
        (0..dim).into_par_iter().map(compute).collect()
    } else {
        (0..dim).map(compute).collect()
    };

    Ok(StateVector::from_raw(num_qubits, out))
}

/// Expand a 4x4 gate into the explicit 2^n x 2^n operator on two wires
///
/// For callers who prefer the explicit-matrix path; the qubit-wise
/// kernels above never build this operator.
///
/// # Errors
/// Returns an error for equal or out-of-range targets or an
/// unsupported qubit count.
pub fn expand_two_qubit(
    gate: &Matrix4x4,
    targets: (usize, usize),
    num_qubits: usize,
) -> Result<ComplexMatrix> {
    if num_qubits == 0 || num_qubits > crate::state_vector::MAX_QUBITS {
        return Err(StateError::InvalidQubitCount {
            requested: num_qubits,
            max: crate::state_vector::MAX_QUBITS,
        });
    }
    let (t0, t1) = targets;
    if t0 == t1 {
        return Err(StateError::DuplicateWire { wire: t0 });
    }
    for wire in [t0, t1] {
        if wire >= num_qubits {
            return Err(StateError::InvalidWire { wire, num_qubits });
        }
    }

    let dim = 1usize << num_qubits;
    let mask0 = 1usize << t0;
    let mask1 = 1usize << t1;
    let pair_mask = mask0 | mask1;

    let mut out = ComplexMatrix::zeros(dim, dim);
    for r in 0..dim {
        let row = ((r >> t1) & 1) << 1 | ((r >> t0) & 1);
        let base = r & !pair_mask;
        for (col, &g) in gate[row].iter().enumerate() {
            let c = base
                | if col & 1 != 0 { mask0 } else { 0 }
                | if col & 2 != 0 { mask1 } else { 0 };
            out.set(r, c, g);
        }
    }
    Ok(out)
}

//! Fixed gate matrices
//!
//! Constant matrices for the non-parameterized gate set. Every root
//! gate ships with its adjoint; the self-adjoint gates (Paulis, H,
//! SWAP) are their own inverses. The two-qubit CX constant stores the
//! wire-0-as-control orientation; see [`crate::GateLibrary`] for the
//! textbook alternative.

use num_complex::Complex64;
use qtrace_core::{Matrix2x2, Matrix4x4};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

/// 1/√2
pub(crate) const INV_SQRT2: f64 = 0.7071067811865476;

// cos²(π/8) and sin²(π/8), the entries of the fourth-root gates:
// (1 ± e^(iπ/4))/2 = (1 ± 1/√2)/2 ∓ (i/√2)/2
const QUARTER_DIAG: f64 = 0.8535533905932738; // (1 + 1/√2)/2
const QUARTER_OFF: f64 = 0.1464466094067262; // (1 - 1/√2)/2
const QUARTER_IM: f64 = 0.3535533905932738; // (1/√2)/2

/// Identity gate
pub const IDENTITY: Matrix2x2 = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X gate (NOT)
pub const PAULI_X: Matrix2x2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate
pub const PAULI_Y: Matrix2x2 = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z gate
pub const PAULI_Z: Matrix2x2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Hadamard gate
pub const HADAMARD: Matrix2x2 = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// √X gate
/// √X = 1/2 * [[1+i, 1-i],
///             [1-i, 1+i]]
pub const SQRT_X: Matrix2x2 = [
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
];

/// √X† gate
pub const SQRT_X_DAGGER: Matrix2x2 = [
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
];

/// √Y gate
/// √Y = 1/2 * [[1+i, -1-i],
///             [1+i,  1+i]]
pub const SQRT_Y: Matrix2x2 = [
    [Complex64::new(0.5, 0.5), Complex64::new(-0.5, -0.5)],
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, 0.5)],
];

/// √Y† gate
pub const SQRT_Y_DAGGER: Matrix2x2 = [
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(-0.5, 0.5), Complex64::new(0.5, -0.5)],
];

/// √Z gate (S, phase gate)
pub const S_GATE: Matrix2x2 = [[ONE, ZERO], [ZERO, I]];

/// √Z† gate (S†)
pub const S_GATE_DAGGER: Matrix2x2 = [[ONE, ZERO], [ZERO, NEG_I]];

/// ⁴√X gate (√√X)
pub const FOURTH_ROOT_X: Matrix2x2 = [
    [
        Complex64::new(QUARTER_DIAG, QUARTER_IM),
        Complex64::new(QUARTER_OFF, -QUARTER_IM),
    ],
    [
        Complex64::new(QUARTER_OFF, -QUARTER_IM),
        Complex64::new(QUARTER_DIAG, QUARTER_IM),
    ],
];

/// ⁴√X† gate
pub const FOURTH_ROOT_X_DAGGER: Matrix2x2 = [
    [
        Complex64::new(QUARTER_DIAG, -QUARTER_IM),
        Complex64::new(QUARTER_OFF, QUARTER_IM),
    ],
    [
        Complex64::new(QUARTER_OFF, QUARTER_IM),
        Complex64::new(QUARTER_DIAG, -QUARTER_IM),
    ],
];

/// ⁴√Y gate (√√Y)
pub const FOURTH_ROOT_Y: Matrix2x2 = [
    [
        Complex64::new(QUARTER_DIAG, QUARTER_IM),
        Complex64::new(-QUARTER_IM, -QUARTER_OFF),
    ],
    [
        Complex64::new(QUARTER_IM, QUARTER_OFF),
        Complex64::new(QUARTER_DIAG, QUARTER_IM),
    ],
];

/// ⁴√Y† gate
pub const FOURTH_ROOT_Y_DAGGER: Matrix2x2 = [
    [
        Complex64::new(QUARTER_DIAG, -QUARTER_IM),
        Complex64::new(QUARTER_IM, -QUARTER_OFF),
    ],
    [
        Complex64::new(-QUARTER_IM, QUARTER_OFF),
        Complex64::new(QUARTER_DIAG, -QUARTER_IM),
    ],
];

/// ⁴√Z gate (T, π/8 gate)
pub const T_GATE: Matrix2x2 = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)],
];

/// ⁴√Z† gate (T†)
pub const T_GATE_DAGGER: Matrix2x2 = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)],
];

/// CX gate with wire 0 (the basis-index LSB) as control
///
/// CX = [[1, 0, 0, 0],
///       [0, 0, 0, 1],
///       [0, 0, 1, 0],
///       [0, 1, 0, 0]]
///
/// Flips the wire-1 bit exactly when the wire-0 bit is set. The
/// textbook orientation (wire 1 as control) is this matrix with its
/// index bits reversed.
pub const CX: Matrix4x4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
];

/// CX gate in the textbook orientation (high bit as control)
pub const CX_TEXTBOOK: Matrix4x4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// SWAP gate (symmetric under endianness reversal)
pub const SWAP: Matrix4x4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
];

//! Parameterized gate factories
//!
//! Every angle argument is in degrees; conversion to radians happens
//! here and nowhere else. Exponent arguments (the `XE`/`YE`/`ZE`
//! family) are dimensionless.

use crate::constants::{IDENTITY, PAULI_X, PAULI_Y};
use crate::error::{GateError, Result};
use num_complex::Complex64;
use qtrace_core::Matrix2x2;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

#[inline]
fn radians(theta_deg: f64) -> f64 {
    theta_deg.to_radians()
}

#[inline]
fn cis(theta_rad: f64) -> Complex64 {
    Complex64::new(theta_rad.cos(), theta_rad.sin())
}

/// Global phase gate: e^(iθ) * I
pub fn global_phase(theta_deg: f64) -> Matrix2x2 {
    let p = cis(radians(theta_deg));
    [[p, ZERO], [ZERO, p]]
}

/// Phase gate
/// P(θ) = [[1, 0],
///         [0, e^(iθ)]]
pub fn phase(theta_deg: f64) -> Matrix2x2 {
    [[ONE, ZERO], [ZERO, cis(radians(theta_deg))]]
}

/// Rotation about the X axis
/// RX(θ) = [[cos(θ/2),    -i·sin(θ/2)],
///          [-i·sin(θ/2),  cos(θ/2)]]
pub fn rotation_x(theta_deg: f64) -> Matrix2x2 {
    let half = radians(theta_deg) / 2.0;
    let (sin, cos) = half.sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
        [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Y axis
/// RY(θ) = [[cos(θ/2), -sin(θ/2)],
///          [sin(θ/2),  cos(θ/2)]]
pub fn rotation_y(theta_deg: f64) -> Matrix2x2 {
    let half = radians(theta_deg) / 2.0;
    let (sin, cos) = half.sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Z axis
/// RZ(θ) = [[e^(-iθ/2), 0],
///          [0,          e^(iθ/2)]]
pub fn rotation_z(theta_deg: f64) -> Matrix2x2 {
    let half = radians(theta_deg) / 2.0;
    [[cis(-half), ZERO], [ZERO, cis(half)]]
}

/// Rotation about a free axis, with the rotation angle encoded in the
/// axis length
///
/// The gate is exp(-i·(θ/2)·n̂·σ) where θ = |a| in degrees and
/// n̂ = a/|a|. A zero-length axis is a zero-angle rotation, i.e. the
/// identity.
///
/// # Errors
/// Returns an error if the axis has non-finite length.
pub fn rotation_free_axis(axis: [f64; 3]) -> Result<Matrix2x2> {
    let length = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    if length == 0.0 {
        return Ok(IDENTITY);
    }
    rotation_free_axis_angle(axis, length)
}

/// Rotation by θ about a free axis
///
/// The gate is exp(-i·(θ/2)·n̂·σ) = cos(θ/2)·I − i·sin(θ/2)·n̂·σ with
/// n̂ the normalized axis.
///
/// # Errors
/// Returns an error if the axis has zero or non-finite length.
pub fn rotation_free_axis_angle(axis: [f64; 3], theta_deg: f64) -> Result<Matrix2x2> {
    let length = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    if length == 0.0 || !length.is_finite() {
        return Err(GateError::ZeroAxis {
            x: axis[0],
            y: axis[1],
            z: axis[2],
        });
    }
    let (nx, ny, nz) = (axis[0] / length, axis[1] / length, axis[2] / length);

    let half = radians(theta_deg) / 2.0;
    let (sin, cos) = half.sin_cos();

    // cos(θ/2)·I − i·sin(θ/2)·(nx·X + ny·Y + nz·Z)
    Ok([
        [
            Complex64::new(cos, -sin * nz),
            Complex64::new(-sin * ny, -sin * nx),
        ],
        [
            Complex64::new(sin * ny, -sin * nx),
            Complex64::new(cos, sin * nz),
        ],
    ])
}

/// Generalized Z gate: independent phases on both basis states
/// Z_G(a, b) = [[e^(ia), 0],
///              [0,      e^(ib)]]
///
/// Z_G(0, 180°) = Z; Z_G(0, θ) = Phase(θ); Z_G(θ, θ) = GlobalPhase(θ).
pub fn z_general(a_deg: f64, b_deg: f64) -> Matrix2x2 {
    [
        [cis(radians(a_deg)), ZERO],
        [ZERO, cis(radians(b_deg))],
    ]
}

/// Generalized Y gate: real rotation with phased off-diagonals
/// Y_G(a, b) = [[cos a, -e^(-ib)·sin a],
///              [e^(ib)·sin a, cos a]]
///
/// Y_G(a, 0) = RY(2a).
pub fn y_general(a_deg: f64, b_deg: f64) -> Matrix2x2 {
    let (sin, cos) = radians(a_deg).sin_cos();
    let b = radians(b_deg);
    [
        [Complex64::new(cos, 0.0), -cis(-b) * sin],
        [cis(b) * sin, Complex64::new(cos, 0.0)],
    ]
}

/// Generalized Hadamard gate: a reflection with phased off-diagonals
/// H_G(a, b) = [[cos a, e^(-ib)·sin a],
///              [e^(ib)·sin a, -cos a]]
///
/// H_G(45°, 0) = H; Hermitian and self-inverse for every (a, b).
pub fn h_general(a_deg: f64, b_deg: f64) -> Matrix2x2 {
    let (sin, cos) = radians(a_deg).sin_cos();
    let b = radians(b_deg);
    [
        [Complex64::new(cos, 0.0), cis(-b) * sin],
        [cis(b) * sin, Complex64::new(-cos, 0.0)],
    ]
}

/// X raised to a real exponent: XE(k) = X^k (principal power)
///
/// P^k = c·I + s·P with c = (1 + e^(iπk))/2 and s = (1 − e^(iπk))/2,
/// so XE(1/2) = √X and XE(1/4) = ⁴√X exactly.
pub fn x_exponent(k: f64) -> Matrix2x2 {
    pauli_power(PAULI_X, k)
}

/// Y raised to a real exponent: YE(k) = Y^k (principal power)
pub fn y_exponent(k: f64) -> Matrix2x2 {
    pauli_power(PAULI_Y, k)
}

/// Z raised to a real exponent: ZE(k) = Z^k (principal power)
///
/// Diagonal, so computed directly: diag(1, e^(iπk)).
pub fn z_exponent(k: f64) -> Matrix2x2 {
    [[ONE, ZERO], [ZERO, cis(std::f64::consts::PI * k)]]
}

/// Principal power of a Pauli matrix via its ±1 spectrum
fn pauli_power(pauli: Matrix2x2, k: f64) -> Matrix2x2 {
    let w = cis(std::f64::consts::PI * k);
    let c = (ONE + w) * 0.5;
    let s = (ONE - w) * 0.5;
    [
        [c + s * pauli[0][0], s * pauli[0][1]],
        [s * pauli[1][0], c + s * pauli[1][1]],
    ]
}

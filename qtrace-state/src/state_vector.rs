//! Pure-state amplitude vectors
//!
//! A state vector over n qubits is a length-2^n complex buffer. The
//! basis index r, read as bits r = b_{n-1}..b_1 b_0, assigns qubit 0
//! to the least significant bit (the top wire of a drawn circuit).

use crate::error::{Result, StateError};
use num_complex::Complex64;
use qtrace_core::ComplexMatrix;
use std::fmt;

/// Largest supported register size
pub const MAX_QUBITS: usize = 30;

/// Pure quantum state over n qubits
///
/// # Example
///
/// ```
/// use qtrace_state::StateVector;
///
/// let psi = StateVector::new(2).unwrap();
/// assert_eq!(psi.num_qubits(), 2);
/// assert_eq!(psi.dimension(), 4);
/// assert_eq!(psi.amplitudes()[0].re, 1.0);
/// ```
#[derive(Clone)]
pub struct StateVector {
    /// Number of qubits
    num_qubits: usize,

    /// Amplitudes indexed by basis state, length 2^num_qubits
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create the state |0...0⟩ on `num_qubits` qubits
    ///
    /// # Errors
    /// Returns an error if the qubit count is 0 or above [`MAX_QUBITS`].
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::basis_state(num_qubits, 0)
    }

    /// Create the computational basis state |index⟩
    ///
    /// # Errors
    /// Returns an error for an unsupported qubit count or an index
    /// outside [0, 2^num_qubits).
    pub fn basis_state(num_qubits: usize, index: usize) -> Result<Self> {
        check_qubit_count(num_qubits)?;
        let dimension = 1usize << num_qubits;
        if index >= dimension {
            return Err(StateError::InvalidBasisIndex { index, dimension });
        }

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state from explicit amplitudes
    ///
    /// # Errors
    /// Returns an error if the slice length is not 2^num_qubits.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        check_qubit_count(num_qubits)?;
        let dimension = 1usize << num_qubits;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }
        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    /// Tensor product of several registers
    ///
    /// The first factor occupies the most significant index bits, so a
    /// list ordered `[q_{n-1}, ..., q_0]` composes registers in the
    /// standard |q_{n-1} .. q_0⟩ reading order.
    ///
    /// # Errors
    /// Returns an error for an empty list or a combined register above
    /// [`MAX_QUBITS`].
    pub fn tensor(factors: &[&StateVector]) -> Result<Self> {
        let (first, rest) = factors
            .split_first()
            .ok_or(qtrace_core::MatrixError::EmptyOperandList)
            .map_err(StateError::from)?;

        let mut num_qubits = first.num_qubits;
        let mut amplitudes = first.amplitudes.clone();
        for factor in rest {
            num_qubits += factor.num_qubits;
            check_qubit_count(num_qubits)?;

            let mut combined =
                Vec::with_capacity(amplitudes.len() * factor.amplitudes.len());
            for &high in &amplitudes {
                for &low in &factor.amplitudes {
                    combined.push(high * low);
                }
            }
            amplitudes = combined;
        }

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Build a state from an owned buffer whose length is already 2^n
    pub(crate) fn from_raw(num_qubits: usize, amplitudes: Vec<Complex64>) -> Self {
        debug_assert_eq!(amplitudes.len(), 1 << num_qubits);
        Self {
            num_qubits,
            amplitudes,
        }
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// The amplitude buffer, indexed by basis state
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// L2 norm of the state
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Scale the state to unit norm
    ///
    /// A numerically zero state is left untouched.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 1e-12 {
            let inv = 1.0 / norm;
            for amplitude in &mut self.amplitudes {
                *amplitude *= inv;
            }
        }
    }

    /// Check |norm - 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Probability of each basis outcome, |ψ_r|²
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// The state as a 2^n x 1 column matrix
    pub fn to_column_matrix(&self) -> ComplexMatrix {
        ComplexMatrix::column(&self.amplitudes)
    }

    /// Build a state from a 2^n x 1 column matrix
    ///
    /// # Errors
    /// Returns an error if the matrix is not a column of power-of-two
    /// length.
    pub fn from_column_matrix(column: &ComplexMatrix) -> Result<Self> {
        let (rows, cols) = column.shape();
        if cols != 1 || !rows.is_power_of_two() || rows < 2 {
            return Err(StateError::InvalidDimension { dimension: rows * cols });
        }
        let num_qubits = rows.trailing_zeros() as usize;
        Self::from_amplitudes(num_qubits, column.data())
    }

    /// Check entrywise equality within the given tolerance
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.num_qubits == other.num_qubits
            && self
                .amplitudes
                .iter()
                .zip(&other.amplitudes)
                .all(|(a, b)| (a - b).norm() <= epsilon)
    }
}

impl fmt::Debug for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StateVector {{ qubits: {}, dim: {}, norm: {:.6} }}",
            self.num_qubits,
            self.dimension(),
            self.norm()
        )
    }
}

fn check_qubit_count(num_qubits: usize) -> Result<()> {
    if num_qubits == 0 || num_qubits > MAX_QUBITS {
        return Err(StateError::InvalidQubitCount {
            requested: num_qubits,
            max: MAX_QUBITS,
        });
    }
    Ok(())
}

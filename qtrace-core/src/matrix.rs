//! Dense complex matrices in row-major storage
//!
//! This module provides the matrix algebra the simulator is built on:
//! small operators (2x2, 4x4), state-vector columns (2^n x 1), and
//! reduced density matrices (2^m x 2^m) all share one representation,
//! a contiguous row-major `Vec<Complex64>` with dimensions fixed at
//! creation. The flat buffer keeps element access at a single
//! multiply-add (`row * cols + col`).

use crate::error::{MatrixError, Result};
use num_complex::Complex64;
use std::fmt;

/// Fixed-size 2x2 gate matrix
pub type Matrix2x2 = [[Complex64; 2]; 2];

/// Fixed-size 4x4 gate matrix
pub type Matrix4x4 = [[Complex64; 4]; 4];

/// Dense complex matrix with row-major storage
///
/// # Example
///
/// ```
/// use qtrace_core::ComplexMatrix;
/// use num_complex::Complex64;
///
/// let id = ComplexMatrix::identity(2);
/// assert_eq!(id.get(0, 0), Complex64::new(1.0, 0.0));
/// assert_eq!(id.get(0, 1), Complex64::new(0.0, 0.0));
/// ```
#[derive(Clone, PartialEq)]
pub struct ComplexMatrix {
    rows: usize,
    cols: usize,
    /// Entries in row-major order, length rows * cols
    data: Vec<Complex64>,
}

impl ComplexMatrix {
    /// Create a zero matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Complex64::new(0.0, 0.0); rows * cols],
        }
    }

    /// Create the identity matrix of the given dimension
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim, dim);
        for i in 0..dim {
            m.set(i, i, Complex64::new(1.0, 0.0));
        }
        m
    }

    /// Create a matrix from a row-major data buffer
    ///
    /// # Errors
    /// Returns an error if the buffer length does not equal rows * cols.
    pub fn from_data(rows: usize, cols: usize, data: Vec<Complex64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::BufferLengthMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a column vector from a slice of amplitudes
    pub fn column(data: &[Complex64]) -> Self {
        Self {
            rows: data.len(),
            cols: 1,
            data: data.to_vec(),
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get the element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.cols + col]
    }

    /// Set the element at (row, col)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.data[row * self.cols + col] = value;
    }

    /// Row-major view of the underlying buffer
    #[inline]
    pub fn data(&self) -> &[Complex64] {
        &self.data
    }

    /// Elementwise sum
    ///
    /// # Errors
    /// Returns an error if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Elementwise difference
    ///
    /// # Errors
    /// Returns an error if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Multiply every entry by a complex scalar
    pub fn scale(&self, factor: Complex64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|a| a * factor).collect(),
        }
    }

    /// Matrix product self * other
    ///
    /// # Errors
    /// Returns an error if the inner dimensions do not match.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::IncompatibleProduct {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.get(i, k);
                if a.norm_sqr() == 0.0 {
                    continue;
                }
                for j in 0..other.cols {
                    let v = out.get(i, j) + a * other.get(k, j);
                    out.set(i, j, v);
                }
            }
        }
        Ok(out)
    }

    /// Product of a sequence of matrices, associated right to left
    ///
    /// `chain_mul(&[a, b, c])` computes `a * (b * c)`. The right-to-left
    /// association minimizes scalar multiplications whenever the final
    /// factor is a column vector, which is the dominant call shape in
    /// this simulator (operator stacks applied to a state column).
    ///
    /// # Errors
    /// Returns an error for an empty list or incompatible consecutive
    /// shapes.
    pub fn chain_mul(factors: &[&Self]) -> Result<Self> {
        let (last, rest) = factors.split_last().ok_or(MatrixError::EmptyOperandList)?;
        let mut acc = (*last).clone();
        for m in rest.iter().rev() {
            acc = m.matmul(&acc)?;
        }
        Ok(acc)
    }

    /// Kronecker (tensor) product self ⊗ other
    ///
    /// For self of shape (a, b) and other of shape (c, d), the result
    /// has shape (a*c, b*d) with entry (i*c + k, j*d + l) equal to
    /// self[i, j] * other[k, l].
    pub fn kron(&self, other: &Self) -> Self {
        let mut out = Self::zeros(self.rows * other.rows, self.cols * other.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let a = self.get(i, j);
                for k in 0..other.rows {
                    for l in 0..other.cols {
                        out.set(i * other.rows + k, j * other.cols + l, a * other.get(k, l));
                    }
                }
            }
        }
        out
    }

    /// Kronecker product of a sequence of matrices
    ///
    /// The first factor occupies the most significant index bits, so a
    /// list ordered `[q_{n-1}, ..., q_1, q_0]` matches the wire
    /// numbering with qubit 0 as the least significant bit.
    ///
    /// # Errors
    /// Returns an error for an empty list.
    pub fn kron_all(factors: &[&Self]) -> Result<Self> {
        let (first, rest) = factors.split_first().ok_or(MatrixError::EmptyOperandList)?;
        let mut acc = (*first).clone();
        for m in rest {
            acc = acc.kron(m);
        }
        Ok(acc)
    }

    /// Conjugate transpose
    pub fn dagger(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.set(j, i, self.get(i, j).conj());
            }
        }
        out
    }

    /// Entrywise complex conjugate
    pub fn conjugate(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|a| a.conj()).collect(),
        }
    }

    /// Sum of the diagonal entries
    ///
    /// # Errors
    /// Returns an error if the matrix is not square.
    pub fn trace(&self) -> Result<Complex64> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut tr = Complex64::new(0.0, 0.0);
        for i in 0..self.rows {
            tr += self.get(i, i);
        }
        Ok(tr)
    }

    /// Reorder indices by reversing their `num_bits` bit positions
    ///
    /// Defined for square operators of shape 2^num_bits x 2^num_bits
    /// and for column vectors of shape 2^num_bits x 1. The operation
    /// is an involution and converts between the two wire-ordering
    /// conventions for multi-qubit operators.
    ///
    /// # Errors
    /// Returns an error if the shape is neither of the two above.
    pub fn reverse_endianness(&self, num_bits: usize) -> Result<Self> {
        let dim = 1usize << num_bits;
        if self.rows != dim || (self.cols != dim && self.cols != 1) {
            return Err(MatrixError::NotQubitShaped {
                rows: self.rows,
                cols: self.cols,
                num_bits,
            });
        }

        let mut out = Self::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            let ri = reverse_bits(i, num_bits);
            if self.cols == 1 {
                out.set(ri, 0, self.get(i, 0));
            } else {
                for j in 0..self.cols {
                    out.set(ri, reverse_bits(j, num_bits), self.get(i, j));
                }
            }
        }
        Ok(out)
    }

    /// Check Hermitian symmetry within the given tolerance
    pub fn is_hermitian(&self, epsilon: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.rows {
            for j in i..self.cols {
                if (self.get(i, j) - self.get(j, i).conj()).norm() > epsilon {
                    return false;
                }
            }
        }
        true
    }

    /// Check entrywise equality within the given tolerance
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).norm() <= epsilon)
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                actual_rows: other.rows,
                actual_cols: other.cols,
            });
        }
        Ok(())
    }
}

impl From<[[Complex64; 2]; 2]> for ComplexMatrix {
    fn from(m: [[Complex64; 2]; 2]) -> Self {
        Self {
            rows: 2,
            cols: 2,
            data: vec![m[0][0], m[0][1], m[1][0], m[1][1]],
        }
    }
}

impl From<[[Complex64; 4]; 4]> for ComplexMatrix {
    fn from(m: [[Complex64; 4]; 4]) -> Self {
        let mut data = Vec::with_capacity(16);
        for row in &m {
            data.extend_from_slice(row);
        }
        Self {
            rows: 4,
            cols: 4,
            data,
        }
    }
}

impl fmt::Debug for ComplexMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComplexMatrix {{ shape: {}x{} }}", self.rows, self.cols)
    }
}

/// Reverse the lowest `num_bits` bits of `index`
#[inline]
pub fn reverse_bits(index: usize, num_bits: usize) -> usize {
    let mut out = 0;
    for bit in 0..num_bits {
        if index & (1 << bit) != 0 {
            out |= 1 << (num_bits - 1 - bit);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-12;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_identity() {
        let id = ComplexMatrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(id.get(i, j).re, expected, epsilon = TOL);
                assert_abs_diff_eq!(id.get(i, j).im, 0.0, epsilon = TOL);
            }
        }
    }

    #[test]
    fn test_add_sub() {
        let a = ComplexMatrix::from_data(1, 2, vec![c(1.0, 2.0), c(3.0, 0.0)]).unwrap();
        let b = ComplexMatrix::from_data(1, 2, vec![c(0.5, -2.0), c(1.0, 1.0)]).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.get(0, 0), c(1.5, 0.0));
        assert_eq!(sum.get(0, 1), c(4.0, 1.0));

        let diff = a.sub(&b).unwrap();
        assert_eq!(diff.get(0, 0), c(0.5, 4.0));
        assert_eq!(diff.get(0, 1), c(2.0, -1.0));
    }

    #[test]
    fn test_shape_mismatch() {
        let a = ComplexMatrix::zeros(2, 2);
        let b = ComplexMatrix::zeros(2, 3);
        assert!(matches!(a.add(&b), Err(MatrixError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_from_data_length_mismatch() {
        let data = vec![c(0.0, 0.0); 7];
        assert!(matches!(
            ComplexMatrix::from_data(2, 3, data),
            Err(MatrixError::BufferLengthMismatch {
                expected: 6,
                actual: 7,
            })
        ));
    }

    #[test]
    fn test_matmul() {
        // [[1, i], [0, 1]] * [[1], [2]] = [[1 + 2i], [2]]
        let a = ComplexMatrix::from_data(2, 2, vec![c(1.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(1.0, 0.0)])
            .unwrap();
        let v = ComplexMatrix::column(&[c(1.0, 0.0), c(2.0, 0.0)]);
        let out = a.matmul(&v).unwrap();
        assert_eq!(out.shape(), (2, 1));
        assert_eq!(out.get(0, 0), c(1.0, 2.0));
        assert_eq!(out.get(1, 0), c(2.0, 0.0));
    }

    #[test]
    fn test_matmul_incompatible() {
        let a = ComplexMatrix::zeros(2, 3);
        let b = ComplexMatrix::zeros(2, 3);
        assert!(matches!(
            a.matmul(&b),
            Err(MatrixError::IncompatibleProduct { .. })
        ));
    }

    #[test]
    fn test_chain_mul_matches_pairwise() {
        let x = ComplexMatrix::from_data(2, 2, vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)])
            .unwrap();
        let z = ComplexMatrix::from_data(2, 2, vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)])
            .unwrap();
        let v = ComplexMatrix::column(&[c(1.0, 0.0), c(0.0, 0.0)]);

        let chained = ComplexMatrix::chain_mul(&[&x, &z, &v]).unwrap();
        let pairwise = x.matmul(&z.matmul(&v).unwrap()).unwrap();
        assert!(chained.approx_eq(&pairwise, TOL));
    }

    #[test]
    fn test_chain_mul_empty() {
        assert!(matches!(
            ComplexMatrix::chain_mul(&[]),
            Err(MatrixError::EmptyOperandList)
        ));
    }

    #[test]
    fn test_kron_block_structure() {
        let a = ComplexMatrix::from_data(2, 2, vec![c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0)])
            .unwrap();
        let b = ComplexMatrix::identity(2);
        let k = a.kron(&b);

        assert_eq!(k.shape(), (4, 4));
        for i in 0..2 {
            for j in 0..2 {
                for p in 0..2 {
                    for q in 0..2 {
                        let expected = a.get(i, j) * b.get(p, q);
                        assert_eq!(k.get(i * 2 + p, j * 2 + q), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_kron_all_ordering() {
        // [A, B] puts A on the most significant bit: (A ⊗ B)[2, 2] = A[1,1] * B[0,0]
        let a = ComplexMatrix::from_data(2, 2, vec![c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(5.0, 0.0)])
            .unwrap();
        let b = ComplexMatrix::identity(2);
        let k = ComplexMatrix::kron_all(&[&a, &b]).unwrap();
        assert_eq!(k.get(2, 2), c(5.0, 0.0));
        assert_eq!(k.get(1, 1), c(0.0, 0.0));
    }

    #[test]
    fn test_dagger() {
        let a = ComplexMatrix::from_data(2, 2, vec![c(1.0, 1.0), c(2.0, -3.0), c(0.0, 4.0), c(5.0, 0.0)])
            .unwrap();
        let d = a.dagger();
        assert_eq!(d.get(0, 0), c(1.0, -1.0));
        assert_eq!(d.get(0, 1), c(0.0, -4.0));
        assert_eq!(d.get(1, 0), c(2.0, 3.0));
        assert_eq!(d.get(1, 1), c(5.0, 0.0));
    }

    #[test]
    fn test_trace() {
        let a = ComplexMatrix::from_data(2, 2, vec![c(1.0, 1.0), c(9.0, 9.0), c(9.0, 9.0), c(2.0, -1.0)])
            .unwrap();
        assert_eq!(a.trace().unwrap(), c(3.0, 0.0));

        let rect = ComplexMatrix::zeros(2, 3);
        assert!(matches!(rect.trace(), Err(MatrixError::NotSquare { .. })));
    }

    #[test]
    fn test_reverse_bits() {
        assert_eq!(reverse_bits(0b001, 3), 0b100);
        assert_eq!(reverse_bits(0b110, 3), 0b011);
        assert_eq!(reverse_bits(0b101, 3), 0b101);
    }

    #[test]
    fn test_reverse_endianness_involution() {
        let mut m = ComplexMatrix::zeros(4, 4);
        let mut v = 0.0;
        for i in 0..4 {
            for j in 0..4 {
                v += 1.0;
                m.set(i, j, c(v, -v));
            }
        }
        let twice = m
            .reverse_endianness(2)
            .unwrap()
            .reverse_endianness(2)
            .unwrap();
        assert!(twice.approx_eq(&m, TOL));

        let col = ComplexMatrix::column(&[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0)]);
        let rev = col.reverse_endianness(2).unwrap();
        // Index 1 (binary 01) maps to index 2 (binary 10)
        assert_eq!(rev.get(2, 0), c(2.0, 0.0));
        assert!(rev.reverse_endianness(2).unwrap().approx_eq(&col, TOL));
    }

    #[test]
    fn test_reverse_endianness_bad_shape() {
        let m = ComplexMatrix::zeros(3, 3);
        assert!(matches!(
            m.reverse_endianness(2),
            Err(MatrixError::NotQubitShaped { .. })
        ));
    }

    #[test]
    fn test_is_hermitian() {
        let h = ComplexMatrix::from_data(2, 2, vec![c(1.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(2.0, 0.0)])
            .unwrap();
        assert!(h.is_hermitian(TOL));

        let not_h =
            ComplexMatrix::from_data(2, 2, vec![c(1.0, 0.0), c(0.0, 1.0), c(0.0, 1.0), c(2.0, 0.0)])
                .unwrap();
        assert!(!not_h.is_hermitian(TOL));
    }

    #[test]
    fn test_scale() {
        let a = ComplexMatrix::identity(2);
        let s = a.scale(c(0.0, 2.0));
        assert_eq!(s.get(0, 0), c(0.0, 2.0));
        assert_eq!(s.get(0, 1), c(0.0, 0.0));
    }
}

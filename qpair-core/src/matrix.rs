//! Fixed-shape 2x2 complex matrices for single-qubit unitaries
//!
//! The named gate constants here match the amplitude formulas in
//! [`crate::qubit`]; `Qubit::apply` agrees with the corresponding named
//! gate on every input.

use crate::complex::Complex;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::ops::Mul;

/// A 2x2 complex matrix in row-major order
///
/// The `[[Complex; 2]; 2]` representation makes the shape a compile-time
/// fact: a malformed matrix cannot be constructed, so no runtime shape
/// validation exists.
///
/// # Example
/// ```
/// use qpair_core::{Matrix2, Qubit};
///
/// let q = Qubit::ket_zero().apply(&Matrix2::PAULI_X);
/// assert_eq!(q, Qubit::ket_one());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2 {
    rows: [[Complex; 2]; 2],
}

impl Matrix2 {
    /// Identity matrix
    /// I = [[1, 0],
    ///      [0, 1]]
    pub const IDENTITY: Matrix2 = Matrix2::new([
        [Complex::ONE, Complex::ZERO],
        [Complex::ZERO, Complex::ONE],
    ]);

    /// Pauli-X gate matrix (NOT gate)
    /// X = [[0, 1],
    ///      [1, 0]]
    pub const PAULI_X: Matrix2 = Matrix2::new([
        [Complex::ZERO, Complex::ONE],
        [Complex::ONE, Complex::ZERO],
    ]);

    /// Pauli-Y gate matrix
    /// Y = [[0, -i],
    ///      [i,  0]]
    pub const PAULI_Y: Matrix2 = Matrix2::new([
        [Complex::ZERO, Complex::NEG_I],
        [Complex::I, Complex::ZERO],
    ]);

    /// Pauli-Z gate matrix
    /// Z = [[1,  0],
    ///      [0, -1]]
    pub const PAULI_Z: Matrix2 = Matrix2::new([
        [Complex::ONE, Complex::ZERO],
        [Complex::ZERO, Complex::NEG_ONE],
    ]);

    /// Hadamard gate matrix
    /// H = 1/√2 * [[1,  1],
    ///             [1, -1]]
    pub const HADAMARD: Matrix2 = Matrix2::new([
        [
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(FRAC_1_SQRT_2, 0.0),
        ],
        [
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(-FRAC_1_SQRT_2, 0.0),
        ],
    ]);

    /// Create a matrix from its rows
    #[inline]
    pub const fn new(rows: [[Complex; 2]; 2]) -> Self {
        Self { rows }
    }

    /// Phase gate matrix for a given angle
    /// P(θ) = [[1, 0     ],
    ///         [0, e^(iθ)]]
    #[inline]
    pub fn phase(theta: f64) -> Self {
        Self::new([
            [Complex::ONE, Complex::ZERO],
            [Complex::ZERO, Complex::cis(theta)],
        ])
    }

    /// Entry at `(row, col)`
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> Complex {
        self.rows[row][col]
    }

    /// Row `r` of the matrix
    #[inline]
    pub const fn row(&self, r: usize) -> [Complex; 2] {
        self.rows[r]
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Self {
        Self::new([
            [self.rows[0][0].conj(), self.rows[1][0].conj()],
            [self.rows[0][1].conj(), self.rows[1][1].conj()],
        ])
    }

    /// Check unitarity: every entry of U†U within `tolerance` of the identity
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        let product = self.adjoint() * *self;
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { Complex::ONE } else { Complex::ZERO };
                if (product.get(i, j) - expected).norm() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl Mul for Matrix2 {
    type Output = Matrix2;

    fn mul(self, rhs: Matrix2) -> Matrix2 {
        let mut rows = [[Complex::ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    rows[i][j] += self.rows[i][k] * rhs.rows[k][j];
                }
            }
        }
        Matrix2::new(rows)
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            self.rows[0][0], self.rows[0][1], self.rows[1][0], self.rows[1][1]
        )
    }
}

//! Qubit state and single-qubit gates
//!
//! A [`Qubit`] is a pair of complex amplitudes over the |0⟩/|1⟩ basis. The
//! core algebra deliberately does not enforce normalization: every gate is a
//! total function of arbitrary amplitudes, and callers who want physical
//! states opt in through [`Qubit::try_new`].

use crate::complex::Complex;
use crate::error::QubitError;
use crate::matrix::Matrix2;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Default tolerance for normalization checks
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-10;

/// A two-level quantum state as a pair of complex amplitudes
///
/// `alpha` is the amplitude of basis state |0⟩ and `beta` the amplitude of
/// |1⟩. Gates take `self` by reference and return a new value; the input is
/// never mutated.
///
/// # Example
/// ```
/// use qpair_core::Qubit;
///
/// let q = Qubit::ket_zero().hadamard();
/// let (p0, p1) = q.probabilities();
/// assert!((p0 - 0.5).abs() < 1e-10);
/// assert!((p1 - 0.5).abs() < 1e-10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Qubit {
    /// Amplitude of |0⟩
    pub alpha: Complex,
    /// Amplitude of |1⟩
    pub beta: Complex,
}

impl Qubit {
    /// Create a qubit from its |0⟩ and |1⟩ amplitudes, without validation
    #[inline]
    pub const fn new(alpha: Complex, beta: Complex) -> Self {
        Self { alpha, beta }
    }

    /// Create a qubit, checking that the amplitudes are finite and normalized
    ///
    /// Returns [`QubitError::NotNormalized`] when the norm deviates from 1
    /// by more than [`DEFAULT_NORM_TOLERANCE`]; the reported norm is NaN
    /// when an amplitude is not finite.
    ///
    /// # Example
    /// ```
    /// use qpair_core::{Complex, Qubit};
    ///
    /// assert!(Qubit::try_new(Complex::ONE, Complex::ZERO).is_ok());
    /// assert!(Qubit::try_new(Complex::ONE, Complex::ONE).is_err());
    /// ```
    pub fn try_new(alpha: Complex, beta: Complex) -> Result<Self> {
        if !alpha.is_finite() || !beta.is_finite() {
            return Err(QubitError::NotNormalized { norm: f64::NAN });
        }
        let q = Self::new(alpha, beta);
        if !q.is_normalized(DEFAULT_NORM_TOLERANCE) {
            return Err(QubitError::NotNormalized {
                norm: q.norm_sqr().sqrt(),
            });
        }
        Ok(q)
    }

    /// The |0⟩ basis state
    #[inline]
    pub const fn ket_zero() -> Self {
        Self::new(Complex::ONE, Complex::ZERO)
    }

    /// The |1⟩ basis state
    #[inline]
    pub const fn ket_one() -> Self {
        Self::new(Complex::ZERO, Complex::ONE)
    }

    /// The |+⟩ state (|0⟩ + |1⟩)/√2
    #[inline]
    pub fn ket_plus() -> Self {
        Self::new(
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(FRAC_1_SQRT_2, 0.0),
        )
    }

    /// The |−⟩ state (|0⟩ − |1⟩)/√2
    #[inline]
    pub fn ket_minus() -> Self {
        Self::new(
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(-FRAC_1_SQRT_2, 0.0),
        )
    }

    /// Hadamard gate: 1/√2 * [[1, 1], [1, -1]]
    ///
    /// Maps the basis states to equal superpositions; applying it twice
    /// returns the original state.
    ///
    /// # Example
    /// ```
    /// use qpair_core::Qubit;
    ///
    /// let q = Qubit::ket_one().hadamard().hadamard();
    /// assert!((q.beta.re - 1.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn hadamard(&self) -> Self {
        Self::new(
            (self.alpha + self.beta).scale(FRAC_1_SQRT_2),
            (self.alpha - self.beta).scale(FRAC_1_SQRT_2),
        )
    }

    /// Pauli-X gate: bit flip, swaps the amplitudes
    #[inline]
    pub fn pauli_x(&self) -> Self {
        Self::new(self.beta, self.alpha)
    }

    /// Pauli-Y gate: bit flip combined with an i / -i phase
    #[inline]
    pub fn pauli_y(&self) -> Self {
        Self::new(self.beta * Complex::NEG_I, self.alpha * Complex::I)
    }

    /// Pauli-Z gate: phase flip, negates the |1⟩ amplitude
    #[inline]
    pub fn pauli_z(&self) -> Self {
        Self::new(self.alpha, -self.beta)
    }

    /// Phase-shift gate: multiplies the |1⟩ amplitude by e^(i·angle)
    #[inline]
    pub fn phase_shift(&self, angle: f64) -> Self {
        Self::new(self.alpha, Complex::cis(angle) * self.beta)
    }

    /// Apply an arbitrary 2x2 matrix to the amplitude vector
    ///
    /// The named gates agree with `apply` on their matrix constants, e.g.
    /// `q.apply(&Matrix2::PAULI_X)` equals `q.pauli_x()`.
    #[inline]
    pub fn apply(&self, u: &Matrix2) -> Self {
        Self::new(
            u.get(0, 0) * self.alpha + u.get(0, 1) * self.beta,
            u.get(1, 0) * self.alpha + u.get(1, 1) * self.beta,
        )
    }

    /// Sum of squared amplitude magnitudes |alpha|² + |beta|²
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Check normalization: the norm within `tolerance` of 1
    #[inline]
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr().sqrt() - 1.0).abs() <= tolerance
    }

    /// Squared amplitude magnitudes for |0⟩ and |1⟩
    ///
    /// These are measurement probabilities only when the state is
    /// normalized.
    #[inline]
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha.norm_sqr(), self.beta.norm_sqr())
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} |0⟩ + {} |1⟩", self.alpha, self.beta)
    }
}

//! Joint two-qubit state and separability analysis
//!
//! A control/target pair entering a two-qubit gate is represented by the
//! four tensor-product amplitudes over |00⟩..|11⟩. Entangling gates act on
//! this joint state directly; collapsing it back into two independent
//! qubits is only possible when the state is separable, which
//! [`JointState::factor`] checks before producing a [`QubitPair`].

use crate::error::{Result, StateError};
use qpair_core::{Complex, Matrix2, Qubit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default tolerance for separability checks
pub const DEFAULT_SEPARABILITY_TOLERANCE: f64 = 1e-10;

/// Joint state of a control/target pair as four basis amplitudes
///
/// Amplitudes are indexed by the basis states |00⟩, |01⟩, |10⟩, |11⟩; the
/// first bit is the control, the second the target. The sum of squared
/// magnitudes is not required to be 1, the same policy as [`Qubit`].
///
/// # Example
/// ```
/// use qpair_core::Qubit;
/// use qpair_state::{controlled_not, DEFAULT_SEPARABILITY_TOLERANCE};
///
/// // Classical truth table: |1⟩ ⊗ |0⟩ becomes |11⟩
/// let joint = controlled_not(&Qubit::ket_one(), &Qubit::ket_zero());
/// assert!((joint.amp11().re - 1.0).abs() < 1e-10);
///
/// // A superposed control entangles the pair
/// let bell = controlled_not(&Qubit::ket_plus(), &Qubit::ket_zero());
/// assert!(!bell.is_separable(DEFAULT_SEPARABILITY_TOLERANCE));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointState {
    amps: [Complex; 4],
}

/// A control/target pair recovered from a separable joint state
///
/// Produced by [`JointState::factor`]; the factors reproduce the joint
/// state under [`JointState::product`] but are unique only up to reciprocal
/// scaling between the two qubits.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QubitPair {
    /// Control qubit
    pub control: Qubit,
    /// Target qubit
    pub target: Qubit,
}

impl JointState {
    /// Create a joint state from its amplitudes in |00⟩, |01⟩, |10⟩, |11⟩ order
    #[inline]
    pub const fn new(amps: [Complex; 4]) -> Self {
        Self { amps }
    }

    /// Tensor product of a control and a target qubit
    ///
    /// `(cα·tα, cα·tβ, cβ·tα, cβ·tβ)` — separable by construction.
    pub fn product(control: &Qubit, target: &Qubit) -> Self {
        Self::new([
            control.alpha * target.alpha,
            control.alpha * target.beta,
            control.beta * target.alpha,
            control.beta * target.beta,
        ])
    }

    /// Amplitude of |00⟩
    #[inline]
    pub const fn amp00(&self) -> Complex {
        self.amps[0]
    }

    /// Amplitude of |01⟩
    #[inline]
    pub const fn amp01(&self) -> Complex {
        self.amps[1]
    }

    /// Amplitude of |10⟩
    #[inline]
    pub const fn amp10(&self) -> Complex {
        self.amps[2]
    }

    /// Amplitude of |11⟩
    #[inline]
    pub const fn amp11(&self) -> Complex {
        self.amps[3]
    }

    /// All four amplitudes in basis order
    #[inline]
    pub const fn amplitudes(&self) -> [Complex; 4] {
        self.amps
    }

    /// Sum of squared amplitude magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Controlled-NOT applied to the joint state
    ///
    /// Swaps the |10⟩ and |11⟩ amplitudes (flips the target's basis label
    /// wherever the control component is |1⟩) and leaves the control-|0⟩
    /// block untouched. Applying it twice returns the original state.
    pub fn apply_cnot(&self) -> Self {
        Self::new([self.amps[0], self.amps[1], self.amps[3], self.amps[2]])
    }

    /// Controlled application of a single-qubit matrix to the target
    ///
    /// Leaves the control-|0⟩ amplitudes unchanged and applies `u` to the
    /// control-|1⟩ block: `b10 = u00·a10 + u01·a11`,
    /// `b11 = u10·a10 + u11·a11`.
    pub fn apply_controlled(&self, u: &Matrix2) -> Self {
        let a10 = self.amps[2];
        let a11 = self.amps[3];
        Self::new([
            self.amps[0],
            self.amps[1],
            u.get(0, 0) * a10 + u.get(0, 1) * a11,
            u.get(1, 0) * a10 + u.get(1, 1) * a11,
        ])
    }

    /// Determinant `a00·a11 − a01·a10` of the 2x2 amplitude matrix
    ///
    /// Zero exactly when the state is separable.
    pub fn determinant(&self) -> Complex {
        self.amps[0] * self.amps[3] - self.amps[1] * self.amps[2]
    }

    /// Entanglement measure `2·|a00·a11 − a01·a10|`
    ///
    /// Ranges from 0 (separable) to 1 (maximally entangled) for normalized
    /// states.
    pub fn concurrence(&self) -> f64 {
        2.0 * self.determinant().norm()
    }

    /// Separability test: determinant magnitude within `tolerance`
    ///
    /// The tolerance is absolute; callers working far from unit norm
    /// should scale it with [`JointState::norm_sqr`].
    pub fn is_separable(&self, tolerance: f64) -> bool {
        self.determinant().norm() <= tolerance
    }

    /// Factor a separable state back into a control/target pair
    ///
    /// Uses the largest-magnitude amplitude as the pivot: its column gives
    /// the control amplitudes and its pivot-scaled row the target's. The
    /// guarantee is that `JointState::product` of the pair reproduces this
    /// state within rounding; the individual factors are unique only up to
    /// reciprocal scaling. The all-zero state factors as zero ⊗ zero.
    ///
    /// Returns [`StateError::NonSeparable`] when the determinant magnitude
    /// exceeds `tolerance` — an entangled state has no faithful pair
    /// representation, and a silently wrong one is never produced.
    ///
    /// # Example
    /// ```
    /// use qpair_core::Qubit;
    /// use qpair_state::{controlled_not, JointState, DEFAULT_SEPARABILITY_TOLERANCE};
    ///
    /// let joint = controlled_not(&Qubit::ket_one(), &Qubit::ket_plus());
    /// let pair = joint.factor(DEFAULT_SEPARABILITY_TOLERANCE).unwrap();
    /// let back = JointState::product(&pair.control, &pair.target);
    /// assert!((back.amp10().re - joint.amp10().re).abs() < 1e-10);
    /// ```
    pub fn factor(&self, tolerance: f64) -> Result<QubitPair> {
        let residual = self.determinant().norm();
        if residual > tolerance {
            return Err(StateError::NonSeparable {
                residual,
                tolerance,
            });
        }

        // Amplitudes viewed as the 2x2 matrix [[a00, a01], [a10, a11]],
        // amps[2r + c] with r the control bit and c the target bit. A
        // separable state makes it rank one, so the pivot row and column
        // span it.
        let a = self.amps;
        let mut pivot_idx = 0;
        for k in 1..4 {
            if a[k].norm() > a[pivot_idx].norm() {
                pivot_idx = k;
            }
        }

        let pivot = a[pivot_idx];
        if pivot.norm() == 0.0 {
            return Ok(QubitPair {
                control: Qubit::new(Complex::ZERO, Complex::ZERO),
                target: Qubit::new(Complex::ZERO, Complex::ZERO),
            });
        }

        let pr = pivot_idx >> 1;
        let pc = pivot_idx & 1;
        let control = Qubit::new(a[pc], a[2 + pc]);
        let target = Qubit::new(a[2 * pr] / pivot, a[2 * pr + 1] / pivot);
        Ok(QubitPair { control, target })
    }
}

impl fmt::Display for JointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} |00⟩ + {} |01⟩ + {} |10⟩ + {} |11⟩",
            self.amps[0], self.amps[1], self.amps[2], self.amps[3]
        )
    }
}

//! Controlled two-qubit operations
//!
//! Each operation takes a control and a target qubit, forms their joint
//! four-amplitude state, and applies the gate to that joint state. The
//! joint state is the primary result: recovering two independent qubits is
//! only possible for separable outputs and goes through
//! [`JointState::factor`].

use crate::joint::JointState;
use qpair_core::{Matrix2, Qubit};

/// Controlled-NOT on a control/target pair
///
/// Forms the tensor product and flips the target's basis label wherever
/// the control component is |1⟩.
///
/// # Example
/// ```
/// use qpair_core::Qubit;
/// use qpair_state::controlled_not;
///
/// let joint = controlled_not(&Qubit::ket_one(), &Qubit::ket_zero());
/// assert!((joint.amp11().re - 1.0).abs() < 1e-10);
/// ```
pub fn controlled_not(control: &Qubit, target: &Qubit) -> JointState {
    JointState::product(control, target).apply_cnot()
}

/// Controlled application of an arbitrary single-qubit matrix
///
/// Forms the tensor product and applies `u` to the control-|1⟩ amplitude
/// block. Reduces to [`controlled_not`] when `u` is [`Matrix2::PAULI_X`].
///
/// # Example
/// ```
/// use qpair_core::{Matrix2, Qubit};
/// use qpair_state::{controlled_not, controlled_unitary};
///
/// let c = Qubit::ket_plus();
/// let t = Qubit::ket_zero();
/// let via_unitary = controlled_unitary(&c, &t, &Matrix2::PAULI_X);
/// assert_eq!(via_unitary, controlled_not(&c, &t));
/// ```
pub fn controlled_unitary(control: &Qubit, target: &Qubit, u: &Matrix2) -> JointState {
    JointState::product(control, target).apply_controlled(u)
}

//! Cross-module tests for the gate algebra on qubit states

use approx::assert_relative_eq;
use qpair_core::{Complex, Complex64, Matrix2, Qubit};
use std::f64::consts::PI;

const EPSILON: f64 = 1e-10;

// Helper to compare qubits amplitude-wise
fn assert_qubit_close(a: &Qubit, b: &Qubit) {
    assert_relative_eq!(a.alpha.re, b.alpha.re, epsilon = EPSILON);
    assert_relative_eq!(a.alpha.im, b.alpha.im, epsilon = EPSILON);
    assert_relative_eq!(a.beta.re, b.beta.re, epsilon = EPSILON);
    assert_relative_eq!(a.beta.im, b.beta.im, epsilon = EPSILON);
}

// A spread of states: basis, superposed, phased, and unnormalized
fn sample_states() -> Vec<Qubit> {
    vec![
        Qubit::ket_zero(),
        Qubit::ket_one(),
        Qubit::ket_plus(),
        Qubit::ket_minus(),
        Qubit::ket_plus().phase_shift(PI / 3.0),
        Qubit::new(Complex::new(0.6, 0.2), Complex::new(-0.3, 0.8)),
        Qubit::new(Complex::new(3.0, 0.0), Complex::new(0.0, -4.0)),
    ]
}

// ============================================================================
// Involutions and matrix identities
// ============================================================================

#[test]
fn test_hadamard_involution_on_all_samples() {
    for q in sample_states() {
        assert_qubit_close(&q.hadamard().hadamard(), &q);
    }
}

#[test]
fn test_pauli_involutions_on_all_samples() {
    for q in sample_states() {
        assert_qubit_close(&q.pauli_x().pauli_x(), &q);
        assert_qubit_close(&q.pauli_y().pauli_y(), &q);
        assert_qubit_close(&q.pauli_z().pauli_z(), &q);
    }
}

#[test]
fn test_hzh_acts_like_pauli_x() {
    let hzh = Matrix2::HADAMARD * Matrix2::PAULI_Z * Matrix2::HADAMARD;
    for q in sample_states() {
        assert_qubit_close(&q.apply(&hzh), &q.pauli_x());
    }
}

#[test]
fn test_phase_pi_acts_like_pauli_z() {
    for q in sample_states() {
        assert_qubit_close(&q.phase_shift(PI), &q.pauli_z());
    }
}

#[test]
fn test_phase_shift_full_turn_is_identity() {
    for q in sample_states() {
        assert_qubit_close(&q.phase_shift(2.0 * PI), &q);
    }
}

#[test]
fn test_named_gates_agree_with_matrix_application() {
    for q in sample_states() {
        assert_qubit_close(&q.apply(&Matrix2::HADAMARD), &q.hadamard());
        assert_qubit_close(&q.apply(&Matrix2::PAULI_X), &q.pauli_x());
        assert_qubit_close(&q.apply(&Matrix2::PAULI_Y), &q.pauli_y());
        assert_qubit_close(&q.apply(&Matrix2::PAULI_Z), &q.pauli_z());
        assert_qubit_close(&q.apply(&Matrix2::phase(0.9)), &q.phase_shift(0.9));
    }
}

#[test]
fn test_gate_constants_and_phase_sweep_are_unitary() {
    let fixed = [
        Matrix2::IDENTITY,
        Matrix2::PAULI_X,
        Matrix2::PAULI_Y,
        Matrix2::PAULI_Z,
        Matrix2::HADAMARD,
    ];
    for gate in fixed {
        assert!(gate.is_unitary(EPSILON));
    }
    for k in 0..8 {
        let theta = k as f64 * PI / 4.0;
        assert!(Matrix2::phase(theta).is_unitary(EPSILON));
    }
}

// ============================================================================
// Validation and normalization
// ============================================================================

#[test]
fn test_gates_keep_physical_states_physical() {
    let q = Qubit::ket_zero().hadamard().phase_shift(0.4).pauli_y();
    assert!(q.is_normalized(EPSILON));
    assert!(Qubit::try_new(q.alpha, q.beta).is_ok());
}

#[test]
fn test_try_new_rejects_scaled_state() {
    let q = Qubit::ket_plus();
    let scaled = Qubit::new(q.alpha.scale(2.0), q.beta.scale(2.0));
    let err = Qubit::try_new(scaled.alpha, scaled.beta).unwrap_err();
    assert!(format!("{}", err).contains("not normalized"));
}

#[test]
fn test_probabilities_sum_to_norm_sqr() {
    for q in sample_states() {
        let (p0, p1) = q.probabilities();
        assert_relative_eq!(p0 + p1, q.norm_sqr(), epsilon = EPSILON);
    }
}

// ============================================================================
// Interop and serialization
// ============================================================================

#[test]
fn test_amplitudes_survive_complex64_round_trip() {
    let q = Qubit::ket_plus().phase_shift(PI / 7.0);
    let alpha64: Complex64 = q.alpha.into();
    let beta64: Complex64 = q.beta.into();
    let back = Qubit::new(Complex::from(alpha64), Complex::from(beta64));
    assert_eq!(back, q);
    assert_relative_eq!(
        alpha64.norm_sqr() + beta64.norm_sqr(),
        q.norm_sqr(),
        epsilon = EPSILON
    );
}

#[test]
fn test_real_amplitudes_lift_from_f64() {
    let q = Qubit::new(Complex::from(0.6), Complex::from(0.8));
    assert_relative_eq!(q.norm_sqr(), 1.0, epsilon = EPSILON);
    assert!(Qubit::try_new(q.alpha, q.beta).is_ok());
}

#[test]
fn test_serde_round_trip_qubit() {
    let q = Qubit::ket_plus().phase_shift(0.3);
    let json = serde_json::to_string(&q).unwrap();
    let back: Qubit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}

#[test]
fn test_serde_round_trip_matrix() {
    let m = Matrix2::phase(1.1);
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix2 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

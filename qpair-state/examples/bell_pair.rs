//! Bell Pair Demo
//!
//! Builds an entangled pair from H and CNOT, reports the joint state, and
//! shows how the separability check decides when a qubit pair can be
//! recovered from the four amplitudes.
//!
//! Run with: cargo run --example bell_pair -p qpair-state

use qpair_core::{Matrix2, Qubit};
use qpair_state::{controlled_not, controlled_unitary, JointState, DEFAULT_SEPARABILITY_TOLERANCE};
use std::f64::consts::PI;

fn main() {
    println!("=== Bell Pair Demo ===\n");

    // Demo 1: CNOT truth table
    println!("1. CNOT Truth Table:");
    let basis = [Qubit::ket_zero(), Qubit::ket_one()];
    for control in &basis {
        for target in &basis {
            let joint = controlled_not(control, target);
            println!("\nCNOT({}, {}):\n  {}", control, target, joint);
        }
    }

    // Demo 2: Product states stay separable
    println!("\n2. Product States Stay Separable:");
    let control = Qubit::ket_one();
    let target = Qubit::ket_plus();
    let joint = controlled_unitary(&control, &target, &Matrix2::phase(PI / 2.0));
    println!("\nControlled phase on |1⟩ ⊗ |+⟩:\n  {}", joint);
    println!("Concurrence: {:.3}", joint.concurrence());
    match joint.factor(DEFAULT_SEPARABILITY_TOLERANCE) {
        Ok(pair) => {
            println!("Recovered control: {}", pair.control);
            println!("Recovered target:  {}", pair.target);
        }
        Err(err) => println!("Unexpected: {}", err),
    }

    // Demo 3: The Bell pair
    println!("\n3. Bell Pair from H + CNOT:");
    let bell = controlled_not(&Qubit::ket_zero().hadamard(), &Qubit::ket_zero());
    println!("\nCNOT(H|0⟩, |0⟩):\n  {}", bell);
    println!("Determinant a00*a11 - a01*a10 = {}", bell.determinant());
    println!("Concurrence: {:.3}", bell.concurrence());
    match bell.factor(DEFAULT_SEPARABILITY_TOLERANCE) {
        Ok(pair) => println!("Unexpected factorization: {} ⊗ {}", pair.control, pair.target),
        Err(err) => println!("Factoring fails as expected: {}", err),
    }

    // Demo 4: Entangling without CNOT
    println!("\n4. Controlled Phase Can Entangle Too:");
    let joint = controlled_unitary(&Qubit::ket_plus(), &Qubit::ket_plus(), &Matrix2::phase(PI));
    println!("\nControlled phase(π) on |+⟩ ⊗ |+⟩:\n  {}", joint);
    println!(
        "Separable at tolerance {}: {}",
        DEFAULT_SEPARABILITY_TOLERANCE,
        joint.is_separable(DEFAULT_SEPARABILITY_TOLERANCE)
    );
    println!("Concurrence: {:.3}", joint.concurrence());

    // Demo 5: Amplitudes straight from the joint state
    println!("\n5. Reading Amplitudes Directly:");
    let joint = JointState::product(&Qubit::ket_plus(), &Qubit::ket_minus());
    println!("\n|+⟩ ⊗ |−⟩ amplitudes:");
    println!("  a00 = {}", joint.amp00());
    println!("  a01 = {}", joint.amp01());
    println!("  a10 = {}", joint.amp10());
    println!("  a11 = {}", joint.amp11());
    println!("Squared norm: {:.3}", joint.norm_sqr());
}

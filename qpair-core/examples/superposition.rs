//! Single-Qubit Gate Walkthrough
//!
//! Demonstrates the gate algebra on basis states and superpositions.
//!
//! Run with: cargo run --example superposition -p qpair-core

use qpair_core::{Matrix2, Qubit};
use std::f64::consts::PI;

fn main() {
    println!("=== Single-Qubit Gate Walkthrough ===\n");

    // Demo 1: Computational basis states
    println!("1. Computational Basis States:");
    let zero = Qubit::ket_zero();
    let one = Qubit::ket_one();
    println!("\n|0⟩ = {}", zero);
    println!("|1⟩ = {}", one);

    // Demo 2: Hadamard superpositions
    println!("\n2. Hadamard Superpositions:");
    let plus = zero.hadamard();
    let minus = one.hadamard();
    println!("\nH|0⟩ = {}", plus);
    println!("H|1⟩ = {}", minus);
    let (p0, p1) = plus.probabilities();
    println!("Measurement probabilities of H|0⟩: P(0) = {:.3}, P(1) = {:.3}", p0, p1);
    println!("H applied twice returns the input: HH|0⟩ = {}", plus.hadamard());

    // Demo 3: Pauli gates
    println!("\n3. Pauli Gates:");
    println!("\nX|0⟩ = {}", zero.pauli_x());
    println!("Y|0⟩ = {}", zero.pauli_y());
    println!("Z|1⟩ = {}", one.pauli_z());
    println!("Z turns |+⟩ into |−⟩: Z(H|0⟩) = {}", plus.pauli_z());

    // Demo 4: Phase shift sweep on |+⟩
    println!("\n4. Phase Shift Sweep (relative phase on |+⟩):");
    let steps = 4;
    for i in 0..=steps {
        let angle = 2.0 * PI * (i as f64) / (steps as f64);
        let shifted = plus.phase_shift(angle);
        println!(
            "\nStep {} (φ = {:.2}π):\n  {}",
            i,
            angle / PI,
            shifted
        );
    }

    // Demo 5: Matrix application
    println!("\n5. Matrix Application:");
    let hzh = Matrix2::HADAMARD * Matrix2::PAULI_Z * Matrix2::HADAMARD;
    println!("\nH * Z * H = {}", hzh);
    println!("Applied to |0⟩: {}", zero.apply(&hzh));
    println!("Same as X|0⟩:   {}", zero.pauli_x());
    println!(
        "Phase matrix at φ = π matches Pauli-Z: {}",
        Matrix2::phase(PI)
    );
}

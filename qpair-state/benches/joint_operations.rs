use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qpair_core::{Complex, Matrix2, Qubit};
use qpair_state::{controlled_not, controlled_unitary, JointState, DEFAULT_SEPARABILITY_TOLERANCE};
use std::f64::consts::PI;

fn benchmark_controlled_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("controlled_gates");

    let control = Qubit::new(Complex::new(0.6, 0.0), Complex::new(0.0, 0.8));
    let target = Qubit::ket_plus();

    group.bench_function("product", |b| {
        b.iter(|| JointState::product(black_box(&control), black_box(&target)));
    });
    group.bench_function("controlled_not", |b| {
        b.iter(|| controlled_not(black_box(&control), black_box(&target)));
    });
    group.bench_function("controlled_pauli_x", |b| {
        b.iter(|| controlled_unitary(black_box(&control), black_box(&target), &Matrix2::PAULI_X));
    });
    group.bench_function("controlled_phase", |b| {
        let phase = Matrix2::phase(PI / 4.0);
        b.iter(|| controlled_unitary(black_box(&control), black_box(&target), &phase));
    });

    group.finish();
}

fn benchmark_separability(c: &mut Criterion) {
    let mut group = c.benchmark_group("separability");

    let bell = controlled_not(&Qubit::ket_zero().hadamard(), &Qubit::ket_zero());
    let product = JointState::product(
        &Qubit::new(Complex::new(0.6, 0.0), Complex::new(0.0, 0.8)),
        &Qubit::ket_minus(),
    );

    group.bench_function("determinant", |b| {
        b.iter(|| black_box(bell).determinant());
    });
    group.bench_function("is_separable", |b| {
        b.iter(|| black_box(bell).is_separable(DEFAULT_SEPARABILITY_TOLERANCE));
    });
    group.bench_function("factor_product", |b| {
        b.iter(|| black_box(product).factor(DEFAULT_SEPARABILITY_TOLERANCE));
    });
    group.bench_function("factor_entangled", |b| {
        b.iter(|| black_box(bell).factor(DEFAULT_SEPARABILITY_TOLERANCE));
    });

    group.finish();
}

criterion_group!(benches, benchmark_controlled_gates, benchmark_separability);
criterion_main!(benches);

//! Kernel throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qtrace_gates::{constants, GateLibrary};
use qtrace_state::{evolver, ControlMask, StateVector};

fn bench_single_qubit(c: &mut Criterion) {
    let psi = StateVector::new(16).unwrap();
    let none = ControlMask::none();

    c.bench_function("hadamard_16q", |b| {
        b.iter(|| {
            evolver::apply_single_qubit(black_box(&psi), &constants::HADAMARD, 7, &none).unwrap()
        })
    });

    let mask = ControlMask::on(3).and_off(11);
    c.bench_function("controlled_hadamard_16q", |b| {
        b.iter(|| {
            evolver::apply_single_qubit(black_box(&psi), &constants::HADAMARD, 7, &mask).unwrap()
        })
    });
}

fn bench_two_qubit(c: &mut Criterion) {
    let psi = StateVector::new(16).unwrap();
    let cx = GateLibrary::new().cx();
    let none = ControlMask::none();

    c.bench_function("cx_16q", |b| {
        b.iter(|| evolver::apply_two_qubit(black_box(&psi), &cx, (0, 9), &none).unwrap())
    });

    c.bench_function("swap_16q", |b| {
        b.iter(|| evolver::apply_swap(black_box(&psi), (2, 13), &none).unwrap())
    });
}

fn bench_partial_trace(c: &mut Criterion) {
    let psi = StateVector::new(14).unwrap();

    c.bench_function("reduced_pair_14q", |b| {
        b.iter(|| black_box(&psi).reduced_density_matrix(&[3, 9]).unwrap())
    });
}

criterion_group!(benches, bench_single_qubit, bench_two_qubit, bench_partial_trace);
criterion_main!(benches);

//! # Teacher Benchmarks
//!
//! Epoch throughput of the training harness.
//!
//! Run: `cargo bench --bench teacher_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mvn_core::{Network, Neuron};
use mvn_learning::prelude::*;

/// Benchmark an epoch of the 3-valued max function
fn bench_post_function_epoch(c: &mut Criterion) {
    let mut samples = Vec::new();
    for a in 0..3 {
        for b in 0..3 {
            samples.push(discrete_sample(&[a, b], a.max(b), 3).unwrap());
        }
    }

    c.bench_function("post_function_epoch", |b| {
        b.iter(|| {
            let mut neuron = Neuron::seeded(3, 2, 5);
            let mut teacher = Teacher::with_samples(&mut neuron, samples.clone());
            black_box(teacher.learn_run().unwrap());
        })
    });
}

/// Benchmark MSE evaluation over a continuous sample set
fn bench_mse(c: &mut Criterion) {
    let samples: Vec<_> = (0..64)
        .map(|i| {
            let x = (i as f64 * 0.09) % 6.0;
            continuous_sample(&[x, 6.0 - x], &[x / 2.0]).unwrap()
        })
        .collect();
    let mut net = Network::seeded(&[2, 8, 1], &[0, 0], 3).unwrap();
    let teacher = Teacher::with_samples(&mut net, samples);

    c.bench_function("mse_64_samples", |b| {
        b.iter(|| black_box(teacher.mse(&PhaseSquareError).unwrap()))
    });
}

criterion_group!(benches, bench_post_function_epoch, bench_mse);
criterion_main!(benches);

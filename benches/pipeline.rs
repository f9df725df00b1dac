use criterion::{criterion_group, criterion_main, Criterion};

use radii::field::{Fisher, Lift, Lorenz, VectorField};
use radii::proof::{
    approximate_inverse, bounds, certify_bounds, newton, prove_with, rigorous_bounds,
    NewtonSettings, ProofSettings,
};
use radii::{DynMatrix, DynVector, Interval};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn lorenz() -> Lorenz<f64> {
    Lorenz::new(10.0, 28.0, 8.0 / 3.0)
}

fn lorenz_x_bar() -> DynVector<f64> {
    DynVector::from_slice(&[8.4853, 8.4853, 27.0])
}

/// Converged λ = 50, N = 100 Fisher steady state and its approximate inverse.
fn fisher_setup() -> (Fisher<f64>, DynVector<f64>, DynMatrix<f64>) {
    let order = 100;
    let fisher = Fisher::new(50.0, order);
    let mut x0 = DynVector::zeros(order + 1, 0.0);
    x0[0] = 1.0;
    x0[1] = 0.3;
    let sol = newton(&fisher, &x0, &NewtonSettings::default()).unwrap();
    let a = approximate_inverse(&fisher, &sol.x, 1e12).unwrap();
    (fisher, sol.x, a)
}

// ---------------------------------------------------------------------------
// Interval arithmetic
// ---------------------------------------------------------------------------

fn interval_ops(c: &mut Criterion) {
    let mut g = c.benchmark_group("interval");
    let x = Interval::new(0.1, 0.3);
    let y = Interval::new(-2.0, 1.0 / 3.0);

    g.bench_function("add", |b| b.iter(|| std::hint::black_box(x) + std::hint::black_box(y)));
    g.bench_function("mul", |b| b.iter(|| std::hint::black_box(x) * std::hint::black_box(y)));
    g.bench_function("div", |b| b.iter(|| std::hint::black_box(y) / std::hint::black_box(x)));
    g.finish();
}

// ---------------------------------------------------------------------------
// Field evaluation
// ---------------------------------------------------------------------------

fn fisher_jacobian_100(c: &mut Criterion) {
    let mut g = c.benchmark_group("fisher_jacobian_100");
    let (fisher, x_bar, _) = fisher_setup();
    let rigorous = fisher.lift();
    let x_iv = x_bar.lift();

    g.bench_function("f64", |b| b.iter(|| fisher.jacobian(std::hint::black_box(&x_bar))));
    g.bench_function("interval", |b| {
        b.iter(|| rigorous.jacobian(std::hint::black_box(&x_iv)))
    });
    g.finish();
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

fn lorenz_bounds(c: &mut Criterion) {
    let mut g = c.benchmark_group("lorenz_bounds");
    let x = lorenz_x_bar();
    let a = approximate_inverse(&lorenz(), &x, 1e12).unwrap();
    let rigorous = Lorenz::classical();

    g.bench_function("f64", |b| {
        b.iter(|| bounds(&lorenz(), std::hint::black_box(&x), std::hint::black_box(&a)))
    });
    g.bench_function("interval", |b| {
        b.iter(|| rigorous_bounds(&rigorous, std::hint::black_box(&x), std::hint::black_box(&a)))
    });
    g.finish();
}

fn fisher_bounds_100(c: &mut Criterion) {
    let mut g = c.benchmark_group("fisher_bounds_100");
    let (fisher, x_bar, a) = fisher_setup();
    let rigorous = fisher.lift();

    g.bench_function("f64", |b| {
        b.iter(|| bounds(&fisher, std::hint::black_box(&x_bar), std::hint::black_box(&a)))
    });
    g.bench_function("interval", |b| {
        b.iter(|| rigorous_bounds(&rigorous, std::hint::black_box(&x_bar), std::hint::black_box(&a)))
    });
    g.finish();
}

// ---------------------------------------------------------------------------
// Certifier and full proof
// ---------------------------------------------------------------------------

fn certify_lorenz(c: &mut Criterion) {
    c.bench_function("certify_lorenz", |b| {
        b.iter(|| {
            certify_bounds(
                std::hint::black_box(1.8625740988093325e-5),
                std::hint::black_box(0.0),
                std::hint::black_box(0.23570174301438956),
            )
        })
    });
}

fn prove_lorenz(c: &mut Criterion) {
    let plain = lorenz();
    let rigorous = Lorenz::classical();
    let x0 = DynVector::from_slice(&[8.0, 8.0, 27.0]);
    let settings = ProofSettings::default();

    c.bench_function("prove_lorenz", |b| {
        b.iter(|| prove_with(&plain, &rigorous, std::hint::black_box(&x0), &settings))
    });
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    interval_ops,
    fisher_jacobian_100,
    lorenz_bounds,
    fisher_bounds_100,
    certify_lorenz,
    prove_lorenz,
);
criterion_main!(benches);

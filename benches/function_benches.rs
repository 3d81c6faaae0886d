use RustedFunctions::numerical::newton_scalar::newton_root;
use RustedFunctions::poly;
use RustedFunctions::symbolic::function_node::Function;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use nalgebra::DVector;

fn bench_evaluate_tree(c: &mut Criterion) {
    // sin(x^2 + 1) * exp(x) + log(x)
    let f = Function::sin().of(poly![1, 0, 1]) * Function::exponential() + Function::log();
    c.bench_function("evaluate tree at a point", |b| {
        b.iter(|| f.evaluate_f64(black_box(1.3)))
    });
    let xs = DVector::from_fn(1000, |i, _| 0.1 + i as f64 * 1e-3);
    c.bench_function("evaluate tree over 1000 points", |b| {
        b.iter(|| f.evaluate(black_box(xs.clone())))
    });
}

fn bench_derivatives(c: &mut Criterion) {
    let f = Function::sin() * Function::exponential();
    c.bench_function("fourth derivative of sin*exp", |b| {
        b.iter(|| black_box(&f).n_th_derivative(4))
    });
    c.bench_function("taylor series of exp, degree 8", |b| {
        b.iter(|| Function::exponential().taylor_series(black_box(0.0), 8))
    });
}

fn bench_newton(c: &mut Criterion) {
    let p = poly![1, 0, -2];
    c.bench_function("newton root of x^2 - 2", |b| {
        b.iter(|| newton_root(black_box(&p), 1.0, 1e-12))
    });
}

criterion_group!(benches, bench_evaluate_tree, bench_derivatives, bench_newton);
criterion_main!(benches);

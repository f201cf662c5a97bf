use criterion::{black_box, Criterion, criterion_group, criterion_main};
use rowred::Matrix;

fn bench_det_vs_laplace(c: &mut Criterion) {
    let n = 7;
    let a = Matrix::from_fn(n, n, |i, j| ((i * n + j) as f64).sin()).unwrap();

    c.bench_function("det by elimination", |ben| {
        ben.iter(|| black_box(&a).det().unwrap())
    });

    c.bench_function("det by laplace expansion", |ben| {
        ben.iter(|| black_box(&a).laplace_det().unwrap())
    });

    let big = Matrix::from_fn(100, 100, |i, j| ((i * 100 + j) as f64).cos() + if i == j { 100.0 } else { 0.0 }).unwrap();
    c.bench_function("inverse 100x100", |ben| {
        ben.iter(|| black_box(&big).inverse().unwrap())
    });
}

criterion_group!(benches, bench_det_vs_laplace);
criterion_main!(benches);

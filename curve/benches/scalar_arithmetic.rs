use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = ScalarField::random(&mut rng);
    let b = ScalarField::random(&mut rng);

    c.bench_function("scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

fn bench_scalar_sub(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = ScalarField::random(&mut rng);
    let b = ScalarField::random(&mut rng);

    c.bench_function("scalar_sub", |bencher| {
        bencher.iter(|| black_box(black_box(&a) - black_box(&b)))
    });
}

fn bench_scalar_invert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = ScalarField::random(&mut rng);

    c.bench_function("scalar_invert", |bencher| {
        bencher.iter(|| black_box(black_box(&a).invert()))
    });
}

fn bench_scalar_random(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("scalar_random", |bencher| {
        bencher.iter(|| black_box(ScalarField::random(&mut rng)))
    });
}

criterion_group!(
    benches,
    bench_scalar_mul,
    bench_scalar_sub,
    bench_scalar_invert,
    bench_scalar_random
);
criterion_main!(benches);

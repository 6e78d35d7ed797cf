use codspeed_criterion_compat::{Criterion, black_box, criterion_group, criterion_main};
use ratio::Ratio;

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn bench_new_reduced(c: &mut Criterion) {
    c.bench_function("new already reduced", |b| {
        b.iter(|| black_box(Ratio::new(black_box(59), black_box(151)).unwrap()))
    });
}

fn bench_new_reducible(c: &mut Criterion) {
    c.bench_function("new with large gcd", |b| {
        b.iter(|| black_box(Ratio::new(black_box(832_040), black_box(1_346_269 * 2)).unwrap()))
    });
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn bench_arithmetic(c: &mut Criterion) {
    let a = Ratio::new(355, 113).unwrap();
    let b = Ratio::new(-22, 7).unwrap();

    c.bench_function("add", |bench| bench.iter(|| black_box(a).add(&black_box(b))));
    c.bench_function("mul", |bench| bench.iter(|| black_box(a).mul(&black_box(b))));
    c.bench_function("div", |bench| bench.iter(|| black_box(a).div(&black_box(b))));
    c.bench_function("cmp", |bench| bench.iter(|| black_box(a) < black_box(b)));
}

fn bench_sum_harmonic(c: &mut Criterion) {
    c.bench_function("harmonic sum (20 terms)", |b| {
        b.iter(|| {
            (1..=20).try_fold(Ratio::ZERO, |acc, k| {
                acc.add(&Ratio::new(1, black_box(k)).unwrap())
            })
        })
    });
}

// ============================================================================
// Parse Benchmarks
// ============================================================================

fn bench_parse_integer(c: &mut Criterion) {
    c.bench_function("parse integer", |b| {
        b.iter(|| black_box(Ratio::parse(black_box(11.0)).unwrap()))
    });
}

fn bench_parse_decimal(c: &mut Criterion) {
    c.bench_function("parse decimal number", |b| {
        b.iter(|| black_box(Ratio::parse(black_box(-13.12)).unwrap()))
    });
}

fn bench_parse_string(c: &mut Criterion) {
    c.bench_function("parse decimal string", |b| {
        b.iter(|| black_box(Ratio::parse(black_box("102.1")).unwrap()))
    });
}

fn bench_parse_overflow(c: &mut Criterion) {
    #[allow(clippy::excessive_precision)]
    let noisy = 124123.12315123124321512;
    c.bench_function("parse until overflow", |b| {
        b.iter(|| black_box(Ratio::parse(black_box(noisy)).is_err()))
    });
}

criterion_group!(
    construction,
    bench_new_reduced,
    bench_new_reducible
);
criterion_group!(arithmetic, bench_arithmetic, bench_sum_harmonic);
criterion_group!(
    parsing,
    bench_parse_integer,
    bench_parse_decimal,
    bench_parse_string,
    bench_parse_overflow
);
criterion_main!(construction, arithmetic, parsing);

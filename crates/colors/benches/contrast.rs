use colors::{Color, ContrastMatrix};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn run_benchmarks(c: &mut Criterion) {
    let colors: Vec<Color> = (0..32)
        .map(|n| Color::from_rgb("gray", n * 8, n * 8, n * 8))
        .collect();
    let (paper, ink) = (
        Color::from_rgb("paper", 0xff, 0xf6, 0xdd),
        Color::from_rgb("ink", 0xa9, 0x5f, 0x09),
    );

    let mut group = c.benchmark_group("contrast");

    group.bench_function("luminance", |b| b.iter(|| black_box(&ink).luminance()));

    group.bench_function("ratio", |b| {
        b.iter(|| black_box(&paper).contrast_ratio(black_box(&ink)))
    });

    group.bench_function("matrix-32", |b| {
        b.iter(|| ContrastMatrix::new(black_box(&colors)))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);

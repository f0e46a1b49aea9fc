//! Benchmarks for the CPU-side advance pass.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use driftfield::field::ParticleField;
use driftfield::palette::SceneMode;

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    // The three densities a 1000x1000 viewport can produce; Final is the
    // population ceiling with the full O(n^2) connection pass.
    for mode in SceneMode::ALL {
        let mut field = ParticleField::with_seed(0xBE7);
        field.regenerate(1000.0, 1000.0, mode);
        let mut out = Vec::with_capacity(20_000);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{} ({} particles)", mode.label(), field.len())),
            &mode,
            |b, _| {
                let mut frame = 0u64;
                b.iter(|| {
                    out.clear();
                    field.advance(frame, &mut out);
                    frame += 1;
                    black_box(out.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_regenerate(c: &mut Criterion) {
    c.bench_function("regenerate_ceiling", |b| {
        let mut field = ParticleField::with_seed(0xBE7);
        b.iter(|| {
            field.regenerate(1000.0, 1000.0, SceneMode::Final);
            black_box(field.len())
        })
    });
}

criterion_group!(benches, bench_advance, bench_regenerate);
criterion_main!(benches);

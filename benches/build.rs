//! Performance measurement for pattern construction across families and sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use braidweave::{PatternFamily, RibbonPattern};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures full construction (topology, layout, two-pass propagation)
fn bench_build_by_family(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_pattern");

    for (family, width) in [
        (PatternFamily::L, 8),
        (PatternFamily::R, 8),
        (PatternFamily::M, 9),
        (PatternFamily::A, 9),
        (PatternFamily::W, 9),
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(family),
            &(family, width),
            |b, &(family, width)| {
                b.iter(|| {
                    let pattern =
                        RibbonPattern::new(black_box(family), black_box(width), black_box(20));
                    black_box(pattern)
                });
            },
        );
    }

    group.finish();
}

/// Measures how construction scales with ribbon length
fn bench_build_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_length");

    for length in &[10usize, 40, 160] {
        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, &length| {
            b.iter(|| {
                let pattern = RibbonPattern::new(PatternFamily::M, 9, black_box(length));
                black_box(pattern)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_by_family, bench_build_by_length);
criterion_main!(benches);

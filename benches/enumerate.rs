// Criterion benchmarks for the abbreviation enumerators.
//
// Run:
//   cargo bench
//   cargo bench -- recursive

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use generalized_abbreviations::{abbreviations, Enumerator, RecursiveEnumerator, StackEnumerator};
use std::hint::black_box;
use std::ops::ControlFlow;

const WORDS: [&str; 3] = ["abbreviate", "abbreviation", "abbreviations!"];

/// Visits every abbreviation without materializing any string.
fn visit_all<E: Enumerator>(word: &str) -> usize {
    let mut literals = 0;
    E::new(word).enumerate(|abbreviation| {
        literals += abbreviation.literal_count();
        ControlFlow::Continue(())
    });
    literals
}

fn bench_visit(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit");
    for word in WORDS {
        let len = word.len();
        group.bench_with_input(BenchmarkId::new("recursive", len), &word, |b, &word| {
            b.iter(|| visit_all::<RecursiveEnumerator>(black_box(word)))
        });
        group.bench_with_input(BenchmarkId::new("stack", len), &word, |b, &word| {
            b.iter(|| visit_all::<StackEnumerator>(black_box(word)))
        });
    }
    group.finish();
}

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");
    for word in WORDS {
        let len = word.len();
        group.bench_with_input(BenchmarkId::new("generate", len), &word, |b, &word| {
            b.iter(|| generalized_abbreviations::generate(black_box(word)))
        });
        group.bench_with_input(BenchmarkId::new("iterator", len), &word, |b, &word| {
            b.iter(|| abbreviations(black_box(word)).collect::<Vec<_>>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visit, bench_collect);
criterion_main!(benches);

//! Performance benchmarks for the generation cycle.
//!
//! Run with: cargo bench --bench generation_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use draw_oracle_core::{
    analyze_rows, generate_with_seed, DataSet, DrawArchive, HitKind, HitRecord, HitStatus,
    Sequence,
};

fn filled_archive(sets: usize) -> DrawArchive {
    let mut archive = DrawArchive::new();
    for index in 0..sets {
        let digit = (index % 10) as u8;
        let mut rows: Vec<Sequence> = (0..6).map(|_| vec![digit, 1, 2, 3]).collect();
        rows.push(vec![digit, 4, 5]);
        archive.record(DataSet::from_rows(rows));
    }
    archive
}

fn bench_analyzer(c: &mut Criterion) {
    let archive = filled_archive(250);
    c.bench_function("analyze_250_sets", |b| {
        b.iter(|| black_box(analyze_rows(archive.rows())));
    });
}

fn bench_generation_cycle(c: &mut Criterion) {
    let hits: Vec<HitRecord> = (1..=5)
        .map(|rank| HitRecord::new("4921", HitKind::FourDigit, rank, HitStatus::Full))
        .collect();

    let mut group = c.benchmark_group("generation_cycle");
    for sets in [10usize, 100, 250] {
        let archive = filled_archive(sets);
        group.bench_with_input(BenchmarkId::from_parameter(sets), &archive, |b, archive| {
            b.iter(|| black_box(generate_with_seed(&[], archive, &hits, &[], 0.45, 42)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyzer, bench_generation_cycle);
criterion_main!(benches);

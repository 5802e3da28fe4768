//! Benchmarks for flashpost restructuring performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test section extraction and reassembly with synthetic
//! G-code content.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use flashpost::{parse_str, restructure_str, RenderOptions};

/// Creates synthetic OrcaSlicer-style G-code with the given number of
/// executable move lines.
fn build_gcode(move_count: usize) -> String {
    let mut content = String::new();

    content.push_str("; HEADER_BLOCK_START\n");
    content.push_str("; generated by OrcaSlicer 2.1.1 on 2024-06-01\n");
    content.push_str("; HEADER_BLOCK_END\n");

    content.push_str("; filament used [mm] = 4200.50\n");
    content.push_str("; filament used [g] = 12.60\n");
    content.push_str("; total layers count = 137\n");
    content.push_str("; estimated printing time (normal mode) = 1h 32m 14s\n");

    content.push_str("; CONFIG_BLOCK_START\n");
    for i in 0..50 {
        content.push_str(&format!("; setting_{} = value_{}\n", i, i));
    }
    content.push_str("; CONFIG_BLOCK_END\n");

    content.push_str("; THUMBNAIL_BLOCK_START\n");
    for _ in 0..20 {
        content.push_str("; iVBORw0KGgoAAAANSUhEUgAAASwAAAEsCAYAAAB5fY51AAAgAElEQ\n");
    }
    content.push_str("; THUMBNAIL_BLOCK_END\n");

    content.push_str("; filament start gcode\n");
    for i in 0..move_count {
        content.push_str(&format!("G1 X{}.{} Y{}.{} E0.033\n", i % 200, i % 10, (i * 7) % 200, i % 10));
    }
    content.push_str("; filament end gcode\n");

    content
}

/// Benchmark section extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for move_count in [100, 1_000, 10_000].iter() {
        let content = build_gcode(*move_count);

        group.bench_function(format!("{}_moves", move_count), |b| {
            b.iter(|| parse_str(black_box(&content)));
        });
    }

    group.finish();
}

/// Benchmark the full restructure pipeline.
fn bench_restructure(c: &mut Criterion) {
    let content = build_gcode(10_000);
    let with_detector = RenderOptions::new().with_spaghetti_detector(true);
    let without_detector = RenderOptions::new().with_spaghetti_detector(false);

    c.bench_function("restructure_with_detector", |b| {
        b.iter(|| restructure_str(black_box(&content), &with_detector).unwrap());
    });

    c.bench_function("restructure_without_detector", |b| {
        b.iter(|| restructure_str(black_box(&content), &without_detector).unwrap());
    });
}

/// Benchmark format detection.
fn bench_detection(c: &mut Criterion) {
    let content = build_gcode(1_000);

    c.bench_function("scan_str", |b| {
        b.iter(|| flashpost::scan_str(black_box(&content)));
    });
}

criterion_group!(benches, bench_extraction, bench_restructure, bench_detection);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use segment_sketch::{Segment, SegmentIntersector, SweepLineIntersection};
use std::hint::black_box;

/// Baut ein Gitter aus `count` horizontalen und `count` vertikalen
/// Segmenten mit `count * count` Kreuzungen.
fn build_grid_segments(count: usize) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(count * 2);
    let extent = (count as f32) * 10.0;
    for index in 0..count {
        let offset = (index as f32) * 10.0 + 5.0;
        segments.push(Segment::new(
            Vec2::new(0.0, offset),
            Vec2::new(extent, offset),
        ));
        segments.push(Segment::new(
            Vec2::new(offset, 0.0),
            Vec2::new(offset, extent),
        ));
    }
    segments
}

/// Baut einen Stern aus `count` Segmenten durch einen gemeinsamen Punkt.
fn build_star_segments(count: usize) -> Vec<Segment> {
    (0..count)
        .map(|index| {
            let angle = (index as f32) / (count as f32) * std::f32::consts::PI;
            let direction = Vec2::new(angle.cos(), angle.sin()) * 100.0;
            Segment::new(-direction, direction)
        })
        .collect()
}

fn bench_sweep_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_grid");
    let engine = SweepLineIntersection::new();

    for &count in &[8usize, 16usize, 32usize] {
        let segments = build_grid_segments(count);
        group.bench_with_input(
            BenchmarkId::new("grid", count * 2),
            &segments,
            |b, segments| {
                b.iter(|| {
                    let points = engine
                        .intersections(black_box(segments))
                        .expect("Schnittberechnung erwartet");
                    black_box(points.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_sweep_star(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_star");
    let engine = SweepLineIntersection::new();

    for &count in &[16usize, 64usize] {
        let segments = build_star_segments(count);
        group.bench_with_input(
            BenchmarkId::new("star", count),
            &segments,
            |b, segments| {
                b.iter(|| {
                    let points = engine
                        .intersections(black_box(segments))
                        .expect("Schnittberechnung erwartet");
                    black_box(points.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sweep_grid, bench_sweep_star);
criterion_main!(benches);

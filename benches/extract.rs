//! Benchmarks for collider extraction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tile_outline::region::RegionMap;
use tile_outline::simplify::simplify;
use tile_outline::{extract_colliders, ExtractConfig, Point2, WalkabilityGrid};

/// Generates a grid with roughly `blocked_percent` of its tiles blocked.
fn generate_noise_grid(size: i32, blocked_percent: u64, seed: u64) -> WalkabilityGrid {
    let mut state = seed;
    WalkabilityGrid::from_fn(size, size, |_| {
        // Simple xorshift for deterministic "random" tiles
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % 100 >= blocked_percent
    })
    .unwrap()
}

/// Generates nested square rings, the worst case for hole tracing.
fn generate_rings(size: i32) -> WalkabilityGrid {
    WalkabilityGrid::from_fn(size, size, |c| {
        let ring = c.x.min(c.y).min(size - 1 - c.x).min(size - 1 - c.y);
        ring % 2 == 1
    })
    .unwrap()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let config = ExtractConfig::<f64>::default();

    for size in [10, 25, 50, 100] {
        group.throughput(Throughput::Elements((size * size) as u64));

        let noise = generate_noise_grid(size, 45, 12345);
        group.bench_with_input(BenchmarkId::new("noise", size), &noise, |b, g| {
            b.iter(|| extract_colliders(black_box(g), &config))
        });

        let rings = generate_rings(size);
        group.bench_with_input(BenchmarkId::new("rings", size), &rings, |b, g| {
            b.iter(|| extract_colliders(black_box(g), &config))
        });

        let sealed = noise.clone().with_off_grid_walkable(false);
        group.bench_with_input(BenchmarkId::new("sealed_noise", size), &sealed, |b, g| {
            b.iter(|| extract_colliders(black_box(g), &config))
        });
    }

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    for size in [25, 100] {
        let grid = generate_noise_grid(size, 50, 777);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("noise", size), &grid, |b, g| {
            b.iter(|| RegionMap::build(black_box(g)))
        });
    }

    group.finish();
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");

    for side in [10, 100, 1000] {
        // A square traced one unit edge at a time.
        let mut points = Vec::with_capacity(4 * side);
        let s = side as f64;
        for i in 0..side {
            points.push(Point2::new(i as f64, 0.0));
        }
        for i in 0..side {
            points.push(Point2::new(s, i as f64));
        }
        for i in 0..side {
            points.push(Point2::new(s - i as f64, s));
        }
        for i in 0..side {
            points.push(Point2::new(0.0, s - i as f64));
        }

        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(BenchmarkId::new("square", side), &points, |b, pts| {
            b.iter(|| simplify(black_box(pts)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_grouping, bench_simplify);
criterion_main!(benches);

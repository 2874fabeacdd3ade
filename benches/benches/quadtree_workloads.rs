// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_quadtree::{QuadTree, QuadTreeConfig, Square};

const WORLD: Square = Square::from_center(1000.0, 1000.0, 1000.0);

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * cell + 0.5, y as f64 * cell + 0.5));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn build(points: &[Point], config: QuadTreeConfig) -> QuadTree<u32> {
    let mut tree = QuadTree::with_config(WORLD, config).unwrap();
    for (i, p) in points.iter().copied().enumerate() {
        let _ = tree.insert(p, i as u32);
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[32usize, 64, 128] {
        let points = gen_grid_points(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_grid_n{}", n), |b| {
            b.iter(|| black_box(build(&points, QuadTreeConfig::default()).len()));
        });
    }
    let points = gen_random_points(16_384, 2000.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &cap in &[4usize, 16, 64] {
        let config = QuadTreeConfig::new().with_leaf_capacity(cap);
        group.bench_function(format!("insert_random_leaf{}", cap), |b| {
            b.iter(|| black_box(build(&points, config).node_count()));
        });
    }
    let points = gen_clustered_points(32, 512, 40.0);
    group.bench_function("insert_clustered", |b| {
        b.iter(|| black_box(build(&points, QuadTreeConfig::default()).depth()));
    });
    group.finish();
}

fn bench_range_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");
    let points = gen_random_points(16_384, 2000.0);
    let tree = build(&points, QuadTreeConfig::default());
    group.bench_function("many_small_regions", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 16) as f64 * 125.0;
                let y = (q / 16) as f64 * 125.0;
                let region = Square::from_center(x, y, 20.0);
                total += tree.range_query(&region).unwrap().len();
            }
            black_box(total);
        });
    });
    group.bench_function("one_large_region", |b| {
        let region = Square::from_center(1000.0, 1000.0, 400.0);
        b.iter(|| black_box(tree.range_query_indices(&region).unwrap().len()));
    });
    group.finish();
}

fn bench_self_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_query");
    for &count in &[1_024usize, 4_096] {
        let points = gen_random_points(count, 2000.0);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_n{}", count), |b| {
            b.iter_batched(
                || build(&points, QuadTreeConfig::default()),
                |tree| {
                    let joined = tree.self_query(25.0).unwrap();
                    let pairs: usize = joined.iter().map(|n| n.count()).sum();
                    black_box(pairs);
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(16, 256, 40.0);
    group.bench_function("clustered", |b| {
        let tree = build(&points, QuadTreeConfig::default());
        b.iter(|| black_box(tree.self_query(10.0).unwrap().len()));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_range_query, bench_self_query);
criterion_main!(benches);

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_quadtree::{QuadTree, Square};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * cell + 0.5, y as f64 * cell + 0.5));
        }
    }
    out
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rstar_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let world = Square::from_center(640.0, 640.0, 640.0);
        let query = Square::from_center(300.0, 300.0, 200.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<u32>::new(world),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(p, i as u32);
                    }
                    let hits = tree.range_query_indices(&query).unwrap().len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("understory_build_self_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<u32>::new(world),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(p, i as u32);
                    }
                    let pairs: usize = tree
                        .self_query(15.0)
                        .unwrap()
                        .iter()
                        .map(|n| n.count())
                        .sum();
                    black_box(pairs);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let r = query.to_rect();
                    let aabb = AABB::from_corners([r.x0, r.y0], [r.x1, r.y1]);
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare);
criterion_main!(benches);

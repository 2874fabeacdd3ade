// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Self-join over a jittered grid.
//!
//! Every point looks for the others within a radius box. Useful as a broad-phase for
//! collision checks or as candidate generation for nearest-neighbor searches.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_self_join`

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{QuadTree, QuadTreeConfig, Square};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = QuadTreeConfig::new().with_leaf_capacity(8);
    let mut tree = QuadTree::with_config(Square::from_center(0.5, 0.5, 0.5), config).unwrap();

    let n: u32 = 32;
    let mut id = 0_u32;
    for y in 0..n {
        for x in 0..n {
            // Deterministic jitter so some neighbors fall inside the radius and some do not.
            let jx = f64::from((x * 7 + y * 3) % 5) * 0.002;
            let jy = f64::from((x * 5 + y * 11) % 5) * 0.002;
            let p = Point::new(
                (f64::from(x) + 0.5) / f64::from(n) + jx,
                (f64::from(y) + 0.5) / f64::from(n) + jy,
            );
            tree.insert(p, id).unwrap();
            id += 1;
        }
    }

    let joined = tree.self_query(0.02).unwrap();
    let links: usize = joined.iter().map(|n| n.count()).sum();
    let busiest = joined.iter().max_by_key(|n| n.count()).unwrap();
    println!(
        "{} points, {} nodes, depth {}, {} neighbor links",
        tree.len(),
        tree.node_count(),
        tree.depth(),
        links
    );
    println!(
        "point #{} at {:?} has {} neighbors: {:?}",
        busiest.index,
        busiest.point,
        busiest.count(),
        busiest.points().collect::<Vec<_>>()
    );
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a small tree, insert a few points (one of them out of bounds), and run a
//! range query.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example quadtree_basics`

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{QuadTree, Square};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Covers [0, 100) x [0, 100).
    let mut tree = QuadTree::new(Square::from_center(50.0, 50.0, 50.0));
    let cities = [
        (Point::new(12.0, 80.0), "north"),
        (Point::new(14.0, 78.0), "north-annex"),
        (Point::new(60.0, 20.0), "harbor"),
        (Point::new(61.5, 22.0), "docks"),
        (Point::new(90.0, 90.0), "ridge"),
        (Point::new(120.0, 10.0), "offshore"),
    ];
    for (p, name) in cities {
        let accepted = tree.insert(p, name).unwrap();
        println!("insert {name:>12} at ({}, {}): {accepted}", p.x, p.y);
    }
    println!("{tree:?}");

    let region = Square::from_center(60.0, 20.0, 5.0);
    let hits = tree.range_query(&region).unwrap();
    println!("near the harbor: {:?}", hits);
    assert_eq!(hits.len(), 2, "harbor and docks are within 5 units");
}

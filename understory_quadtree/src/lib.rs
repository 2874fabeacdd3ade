// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a region quadtree over 2D points with ids.
//!
//! Understory Quadtree is a building block for proximity work where the extent of the data is
//! known up front: nearest-neighbor candidate generation, collision broad-phase, or density
//! analytics.
//!
//! - Insert points (as Kurbo [`Point`](kurbo::Point)s) together with an id of your choosing.
//! - Query every point inside a square region.
//! - Run a self-join: for each stored point, collect the other points within a radius box.
//!
//! Points live in a shared [`PointStore`]; tree nodes only hold indices into it. Indices are
//! assigned in insertion order and never reused, so they can key side tables.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_quadtree::{QuadTree, Square};
//!
//! // A tree covering [0, 100) x [0, 100).
//! let mut tree = QuadTree::new(Square::from_center(50.0, 50.0, 50.0));
//! assert!(tree.insert(Point::new(10.0, 10.0), "a").unwrap());
//! assert!(tree.insert(Point::new(12.0, 11.0), "b").unwrap());
//! assert!(tree.insert(Point::new(80.0, 80.0), "c").unwrap());
//!
//! // Outside the boundary: rejected, not an error.
//! assert!(!tree.insert(Point::new(150.0, 0.0), "d").unwrap());
//!
//! let hits = tree.query_around(Point::new(10.0, 10.0), 5.0).unwrap();
//! assert_eq!(hits.len(), 2);
//!
//! let joined = tree.self_query(5.0).unwrap();
//! assert_eq!(joined[0].count(), 1);
//! assert_eq!(joined[2].count(), 0);
//! ```
//!
//! ## Geometry
//!
//! Regions are squares ([`Square`]) given by a center and a half side length. Containment is
//! half-open: the low edge is inside and the high edge is not, so the four quadrants of a node
//! tile it with no overlap. Two squares that merely touch do not intersect.
//!
//! ## Node layout
//!
//! Each node holds up to [`QuadTreeConfig::leaf_capacity`] indices. When a full node receives
//! another point it subdivides into four quadrants; the indices it already holds stay on it and
//! only later points descend. There is no depth limit: many coincident points produce a chain
//! of subdivisions, one level per `leaf_capacity` duplicates. Insertion and queries walk the
//! tree iteratively, so deep chains do not grow the call stack.
//!
//! ## Errors and logging
//!
//! Reserving or growing the point store or a result buffer is fallible and reported as
//! [`QuadTreeError::OutOfMemory`] with no partial writes. Events such as subdivision, growth and
//! rejected points are emitted through `tracing`; install a subscriber to see them.
//!
//! ### Float semantics
//!
//! Coordinates are expected to be finite. A point with a NaN coordinate is never contained in
//! any region and is therefore rejected.

#![no_std]

extern crate alloc;

mod accumulator;
pub mod config;
pub mod error;
mod node;
pub mod store;
pub mod tree;
pub mod types;

pub use config::QuadTreeConfig;
pub use error::QuadTreeError;
pub use store::PointStore;
pub use tree::{Neighbors, QuadTree};
pub use types::{Quadrant, Square};

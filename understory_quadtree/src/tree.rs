// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `QuadTree` API: insertion, range queries and the self-join.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;
use tracing::debug;

use crate::accumulator::Accumulator;
use crate::config::QuadTreeConfig;
use crate::error::QuadTreeError;
use crate::node::Nodes;
use crate::store::PointStore;
use crate::types::Square;

/// Region quadtree over points with ids.
///
/// The boundary is fixed at construction; points outside it are always rejected.
/// Nodes only hold indices into the tree's [`PointStore`], which owns coordinates and ids.
pub struct QuadTree<I> {
    // Declared before `store` so nodes are released first.
    nodes: Nodes,
    store: PointStore<I>,
    config: QuadTreeConfig,
}

/// Result of a [`QuadTree::self_query`] for one stored point.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbors<I> {
    /// Store index of the point the region was centered on.
    pub index: usize,
    /// Coordinates of that point.
    pub point: Point,
    /// Every other stored point inside the region, coincident duplicates included.
    pub neighbors: Vec<(Point, I)>,
}

impl<I> Neighbors<I> {
    /// Number of neighbors, i.e. matches minus the point itself.
    pub fn count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbor coordinates in traversal order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.neighbors.iter().map(|(p, _)| *p)
    }
}

impl<I> QuadTree<I> {
    /// Create an empty tree covering `boundary` with the default configuration.
    pub fn new(boundary: Square) -> Self {
        Self::from_parts(boundary, QuadTreeConfig::default(), PointStore::default())
    }

    /// Create an empty tree covering `boundary` with a custom configuration.
    ///
    /// Fails with [`QuadTreeError::InvalidConfig`] for out-of-range knobs and with
    /// [`QuadTreeError::OutOfMemory`] when the initial point store cannot be allocated.
    pub fn with_config(boundary: Square, config: QuadTreeConfig) -> Result<Self, QuadTreeError> {
        config.validate()?;
        let store = PointStore::with_capacity(config.initial_capacity, config.growth_factor)?;
        Ok(Self::from_parts(boundary, config, store))
    }

    fn from_parts(boundary: Square, config: QuadTreeConfig, store: PointStore<I>) -> Self {
        Self {
            nodes: Nodes::new(boundary, config.leaf_capacity),
            store,
            config,
        }
    }

    /// Insert a point with its id.
    ///
    /// Returns `Ok(false)` when the point lies outside the boundary. In that case the
    /// tentative store slot is rolled back, so the next insertion gets the same index.
    pub fn insert(&mut self, point: Point, id: I) -> Result<bool, QuadTreeError> {
        let index = self.store.append(point, id)?;
        match self.nodes.insert(index, point) {
            Ok(true) => Ok(true),
            Ok(false) => {
                self.store.release_last();
                debug!(x = point.x, y = point.y, "rejected point outside boundary");
                Ok(false)
            }
            Err(err) => {
                self.store.release_last();
                Err(err)
            }
        }
    }

    /// Insert every `(point, id)` pair and return how many were accepted.
    ///
    /// Stops at the first allocation failure; points inserted before it stay in the tree.
    pub fn insert_many<It>(&mut self, items: It) -> Result<usize, QuadTreeError>
    where
        It: IntoIterator<Item = (Point, I)>,
    {
        let mut accepted = 0;
        for (point, id) in items {
            if self.insert(point, id)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Store indices of all points inside `region`, in traversal order.
    pub fn range_query_indices(&self, region: &Square) -> Result<Vec<usize>, QuadTreeError> {
        Ok(self.collect(region)?.into_vec())
    }

    /// Coordinates of all points inside `region`.
    pub fn query_points(&self, region: &Square) -> Result<Vec<Point>, QuadTreeError> {
        let acc = self.collect(region)?;
        let points = self.store.points();
        let mut out = Vec::new();
        out.try_reserve_exact(acc.len())?;
        out.extend(acc.as_slice().iter().map(|&i| points[i]));
        Ok(out)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Region covered by the root.
    pub fn boundary(&self) -> Square {
        self.nodes.boundary()
    }

    /// Configuration the tree was built with.
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Backing point store.
    pub fn store(&self) -> &PointStore<I> {
        &self.store
    }

    /// Coordinates and id stored at `index`.
    pub fn get(&self, index: usize) -> Option<(Point, &I)> {
        self.store.get(index)
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest node; a tree that never subdivided has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes.depth()
    }

    /// Number of subdivision events so far.
    pub fn subdivisions(&self) -> usize {
        self.nodes.subdivisions()
    }

    fn accumulator(&self) -> Result<Accumulator, QuadTreeError> {
        Accumulator::with_capacity(self.config.leaf_capacity, self.config.growth_factor)
    }

    /// Indices of every point inside `region`, in traversal order.
    fn collect(&self, region: &Square) -> Result<Accumulator, QuadTreeError> {
        let mut acc = self.accumulator()?;
        self.nodes.query(region, self.store.points(), &mut acc)?;
        Ok(acc)
    }
}

impl<I: Clone> QuadTree<I> {
    /// All stored `(point, id)` pairs inside `region`.
    ///
    /// An empty vector means nothing matched. The order is stable for a given tree but
    /// otherwise unspecified.
    pub fn range_query(&self, region: &Square) -> Result<Vec<(Point, I)>, QuadTreeError> {
        let acc = self.collect(region)?;
        self.resolve(acc.as_slice(), None)
    }

    /// Range query over the square centered at `center` with half side `half_dim`.
    pub fn query_around(
        &self,
        center: Point,
        half_dim: f64,
    ) -> Result<Vec<(Point, I)>, QuadTreeError> {
        self.range_query(&Square::new(center, half_dim))
    }

    /// For every stored point, in index order, the other points within the square of
    /// half side `half_dim` centered on it.
    ///
    /// Each result excludes the point's own index but keeps coincident duplicates.
    /// `half_dim` must be finite and positive; otherwise
    /// [`QuadTreeError::InvalidRadius`] is returned, since a zero-sized square would not
    /// even contain its own center.
    pub fn self_query(&self, half_dim: f64) -> Result<Vec<Neighbors<I>>, QuadTreeError> {
        if !(half_dim.is_finite() && half_dim > 0.0) {
            return Err(QuadTreeError::InvalidRadius(half_dim));
        }
        let points = self.store.points();
        let mut out = Vec::new();
        out.try_reserve_exact(points.len())?;
        let mut acc = self.accumulator()?;
        for (index, &point) in points.iter().enumerate() {
            acc.clear();
            let region = Square::new(point, half_dim);
            self.nodes.query(&region, points, &mut acc)?;
            out.push(Neighbors {
                index,
                point,
                neighbors: self.resolve(acc.as_slice(), Some(index))?,
            });
        }
        Ok(out)
    }

    fn resolve(
        &self,
        indices: &[usize],
        skip: Option<usize>,
    ) -> Result<Vec<(Point, I)>, QuadTreeError> {
        let points = self.store.points();
        let ids = self.store.ids();
        let mut out = Vec::new();
        out.try_reserve_exact(indices.len())?;
        out.extend(
            indices
                .iter()
                .copied()
                .filter(|&i| Some(i) != skip)
                .map(|i| (points[i], ids[i].clone())),
        );
        Ok(out)
    }
}

impl<I> Debug for QuadTree<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("boundary", &self.nodes.boundary())
            .field("len", &self.store.len())
            .field("capacity", &self.store.capacity())
            .field("nodes", &self.nodes.len())
            .field("depth", &self.nodes.depth())
            .finish_non_exhaustive()
    }
}

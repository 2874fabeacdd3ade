// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree nodes stored in an arena and addressed by index.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::accumulator::Accumulator;
use crate::error::QuadTreeError;
use crate::types::{Quadrant, Square};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: Self = Self(0);

    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Node {
    boundary: Square,
    depth: usize,
    // Resident store indices. Frozen once the node subdivides.
    slots: SmallVec<[usize; 4]>,
    // NW, NE, SW, SE.
    children: Option<[NodeId; 4]>,
}

impl Node {
    fn new(boundary: Square, depth: usize) -> Self {
        Self {
            boundary,
            depth,
            slots: SmallVec::new(),
            children: None,
        }
    }
}

/// All nodes of one tree. Index 0 is the root; children are appended four at a time.
pub(crate) struct Nodes {
    arena: Vec<Node>,
    leaf_capacity: usize,
    max_depth: usize,
}

impl Nodes {
    pub(crate) fn new(boundary: Square, leaf_capacity: usize) -> Self {
        Self {
            arena: vec![Node::new(boundary, 0)],
            leaf_capacity,
            max_depth: 0,
        }
    }

    pub(crate) fn boundary(&self) -> Square {
        self.arena[NodeId::ROOT.get()].boundary
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    /// Depth of the deepest node; a lone root has depth 0.
    pub(crate) fn depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn subdivisions(&self) -> usize {
        (self.arena.len() - 1) / 4
    }

    /// Place store index `index` for `point`.
    ///
    /// Returns `Ok(false)` without touching any node when the root does not contain the
    /// point. A full leaf subdivides once; its resident indices stay where they are and
    /// the point descends into the first quadrant (NW, NE, SW, SE) that contains it.
    pub(crate) fn insert(&mut self, index: usize, point: Point) -> Result<bool, QuadTreeError> {
        if !self.boundary().contains(point) {
            return Ok(false);
        }
        let mut current = NodeId::ROOT;
        loop {
            let node = &mut self.arena[current.get()];
            if node.children.is_none() && node.slots.len() < self.leaf_capacity {
                node.slots.push(index);
                return Ok(true);
            }
            let existing = node.children;
            let children = match existing {
                Some(children) => children,
                None => self.subdivide(current)?,
            };
            let next = children
                .into_iter()
                .find(|child| self.arena[child.get()].boundary.contains(point));
            match next {
                Some(child) => current = child,
                None => {
                    // Only reachable once half_dim has underflowed to zero.
                    warn!(
                        x = point.x,
                        y = point.y,
                        depth = self.arena[current.get()].depth,
                        "no quadrant accepts point"
                    );
                    return Ok(false);
                }
            }
        }
    }

    fn subdivide(&mut self, id: NodeId) -> Result<[NodeId; 4], QuadTreeError> {
        self.arena.try_reserve(4)?;
        let parent = &self.arena[id.get()];
        let boundary = parent.boundary;
        let depth = parent.depth + 1;
        let base = self.arena.len();
        for q in Quadrant::ALL {
            self.arena.push(Node::new(boundary.quadrant(q), depth));
        }
        let children = [
            NodeId::new(base),
            NodeId::new(base + 1),
            NodeId::new(base + 2),
            NodeId::new(base + 3),
        ];
        self.arena[id.get()].children = Some(children);
        self.max_depth = self.max_depth.max(depth);
        trace!(
            node = id.get(),
            depth,
            half_dim = boundary.half_dim / 2.0,
            "subdivided node"
        );
        Ok(children)
    }

    /// Append to `out` every resident index whose point lies in `region`.
    ///
    /// Nodes whose boundary does not intersect `region` are pruned. Matches come out in
    /// pre-order: a node's own slots in insertion order, then its NW, NE, SW and SE
    /// subtrees.
    pub(crate) fn query(
        &self,
        region: &Square,
        points: &[Point],
        out: &mut Accumulator,
    ) -> Result<(), QuadTreeError> {
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.arena[id.get()];
            if !node.boundary.intersects(region) {
                continue;
            }
            for &index in &node.slots {
                if region.contains(points[index]) {
                    out.push(index)?;
                }
            }
            if let Some(children) = node.children {
                stack.extend(children.into_iter().rev());
            }
        }
        Ok(())
    }
}

impl Debug for Nodes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Nodes")
            .field("len", &self.arena.len())
            .field("depth", &self.max_depth)
            .field("leaf_capacity", &self.leaf_capacity)
            .finish_non_exhaustive()
    }
}

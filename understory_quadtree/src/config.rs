// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time tuning knobs.

use crate::error::QuadTreeError;

/// Per-node capacity and buffer growth policy for a [`QuadTree`](crate::QuadTree).
///
/// The defaults match the classic layout: four resident points per node, a point
/// store that starts with room for 64 entries, and doubling growth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTreeConfig {
    /// Points a node holds directly before it subdivides.
    pub leaf_capacity: usize,
    /// Initial capacity of the point store.
    pub initial_capacity: usize,
    /// Multiplier applied to a full buffer's capacity.
    pub growth_factor: usize,
}

impl QuadTreeConfig {
    /// Default points per node.
    pub const DEFAULT_LEAF_CAPACITY: usize = 4;
    /// Default initial point store capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 64;
    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// The default configuration.
    pub const fn new() -> Self {
        Self {
            leaf_capacity: Self::DEFAULT_LEAF_CAPACITY,
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Set the number of points a node holds before subdividing.
    pub const fn with_leaf_capacity(mut self, leaf_capacity: usize) -> Self {
        self.leaf_capacity = leaf_capacity;
        self
    }

    /// Set the initial point store capacity.
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the growth multiplier.
    pub const fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check that every knob is in range.
    pub fn validate(&self) -> Result<(), QuadTreeError> {
        if self.leaf_capacity == 0 {
            return Err(QuadTreeError::InvalidConfig("leaf_capacity must be at least 1"));
        }
        if self.initial_capacity == 0 {
            return Err(QuadTreeError::InvalidConfig(
                "initial_capacity must be at least 1",
            ));
        }
        if self.growth_factor < 2 {
            return Err(QuadTreeError::InvalidConfig("growth_factor must be at least 2"));
        }
        Ok(())
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

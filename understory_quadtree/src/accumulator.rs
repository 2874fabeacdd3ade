// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buffer of matched store indices filled by node traversal.

use alloc::vec::Vec;

use tracing::debug;

use crate::error::QuadTreeError;
use crate::store::grown_capacity;

/// Growable list of store indices, grown by the same policy as the point store.
#[derive(Clone, Debug)]
pub(crate) struct Accumulator {
    indices: Vec<usize>,
    capacity: usize,
    growth_factor: usize,
}

impl Accumulator {
    pub(crate) fn with_capacity(
        capacity: usize,
        growth_factor: usize,
    ) -> Result<Self, QuadTreeError> {
        let mut indices = Vec::new();
        indices.try_reserve_exact(capacity)?;
        Ok(Self {
            indices,
            capacity,
            growth_factor,
        })
    }

    pub(crate) fn push(&mut self, index: usize) -> Result<(), QuadTreeError> {
        if self.indices.len() >= self.capacity {
            let new_capacity = grown_capacity(self.capacity, self.growth_factor);
            self.indices
                .try_reserve_exact(new_capacity.saturating_sub(self.indices.len()))?;
            debug!(
                old = self.capacity,
                new = new_capacity,
                "grew query accumulator"
            );
            self.capacity = new_capacity;
        }
        self.indices.push(index);
        Ok(())
    }

    /// Forget all matches, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.indices.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.indices.len()
    }

    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub(crate) fn into_vec(self) -> Vec<usize> {
        self.indices
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Growable point/id storage that tree nodes index into.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;
use tracing::debug;

use crate::config::QuadTreeConfig;
use crate::error::QuadTreeError;

/// Parallel arrays of coordinates and ids, addressed by a stable index.
///
/// Indices are handed out in order by [`PointStore::append`] and stay valid for as long
/// as the entry is live. The only way to retire an entry is [`PointStore::release_last`],
/// which rolls back the most recent append so the same index is issued again.
///
/// Capacity is tracked explicitly: when the store is full both arrays grow to
/// `capacity * growth_factor` before the next write. Capacity never shrinks.
pub struct PointStore<I> {
    points: Vec<Point>,
    ids: Vec<I>,
    capacity: usize,
    growth_factor: usize,
    growth_events: usize,
}

impl<I> PointStore<I> {
    /// Create a store with room for `capacity` entries that grows by `growth_factor`.
    ///
    /// Fails with [`QuadTreeError::InvalidConfig`] when `growth_factor` is below 2, and with
    /// [`QuadTreeError::OutOfMemory`] when the initial arrays cannot be allocated.
    pub fn with_capacity(capacity: usize, growth_factor: usize) -> Result<Self, QuadTreeError> {
        if growth_factor < 2 {
            return Err(QuadTreeError::InvalidConfig("growth_factor must be at least 2"));
        }
        let mut points = Vec::new();
        points.try_reserve_exact(capacity)?;
        let mut ids = Vec::new();
        ids.try_reserve_exact(capacity)?;
        Ok(Self {
            points,
            ids,
            capacity,
            growth_factor,
            growth_events: 0,
        })
    }

    /// Append an entry and return its index.
    ///
    /// When the store is full it grows first; if that allocation fails the store is
    /// left untouched and [`QuadTreeError::OutOfMemory`] is returned.
    pub fn append(&mut self, point: Point, id: I) -> Result<usize, QuadTreeError> {
        if self.points.len() >= self.capacity {
            self.grow()?;
        }
        let index = self.points.len();
        self.points.push(point);
        self.ids.push(id);
        Ok(index)
    }

    /// Roll back the most recent [`append`](Self::append).
    ///
    /// The freed index is issued again by the next append. Capacity is kept.
    pub fn release_last(&mut self) -> Option<(Point, I)> {
        let point = self.points.pop()?;
        let id = self.ids.pop()?;
        Some((point, id))
    }

    fn grow(&mut self) -> Result<(), QuadTreeError> {
        let new_capacity = grown_capacity(self.capacity, self.growth_factor);
        let additional = new_capacity.saturating_sub(self.points.len());
        self.points.try_reserve_exact(additional)?;
        self.ids.try_reserve_exact(additional)?;
        debug!(
            old = self.capacity,
            new = new_capacity,
            "grew point store"
        );
        self.capacity = new_capacity;
        self.growth_events += 1;
        Ok(())
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entries the store can hold before it grows again.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many times the store has grown since construction.
    pub fn growth_events(&self) -> usize {
        self.growth_events
    }

    /// Coordinates of the entry at `index`.
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Id of the entry at `index`.
    pub fn id(&self, index: usize) -> Option<&I> {
        self.ids.get(index)
    }

    /// Coordinates and id of the entry at `index`.
    pub fn get(&self, index: usize) -> Option<(Point, &I)> {
        Some((*self.points.get(index)?, self.ids.get(index)?))
    }

    /// All coordinates in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// All ids in index order.
    pub fn ids(&self) -> &[I] {
        &self.ids
    }

    /// Iterate `(index, point, id)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point, &I)> + '_ {
        self.points
            .iter()
            .zip(self.ids.iter())
            .enumerate()
            .map(|(i, (p, id))| (i, *p, id))
    }
}

impl<I> Default for PointStore<I> {
    /// An empty store with the default capacity of 64 and doubling growth.
    fn default() -> Self {
        Self {
            points: Vec::with_capacity(QuadTreeConfig::DEFAULT_INITIAL_CAPACITY),
            ids: Vec::with_capacity(QuadTreeConfig::DEFAULT_INITIAL_CAPACITY),
            capacity: QuadTreeConfig::DEFAULT_INITIAL_CAPACITY,
            growth_factor: QuadTreeConfig::DEFAULT_GROWTH_FACTOR,
            growth_events: 0,
        }
    }
}

impl<I> Debug for PointStore<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointStore")
            .field("len", &self.points.len())
            .field("capacity", &self.capacity)
            .field("growth_events", &self.growth_events)
            .finish_non_exhaustive()
    }
}

/// Capacity after one growth step. An empty buffer grows to `factor`.
///
/// The result is always above `capacity`, even for a factor below 2.
pub(crate) fn grown_capacity(capacity: usize, factor: usize) -> usize {
    capacity
        .max(1)
        .saturating_mul(factor)
        .max(capacity.saturating_add(1))
}

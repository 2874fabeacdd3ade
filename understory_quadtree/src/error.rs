// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by tree operations.

use alloc::collections::TryReserveError;

use thiserror::Error;

/// Failures reported by [`QuadTree`](crate::QuadTree) operations.
///
/// A point outside the tree's boundary is not an error: insertion reports it as `Ok(false)`.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum QuadTreeError {
    /// Growing the point store or a query buffer failed. Nothing was written.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),

    /// Self-join half dimension was not a finite, positive number.
    #[error("self-join half dimension must be finite and positive, got {0}")]
    InvalidRadius(f64),

    /// A [`QuadTreeConfig`](crate::QuadTreeConfig) value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use kurbo::{Point, Rect};

/// Axis-aligned square region in 2D, described by its center and half side length.
///
/// Containment is half-open on both axes: a point on the low (left/top) edge is inside,
/// a point on the high (right/bottom) edge belongs to the neighboring region. The four
/// quadrants produced by [`Square::quadrant`] therefore tile their parent exclusively.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Square {
    /// Center of the square.
    pub center: Point,
    /// Half of the side length. Expected to be non-negative.
    pub half_dim: f64,
}

/// One of the four children of a subdivided square.
///
/// The variant order is the order in which children are probed on insertion and
/// visited on queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Low x, low y.
    NorthWest,
    /// High x, low y.
    NorthEast,
    /// Low x, high y.
    SouthWest,
    /// High x, high y.
    SouthEast,
}

impl Quadrant {
    /// All quadrants in probe order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Sign of the child center offset along x and y.
    const fn signs(self) -> (f64, f64) {
        match self {
            Self::NorthWest => (-1.0, -1.0),
            Self::NorthEast => (1.0, -1.0),
            Self::SouthWest => (-1.0, 1.0),
            Self::SouthEast => (1.0, 1.0),
        }
    }
}

impl Square {
    /// Create a square from its center and half side length.
    pub const fn new(center: Point, half_dim: f64) -> Self {
        Self { center, half_dim }
    }

    /// Create a square from center coordinates and half side length.
    pub const fn from_center(x: f64, y: f64, half_dim: f64) -> Self {
        Self {
            center: Point::new(x, y),
            half_dim,
        }
    }

    /// Smallest square sharing the rectangle's center that covers it.
    pub fn bounding(rect: Rect) -> Self {
        let rect = rect.abs();
        let half_w = 0.5 * rect.width();
        let half_h = 0.5 * rect.height();
        Self {
            center: rect.center(),
            half_dim: if half_w < half_h { half_h } else { half_w },
        }
    }

    /// The square as a Kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.half_dim,
            self.center.y - self.half_dim,
            self.center.x + self.half_dim,
            self.center.y + self.half_dim,
        )
    }

    /// Whether the point lies in `[c - h, c + h)` on both axes.
    ///
    /// A square with `half_dim == 0` contains nothing, not even its own center.
    pub fn contains(&self, p: Point) -> bool {
        let hd = self.half_dim;
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx >= -hd && dx < hd && dy >= -hd && dy < hd
    }

    /// Whether the two squares overlap with positive area.
    ///
    /// Squares that only touch along an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        let both_hd = self.half_dim + other.half_dim;
        let dx = self.center.x - other.center.x;
        let dy = self.center.y - other.center.y;
        dx < both_hd && -dx < both_hd && dy < both_hd && -dy < both_hd
    }

    /// The child square covering quadrant `q`.
    pub fn quadrant(&self, q: Quadrant) -> Self {
        let hd = self.half_dim / 2.0;
        let (sx, sy) = q.signs();
        Self {
            center: Point::new(self.center.x + sx * hd, self.center.y + sy * hd),
            half_dim: hd,
        }
    }
}

impl From<Square> for Rect {
    fn from(value: Square) -> Self {
        value.to_rect()
    }
}

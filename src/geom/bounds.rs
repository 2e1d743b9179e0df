// Copyright 2016-2018 Matthew D. Michelotti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::f64;

use crate::geom::{Mat3, Vec2};

/// An axis-aligned bounding box, given by its lowest corner `(x, y)` and its
/// highest corner `(dx, dy)`.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct BoundingBox {
    /// Lowest x coordinate.
    pub x: f64,
    /// Lowest y coordinate.
    pub y: f64,
    /// Highest x coordinate.
    pub dx: f64,
    /// Highest y coordinate.
    pub dy: f64,
}

impl BoundingBox {
    /// The bounding box of zero points.
    ///
    /// Its lowest corner is at positive infinity and its highest corner at
    /// negative infinity, so it never overlaps another box and extending it
    /// with a point yields that point.
    pub const EMPTY: BoundingBox = BoundingBox {
        x: f64::INFINITY,
        y: f64::INFINITY,
        dx: f64::NEG_INFINITY,
        dy: f64::NEG_INFINITY,
    };

    /// Constructs a new bounding box from its corners.
    pub fn new(x: f64, y: f64, dx: f64, dy: f64) -> BoundingBox {
        BoundingBox { x, y, dx, dy }
    }

    /// Returns the smallest box containing all of the given points, or
    /// `BoundingBox::EMPTY` if there are none.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> BoundingBox {
        points
            .into_iter()
            .fold(BoundingBox::EMPTY, |bounds, point| bounds.extend(point))
    }

    /// Returns `true` if the box was computed from zero points.
    pub fn is_empty(&self) -> bool {
        self.x > self.dx || self.y > self.dy
    }

    /// Returns the smallest box containing both `self` and `point`.
    pub fn extend(self, point: Vec2) -> BoundingBox {
        BoundingBox {
            x: self.x.min(point.x),
            y: self.y.min(point.y),
            dx: self.dx.max(point.x),
            dy: self.dy.max(point.y),
        }
    }

    /// Returns `true` if the two boxes overlap. Shorthand for `aabb_overlap(self, other)`.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        aabb_overlap(self, other)
    }
}

impl Default for BoundingBox {
    fn default() -> BoundingBox {
        BoundingBox::EMPTY
    }
}

/// Returns `true` if the interiors of the two boxes intersect.
///
/// The comparisons are strict, so boxes that only share an edge or a corner
/// do not overlap. An empty box overlaps nothing.
pub fn aabb_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.x < b.dx && a.dx > b.x && a.y < b.dy && a.dy > b.y
}

/// Returns the bounding box of `vertices` after applying `transform` to each.
pub fn bounding_box_of(vertices: &[Vec2], transform: &Mat3) -> BoundingBox {
    BoundingBox::from_points(vertices.iter().map(|&v| transform.transform_point(v)))
}

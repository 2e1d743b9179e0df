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

// Narrow phase. Candidate axes are the edge normals of every triangle of both
// shapes; the vertex sets of the two shapes are projected onto each axis and
// the pair is separated as soon as one axis shows disjoint intervals.

use fnv::FnvHashSet;
use std::f64;
use tracing::trace;

use crate::geom::{Shape, Vec2};

type AxisKey = (i64, i64);

// Axes are unit vectors, so coarser quanta merge axes that are far apart.
pub(crate) const MAX_AXIS_TOLERANCE: f64 = 0.5;

// Unique axes, where an axis and its negation count as the same axis.
//
// Normals are quantized to multiples of `quantum` and the quantized key is
// flipped into the half-plane `x > 0 || (x == 0 && y >= 0)`, so that normals
// that differ only by sign or by floating point noise share a key.
pub(crate) struct AxisSet {
    quantum: f64,
    keys: FnvHashSet<AxisKey>,
    axes: Vec<Vec2>,
}

impl AxisSet {
    pub fn new(quantum: f64) -> AxisSet {
        assert!(
            quantum > 0.0 && quantum < MAX_AXIS_TOLERANCE,
            "requires 0.0 < quantum < {}",
            MAX_AXIS_TOLERANCE
        );
        AxisSet {
            quantum,
            keys: FnvHashSet::default(),
            axes: Vec::new(),
        }
    }

    // Returns false if the edge has zero length or the axis is already present.
    pub fn insert_edge(&mut self, edge: Vec2) -> bool {
        let normal = match edge.perp().normalize() {
            Some(normal) => normal,
            None => {
                trace!(?edge, "skipping axis of degenerate edge");
                return false;
            }
        };
        let mut key = (self.quantize(normal.x), self.quantize(normal.y));
        let mut axis = normal;
        if key.0 < 0 || (key.0 == 0 && key.1 < 0) {
            key = (-key.0, -key.1);
            axis = -axis;
        }
        if self.keys.insert(key) {
            self.axes.push(axis);
            true
        } else {
            false
        }
    }

    pub fn insert_triangle(&mut self, [a, b, c]: [Vec2; 3]) {
        self.insert_edge(b - a);
        self.insert_edge(c - b);
        self.insert_edge(a - c);
    }

    pub fn axes(&self) -> &[Vec2] {
        &self.axes
    }

    fn quantize(&self, val: f64) -> i64 {
        (val / self.quantum).round() as i64
    }
}

// Closed range of projections of a point set onto an axis.
#[derive(PartialEq, Copy, Clone, Debug)]
pub(crate) struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn project(points: &[Vec2], axis: Vec2) -> Interval {
        points.iter().map(|&p| p.dot(axis)).fold(
            Interval {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |range, val| Interval {
                min: range.min.min(val),
                max: range.max.max(val),
            },
        )
    }

    // Strict, so intervals that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min < other.max && self.max > other.min
    }
}

/// Separating axis test between two triangulated shapes.
///
/// `a_vertices` and `b_vertices` are the vertex loops of `a` and `b` after
/// transformation into a common space. Axes are the edge normals of all
/// triangles of both shapes, deduplicated up to sign with the given
/// `axis_tolerance`. Returns `true` if the projections of the two vertex sets
/// overlap on every axis. Touching shapes are not considered overlapping.
///
/// # Panics
///
/// Panics if `a_vertices` or `b_vertices` is shorter than the vertex loop of
/// its shape, or unless `0.0 < axis_tolerance < 0.5`.
pub fn sat_overlap(
    a: &Shape,
    a_vertices: &[Vec2],
    b: &Shape,
    b_vertices: &[Vec2],
    axis_tolerance: f64,
) -> bool {
    let mut axes = AxisSet::new(axis_tolerance);
    for triangle in a.triangle_points(a_vertices).chain(b.triangle_points(b_vertices)) {
        axes.insert_triangle(triangle);
    }
    axes.axes().iter().all(|&axis| {
        Interval::project(a_vertices, axis).overlaps(&Interval::project(b_vertices, axis))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{v2, Mat3};

    #[test]
    fn test_square_axes() {
        let square = Shape::square(2.0).unwrap();
        let mut axes = AxisSet::new(1e-9);
        for triangle in square.triangle_points(square.vertices()) {
            axes.insert_triangle(triangle);
        }
        assert_eq!(axes.axes().len(), 3);
        assert!(axes.axes().contains(&v2(1.0, 0.0)));
        assert!(axes.axes().contains(&v2(0.0, 1.0)));
        for axis in axes.axes() {
            assert!((axis.len() - 1.0).abs() < 1e-12);
            assert!(axis.x > 0.0 || (axis.x == 0.0 && axis.y > 0.0));
        }
    }

    #[test]
    fn test_negated_and_noisy_axes_are_merged() {
        let mut axes = AxisSet::new(1e-9);
        assert!(axes.insert_edge(v2(0.0, 1.0)));
        assert!(!axes.insert_edge(v2(0.0, -1.0)));
        assert!(!axes.insert_edge(v2(1e-13, -3.0)));
        assert!(!axes.insert_edge(v2(-1e-13, 2.0)));
        assert!(axes.insert_edge(v2(1.0, 0.0)));
        assert_eq!(axes.axes().len(), 2);
    }

    #[test]
    fn test_degenerate_edge_is_skipped() {
        let mut axes = AxisSet::new(1e-9);
        assert!(!axes.insert_edge(Vec2::zero()));
        assert!(axes.axes().is_empty());
        axes.insert_triangle([v2(1.0, 1.0), v2(1.0, 1.0), v2(1.0, 1.0)]);
        assert!(axes.axes().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_quantum_too_coarse() {
        AxisSet::new(0.5);
    }

    #[test]
    #[should_panic]
    fn test_short_vertex_slice() {
        let square = Shape::square(2.0).unwrap();
        let a = square.vertices().to_vec();
        sat_overlap(&square, &a, &square, &a[..2], 1e-9);
    }

    #[test]
    fn test_interval_overlap() {
        let a = Interval { min: -1.0, max: 1.0 };
        assert!(a.overlaps(&a));
        assert!(a.overlaps(&Interval { min: 0.0, max: 2.0 }));
        assert!(a.overlaps(&Interval { min: -0.5, max: 0.5 }));
        assert!(!a.overlaps(&Interval { min: 1.0, max: 3.0 }));
        assert!(!a.overlaps(&Interval { min: -3.0, max: -1.0 }));
        assert_eq!(Interval::project(&[v2(1.0, 5.0), v2(-2.0, 0.0)], v2(1.0, 0.0)), Interval { min: -2.0, max: 1.0 });
    }

    fn placed(shape: &Shape, pos: Vec2, rotation: f64) -> Vec<Vec2> {
        shape.transformed(&Mat3::identity().translate(pos).rotate(rotation))
    }

    #[test]
    fn test_sat_overlap() {
        let square = Shape::square(2.0).unwrap();
        let a = placed(&square, v2(0.0, 0.0), 0.0);
        assert!(sat_overlap(&square, &a, &square, &placed(&square, v2(1.0, 0.5), 0.0), 1e-9));
        assert!(sat_overlap(&square, &a, &square, &a, 1e-9));
        assert!(!sat_overlap(&square, &a, &square, &placed(&square, v2(2.0, 0.0), 0.0), 1e-9));
        assert!(!sat_overlap(&square, &a, &square, &placed(&square, v2(5.0, 0.0), 0.0), 1e-9));
    }

    #[test]
    fn test_sat_rejects_box_only_overlap() {
        // The bounding boxes of these squares overlap near the corner, but
        // the diamond's edge separates them.
        let square = Shape::square(2.0).unwrap();
        let a = placed(&square, v2(0.0, 0.0), 0.0);
        let diamond = placed(&square, v2(2.3, 2.3), std::f64::consts::FRAC_PI_4);
        assert!(!sat_overlap(&square, &a, &square, &diamond, 1e-9));
        let diamond = placed(&square, v2(1.5, 1.5), std::f64::consts::FRAC_PI_4);
        assert!(sat_overlap(&square, &a, &square, &diamond, 1e-9));
    }

    #[test]
    fn test_sat_triangles() {
        let tri = Shape::new(vec![v2(0.0, 0.0), v2(4.0, 0.0), v2(0.0, 4.0)], vec![[0, 1, 2]]).unwrap();
        let a = placed(&tri, v2(0.0, 0.0), 0.0);
        // across the hypotenuse
        let b = placed(&tri, v2(2.5, 2.5), 0.0);
        assert!(!sat_overlap(&tri, &a, &tri, &b, 1e-9));
        let b = placed(&tri, v2(1.0, 1.0), 0.0);
        assert!(sat_overlap(&tri, &a, &tri, &b, 1e-9));
    }
}

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

use std::ops::Mul;

use crate::geom::{v2, Vec2};

/// A homogeneous 3x3 matrix representing a 2-D affine transform.
///
/// Points are treated as column vectors, so `a * b` applies `b` first and
/// then `a`. The `translate`, `rotate` and `scale` methods post-multiply, so
/// `Mat3::identity().translate(t).rotate(r).scale(s)` scales a point first,
/// then rotates it, then translates it.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub fn identity() -> Mat3 {
        Mat3 {
            rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Constructs a matrix from its rows.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Mat3 {
        Mat3 { rows }
    }

    /// Returns the rows of the matrix.
    #[inline]
    pub fn rows(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    /// Returns a pure translation matrix.
    pub fn translation(offset: Vec2) -> Mat3 {
        Mat3::from_rows([[1.0, 0.0, offset.x], [0.0, 1.0, offset.y], [0.0, 0.0, 1.0]])
    }

    /// Returns a pure counter-clockwise rotation matrix, with `angle` in radians.
    pub fn rotation(angle: f64) -> Mat3 {
        let (sin, cos) = angle.sin_cos();
        Mat3::from_rows([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Returns a pure scaling matrix.
    pub fn scaling(factor: Vec2) -> Mat3 {
        Mat3::from_rows([[factor.x, 0.0, 0.0], [0.0, factor.y, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Returns `self * Mat3::translation(offset)`.
    pub fn translate(&self, offset: Vec2) -> Mat3 {
        self.multiply(&Mat3::translation(offset))
    }

    /// Returns `self * Mat3::rotation(angle)`.
    pub fn rotate(&self, angle: f64) -> Mat3 {
        self.multiply(&Mat3::rotation(angle))
    }

    /// Returns `self * Mat3::scaling(factor)`.
    pub fn scale(&self, factor: Vec2) -> Mat3 {
        self.multiply(&Mat3::scaling(factor))
    }

    /// Returns the matrix product `self * other`.
    pub fn multiply(&self, other: &Mat3) -> Mat3 {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[r][k] * other.rows[k][c]).sum();
            }
        }
        Mat3 { rows }
    }

    /// Applies the transform to a point.
    ///
    /// The bottom row is assumed to be `[0, 0, 1]`.
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let m = &self.rows;
        v2(
            m[0][0] * point.x + m[0][1] * point.y + m[0][2],
            m[1][0] * point.x + m[1][1] * point.y + m[1][2],
        )
    }
}

impl Default for Mat3 {
    fn default() -> Mat3 {
        Mat3::identity()
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    fn mul(self, rhs: Mat3) -> Mat3 {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_near(actual: Vec2, expected: Vec2) {
        assert!(
            actual.dist(expected) < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_identity() {
        assert_eq!(Mat3::identity().transform_point(v2(3.0, -4.0)), v2(3.0, -4.0));
        assert_eq!(Mat3::identity() * Mat3::identity(), Mat3::identity());
    }

    #[test]
    fn test_translate() {
        let m = Mat3::identity().translate(v2(10.0, 20.0));
        assert_eq!(m.transform_point(v2(1.0, 0.0)), v2(11.0, 20.0));
    }

    #[test]
    fn test_rows() {
        let m = Mat3::identity().translate(v2(10.0, 20.0)).scale(v2(2.0, 3.0));
        assert_eq!(m.rows(), [[2.0, 0.0, 10.0], [0.0, 3.0, 20.0], [0.0, 0.0, 1.0]]);
        assert_eq!(Mat3::from_rows(m.rows()), m);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let m = Mat3::identity().rotate(PI / 2.0);
        assert_near(m.transform_point(v2(1.0, 0.0)), v2(0.0, 1.0));
    }

    #[test]
    fn test_composition_order() {
        // scale, then rotate, then translate
        let m = Mat3::identity()
            .translate(v2(5.0, 0.0))
            .rotate(PI / 2.0)
            .scale(v2(2.0, 1.0));
        assert_near(m.transform_point(v2(1.0, 0.0)), v2(5.0, 2.0));

        // reversing the order gives a different result
        let m = Mat3::identity()
            .scale(v2(2.0, 1.0))
            .rotate(PI / 2.0)
            .translate(v2(5.0, 0.0));
        assert_near(m.transform_point(v2(1.0, 0.0)), v2(0.0, 6.0));
    }

    #[test]
    fn test_multiply_applies_right_first() {
        let view = Mat3::translation(v2(100.0, 0.0));
        let model = Mat3::scaling(v2(3.0, 3.0));
        assert_eq!((view * model).transform_point(v2(1.0, 1.0)), v2(103.0, 3.0));
        assert_eq!((model * view).transform_point(v2(1.0, 1.0)), v2(303.0, 3.0));
    }
}

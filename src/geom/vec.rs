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

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shorthand for `Vec2::new(x, y)`.
#[inline]
pub fn v2(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

/// A 2-D vector.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Vec2 {
    /// Constructs a new vector.
    #[inline]
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::default()
    }

    /// Returns the square of the length of the vector.
    pub fn len_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of the vector.
    pub fn len(self) -> f64 {
        self.len_sq().sqrt()
    }

    /// Returns the dot product of two vectors.
    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the vector rotated a quarter turn counter-clockwise.
    #[inline]
    pub fn perp(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Returns a normalized version of the vector, or `None` if its length is
    /// zero or not finite.
    pub fn normalize(self) -> Option<Vec2> {
        let len = self.len();
        if len > 0.0 && len.is_finite() {
            Some(Vec2::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// Returns the distance between two points.
    pub fn dist(self, other: Vec2) -> f64 {
        (self - other).len()
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Vec2 {
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perp() {
        assert_eq!(v2(2.0, 0.0).perp(), v2(0.0, 2.0));
        assert_eq!(v2(0.0, 3.0).perp(), v2(-3.0, 0.0));
        assert_eq!(v2(1.0, 2.0).perp().dot(v2(1.0, 2.0)), 0.0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(v2(3.0, 4.0).normalize(), Some(v2(0.6, 0.8)));
        assert_eq!(v2(0.0, 0.0).normalize(), None);
        assert_eq!(v2(f64::INFINITY, 0.0).normalize(), None);
    }

    #[test]
    fn test_ops() {
        let mut a = v2(1.0, 2.0);
        a += v2(0.5, -1.0);
        assert_eq!(a, v2(1.5, 1.0));
        assert_eq!(a - v2(1.5, 1.0), Vec2::zero());
        assert_eq!(-a * 2.0, v2(-3.0, -2.0));
        assert_eq!(v2(0.0, 0.0).dist(v2(3.0, 4.0)), 5.0);
        assert_eq!(Vec2::from((1.5, -2.0)), v2(1.5, -2.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(v2(1.0, -1e300).is_finite());
        assert!(!v2(f64::NAN, 0.0).is_finite());
        assert!(!v2(0.0, f64::NEG_INFINITY).is_finite());
    }
}

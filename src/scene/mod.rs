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

mod body;
mod sat;
mod sink;
mod world;

pub use self::body::{bounding_box_of_many, RigidBody};
pub use self::sat::sat_overlap;
pub use self::sink::{CollisionLog, CollisionSink};
pub use self::world::{Camera, World, WorldConfig};

use std::fmt;

use crate::geom::{v2, Mat3, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a `RigidBody`, unique within the `World` that created it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyId(u64);

impl BodyId {
    /// Returns the raw value of the id.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position, orientation and size of a body relative to the world.
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform2 {
    /// Offset of the local origin.
    pub translation: Vec2,
    /// Counter-clockwise rotation in radians.
    pub rotation: f64,
    /// Scale along each local axis. Non-uniform scales are allowed.
    pub scale: Vec2,
}

impl Transform2 {
    /// Constructs a new transform.
    pub fn new(translation: Vec2, rotation: f64, scale: Vec2) -> Transform2 {
        Transform2 {
            translation,
            rotation,
            scale,
        }
    }

    /// Shorthand for a transform with only a translation.
    pub fn at(translation: Vec2) -> Transform2 {
        Transform2 {
            translation,
            ..Transform2::default()
        }
    }

    /// Returns the model matrix.
    ///
    /// The matrix is always composed as identity, then translate, then rotate,
    /// then scale, so local points are scaled first and translated last.
    pub fn matrix(&self) -> Mat3 {
        Mat3::identity()
            .translate(self.translation)
            .rotate(self.rotation)
            .scale(self.scale)
    }
}

impl Default for Transform2 {
    fn default() -> Transform2 {
        Transform2::new(Vec2::zero(), 0.0, v2(1.0, 1.0))
    }
}

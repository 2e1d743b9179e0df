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

//! Trisat is a library for tracking 2D polygonal bodies in a scene and
//! detecting which of them overlap.
//!
//! Bodies are described by a vertex loop and an explicit triangulation, and
//! are placed in a `World` with a translation, rotation and scale. Each tick,
//! bodies move by their velocity, and overlapping pairs are found in two
//! phases: a cheap axis-aligned bounding box test, then a separating axis test
//! over the edge normals of the triangles of both bodies.
//!
//! ```
//! use trisat::geom::{v2, Shape};
//! use trisat::{Transform2, World};
//!
//! let mut world = World::default();
//! let a = world.create_body(Shape::square(2.0).unwrap(), Transform2::at(v2(0.0, 0.0)));
//! let b = world.create_body(Shape::square(2.0).unwrap(), Transform2::at(v2(3.0, 0.0)));
//!
//! world.update_matrices();
//! world.move_bodies(&mut ());
//! assert!(!world.body(a).unwrap().is_colliding());
//!
//! world.body_mut(b).unwrap().transform.translation = v2(1.0, 0.0);
//! world.update_matrices();
//! world.move_bodies(&mut ());
//! assert!(world.body(a).unwrap().is_colliding());
//! assert!(world.body(b).unwrap().is_colliding());
//! ```
//!
//! The `geom` module also provides line, ray and segment intersection queries
//! that can be used for picking.

pub mod geom;
mod error;
mod scene;

pub use crate::error::{Error, Result};
pub use crate::scene::*;

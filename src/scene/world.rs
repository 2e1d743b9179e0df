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

use fnv::FnvHashMap;
use tracing::{debug, trace};

use crate::geom::{aabb_overlap, BoundingBox, Mat3, Shape, Vec2};
use crate::scene::sat::MAX_AXIS_TOLERANCE;
use crate::scene::{bounding_box_of_many, BodyId, CollisionSink, RigidBody, Transform2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The camera frame of a `World`. Cameras translate and rotate but do not scale.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Camera {
    /// Offset applied to every body in view space.
    pub translation: Vec2,
    /// Counter-clockwise rotation in radians, applied after the translation.
    pub rotation: f64,
}

impl Camera {
    /// Constructs a new camera frame.
    pub fn new(translation: Vec2, rotation: f64) -> Camera {
        Camera {
            translation,
            rotation,
        }
    }

    /// Returns the view matrix, composed as identity, then translate, then rotate.
    pub fn view_matrix(&self) -> Mat3 {
        Mat3::identity()
            .translate(self.translation)
            .rotate(self.rotation)
    }
}

/// Settings used to construct a `World`.
#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Initial camera frame.
    pub camera: Camera,
    /// Granularity used to decide whether two separating axis candidates
    /// are the same axis. Must be positive and less than `0.5`, since axes
    /// are unit vectors.
    pub axis_tolerance: f64,
}

impl Default for WorldConfig {
    fn default() -> WorldConfig {
        WorldConfig {
            camera: Camera::default(),
            axis_tolerance: 1e-9,
        }
    }
}

/// A scene of rigid bodies viewed through a camera.
///
/// A simulation step consists of a call to `update_matrices` followed by a
/// call to `move_bodies`. All mutation goes through `&mut self`, so ticks are
/// serialized and bodies cannot change while a tick is in progress.
pub struct World {
    /// The camera frame. Changes take effect on the next `update_matrices`.
    pub camera: Camera,
    view: Mat3,
    bodies: FnvHashMap<BodyId, RigidBody>,
    next_id: u64,
    axis_tolerance: f64,
}

impl World {
    /// Constructs an empty world with the given settings.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 < config.axis_tolerance < 0.5`.
    pub fn new(config: WorldConfig) -> World {
        assert!(
            config.axis_tolerance > 0.0 && config.axis_tolerance < MAX_AXIS_TOLERANCE,
            "requires 0.0 < axis_tolerance < {}",
            MAX_AXIS_TOLERANCE
        );
        World {
            camera: config.camera,
            view: config.camera.view_matrix(),
            bodies: FnvHashMap::default(),
            next_id: 0,
            axis_tolerance: config.axis_tolerance,
        }
    }

    /// Returns the view matrix as of the last `update_matrices`.
    #[inline]
    pub fn view(&self) -> &Mat3 {
        &self.view
    }

    /// Returns the tolerance used to deduplicate separating axes.
    #[inline]
    pub fn axis_tolerance(&self) -> f64 {
        self.axis_tolerance
    }

    /// Recomputes the view matrix from `self.camera`, then the model and
    /// model-view matrices of every body.
    pub fn update_matrices(&mut self) {
        self.view = self.camera.view_matrix();
        let view = &self.view;
        for body in self.bodies.values_mut() {
            body.update_transform(Some(view));
        }
        trace!(bodies = self.bodies.len(), "updated matrices");
    }

    /// Creates a new body with the given local `shape` and initial
    /// `transform`, and adds it to the world.
    ///
    /// The body's matrices are computed against the current view matrix.
    /// Returns the id of the new body.
    pub fn create_body(&mut self, shape: Shape, transform: Transform2) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        let body = RigidBody::new(id, shape, transform, &self.view);
        debug!(body = %id, vertices = body.shape().vertices().len(), "created body");
        self.bodies.insert(id, body);
        id
    }

    /// Adds `body` to the world under its own id, refreshing its matrices
    /// against the current view matrix.
    ///
    /// If a body with the same id is already present, it is replaced and
    /// returned. This is typically used to return a body obtained from
    /// `remove_body`.
    pub fn add_child(&mut self, mut body: RigidBody) -> Option<RigidBody> {
        let id = body.id();
        self.next_id = self.next_id.max(id.raw() + 1);
        body.update_transform(Some(&self.view));
        let replaced = self.bodies.insert(id, body);
        debug!(body = %id, replaced = replaced.is_some(), "added body");
        replaced
    }

    /// Removes the body with the given `id` and returns it, or returns `None`
    /// if there is no such body.
    pub fn remove_body(&mut self, id: BodyId) -> Option<RigidBody> {
        let removed = self.bodies.remove(&id);
        if removed.is_some() {
            debug!(body = %id, "removed body");
        }
        removed
    }

    /// Returns the body with the given `id`.
    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.get(&id)
    }

    /// Returns the body with the given `id` for mutation.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.get_mut(&id)
    }

    /// Returns `true` if a body with the given `id` is present.
    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains_key(&id)
    }

    /// Returns all bodies, in no particular order.
    pub fn bodies(&self) -> impl Iterator<Item = &RigidBody> {
        self.bodies.values()
    }

    /// Returns the ids of all bodies, in no particular order.
    pub fn ids(&self) -> Vec<BodyId> {
        self.bodies.keys().copied().collect()
    }

    /// Returns the number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns `true` if the world has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Returns the bounding box of all bodies, in view space if
    /// `use_world_transform` is set and in world space otherwise.
    pub fn bounding_box(&self, use_world_transform: bool) -> BoundingBox {
        bounding_box_of_many(self.bodies.values(), use_world_transform)
    }

    /// Returns the ids of every other body in the world.
    ///
    /// The result is a snapshot; adding or removing bodies afterwards does not
    /// change it.
    ///
    /// # Panics
    ///
    /// Panics if there is no body with the given `id`.
    pub fn siblings(&self, id: BodyId) -> Vec<BodyId> {
        self.expect_body(id);
        self.bodies.keys().copied().filter(|&other| other != id).collect()
    }

    /// Returns the ids of the siblings whose world-space bounding box overlaps
    /// the world-space bounding box of the body with the given `id`.
    ///
    /// This is a conservative filter: a candidate is not necessarily
    /// overlapping once the exact shapes are compared.
    ///
    /// # Panics
    ///
    /// Panics if there is no body with the given `id`.
    pub fn broad_phase_candidates(&self, id: BodyId) -> Vec<BodyId> {
        let bounds = self.expect_body(id).bounding_box(false);
        self.candidates(&bounds)
            .map(|other| other.id())
            .filter(|&other| other != id)
            .collect()
    }

    /// Advances the body with the given `id` by one tick and updates its
    /// collision status, which is returned and also reported to `sink`.
    ///
    /// The velocity is integrated into the translation, the matrices are
    /// refreshed, and the body is tested against its broad-phase candidates
    /// with the separating axis test. The body is colliding if it overlaps at
    /// least one candidate. Siblings are tested at their current transforms.
    ///
    /// # Panics
    ///
    /// Panics if there is no body with the given `id`.
    pub fn move_body<S: CollisionSink + ?Sized>(&mut self, id: BodyId, sink: &mut S) -> bool {
        let mut body = self
            .bodies
            .remove(&id)
            .unwrap_or_else(|| panic!("body id {} not found", id));
        body.integrate();
        body.update_transform(Some(&self.view));

        let bounds = body.bounding_box(false);
        let candidates: Vec<&RigidBody> = self.candidates(&bounds).collect();
        let colliding = candidates
            .iter()
            .any(|other| body.overlaps(other, self.axis_tolerance));
        trace!(body = %id, candidates = candidates.len(), colliding, "moved body");

        body.set_colliding(colliding);
        sink.record(&body, colliding);
        assert!(self.bodies.insert(id, body).is_none());
        colliding
    }

    /// Moves every body by one tick. See `move_body`.
    ///
    /// The order in which bodies are moved is unspecified. A body may be
    /// tested against a sibling either before or after that sibling has moved
    /// in the same tick.
    pub fn move_bodies<S: CollisionSink + ?Sized>(&mut self, sink: &mut S) {
        for id in self.ids() {
            self.move_body(id, sink);
        }
    }

    fn candidates<'a>(&'a self, bounds: &'a BoundingBox) -> impl Iterator<Item = &'a RigidBody> + 'a {
        self.bodies
            .values()
            .filter(move |other| aabb_overlap(bounds, &other.bounding_box(false)))
    }

    fn expect_body(&self, id: BodyId) -> &RigidBody {
        self.bodies
            .get(&id)
            .unwrap_or_else(|| panic!("body id {} not found", id))
    }
}

impl Default for World {
    fn default() -> World {
        World::new(WorldConfig::default())
    }
}

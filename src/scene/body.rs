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

use crate::geom::{BoundingBox, Mat3, Shape, Vec2};
use crate::scene::sat::sat_overlap;
use crate::scene::{BodyId, Transform2};

/// A convex polygonal body (or union of triangles) placed in a `World`.
///
/// Bodies are created with `World::create_body` and are owned by the world.
/// The transform and motion fields are public and may be changed freely
/// between ticks; the derived matrices are refreshed by
/// `World::update_matrices` and by each body's move.
#[derive(Clone, Debug)]
pub struct RigidBody {
    id: BodyId,
    /// Optional display name, reported to a `CollisionLog`.
    pub name: Option<String>,
    shape: Shape,
    /// Position, rotation and scale.
    pub transform: Transform2,
    /// Added to the translation once per tick.
    pub velocity: Vec2,
    /// Added to the velocity once per tick.
    pub acceleration: Vec2,
    model: Mat3,
    model_view: Mat3,
    colliding: bool,
}

impl RigidBody {
    pub(crate) fn new(id: BodyId, shape: Shape, transform: Transform2, view: &Mat3) -> RigidBody {
        let mut body = RigidBody {
            id,
            name: None,
            shape,
            transform,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            model: Mat3::identity(),
            model_view: Mat3::identity(),
            colliding: false,
        };
        body.update_transform(Some(view));
        body
    }

    /// Returns the id assigned by the owning `World`.
    #[inline]
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Returns the local-space shape.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the model matrix as of the last `update_transform`.
    #[inline]
    pub fn model(&self) -> &Mat3 {
        &self.model
    }

    /// Returns the model-view matrix as of the last `update_transform` that
    /// was given a view.
    #[inline]
    pub fn model_view(&self) -> &Mat3 {
        &self.model_view
    }

    /// Returns `true` if the body overlapped another body during its most
    /// recent move.
    #[inline]
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Recomputes the model matrix from `self.transform`. If `view` is given,
    /// also recomputes the model-view matrix as `view * model`.
    pub fn update_transform(&mut self, view: Option<&Mat3>) {
        self.model = self.transform.matrix();
        if let Some(view) = view {
            self.model_view = view.multiply(&self.model);
        }
    }

    /// Returns the vertex loop transformed by either the model matrix
    /// (`model_only`) or the model-view matrix.
    pub fn transformed_vertices(&self, model_only: bool) -> Vec<Vec2> {
        self.shape.transformed(self.matrix(model_only))
    }

    /// Returns the bounding box of the body, in view space if
    /// `use_world_transform` is set and in world space otherwise.
    pub fn bounding_box(&self, use_world_transform: bool) -> BoundingBox {
        self.shape.bounding_box(self.matrix(!use_world_transform))
    }

    /// Runs the separating axis test between the world-space shapes of `self`
    /// and `other`.
    pub fn overlaps(&self, other: &RigidBody, axis_tolerance: f64) -> bool {
        sat_overlap(
            &self.shape,
            &self.transformed_vertices(true),
            &other.shape,
            &other.transformed_vertices(true),
            axis_tolerance,
        )
    }

    // explicit Euler, one step per tick
    pub(crate) fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.transform.translation += self.velocity;
    }

    pub(crate) fn set_colliding(&mut self, colliding: bool) {
        self.colliding = colliding;
    }

    fn matrix(&self, model_only: bool) -> &Mat3 {
        if model_only {
            &self.model
        } else {
            &self.model_view
        }
    }
}

/// Returns the bounding box of every vertex of every body in `bodies`, in
/// view space if `use_world_transform` is set and in world space otherwise.
///
/// Returns `BoundingBox::EMPTY` if there are no bodies.
pub fn bounding_box_of_many<'a, I>(bodies: I, use_world_transform: bool) -> BoundingBox
where
    I: IntoIterator<Item = &'a RigidBody>,
{
    bodies.into_iter().fold(BoundingBox::EMPTY, |bounds, body| {
        body.transformed_vertices(!use_world_transform)
            .into_iter()
            .fold(bounds, BoundingBox::extend)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::v2;
    use std::f64::consts::PI;

    fn body(transform: Transform2, view: &Mat3) -> RigidBody {
        RigidBody::new(BodyId(7), Shape::square(2.0).unwrap(), transform, view)
    }

    #[test]
    fn test_single_vertex_round_trip() {
        let shape = Shape::new(
            vec![v2(1.0, 0.0), v2(2.0, 0.0), v2(1.0, 1.0)],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let body = RigidBody::new(BodyId(0), shape, Transform2::at(v2(10.0, 20.0)), &Mat3::identity());
        assert_eq!(body.transformed_vertices(false)[0], v2(11.0, 20.0));
        assert_eq!(body.transformed_vertices(true)[0], v2(11.0, 20.0));
    }

    #[test]
    fn test_view_only_affects_model_view() {
        let view = Mat3::translation(v2(100.0, 50.0));
        let body = body(Transform2::at(v2(1.0, 0.0)), &view);
        assert_eq!(body.bounding_box(false), BoundingBox::new(0.0, -1.0, 2.0, 1.0));
        assert_eq!(body.bounding_box(true), BoundingBox::new(100.0, 49.0, 102.0, 51.0));
        assert_eq!(body.transformed_vertices(false)[0], v2(100.0, 49.0));
    }

    #[test]
    fn test_update_transform_is_idempotent() {
        let view = Mat3::identity().translate(v2(3.0, 4.0)).rotate(0.3);
        let mut body = body(Transform2::new(v2(1.5, -2.0), 1.1, v2(2.0, 0.5)), &view);
        body.update_transform(Some(&view));
        let (model, model_view) = (*body.model(), *body.model_view());
        body.update_transform(Some(&view));
        assert_eq!(*body.model(), model);
        assert_eq!(*body.model_view(), model_view);
    }

    #[test]
    fn test_update_without_view_keeps_model_view() {
        let mut body = body(Transform2::default(), &Mat3::identity());
        body.transform.translation = v2(5.0, 0.0);
        body.update_transform(None);
        assert_eq!(body.bounding_box(false).x, 4.0);
        assert_eq!(body.bounding_box(true).x, -1.0);
    }

    #[test]
    fn test_rotation_inverse() {
        let mut body = body(Transform2::new(Vec2::zero(), PI / 3.0, v2(1.0, 1.0)), &Mat3::identity());
        let rotated = body.transformed_vertices(true);
        body.transform.rotation = -PI / 3.0;
        body.update_transform(None);
        let back: Vec<Vec2> = rotated.iter().map(|&v| body.model().transform_point(v)).collect();
        for (v, orig) in back.iter().zip(body.shape().vertices()) {
            assert!(v.dist(*orig) < 1e-12);
        }
    }

    #[test]
    fn test_integrate() {
        let mut body = body(Transform2::default(), &Mat3::identity());
        body.velocity = v2(1.0, 0.0);
        body.acceleration = v2(0.5, -1.0);
        body.integrate();
        assert_eq!(body.velocity, v2(1.5, -1.0));
        assert_eq!(body.transform.translation, v2(1.5, -1.0));
        body.integrate();
        assert_eq!(body.velocity, v2(2.0, -2.0));
        assert_eq!(body.transform.translation, v2(3.5, -3.0));
    }

    #[test]
    fn test_bounding_box_of_many() {
        let a = body(Transform2::at(v2(-5.0, 0.0)), &Mat3::identity());
        let b = body(Transform2::new(v2(5.0, 2.0), 0.0, v2(3.0, 1.0)), &Mat3::identity());
        assert_eq!(
            bounding_box_of_many(vec![&a, &b], false),
            BoundingBox::new(-6.0, -1.0, 8.0, 3.0)
        );
        assert_eq!(bounding_box_of_many(Vec::new(), false), BoundingBox::EMPTY);
    }
}

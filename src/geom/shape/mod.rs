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

use crate::error::{Error, Result};
use crate::geom::{bounding_box_of, v2, BoundingBox, Mat3, Vec2};


/// Index triple naming one triangle of a `Shape`.
pub type Triangle = [usize; 3];

/// A polygon in local space, described by its boundary vertices (the
/// "vertex loop") together with an explicit triangulation.
///
/// Collision tests work on the triangles, so a concave polygon may be used as
/// long as it is split into triangles by the caller. The triangles are
/// expected to cover the polygon; this is not checked.
#[derive(PartialEq, Clone, Debug)]
pub struct Shape {
    vertices: Vec<Vec2>,
    triangles: Vec<Triangle>,
}

impl Shape {
    /// Constructs a new shape from a vertex loop and a triangulation.
    ///
    /// Fails if the triangulation is empty, if any index is out of range, or
    /// if any triangle has zero area.
    pub fn new(vertices: Vec<Vec2>, triangles: Vec<Triangle>) -> Result<Shape> {
        if triangles.is_empty() {
            return Err(Error::EmptyTriangulation);
        }
        for (triangle, indices) in triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&index| index >= vertices.len()) {
                return Err(Error::VertexIndexOutOfRange {
                    triangle,
                    index,
                    len: vertices.len(),
                });
            }
            let [a, b, c] = indices.map(|index| vertices[index]);
            if cross(b - a, c - a) == 0.0 {
                return Err(Error::DegenerateTriangle { triangle });
            }
        }
        Ok(Shape { vertices, triangles })
    }

    /// Constructs a convex polygon, triangulated as a fan around the first
    /// vertex.
    pub fn convex(vertices: Vec<Vec2>) -> Result<Shape> {
        let triangles = (1..vertices.len().saturating_sub(1))
            .map(|i| [0, i, i + 1])
            .collect();
        Shape::new(vertices, triangles)
    }

    /// Constructs an axis-aligned rectangle centered on the origin with the
    /// given `dims` (width and height), split into two triangles.
    pub fn rect(dims: Vec2) -> Result<Shape> {
        let (hx, hy) = (dims.x * 0.5, dims.y * 0.5);
        Shape::new(
            vec![v2(-hx, -hy), v2(hx, -hy), v2(hx, hy), v2(-hx, hy)],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    /// Constructs an axis-aligned square centered on the origin with the given `width`.
    pub fn square(width: f64) -> Result<Shape> {
        Shape::rect(v2(width, width))
    }

    /// Returns the vertex loop.
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Returns the triangulation.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the vertex positions of each triangle, looked up in `vertices`.
    ///
    /// `vertices` is usually a transformed copy of the vertex loop.
    ///
    /// # Panics
    ///
    /// The iterator panics if `vertices` is shorter than the vertex loop.
    pub fn triangle_points<'a>(
        &'a self,
        vertices: &'a [Vec2],
    ) -> impl Iterator<Item = [Vec2; 3]> + 'a {
        self.triangles.iter().map(move |t| t.map(|index| vertices[index]))
    }

    /// Returns the vertices after applying `transform` to each.
    pub fn transformed(&self, transform: &Mat3) -> Vec<Vec2> {
        self.vertices.iter().map(|&v| transform.transform_point(v)).collect()
    }

    /// Returns the bounding box of the shape after applying `transform`.
    pub fn bounding_box(&self, transform: &Mat3) -> BoundingBox {
        bounding_box_of(&self.vertices, transform)
    }
}

fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

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

use thiserror::Error;

/// Errors produced while building a `Shape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A triangle referenced a vertex outside of the vertex loop.
    #[error("triangle {triangle} references vertex {index}, but the shape has {len} vertices")]
    VertexIndexOutOfRange {
        /// Position of the offending triangle in the triangulation.
        triangle: usize,
        /// The out-of-range vertex index.
        index: usize,
        /// Number of vertices in the vertex loop.
        len: usize,
    },

    /// A triangle has zero area, so at least one of its edges yields no normal.
    #[error("triangle {triangle} is degenerate")]
    DegenerateTriangle {
        /// Position of the offending triangle in the triangulation.
        triangle: usize,
    },

    /// The triangulation contains no triangles.
    #[error("shape has no triangles")]
    EmptyTriangulation,
}

/// Shorthand for `Result<T, trisat::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

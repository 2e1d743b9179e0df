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

// Line, ray and segment intersection queries. These are independent of the
// per-tick collision pipeline and are meant for hit-testing such as picking.

use crate::geom::Vec2;

/// Parameters of the intersection point of two infinite lines.
///
/// For lines through `(p1, p2)` and `(p3, p4)`, the intersection is
/// `p1 + t * (p2 - p1)`, and also `p3 - u * (p4 - p3)`. Note the sign of `u`:
/// points between `p3` and `p4` have `u` in `[-1, 0]`.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct LineParams {
    /// Position along the first line.
    pub t: f64,
    /// Position along the second line, negated.
    pub u: f64,
}

/// Solves for the intersection of the line through `p1` and `p2` with the line
/// through `p3` and `p4`.
///
/// Returns `None` if the lines are parallel or coincident. The determinant is
/// compared against exactly zero, so nearly parallel lines produce very large
/// parameters rather than `None`.
pub fn line_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<LineParams> {
    let den = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if den == 0.0 {
        return None;
    }
    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / den;
    let u = ((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x)) / den;
    Some(LineParams { t, u })
}

/// Result of a `raycast` against a segment whose supporting line is not
/// parallel to the ray.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct RayHit {
    /// Whether the ray hits the segment.
    pub hit: bool,
    /// Intersection point of the ray's line with the segment's line.
    ///
    /// This is computed even when `hit` is `false`.
    pub location: Vec2,
    /// Distance along the ray in units of `direction`.
    pub t: f64,
    /// Position along the segment, in `[-1, 0]` on a hit (see `LineParams`).
    pub u: f64,
}

/// Casts a ray from `origin` along `direction` against the segment from
/// `seg_p1` to `seg_p2`.
///
/// The ray hits if its line crosses the segment (`-1 <= u <= 0`) and, unless
/// `allow_backward` is set, if the crossing is not behind the origin
/// (`t >= 0`). Returns `None` if the ray and the segment are parallel, which
/// callers should treat as a miss.
pub fn raycast(
    origin: Vec2,
    direction: Vec2,
    seg_p1: Vec2,
    seg_p2: Vec2,
    allow_backward: bool,
) -> Option<RayHit> {
    let LineParams { t, u } = line_intersection(origin, origin + direction, seg_p1, seg_p2)?;
    let hit = u <= 0.0 && u >= -1.0 && (allow_backward || t >= 0.0);
    Some(RayHit {
        hit,
        location: origin + direction * t,
        t,
        u,
    })
}

/// Result of a `segment_segment_intersection` between non-parallel segments.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct SegmentHit {
    /// Whether the two segments intersect.
    pub intersecting: bool,
    /// Intersection point, or `None` if the segments do not intersect.
    pub location: Option<Vec2>,
    /// Position along the first segment, in `[0, 1]` on an intersection.
    pub t: f64,
    /// Position along the second segment, in `[-1, 0]` on an intersection.
    pub u: f64,
}

/// Tests the segment from `p1` to `p2` against the segment from `p3` to `p4`.
///
/// Returns `None` if the segments are parallel, which callers should treat as
/// no intersection.
pub fn segment_segment_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<SegmentHit> {
    let LineParams { t, u } = line_intersection(p1, p2, p3, p4)?;
    let intersecting = u <= 0.0 && u >= -1.0 && t <= 1.0 && t >= 0.0;
    let location = if intersecting {
        Some(p1 + (p2 - p1) * t)
    } else {
        None
    };
    Some(SegmentHit {
        intersecting,
        location,
        t,
        u,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::v2;

    #[test]
    fn test_line_intersection() {
        let params = line_intersection(v2(0.0, 0.0), v2(1.0, 0.0), v2(5.0, -5.0), v2(5.0, 5.0)).unwrap();
        assert_eq!(params, LineParams { t: 5.0, u: -0.5 });
    }

    #[test]
    fn test_parallel_lines() {
        assert_eq!(line_intersection(v2(0.0, 0.0), v2(1.0, 0.0), v2(0.0, 1.0), v2(2.0, 1.0)), None);
        // coincident
        assert_eq!(line_intersection(v2(0.0, 0.0), v2(1.0, 1.0), v2(2.0, 2.0), v2(3.0, 3.0)), None);
        // degenerate first line
        assert_eq!(line_intersection(v2(1.0, 1.0), v2(1.0, 1.0), v2(0.0, 0.0), v2(0.0, 3.0)), None);
    }

    #[test]
    fn test_u_convention() {
        let p3 = v2(5.0, -5.0);
        let p4 = v2(5.0, 5.0);
        let params = line_intersection(v2(0.0, 2.5), v2(1.0, 2.5), p3, p4).unwrap();
        assert_eq!(params.u, -0.75);
        assert_eq!(p3 - (p4 - p3) * params.u, v2(5.0, 2.5));
    }

    #[test]
    fn test_raycast_hit() {
        let hit = raycast(v2(0.0, 0.0), v2(1.0, 0.0), v2(5.0, -5.0), v2(5.0, 5.0), false).unwrap();
        assert!(hit.hit);
        assert_eq!(hit.t, 5.0);
        assert_eq!(hit.location, v2(5.0, 0.0));
    }

    #[test]
    fn test_raycast_backward() {
        let origin = v2(10.0, 0.0);
        let dir = v2(1.0, 0.0);
        let forward_only = raycast(origin, dir, v2(5.0, -5.0), v2(5.0, 5.0), false).unwrap();
        assert!(!forward_only.hit);
        assert_eq!(forward_only.t, -5.0);
        let backward = raycast(origin, dir, v2(5.0, -5.0), v2(5.0, 5.0), true).unwrap();
        assert!(backward.hit);
        assert_eq!(backward.location, v2(5.0, 0.0));
    }

    #[test]
    fn test_raycast_miss_past_segment_end() {
        let miss = raycast(v2(0.0, 6.0), v2(1.0, 0.0), v2(5.0, -5.0), v2(5.0, 5.0), true).unwrap();
        assert!(!miss.hit);
        assert!(miss.u < -1.0);
    }

    #[test]
    fn test_raycast_parallel() {
        assert_eq!(raycast(v2(0.0, 0.0), v2(0.0, 1.0), v2(5.0, -5.0), v2(5.0, 5.0), true), None);
    }

    #[test]
    fn test_segment_segment() {
        let hit = segment_segment_intersection(v2(0.0, 0.0), v2(10.0, 0.0), v2(5.0, -5.0), v2(5.0, 5.0)).unwrap();
        assert!(hit.intersecting);
        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.location, Some(v2(5.0, 0.0)));

        // the lines cross, but beyond the end of the first segment
        let miss = segment_segment_intersection(v2(0.0, 0.0), v2(4.0, 0.0), v2(5.0, -5.0), v2(5.0, 5.0)).unwrap();
        assert!(!miss.intersecting);
        assert_eq!(miss.location, None);
        assert!(miss.t > 1.0);

        assert_eq!(segment_segment_intersection(v2(0.0, 0.0), v2(4.0, 0.0), v2(0.0, 1.0), v2(4.0, 1.0)), None);
    }
}

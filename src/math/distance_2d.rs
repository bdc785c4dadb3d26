use super::polygon_2d::{edges, EdgeIndex};
use super::{Point2, DEGENERATE_EPSILON};
use crate::error::{GeometryError, Result};

/// Projection of a query point onto a closed segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// The closest point on the segment.
    pub point: Point2,
    /// Clamped parameter in `[0, 1]`; `point = start + parameter * (end - start)`.
    pub parameter: f64,
    /// Squared distance from the query point to `point`.
    pub distance_squared: f64,
}

/// Projection of a query point onto a polygon perimeter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerimeterProjection {
    /// The closest point on the perimeter.
    pub point: Point2,
    /// The edge the point lies on.
    pub edge: EdgeIndex,
    /// Clamped parameter along `edge`.
    pub parameter: f64,
    /// Squared distance from the query point to `point`.
    pub distance_squared: f64,
}

impl PerimeterProjection {
    /// Returns the Euclidean distance from the query point to the result.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance_squared.sqrt()
    }
}

/// Projects `p` onto the closed segment from `a` to `b`.
///
/// Segments whose squared length is at or below `epsilon` collapse to `a`.
#[must_use]
pub fn project_onto_segment(
    a: &Point2,
    b: &Point2,
    p: &Point2,
    epsilon: f64,
) -> SegmentProjection {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq <= epsilon {
        return SegmentProjection {
            point: *a,
            parameter: 0.0,
            distance_squared: nalgebra::distance_squared(a, p),
        };
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let point = a + ab * t;

    SegmentProjection {
        point,
        parameter: t,
        distance_squared: nalgebra::distance_squared(&point, p),
    }
}

/// Returns the point on the closed segment `a`-`b` nearest to `p`.
#[must_use]
pub fn closest_point_on_segment(a: &Point2, b: &Point2, p: &Point2) -> Point2 {
    project_onto_segment(a, b, p, DEGENERATE_EPSILON).point
}

/// Returns the minimum distance from `p` to the line segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    project_onto_segment(a, b, p, DEGENERATE_EPSILON)
        .distance_squared
        .sqrt()
}

/// Scans the edge cycle of `points` for the projection nearest to `p`.
///
/// Only a strictly smaller squared distance replaces the current best, so the
/// earliest edge in enumeration order wins ties and a NaN candidate (an edge
/// whose arithmetic overflowed) never displaces a finite one. If no candidate
/// compares below infinity, the first edge's projection is returned. Returns
/// `None` for an empty vertex list.
pub(crate) fn nearest_on_cycle(
    points: &[Point2],
    p: &Point2,
    epsilon: f64,
) -> Option<PerimeterProjection> {
    let mut first: Option<PerimeterProjection> = None;
    let mut best: Option<PerimeterProjection> = None;
    let mut best_d2 = f64::INFINITY;
    for (edge, a, b) in edges(points) {
        let candidate = project_onto_segment(&a, &b, p, epsilon);
        let projection = PerimeterProjection {
            point: candidate.point,
            edge,
            parameter: candidate.parameter,
            distance_squared: candidate.distance_squared,
        };
        if first.is_none() {
            first = Some(projection);
        }
        if candidate.distance_squared < best_d2 {
            best_d2 = candidate.distance_squared;
            best = Some(projection);
        }
    }
    best.or(first)
}

/// Projects `p` onto the perimeter of the closed polygon `points`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidPolygon` if `points` is empty.
pub fn project_onto_perimeter(
    points: &[Point2],
    p: &Point2,
    epsilon: f64,
) -> Result<PerimeterProjection> {
    nearest_on_cycle(points, p, epsilon).ok_or_else(|| GeometryError::InvalidPolygon.into())
}

/// Returns the point on the perimeter of the closed polygon `points` nearest to `p`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidPolygon` if `points` is empty.
pub fn closest_point_on_perimeter(points: &[Point2], p: &Point2) -> Result<Point2> {
    project_onto_perimeter(points, p, DEGENERATE_EPSILON).map(|r| r.point)
}

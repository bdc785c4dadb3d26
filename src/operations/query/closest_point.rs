use crate::error::Result;
use crate::math::distance_2d::{
    project_onto_perimeter, project_onto_segment, PerimeterProjection, SegmentProjection,
};
use crate::math::{Point2, DEGENERATE_EPSILON};

/// Finds the closest point on a closed segment to a given point.
pub struct ClosestPointOnSegment {
    start: Point2,
    end: Point2,
    point: Point2,
    epsilon: f64,
}

impl ClosestPointOnSegment {
    /// Creates a new `ClosestPointOnSegment` query.
    #[must_use]
    pub fn new(start: Point2, end: Point2, point: Point2) -> Self {
        Self {
            start,
            end,
            point,
            epsilon: DEGENERATE_EPSILON,
        }
    }

    /// Overrides the squared length below which the segment collapses to its start.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Executes the query.
    ///
    /// A degenerate segment yields its start point rather than an error.
    #[must_use]
    pub fn execute(&self) -> SegmentProjection {
        project_onto_segment(&self.start, &self.end, &self.point, self.epsilon)
    }
}

/// Finds the closest point on a polygon perimeter to a given point.
///
/// The vertex slice is read as a closed cycle; it does not need to be a
/// validated [`Polygon`](crate::geometry::Polygon).
pub struct ClosestPointOnPerimeter<'a> {
    vertices: &'a [Point2],
    point: Point2,
    epsilon: f64,
}

impl<'a> ClosestPointOnPerimeter<'a> {
    /// Creates a new `ClosestPointOnPerimeter` query.
    #[must_use]
    pub fn new(vertices: &'a [Point2], point: Point2) -> Self {
        Self {
            vertices,
            point,
            epsilon: DEGENERATE_EPSILON,
        }
    }

    /// Overrides the squared length below which an edge collapses to its start.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Executes the query, returning the closest point and the edge it lies on.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` if the vertex slice is empty.
    pub fn execute(&self) -> Result<PerimeterProjection> {
        project_onto_perimeter(self.vertices, &self.point, self.epsilon)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::EdgeIndex;
    use approx::assert_abs_diff_eq;

    #[test]
    fn segment_query_reports_parameter() {
        let r = ClosestPointOnSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(2.5, 4.0),
        )
        .execute();
        assert_abs_diff_eq!(r.point, Point2::new(2.5, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(r.parameter, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(r.distance_squared, 16.0, epsilon = 1e-12);
    }

    #[test]
    fn segment_query_custom_epsilon_collapses_short_segment() {
        let start = Point2::new(1.0, 1.0);
        let r = ClosestPointOnSegment::new(start, Point2::new(1.5, 1.0), Point2::new(1.4, 3.0))
            .with_epsilon(1.0)
            .execute();
        assert_eq!(r.point, start);
    }

    #[test]
    fn perimeter_query_on_triangle_base() {
        let tri = [
            Point2::new(40.0, 160.0),
            Point2::new(120.0, 40.0),
            Point2::new(200.0, 160.0),
        ];
        let r = ClosestPointOnPerimeter::new(&tri, Point2::new(120.0, 160.0))
            .execute()
            .unwrap();
        assert_abs_diff_eq!(r.point, Point2::new(120.0, 160.0), epsilon = 1e-10);
        assert_eq!(r.edge, EdgeIndex { start: 2, end: 0 });
    }

    #[test]
    fn perimeter_query_empty_fails() {
        assert!(ClosestPointOnPerimeter::new(&[], Point2::origin())
            .execute()
            .is_err());
    }
}

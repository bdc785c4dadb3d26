use crate::error::{GeometryError, Result};
use crate::math::distance_2d::{nearest_on_cycle, PerimeterProjection};
use crate::math::polygon_2d::{self, EdgeIndex};
use crate::math::Point2;

/// A closed polygon given by an ordered, non-empty vertex cycle.
///
/// The edge from the last vertex back to the first is implicit. One vertex
/// degenerates to a point and two vertices to a double-backed segment; both
/// are valid perimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` if `vertices` is empty, or
    /// `GeometryError::NonFiniteCoordinate` if any coordinate is NaN or infinite.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.is_empty() {
            return Err(GeometryError::InvalidPolygon.into());
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(GeometryError::NonFiniteCoordinate { index }.into());
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// See [`Polygon::new`].
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Returns the vertices in cycle order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn first_vertex(&self) -> Point2 {
        self.vertices[0]
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the edges of the cycle, closing edge first.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, Point2, Point2)> + '_ {
        polygon_2d::edges(&self.vertices)
    }

    /// Projects `p` onto the perimeter.
    ///
    /// `epsilon` is the squared edge length below which an edge collapses to
    /// its start vertex.
    #[must_use]
    pub fn closest_point(&self, p: &Point2, epsilon: f64) -> PerimeterProjection {
        // Non-empty by construction, so the scan always yields a result.
        nearest_on_cycle(&self.vertices, p, epsilon).unwrap_or_else(|| PerimeterProjection {
            point: self.first_vertex(),
            edge: EdgeIndex { start: 0, end: 0 },
            parameter: 0.0,
            distance_squared: nalgebra::distance_squared(&self.first_vertex(), p),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolysnapError;
    use crate::math::DEGENERATE_EPSILON;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_polygon_is_rejected() {
        let err = Polygon::new(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            PolysnapError::Geometry(GeometryError::InvalidPolygon)
        ));
    }

    #[test]
    fn non_finite_vertex_is_rejected() {
        let err = Polygon::from_coords(&[(0.0, 0.0), (f64::NAN, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            PolysnapError::Geometry(GeometryError::NonFiniteCoordinate { index: 1 })
        ));
    }

    #[test]
    fn single_vertex_is_valid() {
        let poly = Polygon::from_coords(&[(50.0, 50.0)]).unwrap();
        assert_eq!(poly.len(), 1);
        assert_eq!(poly.edges().count(), 1);
        let r = poly.closest_point(&Point2::new(-10.0, 3.0), DEGENERATE_EPSILON);
        assert_eq!(r.point, Point2::new(50.0, 50.0));
    }

    #[test]
    fn closest_point_on_square() {
        let poly =
            Polygon::from_coords(&[(40.0, 40.0), (200.0, 40.0), (200.0, 200.0), (40.0, 200.0)])
                .unwrap();
        let r = poly.closest_point(&Point2::new(120.0, 0.0), DEGENERATE_EPSILON);
        assert_abs_diff_eq!(r.point, Point2::new(120.0, 40.0), epsilon = 1e-10);
        assert_eq!(r.edge, EdgeIndex { start: 0, end: 1 });
        assert_abs_diff_eq!(r.parameter, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn first_vertex_is_cycle_start() {
        let poly = Polygon::from_coords(&[(3.0, 4.0), (5.0, 6.0)]).unwrap();
        assert_eq!(poly.first_vertex(), Point2::new(3.0, 4.0));
        assert!(!poly.is_empty());
    }
}

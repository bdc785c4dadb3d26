use crate::geometry::Polygon;

use super::Polyline;

/// Tessellates a polygon perimeter into a closed polyline.
pub struct TessellateOutline<'a> {
    polygon: &'a Polygon,
}

impl<'a> TessellateOutline<'a> {
    /// Creates a new `TessellateOutline` operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the tessellation.
    ///
    /// The first vertex is repeated at the end so consumers can stroke the
    /// result as an open path.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let vertices = self.polygon.vertices();
        let mut points = Vec::with_capacity(vertices.len() + 1);
        points.extend_from_slice(vertices);
        points.push(self.polygon.first_vertex());
        Polyline { points }
    }
}

use std::f64::consts::TAU;

use crate::math::Point2;

use super::{MarkerStyle, TriangleMesh};

/// Tessellates a marker into a filled disc (triangle fan).
pub struct TessellateMarker {
    center: Point2,
    style: MarkerStyle,
}

impl TessellateMarker {
    /// Creates a new `TessellateMarker` operation.
    #[must_use]
    pub fn new(center: Point2, style: MarkerStyle) -> Self {
        Self { center, style }
    }

    /// Executes the tessellation.
    ///
    /// Vertex 0 is the center, followed by `segments` rim points in
    /// counter-clockwise order. Triangle `k` joins the center with rim
    /// points `k` and `k + 1`, wrapping at the end.
    #[must_use]
    pub fn execute(&self) -> TriangleMesh {
        let n = self.style.segments();
        let r = self.style.radius();

        let mut vertices = Vec::with_capacity(n as usize + 1);
        vertices.push(self.center);
        for k in 0..n {
            let angle = TAU * f64::from(k) / f64::from(n);
            vertices.push(Point2::new(
                self.center.x + r * angle.cos(),
                self.center.y + r * angle.sin(),
            ));
        }

        let indices = (1..=n).map(|k| [0, k, k % n + 1]).collect();

        TriangleMesh { vertices, indices }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fan_has_center_and_rim() {
        let style = MarkerStyle::new(2.0, 6).unwrap();
        let mesh = TessellateMarker::new(Point2::new(10.0, 10.0), style).execute();
        assert_eq!(mesh.vertices.len(), 7);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.vertices[0], Point2::new(10.0, 10.0));
        for v in &mesh.vertices[1..] {
            let d = (v - mesh.vertices[0]).norm();
            assert!((d - 2.0).abs() < 1e-12, "d={d}");
        }
    }

    #[test]
    fn last_triangle_wraps_to_first_rim_point() {
        let mesh = TessellateMarker::new(Point2::origin(), MarkerStyle::new(1.0, 4).unwrap())
            .execute();
        assert_eq!(mesh.indices[0], [0, 1, 2]);
        assert_eq!(mesh.indices[3], [0, 4, 1]);
    }
}

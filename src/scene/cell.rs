use std::sync::Arc;

use crate::geometry::Polygon;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a cell in a scene.
    pub struct CellId;
}

/// A polygon paired with the marker snapped to its perimeter.
#[derive(Debug, Clone)]
pub struct Cell {
    polygon: Arc<Polygon>,
    marker: Point2,
}

impl Cell {
    /// Creates a cell with its marker on the polygon's first vertex.
    #[must_use]
    pub fn new(polygon: Arc<Polygon>) -> Self {
        let marker = polygon.first_vertex();
        Self { polygon, marker }
    }

    /// Returns the polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Returns the current marker position.
    #[must_use]
    pub fn marker(&self) -> Point2 {
        self.marker
    }

    /// Returns a cell sharing this polygon with the marker moved to `marker`.
    #[must_use]
    pub(crate) fn with_marker(&self, marker: Point2) -> Self {
        Self {
            polygon: Arc::clone(&self.polygon),
            marker,
        }
    }
}

use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::Vector2;

/// Translates a polygon by a displacement vector.
pub struct Translate {
    displacement: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            displacement: Vector2::new(dx, dy),
        }
    }

    /// Returns the displacement applied by this operation.
    #[must_use]
    pub fn displacement(&self) -> Vector2 {
        self.displacement
    }

    /// Returns a translated copy of `polygon`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` if the displacement is
    /// non-finite or pushes a vertex out of the finite range.
    pub fn apply(&self, polygon: &Polygon) -> Result<Polygon> {
        Polygon::new(
            polygon
                .vertices()
                .iter()
                .map(|v| v + self.displacement)
                .collect(),
        )
    }
}

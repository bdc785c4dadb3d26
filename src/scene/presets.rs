use super::{Scene, SceneBuilder};
use crate::error::Result;
use crate::geometry::Polygon;
use crate::operations::transform::Translate;

/// Canvas margin around the grid.
pub const MARGIN: f64 = 40.0;

/// Distance between grid columns and rows.
pub const GRID_SPACING: f64 = 260.0;

const TRIANGLE: [(f64, f64); 3] = [(40.0, 160.0), (120.0, 40.0), (200.0, 160.0)];

const SQUARE: [(f64, f64); 4] = [(40.0, 40.0), (200.0, 40.0), (200.0, 200.0), (40.0, 200.0)];

const NOTCH: [(f64, f64); 5] = [
    (40.0, 40.0),
    (200.0, 40.0),
    (200.0, 200.0),
    (120.0, 120.0),
    (40.0, 200.0),
];

const PENTAGON: [(f64, f64); 5] = [
    (120.0, 40.0),
    (200.0, 100.0),
    (170.0, 200.0),
    (70.0, 200.0),
    (40.0, 100.0),
];

/// Returns the four demo shapes in display order, translated into place on
/// a 2x2 grid of a 560x560 canvas.
///
/// Order: triangle (top left), square (top right), concave notch (bottom
/// left), pentagon (bottom right).
///
/// # Errors
///
/// Never fails for the built-in coordinates; errors are propagated from
/// polygon construction.
pub fn demo_polygons() -> Result<Vec<Polygon>> {
    let layout: [(&[(f64, f64)], f64, f64); 4] = [
        (&TRIANGLE, MARGIN, MARGIN),
        (&SQUARE, MARGIN + GRID_SPACING, MARGIN),
        (&NOTCH, MARGIN, MARGIN + GRID_SPACING),
        (&PENTAGON, MARGIN + GRID_SPACING, MARGIN + GRID_SPACING),
    ];
    layout
        .into_iter()
        .map(|(coords, dx, dy)| Translate::new(dx, dy).apply(&Polygon::from_coords(coords)?))
        .collect()
}

/// Builds the demo scene with the default snap configuration.
///
/// # Errors
///
/// See [`demo_polygons`].
pub fn demo_scene() -> Result<Scene> {
    let mut builder = SceneBuilder::new();
    for polygon in demo_polygons()? {
        builder.add_polygon(polygon);
    }
    Ok(builder.build())
}

mod marker_style;
mod stroke_style;
mod tessellate_marker;
mod tessellate_outline;

pub use marker_style::{MarkerStyle, MAX_MARKER_SEGMENTS};
pub use stroke_style::StrokeStyle;
pub use tessellate_marker::TessellateMarker;
pub use tessellate_outline::TessellateOutline;

use crate::math::Point2;
use crate::scene::{CellId, Scene};

/// A polyline approximation of a perimeter.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

/// A 2D triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

/// Styles applied to every cell of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStyle {
    /// Outline stroke.
    pub stroke: StrokeStyle,
    /// Marker disc.
    pub marker: MarkerStyle,
}

/// Draw data for one cell.
#[derive(Debug, Clone)]
pub struct CellFrame {
    /// The cell this frame was built from.
    pub id: CellId,
    /// Closed perimeter path.
    pub outline: Polyline,
    /// Width to stroke `outline` with.
    pub stroke_width: f64,
    /// Filled disc centered on the cell's marker.
    pub marker: TriangleMesh,
}

/// Tessellates every cell of `scene` in display order, producing the
/// draw-ready geometry a renderer needs for one redraw.
#[must_use]
pub fn frame(scene: &Scene, style: FrameStyle) -> Vec<CellFrame> {
    scene
        .cells()
        .map(|(id, cell)| CellFrame {
            id,
            outline: TessellateOutline::new(cell.polygon()).execute(),
            stroke_width: style.stroke.width(),
            marker: TessellateMarker::new(cell.marker(), style.marker).execute(),
        })
        .collect()
}

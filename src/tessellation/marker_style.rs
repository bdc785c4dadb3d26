use crate::error::{Result, TessellationError};

/// Upper bound on rim points for a marker disc.
pub const MAX_MARKER_SEGMENTS: u32 = 1024;

/// Style parameters for marker disc tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    radius: f64,
    segments: u32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 5.0,
            segments: 24,
        }
    }
}

impl MarkerStyle {
    /// Creates a new marker style.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not positive and finite, or if
    /// `segments` is outside `3..=MAX_MARKER_SEGMENTS`.
    pub fn new(radius: f64, segments: u32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(TessellationError::InvalidParameters(
                "marker radius must be positive".to_owned(),
            )
            .into());
        }
        if !(3..=MAX_MARKER_SEGMENTS).contains(&segments) {
            return Err(TessellationError::InvalidParameters(format!(
                "marker segments must be in 3..={MAX_MARKER_SEGMENTS}, got {segments}"
            ))
            .into());
        }
        Ok(Self { radius, segments })
    }

    /// Returns the disc radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the number of rim points.
    #[must_use]
    pub fn segments(&self) -> u32 {
        self.segments
    }
}

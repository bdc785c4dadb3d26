use crate::error::{Result, TessellationError};

/// Style parameters for polygon outline strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: 1.5 }
    }
}

impl StrokeStyle {
    /// Creates a new stroke style.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive and finite.
    pub fn new(width: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(TessellationError::InvalidParameters(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self { width })
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_width() {
        assert!((StrokeStyle::default().width() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_valid_width() {
        let style = StrokeStyle::new(3.0).unwrap();
        assert!((style.width() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_zero_width_fails() {
        assert!(StrokeStyle::new(0.0).is_err());
    }

    #[test]
    fn new_with_infinite_width_fails() {
        assert!(StrokeStyle::new(f64::INFINITY).is_err());
    }
}

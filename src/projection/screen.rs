//! Viewport and pixel types for projected output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel extents of an output viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl ScreenSize {
    /// Creates a new screen size
    pub fn new(width: f64, height: f64) -> Self {
        ScreenSize { width, height }
    }

    /// Returns the drawable area left after removing `border` from every side
    ///
    /// The result may be zero or negative when the border consumes the
    /// viewport; callers decide what that means.
    pub fn inset(&self, border: f64) -> ScreenSize {
        ScreenSize {
            width: self.width - 2.0 * border,
            height: self.height - 2.0 * border,
        }
    }

    /// True when both extents are strictly positive
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl From<(f64, f64)> for ScreenSize {
    fn from((width, height): (f64, f64)) -> Self {
        ScreenSize::new(width, height)
    }
}

/// A projected position in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Horizontal pixel coordinate
    pub x: f64,
    /// Vertical pixel coordinate
    pub y: f64,
}

impl ScreenPoint {
    /// Creates a new screen point
    pub fn new(x: f64, y: f64) -> Self {
        ScreenPoint { x, y }
    }
}

impl From<ScreenPoint> for (f64, f64) {
    fn from(point: ScreenPoint) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let size = ScreenSize::new(800.0, 400.0);
        assert_eq!(size.inset(10.0), ScreenSize::new(780.0, 380.0));
        assert_eq!(size.inset(0.0), size);
    }

    #[test]
    fn test_degenerate_inset() {
        let size = ScreenSize::new(30.0, 20.0);
        let inner = size.inset(10.0);
        assert_eq!(inner, ScreenSize::new(10.0, 0.0));
        assert!(!inner.is_drawable());
        assert!(!size.inset(20.0).is_drawable());
        assert!(size.inset(5.0).is_drawable());
    }

    #[test]
    fn test_point_display() {
        assert_eq!(ScreenPoint::new(400.0, 200.5).to_string(), "400 200.5");
    }
}

//! Geoscreen: geographic coordinate conversions and screen projection
//!
//! This crate converts between 3D vectors on the unit sphere and
//! latitude/longitude pairs, between radians and degrees, and projects
//! geographic coordinates onto a bordered 2D viewport using an
//! equirectangular projection.
//!
//! ```rust
//! use geoscreen::{Cartesian3, Equirectangular, ScreenSize};
//!
//! let coord = Cartesian3::new(0.0, 1.0, 0.0).to_geographic().unwrap();
//! assert_eq!(coord.latitude, 0.0);
//! assert_eq!(coord.longitude, 0.0);
//!
//! let point = Equirectangular::new()
//!     .with_border(0.0)
//!     .project(coord, ScreenSize::new(800.0, 400.0));
//! assert_eq!((point.x, point.y), (400.0, 200.0));
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod projection;

// Re-export commonly used types
pub use coordinates::cartesian::{vector_to_coordinates, Cartesian3};
pub use coordinates::geographic::{degrees_to_radians, radians_to_degrees, GeoCoordinate};
pub use projection::equirectangular::{forward_equirectangular, Equirectangular, Orientation};
pub use projection::screen::{ScreenPoint, ScreenSize};

/// Main error type for the geoscreen library
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Input for which the conversion is mathematically undefined
    #[error("Domain error: {0}")]
    Domain(String),
}

/// Result type for geoscreen operations
pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let err = GeoError::Domain("zero-length vector".to_string());
        assert_eq!(err.to_string(), "Domain error: zero-length vector");
    }

    #[test]
    fn test_vector_to_screen_pipeline() {
        let coord = Cartesian3::new(0.0, 5.0, 0.0).to_geographic().unwrap();
        let point = forward_equirectangular(coord, ScreenSize::new(100.0, 100.0), 0.0);
        assert_eq!(point, ScreenPoint::new(50.0, 50.0));
    }
}

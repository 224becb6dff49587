//! # Geographic Coordinate Module
//!
//! A `GeoCoordinate` is a (latitude, longitude) pair. The unit of both
//! components is whatever the producing operation says: vectors convert to
//! radians, and `to_degrees` / `to_radians` switch between the two.
//!
//! Conversions keep the operation order `value / 180 * pi` and
//! `value / pi * 180`, so that e.g. `(pi, pi/2)` maps to exactly
//! `(180, 90)`.
//!
//! ```rust
//! use geoscreen::coordinates::geographic::{radians_to_degrees, GeoCoordinate};
//! use std::f64::consts::PI;
//!
//! let degrees = radians_to_degrees(GeoCoordinate::new(PI, PI / 2.0));
//! assert_eq!(degrees, GeoCoordinate::new(180.0, 90.0));
//! ```

use crate::constants::HALF_CIRCLE_DEG;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A (latitude, longitude) pair
///
/// Latitude is positive north of the equator and longitude positive east
/// of the prime meridian. Ranges are not enforced on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a new coordinate pair
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    /// Interprets this pair as radians and returns it in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geoscreen::GeoCoordinate;
    /// use std::f64::consts::PI;
    ///
    /// let coord = GeoCoordinate::new(-PI / 2.0, PI);
    /// assert_eq!(coord.to_degrees(), GeoCoordinate::new(-90.0, 180.0));
    /// ```
    pub fn to_degrees(&self) -> GeoCoordinate {
        GeoCoordinate {
            latitude: self.latitude / PI * HALF_CIRCLE_DEG,
            longitude: self.longitude / PI * HALF_CIRCLE_DEG,
        }
    }

    /// Interprets this pair as degrees and returns it in radians
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geoscreen::GeoCoordinate;
    /// use std::f64::consts::PI;
    ///
    /// let coord = GeoCoordinate::new(90.0, -180.0);
    /// assert_eq!(coord.to_radians(), GeoCoordinate::new(PI / 2.0, -PI));
    /// ```
    pub fn to_radians(&self) -> GeoCoordinate {
        GeoCoordinate {
            latitude: self.latitude / HALF_CIRCLE_DEG * PI,
            longitude: self.longitude / HALF_CIRCLE_DEG * PI,
        }
    }

    /// Returns the pair as a `(latitude, longitude)` tuple
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        GeoCoordinate::new(latitude, longitude)
    }
}

impl From<GeoCoordinate> for (f64, f64) {
    fn from(coord: GeoCoordinate) -> Self {
        coord.as_tuple()
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.latitude, self.longitude)
    }
}

/// Converts a (latitude, longitude) pair from radians to degrees
pub fn radians_to_degrees(coordinates: impl Into<GeoCoordinate>) -> GeoCoordinate {
    coordinates.into().to_degrees()
}

/// Converts a (latitude, longitude) pair from degrees to radians
pub fn degrees_to_radians(coordinates: impl Into<GeoCoordinate>) -> GeoCoordinate {
    coordinates.into().to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_exact_reference_values() {
        assert_eq!(
            radians_to_degrees((PI, FRAC_PI_2)),
            GeoCoordinate::new(180.0, 90.0)
        );
        assert_eq!(
            degrees_to_radians((180.0, 90.0)),
            GeoCoordinate::new(PI, FRAC_PI_2)
        );
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(45.0, FRAC_PI_4)]
    #[case(-90.0, -FRAC_PI_2)]
    #[case(360.0, 2.0 * PI)]
    fn test_components_convert_independently(#[case] degrees: f64, #[case] radians: f64) {
        let coord = degrees_to_radians((degrees, -degrees));
        assert_abs_diff_eq!(coord.latitude, radians, epsilon = 1e-15);
        assert_abs_diff_eq!(coord.longitude, -radians, epsilon = 1e-15);
    }

    #[test]
    fn test_round_trip_conversion_precision() {
        let cases = vec![
            (37.5, -122.25),
            (-89.999, 179.999),
            (1e-10, -1e-10),
            (720.0, -1800.0),
        ];

        for (lat, lon) in cases {
            let back = radians_to_degrees(degrees_to_radians((lat, lon)));
            assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-9);
            assert_abs_diff_eq!(back.longitude, lon, epsilon = 1e-9);

            let back = degrees_to_radians(radians_to_degrees((lat, lon)));
            assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-9);
            assert_abs_diff_eq!(back.longitude, lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_out_of_range_inputs_are_not_clamped() {
        let coord = radians_to_degrees((3.0 * PI, -4.0 * PI));
        assert_abs_diff_eq!(coord.latitude, 540.0, epsilon = 1e-12);
        assert_abs_diff_eq!(coord.longitude, -720.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tuple_conversions() {
        let coord: GeoCoordinate = (0.25, -0.5).into();
        assert_eq!(coord.latitude, 0.25);
        assert_eq!(coord.longitude, -0.5);

        let tuple: (f64, f64) = coord.into();
        assert_eq!(tuple, (0.25, -0.5));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&GeoCoordinate::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":-2.0}"#);
    }
}

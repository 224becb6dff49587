//! # Cartesian Coordinate System Module
//!
//! This module provides the 3D vector representation that geographic
//! coordinates are derived from.
//!
//! ## Coordinate System Convention
//!
//! - **Y-axis**: Points toward the prime meridian on the equator (lat = 0, lon = 0)
//! - **X-axis**: Points toward longitude -90° (west) on the equator
//! - **Z-axis**: Points toward the north pole (lat = +90°)
//!
//! The equator lies in the x-y plane. Positive longitudes are east of the
//! prime meridian and positive latitudes are north of the equator.
//!
//! Vectors do not need to be unit length; conversion normalizes first.
//!
//! ## Examples
//!
//! ```rust
//! use geoscreen::coordinates::cartesian::Cartesian3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let north_pole = Cartesian3::new(0.0, 0.0, 42.0).to_geographic().unwrap();
//! assert!((north_pole.latitude - FRAC_PI_2).abs() < 1e-15);
//! ```

use crate::coordinates::geographic::GeoCoordinate;
use crate::{GeoError, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Three-dimensional vector in the geographic frame described above
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component (toward longitude -90°)
    pub x: f64,
    /// Y-component (toward the prime meridian)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Creates the unit vector pointing at a geographic coordinate
    ///
    /// # Arguments
    ///
    /// * `coord` - Latitude and longitude in radians
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = -cos(lat) * sin(lon)`
    /// - `y = cos(lat) * cos(lon)`
    /// - `z = sin(lat)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geoscreen::{Cartesian3, GeoCoordinate};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // 90° east lies on the negative x-axis
    /// let east = Cartesian3::from_geographic(GeoCoordinate::new(0.0, FRAC_PI_2));
    /// assert!((east.x + 1.0).abs() < 1e-15);
    /// assert!(east.y.abs() < 1e-15);
    /// assert_eq!(east.z, 0.0);
    /// ```
    pub fn from_geographic(coord: GeoCoordinate) -> Self {
        let cos_lat = coord.latitude.cos();
        Cartesian3 {
            x: -cos_lat * coord.longitude.sin(),
            y: cos_lat * coord.longitude.cos(),
            z: coord.latitude.sin(),
        }
    }

    /// Converts to a geographic coordinate in radians
    ///
    /// The vector is normalized, then `latitude = asin(z)` and
    /// `longitude = atan2(-x, y)`. Latitude falls in [-π/2, π/2] and
    /// longitude in (-π, π].
    ///
    /// # Errors
    ///
    /// Returns `GeoError::Domain` when the magnitude is zero or not finite,
    /// since there is no direction to convert.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geoscreen::Cartesian3;
    ///
    /// let origin = Cartesian3::new(0.0, 1.0, 0.0).to_geographic().unwrap();
    /// assert_eq!((origin.latitude, origin.longitude), (0.0, 0.0));
    ///
    /// assert!(Cartesian3::new(0.0, 0.0, 0.0).to_geographic().is_err());
    /// ```
    pub fn to_geographic(&self) -> Result<GeoCoordinate> {
        let unit = self.normalize().ok_or_else(|| {
            GeoError::Domain(format!(
                "cannot derive a direction from vector ({}, {}, {}) with magnitude {}",
                self.x,
                self.y,
                self.z,
                self.magnitude()
            ))
        })?;

        // Normalization can overshoot 1.0 by an ulp; asin is NaN past it.
        let z = unit.z.clamp(-1.0, 1.0);

        Ok(GeoCoordinate::new(z.asin(), (-unit.x).atan2(unit.y)))
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geoscreen::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` if the magnitude is zero, NaN, or infinite.
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            None
        } else {
            Some(Cartesian3 {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            })
        }
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

impl From<(f64, f64, f64)> for Cartesian3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Cartesian3::new(x, y, z)
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

/// Converts a 3-component vector to (latitude, longitude) in radians
///
/// Free-function form of [`Cartesian3::to_geographic`], accepting anything
/// convertible to a `Cartesian3` such as `(x, y, z)` tuples or nalgebra
/// vectors.
pub fn vector_to_coordinates(vector: impl Into<Cartesian3>) -> Result<GeoCoordinate> {
    vector.into().to_geographic()
}

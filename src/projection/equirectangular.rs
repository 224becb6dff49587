//! # Equirectangular Projection
//!
//! A simple cylindrical projection where meridians and parallels map to
//! evenly spaced straight lines. The whole sphere spans 2π of longitude
//! and π of latitude, so the map is naturally twice as wide as it is tall.
//!
//! The viewport is first shrunk by the border on every side. If the
//! remaining area is narrower than 2:1, the width limits the map and
//! leaves spare vertical space; otherwise the height limits it and the
//! spare space is horizontal. Either way the map is centered.
//!
//! Latitude grows along +y; flip the output if your surface has y pointing
//! down and you want north at the top.
//!
//! ```rust
//! use geoscreen::{forward_equirectangular, GeoCoordinate, ScreenPoint, ScreenSize};
//!
//! let center = forward_equirectangular(
//!     GeoCoordinate::new(0.0, 0.0),
//!     ScreenSize::new(800.0, 400.0),
//!     0.0,
//! );
//! assert_eq!(center, ScreenPoint::new(400.0, 200.0));
//! ```

use crate::constants::{DEFAULT_BORDER, NATURAL_ASPECT};
use crate::coordinates::cartesian::Cartesian3;
use crate::coordinates::geographic::GeoCoordinate;
use crate::projection::screen::{ScreenPoint, ScreenSize};
use crate::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Which viewport dimension bounds the projected map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Drawable area is narrower than 2:1; longitude spans the full width
    WidthLimited,
    /// Drawable area is 2:1 or wider; latitude spans the full height
    HeightLimited,
}

/// Equirectangular projector with a configurable border
///
/// The border is the pixel margin removed from each side of the viewport
/// before projecting. It defaults to 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equirectangular {
    border: f64,
}

impl Equirectangular {
    /// Creates a projector with the default border
    pub fn new() -> Self {
        Self {
            border: DEFAULT_BORDER,
        }
    }

    /// Set a custom border
    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    /// Border in pixels
    pub fn border(&self) -> f64 {
        self.border
    }

    /// Reports which dimension bounds the map for a viewport
    ///
    /// The comparison is strict: a drawable area of exactly 2:1 is
    /// height limited.
    pub fn orientation(&self, screen_size: impl Into<ScreenSize>) -> Orientation {
        let inner = screen_size.into().inset(self.border);
        if inner.width < NATURAL_ASPECT * inner.height {
            Orientation::WidthLimited
        } else {
            Orientation::HeightLimited
        }
    }

    /// Projects a radian coordinate into the bordered viewport
    ///
    /// # Arguments
    ///
    /// * `coordinates` - Latitude and longitude in radians
    /// * `screen_size` - Viewport width and height in pixels
    ///
    /// # Returns
    ///
    /// The pixel position of the coordinate. When the border leaves no
    /// drawable area the formula still runs on the zero or negative
    /// extents and the result degenerates; no error is raised.
    pub fn project(
        &self,
        coordinates: impl Into<GeoCoordinate>,
        screen_size: impl Into<ScreenSize>,
    ) -> ScreenPoint {
        let screen_size = screen_size.into();
        let orientation = self.checked_orientation(screen_size);
        self.project_oriented(coordinates.into(), screen_size, orientation)
    }

    /// Projects a 3D vector by converting it to latitude/longitude first
    ///
    /// # Errors
    ///
    /// Propagates `GeoError::Domain` for vectors without a direction.
    pub fn project_vector(
        &self,
        vector: impl Into<Cartesian3>,
        screen_size: impl Into<ScreenSize>,
    ) -> Result<ScreenPoint> {
        let coord = vector.into().to_geographic()?;
        Ok(self.project(coord, screen_size))
    }

    /// Projects a batch of radian coordinates into the same viewport
    pub fn project_all(
        &self,
        coordinates: &[GeoCoordinate],
        screen_size: impl Into<ScreenSize>,
    ) -> Vec<ScreenPoint> {
        let screen_size = screen_size.into();
        let orientation = self.checked_orientation(screen_size);
        coordinates
            .iter()
            .map(|&coord| self.project_oriented(coord, screen_size, orientation))
            .collect()
    }

    fn checked_orientation(&self, screen_size: ScreenSize) -> Orientation {
        if !screen_size.inset(self.border).is_drawable() {
            warn!(
                "border {} leaves no drawable area in {}x{} viewport",
                self.border, screen_size.width, screen_size.height
            );
        }
        let orientation = self.orientation(screen_size);
        debug!(
            "projecting into {}x{} (border {}) as {:?}",
            screen_size.width, screen_size.height, self.border, orientation
        );
        orientation
    }

    fn project_oriented(
        &self,
        coord: GeoCoordinate,
        screen_size: ScreenSize,
        orientation: Orientation,
    ) -> ScreenPoint {
        let GeoCoordinate {
            latitude: lat,
            longitude: lon,
        } = coord;
        let ScreenSize {
            width: w,
            height: h,
        } = screen_size.inset(self.border);
        let border = self.border;

        match orientation {
            Orientation::WidthLimited => ScreenPoint::new(
                lon / PI * w / 2.0 + w / 2.0 + border,
                lat / PI * w / 2.0 + h / 2.0 + border,
            ),
            Orientation::HeightLimited => ScreenPoint::new(
                lon / FRAC_PI_2 * h / 2.0 + w / 2.0 + border,
                lat / FRAC_PI_2 * h / 2.0 + h / 2.0 + border,
            ),
        }
    }
}

impl Default for Equirectangular {
    fn default() -> Self {
        Self::new()
    }
}

/// Projects a (latitude, longitude) radian pair into a bordered viewport
///
/// Convenience wrapper around [`Equirectangular::project`].
pub fn forward_equirectangular(
    coordinates: impl Into<GeoCoordinate>,
    screen_size: impl Into<ScreenSize>,
    border: f64,
) -> ScreenPoint {
    Equirectangular::new()
        .with_border(border)
        .project(coordinates, screen_size)
}

//! Constants module for coordinate conversions and projection

// Angles
/// Degrees in a half circle (pi radians)
pub const HALF_CIRCLE_DEG: f64 = 180.0;

// Projection
/// Pixel margin kept on each side of the viewport unless configured otherwise
pub const DEFAULT_BORDER: f64 = 10.0;
/// Width to height ratio at which an equirectangular map fills the viewport exactly
pub const NATURAL_ASPECT: f64 = 2.0;

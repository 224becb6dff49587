//! Projection of geographic coordinates onto a 2D viewport

pub mod equirectangular;
pub mod screen;

pub use equirectangular::{forward_equirectangular, Equirectangular, Orientation};
pub use screen::{ScreenPoint, ScreenSize};

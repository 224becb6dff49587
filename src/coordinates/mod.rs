pub mod cartesian;
pub mod geographic;

pub use cartesian::Cartesian3;
pub use geographic::GeoCoordinate;

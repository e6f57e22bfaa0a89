pub mod geo;
pub mod monument;

pub use geo::{CoordinateRegion, CoordinateSpan, GeoCoordinate, GeoPolygon};
pub use monument::{InvalidCoordinate, Monument, WireMonument};

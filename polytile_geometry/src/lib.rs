//! Typed points and polygons decoded from WKB or WKT.
//!
//! [`Point`] and [`Polygon`] validate the shape of a decoded geometry and
//! fail with [`GeometryError::GeometryType`] on a mismatch, or with
//! [`GeometryError::Decode`] when the input cannot be parsed at all.
//! Polygons carry their planar centroid and area, and can be split into
//! rectangular tiles below a geodesic area threshold with [`Polygon::divide`].
//!
//! ```
//! use polytile_geometry::Polygon;
//!
//! let polygon = Polygon::from_wkt("POLYGON((0 0,0 1,1 1,1 0,0 0))").unwrap();
//! assert!((polygon.area() - 1.0).abs() < 1e-12);
//! assert!((polygon.centroid().lon() - 0.5).abs() < 1e-12);
//!
//! let err = Polygon::from_wkt("LINESTRING(0 0,1 1)").unwrap_err();
//! assert!(err.is_geometry_type());
//! ```

pub mod divide;
mod error;
pub mod math;
mod types;

pub use divide::DivideConfig;
pub use error::*;
pub use types::*;

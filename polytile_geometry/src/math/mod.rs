//! Thin adapter over the georust crates: decoding and encoding of WKB and
//! WKT, bounding boxes, planar centroid/area and geodesic measurements.
//!
//! Nothing in here implements a codec or a geodesic formula; every function
//! delegates to `geo`, `wkt`, `geozero` or `hex`.

mod codec;
mod measure;

pub use codec::*;
pub use measure::*;

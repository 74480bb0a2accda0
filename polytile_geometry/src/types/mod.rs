// Typed geometries built on top of `geo`. `Point` and `Polygon` validate the
// shape of a decoded geometry, `Bound` is the axis-aligned box derived from
// either of them and `ShapeType` is the discriminator used for validation.

mod bound;
mod point;
mod polygon;
mod shape_type;

pub use bound::*;
pub use point::*;
pub use polygon::*;
pub use shape_type::*;

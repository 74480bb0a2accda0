use crate::Bound;
use geo::{Area, BoundingRect, Centroid, Coord, Distance, Geodesic, GeodesicArea, Geometry, Point};

/// Bounding box of a geometry, or `None` for empty geometries.
#[must_use]
pub fn bounding_box(geometry: &Geometry<f64>) -> Option<Bound> {
	geometry.bounding_rect().map(Bound::from)
}

/// Planar centroid and unsigned planar area, in squared coordinate units.
///
/// The centroid is `None` when the geometry is empty.
#[must_use]
pub fn planar_centroid_area(geometry: &Geometry<f64>) -> (Option<Point<f64>>, f64) {
	(geometry.centroid(), geometry.unsigned_area())
}

/// Geodesic distance between two coordinates on the WGS84 ellipsoid, in meters.
#[must_use]
pub fn geodesic_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
	Geodesic.distance(Point::from(a), Point::from(b))
}

/// Geodesic area of a bound on the WGS84 ellipsoid, in square meters.
#[must_use]
pub fn geodesic_area(bound: &Bound) -> f64 {
	bound.to_polygon().geodesic_area_unsigned()
}

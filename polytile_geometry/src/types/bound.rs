use geo::{Coord, LineString, Rect, coord};
use std::fmt::Debug;

/// An axis-aligned rectangle on the map, defined by its minimum
/// (south-west) and maximum (north-east) coordinate.
///
/// A `Bound` is always derived from a [`Point`](crate::Point), a
/// [`Polygon`](crate::Polygon) or by splitting another `Bound`.
#[derive(Clone, Copy, PartialEq)]
pub struct Bound(Rect<f64>);

impl Bound {
	/// Creates a bound spanning two corners. The corners are normalised, so
	/// their order does not matter.
	pub(crate) fn new(a: Coord<f64>, b: Coord<f64>) -> Self {
		Bound(Rect::new(a, b))
	}

	#[must_use]
	pub fn min(&self) -> Coord<f64> {
		self.0.min()
	}

	#[must_use]
	pub fn max(&self) -> Coord<f64> {
		self.0.max()
	}

	/// Returns the bound as `[lon_min, lat_min, lon_max, lat_max]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		let (min, max) = (self.min(), self.max());
		[min.x, min.y, max.x, max.y]
	}

	#[must_use]
	pub fn as_rect(&self) -> &Rect<f64> {
		&self.0
	}

	/// Converts the bound into a closed polygon ring.
	///
	/// Corners are ordered min, (max.x, min.y), max, (min.x, max.y), min.
	#[must_use]
	pub fn to_polygon(&self) -> geo::Polygon<f64> {
		let (min, max) = (self.min(), self.max());
		geo::Polygon::new(
			LineString::from(vec![
				min,
				coord! { x: max.x, y: min.y },
				max,
				coord! { x: min.x, y: max.y },
				min,
			]),
			vec![],
		)
	}

	/// Returns the smallest bound covering both `self` and `other`.
	#[must_use]
	pub fn union(&self, other: &Bound) -> Bound {
		let (a, b) = (self.min(), self.max());
		let (c, d) = (other.min(), other.max());
		Bound::new(
			coord! { x: a.x.min(c.x), y: a.y.min(c.y) },
			coord! { x: b.x.max(d.x), y: b.y.max(d.y) },
		)
	}

	/// Checks whether `other` lies completely inside (or on the edge of) `self`.
	#[must_use]
	pub fn contains_bound(&self, other: &Bound) -> bool {
		let (a, b) = (self.min(), self.max());
		let (c, d) = (other.min(), other.max());
		a.x <= c.x && a.y <= c.y && d.x <= b.x && d.y <= b.y
	}
}

impl From<Rect<f64>> for Bound {
	fn from(rect: Rect<f64>) -> Self {
		Bound(rect)
	}
}

impl From<Bound> for Rect<f64> {
	fn from(bound: Bound) -> Self {
		bound.0
	}
}

impl Debug for Bound {
	/// Formats the bound as `[lon_min, lat_min, lon_max, lat_max]`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.as_array().fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geo::Area;

	fn bound(x0: f64, y0: f64, x1: f64, y1: f64) -> Bound {
		Bound::new(coord! { x: x0, y: y0 }, coord! { x: x1, y: y1 })
	}

	#[test]
	fn corners_are_normalised() {
		let b = bound(10.0, 5.0, -10.0, -5.0);
		assert_eq!(b.as_array(), [-10.0, -5.0, 10.0, 5.0]);
		assert_eq!(b.min(), coord! { x: -10.0, y: -5.0 });
		assert_eq!(b.max(), coord! { x: 10.0, y: 5.0 });
	}

	#[test]
	fn to_polygon_is_closed() {
		let polygon = bound(0.0, 0.0, 2.0, 1.0).to_polygon();
		let ring: Vec<(f64, f64)> = polygon.exterior().coords().map(|c| (c.x, c.y)).collect();
		assert_eq!(ring, vec![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
		assert_eq!(polygon.unsigned_area(), 2.0);
	}

	#[test]
	fn union_and_contains() {
		let a = bound(0.0, 0.0, 1.0, 1.0);
		let b = bound(2.0, -1.0, 3.0, 0.5);
		let u = a.union(&b);
		assert_eq!(u.as_array(), [0.0, -1.0, 3.0, 1.0]);
		assert!(u.contains_bound(&a));
		assert!(u.contains_bound(&b));
		assert!(!a.contains_bound(&u));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", bound(1.0, 2.0, 3.0, 4.0)), "[1.0, 2.0, 3.0, 4.0]");
	}
}

use crate::{
	Bound, GeometryError, Result,
	math::{decode_wkb_hex, decode_wkt, encode_wkt},
	types::{POINT_SHAPES, ShapeType},
};
use geo::{Coord, Geometry};
use std::{fmt, str::FromStr};

/// A validated single coordinate pair `(lon, lat)`.
///
/// Can only be built from a geometry whose shape is `Point`; the coordinate
/// is kept exactly as decoded.
#[derive(Clone, Copy, PartialEq)]
pub struct Point(geo::Point<f64>);

impl Point {
	/// Builds a point from hex encoded WKB.
	pub fn from_wkb_hex(text: &str) -> Result<Self> {
		Self::from_geometry(decode_wkb_hex(text)?)
	}

	/// Builds a point from WKT, e.g. `POINT(13.4 52.5)`.
	pub fn from_wkt(text: &str) -> Result<Self> {
		Self::from_geometry(decode_wkt(text)?)
	}

	/// Builds a point from an already decoded geometry.
	pub fn from_geometry(geometry: Geometry<f64>) -> Result<Self> {
		match geometry {
			Geometry::Point(point) => Ok(Point(point)),
			other => Err(GeometryError::geometry_type(POINT_SHAPES, ShapeType::from(&other))),
		}
	}

	#[must_use]
	pub fn lon(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn coord(&self) -> Coord<f64> {
		self.0.0
	}

	#[must_use]
	pub fn as_geo(&self) -> &geo::Point<f64> {
		&self.0
	}

	#[must_use]
	#[allow(clippy::unused_self)]
	pub fn shape_type(&self) -> ShapeType {
		ShapeType::Point
	}

	#[must_use]
	#[allow(clippy::unused_self)]
	pub fn dimensions(&self) -> usize {
		0
	}

	/// A degenerate bound whose min and max both equal the point.
	#[must_use]
	pub fn bound(&self) -> Bound {
		Bound::new(self.coord(), self.coord())
	}

	#[must_use]
	pub fn to_wkt(&self) -> String {
		encode_wkt(&Geometry::Point(self.0))
	}

	#[must_use]
	pub fn to_geojson(&self) -> geojson::Geometry {
		geojson::Geometry::new(geojson::Value::from(&self.0))
	}
}

impl From<geo::Point<f64>> for Point {
	fn from(point: geo::Point<f64>) -> Self {
		Point(point)
	}
}

impl From<Point> for geo::Point<f64> {
	fn from(point: Point) -> Self {
		point.0
	}
}

impl TryFrom<Geometry<f64>> for Point {
	type Error = GeometryError;

	fn try_from(geometry: Geometry<f64>) -> Result<Self> {
		Point::from_geometry(geometry)
	}
}

impl FromStr for Point {
	type Err = GeometryError;

	fn from_str(text: &str) -> Result<Self> {
		Point::from_wkt(text)
	}
}

impl fmt::Debug for Point {
	/// Formats the point as `[lon, lat]`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		[self.lon(), self.lat()].fmt(f)
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geo::point;
	use rstest::rstest;

	#[test]
	fn from_wkb_hex() {
		let p = Point::from_wkb_hex("0101000000000000000000F03F0000000000000040").unwrap();
		assert_eq!(p.lon(), 1.0);
		assert_eq!(p.lat(), 2.0);
	}

	#[test]
	fn from_wkb_hex_rejects_linestring() {
		let err =
			Point::from_wkb_hex("01020000000200000000000000000000000000000000000000000000000000F03F000000000000F03F")
				.unwrap_err();
		assert_eq!(
			err,
			GeometryError::GeometryType {
				expected: POINT_SHAPES,
				actual: ShapeType::LineString
			}
		);
	}

	#[test]
	fn from_wkb_hex_rejects_garbage() {
		assert!(Point::from_wkb_hex("zz").unwrap_err().is_decode());
	}

	#[test]
	fn from_wkt_keeps_coordinates() {
		let p = Point::from_wkt("POINT(13.404954 52.520008)").unwrap();
		assert_eq!(p.lon(), 13.404954);
		assert_eq!(p.lat(), 52.520008);
		assert_eq!(p.coord(), geo::coord! { x: 13.404954, y: 52.520008 });
	}

	#[rstest]
	#[case("LINESTRING(0 0,1 1)", ShapeType::LineString)]
	#[case("MULTIPOINT((0 0),(1 1))", ShapeType::MultiPoint)]
	#[case("POLYGON((0 0,1 0,1 1,0 0))", ShapeType::Polygon)]
	fn from_wkt_rejects_other_shapes(#[case] input: &str, #[case] actual: ShapeType) {
		let err = Point::from_wkt(input).unwrap_err();
		assert!(err.is_geometry_type());
		assert_eq!(
			err,
			GeometryError::GeometryType {
				expected: POINT_SHAPES,
				actual
			}
		);
	}

	#[test]
	fn from_wkt_rejects_garbage() {
		assert!(Point::from_wkt("POINT(1)").unwrap_err().is_decode());
	}

	#[test]
	fn from_geometry() {
		let p = Point::from_geometry(Geometry::Point(point!(x: -3.5, y: 40.25))).unwrap();
		assert_eq!(p, Point::from(point!(x: -3.5, y: 40.25)));
		assert_eq!(p.shape_type(), ShapeType::Point);
		assert_eq!(p.dimensions(), 0);
	}

	#[test]
	fn bound_is_degenerate() {
		let p = Point::from_wkt("POINT(3 4)").unwrap();
		assert_eq!(p.bound().as_array(), [3.0, 4.0, 3.0, 4.0]);
	}

	#[test]
	fn to_wkt_and_display() {
		let p: Point = "POINT(1.5 -2)".parse().unwrap();
		assert_eq!(p.to_wkt(), "POINT(1.5 -2)");
		assert_eq!(p.to_string(), "POINT(1.5 -2)");
		assert_eq!(format!("{p:?}"), "[1.5, -2.0]");
	}

	#[test]
	fn to_geojson() {
		let json = Point::from_wkt("POINT(1.5 2.5)").unwrap().to_geojson();
		assert_eq!(json.value, geojson::Value::Point(vec![1.5, 2.5]));
	}
}

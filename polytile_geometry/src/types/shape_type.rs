use geo::Geometry;
use std::fmt;

/// Shape discriminator of a decoded geometry.
///
/// [`as_str`](Self::as_str) returns the GeoJSON type name, so `Line`
/// reports as "LineString" and `Rect`/`Triangle` report as "Polygon".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
	Point,
	Line,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
	Rect,
	Triangle,
}

/// Shapes accepted by [`Point`](crate::Point).
pub const POINT_SHAPES: &[ShapeType] = &[ShapeType::Point];

/// Shapes accepted by [`Polygon`](crate::Polygon).
pub const AREA_SHAPES: &[ShapeType] = &[ShapeType::Polygon, ShapeType::MultiPolygon];

impl ShapeType {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		use ShapeType::*;
		match self {
			Point => "Point",
			Line | LineString => "LineString",
			Polygon | Rect | Triangle => "Polygon",
			MultiPoint => "MultiPoint",
			MultiLineString => "MultiLineString",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
		}
	}

	/// Topological dimension of a shape: 0 for points, 1 for lines, 2 for areas.
	///
	/// A collection has no fixed dimension; use [`dimensions`] on the geometry itself.
	#[must_use]
	pub fn dimensions(&self) -> usize {
		use ShapeType::*;
		match self {
			Point | MultiPoint | GeometryCollection => 0,
			Line | LineString | MultiLineString => 1,
			Polygon | MultiPolygon | Rect | Triangle => 2,
		}
	}
}

impl From<&Geometry<f64>> for ShapeType {
	fn from(geometry: &Geometry<f64>) -> Self {
		match geometry {
			Geometry::Point(_) => ShapeType::Point,
			Geometry::Line(_) => ShapeType::Line,
			Geometry::LineString(_) => ShapeType::LineString,
			Geometry::Polygon(_) => ShapeType::Polygon,
			Geometry::MultiPoint(_) => ShapeType::MultiPoint,
			Geometry::MultiLineString(_) => ShapeType::MultiLineString,
			Geometry::MultiPolygon(_) => ShapeType::MultiPolygon,
			Geometry::GeometryCollection(_) => ShapeType::GeometryCollection,
			Geometry::Rect(_) => ShapeType::Rect,
			Geometry::Triangle(_) => ShapeType::Triangle,
		}
	}
}

impl fmt::Display for ShapeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Topological dimension of a geometry. Collections report the largest
/// dimension among their members, and 0 when empty.
#[must_use]
pub fn dimensions(geometry: &Geometry<f64>) -> usize {
	match geometry {
		Geometry::GeometryCollection(collection) => collection.iter().map(dimensions).max().unwrap_or(0),
		other => ShapeType::from(other).dimensions(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geo::{GeometryCollection, LineString, Rect, coord, point, polygon};
	use rstest::rstest;

	#[rstest]
	#[case(ShapeType::Point, "Point", 0)]
	#[case(ShapeType::Line, "LineString", 1)]
	#[case(ShapeType::LineString, "LineString", 1)]
	#[case(ShapeType::Polygon, "Polygon", 2)]
	#[case(ShapeType::Rect, "Polygon", 2)]
	#[case(ShapeType::Triangle, "Polygon", 2)]
	#[case(ShapeType::MultiPoint, "MultiPoint", 0)]
	#[case(ShapeType::MultiLineString, "MultiLineString", 1)]
	#[case(ShapeType::MultiPolygon, "MultiPolygon", 2)]
	#[case(ShapeType::GeometryCollection, "GeometryCollection", 0)]
	fn names_and_dimensions(#[case] shape: ShapeType, #[case] name: &str, #[case] dim: usize) {
		assert_eq!(shape.as_str(), name);
		assert_eq!(shape.to_string(), name);
		assert_eq!(shape.dimensions(), dim);
	}

	#[test]
	fn from_geometry() {
		let p = Geometry::Point(point!(x: 1.0, y: 2.0));
		assert_eq!(ShapeType::from(&p), ShapeType::Point);

		let r = Geometry::Rect(Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 }));
		assert_eq!(ShapeType::from(&r), ShapeType::Rect);
	}

	#[test]
	fn collection_dimensions() {
		let empty = Geometry::GeometryCollection(GeometryCollection::default());
		assert_eq!(dimensions(&empty), 0);

		let mixed = Geometry::GeometryCollection(GeometryCollection::from(vec![
			Geometry::Point(point!(x: 0.0, y: 0.0)),
			Geometry::LineString(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)])),
			Geometry::Polygon(polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 1.0)]),
		]));
		assert_eq!(dimensions(&mixed), 2);
	}
}

use crate::{
	Bound, DivideConfig, GeometryError, Point, Result, divide,
	math::{bounding_box, decode_wkb_hex, decode_wkt, encode_wkt, planar_centroid_area},
	types::{AREA_SHAPES, ShapeType},
};
use geo::{Geometry, LineString};
use std::{fmt, str::FromStr};

/// A validated area geometry, either a polygon or a multipolygon, together
/// with its planar centroid and planar area.
///
/// Centroid and area are computed once during construction and never change.
/// The area is given in squared coordinate units (degrees²), not in meters.
#[derive(Clone, PartialEq)]
pub struct Polygon {
	geometry: Geometry<f64>,
	centroid: Point,
	area: f64,
}

impl Polygon {
	/// Builds a polygon from hex encoded WKB.
	///
	/// Unlike the other constructors, a decoded `GeometryCollection` is not
	/// rejected but replaced by its bounding rectangle.
	pub fn from_wkb_hex(text: &str) -> Result<Self> {
		let geometry = decode_wkb_hex(text)?;
		if matches!(geometry, Geometry::GeometryCollection(_)) {
			// an empty collection has no bound to fall back to
			let bound = bounding_box(&geometry)
				.ok_or_else(|| GeometryError::geometry_type(AREA_SHAPES, ShapeType::GeometryCollection))?;
			return Self::from_bound(bound);
		}
		Self::from_geometry(geometry)
	}

	/// Builds a polygon from WKT, e.g. `POLYGON((0 0,1 0,1 1,0 1,0 0))`.
	pub fn from_wkt(text: &str) -> Result<Self> {
		Self::from_geometry(decode_wkt(text)?)
	}

	/// Builds a polygon from an already decoded geometry.
	///
	/// `Rect` and `Triangle` are accepted and stored as plain polygons.
	pub fn from_geometry(geometry: Geometry<f64>) -> Result<Self> {
		let geometry = match geometry {
			Geometry::Rect(rect) => Geometry::Polygon(Bound::from(rect).to_polygon()),
			Geometry::Triangle(triangle) => Geometry::Polygon(triangle.to_polygon()),
			other => other,
		};

		let shape = ShapeType::from(&geometry);
		if !AREA_SHAPES.contains(&shape) {
			return Err(GeometryError::geometry_type(AREA_SHAPES, shape));
		}

		Self::build(geometry)
	}

	/// Builds a single-ring polygon from planar points.
	///
	/// The ring is closed by appending the first point if it differs from the last one.
	pub fn from_planar_ring(points: &[Point]) -> Result<Self> {
		let (Some(first), Some(last)) = (points.first(), points.last()) else {
			return Err(GeometryError::EmptyRing);
		};

		let mut ring: Vec<_> = points.iter().map(Point::coord).collect();
		if first != last {
			ring.push(first.coord());
		}

		Self::from_geometry(Geometry::Polygon(geo::Polygon::new(LineString::new(ring), vec![])))
	}

	pub(crate) fn from_bound(bound: Bound) -> Result<Self> {
		Self::build(Geometry::Polygon(bound.to_polygon()))
	}

	fn build(geometry: Geometry<f64>) -> Result<Self> {
		let (centroid, area) = planar_centroid_area(&geometry);
		let centroid = Point::from_geometry(Geometry::Point(centroid.ok_or(GeometryError::NoCentroid)?))?;
		Ok(Polygon {
			geometry,
			centroid,
			area,
		})
	}

	#[must_use]
	pub fn centroid(&self) -> Point {
		self.centroid
	}

	#[must_use]
	pub fn area(&self) -> f64 {
		self.area
	}

	#[must_use]
	pub fn shape_type(&self) -> ShapeType {
		ShapeType::from(&self.geometry)
	}

	#[must_use]
	#[allow(clippy::unused_self)]
	pub fn dimensions(&self) -> usize {
		2
	}

	#[must_use]
	pub fn bound(&self) -> Bound {
		// a polygon without coordinates has no centroid and never gets constructed
		bounding_box(&self.geometry).unwrap_or_else(|| self.centroid.bound())
	}

	#[must_use]
	pub fn geometry(&self) -> &Geometry<f64> {
		&self.geometry
	}

	#[must_use]
	pub fn into_geometry(self) -> Geometry<f64> {
		self.geometry
	}

	#[must_use]
	pub fn to_wkt(&self) -> String {
		encode_wkt(&self.geometry)
	}

	#[must_use]
	pub fn to_geojson(&self) -> geojson::Geometry {
		geojson::Geometry::new(geojson::Value::from(&self.geometry))
	}

	/// Splits the bounding box into rectangles of at most `max_area_km2`
	/// square kilometers each, using [`DivideConfig::default`].
	pub fn divide(&self, max_area_km2: f64) -> Result<Vec<Polygon>> {
		divide::divide(self, max_area_km2, &DivideConfig::default())
	}

	/// Like [`divide`](Self::divide) with explicit recursion limits.
	pub fn divide_with(&self, max_area_km2: f64, config: &DivideConfig) -> Result<Vec<Polygon>> {
		divide::divide(self, max_area_km2, config)
	}
}

impl TryFrom<Geometry<f64>> for Polygon {
	type Error = GeometryError;

	fn try_from(geometry: Geometry<f64>) -> Result<Self> {
		Polygon::from_geometry(geometry)
	}
}

impl FromStr for Polygon {
	type Err = GeometryError;

	fn from_str(text: &str) -> Result<Self> {
		Polygon::from_wkt(text)
	}
}

impl From<Polygon> for Geometry<f64> {
	fn from(polygon: Polygon) -> Self {
		polygon.geometry
	}
}

impl fmt::Debug for Polygon {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Polygon")
			.field("geometry", &self.geometry)
			.field("centroid", &self.centroid)
			.field("area", &self.area)
			.finish()
	}
}

impl fmt::Display for Polygon {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

use crate::{Bound, ShapeType};
use std::fmt;

/// A type alias for `std::result::Result` with [`GeometryError`] as the error type.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised while building or subdividing typed geometries.
///
/// Callers that only need to know whether the input was unparsable or merely
/// had the wrong shape can use [`is_decode`](Self::is_decode) and
/// [`is_geometry_type`](Self::is_geometry_type).
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
	/// The input could not be parsed by the codec named in `format`.
	Decode { format: &'static str, message: String },
	/// The decoded geometry has a shape the target type does not accept.
	GeometryType {
		expected: &'static [ShapeType],
		actual: ShapeType,
	},
	/// A ring was requested from an empty list of points.
	EmptyRing,
	/// The geometry has no centroid, e.g. an empty multipolygon.
	NoCentroid,
	/// The subdivision threshold must be a finite, positive number of km².
	InvalidThreshold(f64),
	/// The geodesic area of the bound is not a finite number, e.g. because a
	/// latitude lies outside of ±90°.
	InvalidBound(Bound),
	/// The subdivision would produce more tiles than allowed.
	TooManyTiles { estimate: f64, limit: usize },
}

impl GeometryError {
	pub(crate) fn decode(format: &'static str, error: impl fmt::Display) -> Self {
		GeometryError::Decode {
			format,
			message: error.to_string(),
		}
	}

	pub(crate) fn geometry_type(expected: &'static [ShapeType], actual: ShapeType) -> Self {
		GeometryError::GeometryType { expected, actual }
	}

	#[must_use]
	pub fn is_decode(&self) -> bool {
		matches!(self, GeometryError::Decode { .. })
	}

	#[must_use]
	pub fn is_geometry_type(&self) -> bool {
		matches!(self, GeometryError::GeometryType { .. })
	}
}

impl fmt::Display for GeometryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeometryError::Decode { format, message } => write!(f, "failed to decode {format}: {message}"),
			GeometryError::GeometryType { expected, actual } => {
				let expected = expected.iter().map(ShapeType::as_str).collect::<Vec<_>>().join(" or ");
				write!(f, "failed geometry type: expected {expected}, got {}", actual.as_str())
			}
			GeometryError::EmptyRing => write!(f, "a ring needs at least one point"),
			GeometryError::NoCentroid => write!(f, "geometry has no centroid"),
			GeometryError::InvalidThreshold(value) => {
				write!(f, "subdivision threshold must be a positive number of km², got {value}")
			}
			GeometryError::InvalidBound(bound) => write!(f, "bound {bound:?} has no finite geodesic area"),
			GeometryError::TooManyTiles { estimate, limit } => {
				write!(f, "subdivision needs about {estimate:.0} tiles, the limit is {limit}")
			}
		}
	}
}

impl std::error::Error for GeometryError {}

impl From<hex::FromHexError> for GeometryError {
	fn from(error: hex::FromHexError) -> Self {
		GeometryError::decode("hex", error)
	}
}

impl From<geozero::error::GeozeroError> for GeometryError {
	fn from(error: geozero::error::GeozeroError) -> Self {
		GeometryError::decode("WKB", error)
	}
}

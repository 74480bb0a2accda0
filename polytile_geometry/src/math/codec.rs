use crate::{GeometryError, Result};
use geo::Geometry;
use geozero::{
	ToGeo,
	wkb::{Ewkb, Wkb},
};
use wkt::{ToWkt, TryFromWkt};

/// Set in the geometry type of PostGIS EWKB when an SRID follows.
const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// Decodes a WKB byte buffer. PostGIS EWKB with an embedded SRID is accepted
/// too; the SRID is dropped.
pub fn decode_wkb(bytes: &[u8]) -> Result<Geometry<f64>> {
	if has_srid(bytes) {
		Ok(Ewkb(bytes.to_vec()).to_geo()?)
	} else {
		Ok(Wkb(bytes.to_vec()).to_geo()?)
	}
}

fn has_srid(bytes: &[u8]) -> bool {
	let Some(type_bytes) = bytes.get(1..5).and_then(|b| <[u8; 4]>::try_from(b).ok()) else {
		return false;
	};
	let geometry_type = match bytes[0] {
		0 => u32::from_be_bytes(type_bytes),
		_ => u32::from_le_bytes(type_bytes),
	};
	geometry_type & EWKB_SRID_FLAG != 0
}

/// Decodes a hex encoded WKB or EWKB string.
pub fn decode_wkb_hex(text: &str) -> Result<Geometry<f64>> {
	let bytes = hex::decode(text)?;
	decode_wkb(&bytes)
}

/// Decodes a WKT string.
pub fn decode_wkt(text: &str) -> Result<Geometry<f64>> {
	Geometry::<f64>::try_from_wkt_str(text).map_err(|e| GeometryError::decode("WKT", e))
}

/// Encodes a geometry as WKT.
#[must_use]
pub fn encode_wkt(geometry: &Geometry<f64>) -> String {
	geometry.wkt_string()
}

//! Recursive subdivision of a polygon's bounding box into rectangles whose
//! geodesic area stays below a threshold.
//!
//! The tiles cover the bounding box of the input, not its outline: a concave
//! or irregular polygon is replaced by its enclosing rectangle before tiling.
//! This is enough for spatial indexing and request batching, which is what
//! the tiles are used for.

mod config;

pub use config::*;

use crate::{
	Bound, GeometryError, Polygon, Result,
	math::{geodesic_area, geodesic_distance},
};
use geo::coord;
use log::{debug, trace, warn};

const SQUARE_METERS_PER_SQUARE_KILOMETER: f64 = 1_000_000.0;

/// Splits the bounding box of `polygon` into rectangular tiles of at most
/// `max_area_km2` square kilometers.
///
/// Each step bisects the box across its longer geodesic side. The result is
/// ordered depth-first: all tiles of the first half come before the tiles of
/// the second half.
///
/// Fails before any tile is built if the bound has no finite geodesic area,
/// or if the expected number of tiles exceeds `config.max_tiles`.
pub fn divide(polygon: &Polygon, max_area_km2: f64, config: &DivideConfig) -> Result<Vec<Polygon>> {
	if !max_area_km2.is_finite() || max_area_km2 <= 0.0 {
		return Err(GeometryError::InvalidThreshold(max_area_km2));
	}

	let bound = polygon.bound();
	let area = geodesic_area(&bound) / SQUARE_METERS_PER_SQUARE_KILOMETER;
	if !area.is_finite() {
		return Err(GeometryError::InvalidBound(bound));
	}

	let estimate = estimate_tiles(area, max_area_km2, config);
	if estimate > config.max_tiles as f64 {
		return Err(GeometryError::TooManyTiles {
			estimate,
			limit: config.max_tiles,
		});
	}

	let mut tiles = Vec::new();
	divide_bound(bound, area, max_area_km2, config, 0, &mut tiles)?;

	debug!(
		"divided {:?} into {} tiles of at most {max_area_km2} km²",
		bound,
		tiles.len()
	);
	Ok(tiles)
}

/// Lower estimate of the number of tiles: every leaf holds at most the larger
/// of both area limits, and there are never more than `2^max_depth` leaves.
fn estimate_tiles(area: f64, max_area: f64, config: &DivideConfig) -> f64 {
	let leaf_area = max_area.max(config.min_tile_area);
	(area / leaf_area).ceil().max(1.0).min(2f64.powf(f64::from(config.max_depth)))
}

fn divide_bound(
	bound: Bound,
	area: f64,
	max_area: f64,
	config: &DivideConfig,
	depth: u32,
	tiles: &mut Vec<Polygon>,
) -> Result<()> {
	if area <= max_area {
		return push_tile(bound, config, tiles);
	}

	if depth >= config.max_depth || area <= config.min_tile_area {
		warn!("stopped dividing {bound:?} at depth {depth} with {area:.3} km² (limit {max_area} km²)");
		return push_tile(bound, config, tiles);
	}

	let [first, second] = split(&bound);
	trace!("depth {depth}: split {bound:?} ({area:.3} km²) into {first:?} and {second:?}");

	for half in [first, second] {
		let half_area = geodesic_area(&half) / SQUARE_METERS_PER_SQUARE_KILOMETER;
		divide_bound(half, half_area, max_area, config, depth + 1, tiles)?;
	}
	Ok(())
}

fn push_tile(bound: Bound, config: &DivideConfig, tiles: &mut Vec<Polygon>) -> Result<()> {
	if tiles.len() >= config.max_tiles {
		return Err(GeometryError::TooManyTiles {
			estimate: (tiles.len() + 1) as f64,
			limit: config.max_tiles,
		});
	}
	tiles.push(Polygon::from_bound(bound)?);
	Ok(())
}

/// Bisects a bound across its longer geodesic side.
///
/// If the width (measured along the southern edge) is strictly larger than
/// the height (measured along the western edge), the bound is cut at its
/// central meridian into a west and an east half. Otherwise it is cut at its
/// central parallel into a south and a north half.
#[must_use]
pub fn split(bound: &Bound) -> [Bound; 2] {
	let (min, max) = (bound.min(), bound.max());

	let width = geodesic_distance(min, coord! { x: max.x, y: min.y });
	let height = geodesic_distance(min, coord! { x: min.x, y: max.y });

	if width > height {
		let center_x = (min.x + max.x) / 2.0;
		[
			Bound::new(min, coord! { x: center_x, y: max.y }),
			Bound::new(coord! { x: center_x, y: min.y }, max),
		]
	} else {
		let center_y = (min.y + max.y) / 2.0;
		[
			Bound::new(min, coord! { x: max.x, y: center_y }),
			Bound::new(coord! { x: min.x, y: center_y }, max),
		]
	}
}

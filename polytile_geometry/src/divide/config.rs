/// Limits for the recursive subdivision.
///
/// A tile that reaches `max_depth` splits, or whose geodesic area is at most
/// `min_tile_area` km², is emitted as it is, even when it is still larger
/// than the requested threshold.
///
/// A subdivision that would need more than `max_tiles` tiles fails with
/// [`GeometryError::TooManyTiles`](crate::GeometryError::TooManyTiles).
#[derive(Clone, Debug, PartialEq)]
pub struct DivideConfig {
	pub max_depth: u32,
	pub min_tile_area: f64,
	pub max_tiles: usize,
}

impl DivideConfig {
	pub const DEFAULT_MAX_DEPTH: u32 = 24;
	pub const DEFAULT_MAX_TILES: usize = 1_000_000;

	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_max_depth(mut self, max_depth: u32) -> Self {
		self.max_depth = max_depth;
		self
	}

	#[must_use]
	pub fn with_min_tile_area(mut self, min_tile_area: f64) -> Self {
		self.min_tile_area = min_tile_area;
		self
	}

	#[must_use]
	pub fn with_max_tiles(mut self, max_tiles: usize) -> Self {
		self.max_tiles = max_tiles;
		self
	}
}

impl Default for DivideConfig {
	fn default() -> Self {
		Self {
			max_depth: Self::DEFAULT_MAX_DEPTH,
			min_tile_area: 0.0,
			max_tiles: Self::DEFAULT_MAX_TILES,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = DivideConfig::new();
		assert_eq!(config.max_depth, 24);
		assert_eq!(config.min_tile_area, 0.0);
		assert_eq!(config.max_tiles, 1_000_000);
	}

	#[test]
	fn builder() {
		let config = DivideConfig::default()
			.with_max_depth(4)
			.with_min_tile_area(2.5)
			.with_max_tiles(100);
		assert_eq!(
			config,
			DivideConfig {
				max_depth: 4,
				min_tile_area: 2.5,
				max_tiles: 100,
			}
		);
	}
}

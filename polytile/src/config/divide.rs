use polytile_geometry::DivideConfig;
use serde::Deserialize;

/// Settings for `polytile divide`.
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DivideSection {
	/// Maximum geodesic area of a tile in km²
	pub max_area: Option<f64>,

	/// Maximum number of bisections before a tile is emitted regardless of its size
	pub max_depth: Option<u32>,

	/// Tiles at or below this area in km² are never split further
	pub min_tile_area: Option<f64>,

	/// Maximum number of tiles a single subdivision may produce
	pub max_tiles: Option<usize>,
}

impl DivideSection {
	/// Overwrites every field that is set in `other`.
	pub fn merge(&mut self, other: &DivideSection) {
		if other.max_area.is_some() {
			self.max_area = other.max_area;
		}
		if other.max_depth.is_some() {
			self.max_depth = other.max_depth;
		}
		if other.min_tile_area.is_some() {
			self.min_tile_area = other.min_tile_area;
		}
		if other.max_tiles.is_some() {
			self.max_tiles = other.max_tiles;
		}
	}

	#[must_use]
	pub fn divide_config(&self) -> DivideConfig {
		let mut config = DivideConfig::default();
		if let Some(max_depth) = self.max_depth {
			config.max_depth = max_depth;
		}
		if let Some(min_tile_area) = self.min_tile_area {
			config.min_tile_area = min_tile_area;
		}
		if let Some(max_tiles) = self.max_tiles {
			config.max_tiles = max_tiles;
		}
		config
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn merge_keeps_unset_fields() {
		let mut section = DivideSection {
			max_area: Some(100.0),
			max_depth: Some(10),
			min_tile_area: None,
			max_tiles: Some(50),
		};
		section.merge(&DivideSection {
			max_area: Some(5.0),
			max_depth: None,
			min_tile_area: Some(0.1),
			max_tiles: None,
		});
		assert_eq!(
			section,
			DivideSection {
				max_area: Some(5.0),
				max_depth: Some(10),
				min_tile_area: Some(0.1),
				max_tiles: Some(50),
			}
		);
	}

	#[test]
	fn divide_config_defaults() {
		assert_eq!(DivideSection::default().divide_config(), DivideConfig::default());

		let section = DivideSection {
			max_area: None,
			max_depth: Some(3),
			min_tile_area: Some(2.0),
			max_tiles: Some(500),
		};
		assert_eq!(
			section.divide_config(),
			DivideConfig::default()
				.with_max_depth(3)
				.with_min_tile_area(2.0)
				.with_max_tiles(500)
		);
	}
}

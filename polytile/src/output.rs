//! Rendering of subdivision results.

use anyhow::Result;
#[cfg(feature = "cli")]
use clap::ValueEnum;
use geojson::{Feature, FeatureCollection, JsonObject};
use polytile_geometry::{Polygon, math::geodesic_area};
use std::fmt::Display;

/// Output encoding of `polytile divide`.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
	/// one WKT polygon per line
	#[default]
	Wkt,
	/// a GeoJSON FeatureCollection
	Geojson,
}

impl OutputFormat {
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			OutputFormat::Wkt => "wkt",
			OutputFormat::Geojson => "geojson",
		}
	}
}

impl Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Builds a feature for a tile, with its index, its planar centroid and its
/// geodesic area in km² as properties.
#[must_use]
pub fn tile_feature(index: usize, tile: &Polygon) -> Feature {
	let centroid = tile.centroid();
	let mut properties = JsonObject::new();
	properties.insert("index".to_string(), index.into());
	properties.insert(
		"area_km2".to_string(),
		(geodesic_area(&tile.bound()) / 1_000_000.0).into(),
	);
	properties.insert("centroid".to_string(), vec![centroid.lon(), centroid.lat()].into());

	Feature {
		bbox: None,
		geometry: Some(tile.to_geojson()),
		id: None,
		properties: Some(properties),
		foreign_members: None,
	}
}

pub fn render_tiles(tiles: &[Polygon], format: OutputFormat) -> Result<String> {
	Ok(match format {
		OutputFormat::Wkt => tiles.iter().map(Polygon::to_wkt).collect::<Vec<_>>().join("\n"),
		OutputFormat::Geojson => {
			let collection = FeatureCollection {
				bbox: None,
				features: tiles.iter().enumerate().map(|(i, tile)| tile_feature(i, tile)).collect(),
				foreign_members: None,
			};
			serde_json::to_string_pretty(&collection)?
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn tiles() -> Vec<Polygon> {
		Polygon::from_wkt("POLYGON((0 0,1 0,1 1,0 1,0 0))")
			.unwrap()
			.divide(7_000.0)
			.unwrap()
	}

	#[test]
	fn render_wkt() {
		let text = render_tiles(&tiles(), OutputFormat::Wkt).unwrap();
		assert_eq!(
			text,
			"POLYGON((0 0,0.5 0,0.5 1,0 1,0 0))\nPOLYGON((0.5 0,1 0,1 1,0.5 1,0.5 0))"
		);
	}

	#[test]
	fn render_geojson() {
		let text = render_tiles(&tiles(), OutputFormat::Geojson).unwrap();
		let json: serde_json::Value = serde_json::from_str(&text).unwrap();
		assert_eq!(json["type"], "FeatureCollection");

		let features = json["features"].as_array().unwrap();
		assert_eq!(features.len(), 2);
		assert_eq!(features[1]["properties"]["index"], 1);
		assert_eq!(features[0]["geometry"]["type"], "Polygon");
		let centroid = features[0]["properties"]["centroid"].as_array().unwrap();
		assert!((centroid[0].as_f64().unwrap() - 0.25).abs() < 1e-12);
		assert!((centroid[1].as_f64().unwrap() - 0.5).abs() < 1e-12);

		let area = features[0]["properties"]["area_km2"].as_f64().unwrap();
		assert!((6_100.0..6_200.0).contains(&area), "{area}");
	}

	#[test]
	fn format_names() {
		assert_eq!(OutputFormat::default(), OutputFormat::Wkt);
		assert_eq!(OutputFormat::Geojson.to_string(), "geojson");
	}
}

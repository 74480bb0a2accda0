//! Reading geometries given on the command line.
//!
//! An argument is either the geometry itself, or `@` followed by the path of
//! a file containing it. The encoding is detected from the text: anything
//! that consists of an even number of hex digits is read as hex encoded WKB,
//! everything else as WKT.

use anyhow::{Context, Result};
use log::debug;
use polytile_geometry::{Point, Polygon};
use std::fs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
	WkbHex,
	Wkt,
}

impl Encoding {
	#[must_use]
	pub fn detect(text: &str) -> Encoding {
		if !text.is_empty() && text.len() % 2 == 0 && text.bytes().all(|b| b.is_ascii_hexdigit()) {
			Encoding::WkbHex
		} else {
			Encoding::Wkt
		}
	}
}

/// Resolves `@path` arguments and trims surrounding whitespace.
pub fn read_argument(argument: &str) -> Result<String> {
	let text = match argument.strip_prefix('@') {
		Some(path) => fs::read_to_string(path).with_context(|| format!("reading geometry from {path:?}"))?,
		None => argument.to_string(),
	};
	Ok(text.trim().to_string())
}

pub fn read_polygon(argument: &str) -> Result<Polygon> {
	let text = read_argument(argument)?;
	let encoding = Encoding::detect(&text);
	debug!("reading polygon as {encoding:?}");
	let polygon = match encoding {
		Encoding::WkbHex => Polygon::from_wkb_hex(&text),
		Encoding::Wkt => Polygon::from_wkt(&text),
	};
	polygon.with_context(|| format!("reading polygon from {encoding:?} input"))
}

pub fn read_point(argument: &str) -> Result<Point> {
	let text = read_argument(argument)?;
	let encoding = Encoding::detect(&text);
	debug!("reading point as {encoding:?}");
	let point = match encoding {
		Encoding::WkbHex => Point::from_wkb_hex(&text),
		Encoding::Wkt => Point::from_wkt(&text),
	};
	point.with_context(|| format!("reading point from {encoding:?} input"))
}

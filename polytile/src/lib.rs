//! # polytile
//!
//! Command line helpers around [`polytile_geometry`]: reading points and
//! polygons from WKT or hex encoded WKB, the YAML configuration of the
//! `polytile` binary, and rendering of subdivision results.

pub mod config;
pub mod input;
pub mod output;

pub use polytile_geometry as geometry;

//! Configuration for the `polytile` command line tool.
//!
//! The configuration is read from a YAML file, e.g.
//!
//! ```yaml
//! divide:
//!   max_area: 250
//!   max_depth: 24
//!   min_tile_area: 0.5
//!   max_tiles: 20000
//! ```
//!
//! Command line flags override the values from the file.

mod divide;
mod main;

pub use divide::DivideSection;
pub use main::Config;

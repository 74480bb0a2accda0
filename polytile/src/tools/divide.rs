use anyhow::{Context, Result, bail};
use log::info;
use polytile::{
	config::{Config, DivideSection},
	input::read_polygon,
	output::{OutputFormat, render_tiles},
};
use std::{fs, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// polygon as WKT or hex encoded WKB
	/// use @path to read it from a file
	#[arg(required = true, verbatim_doc_comment)]
	input: String,

	/// maximum geodesic area of a tile in km²
	#[arg(long, short = 'a', value_name = "km2", display_order = 1)]
	max_area: Option<f64>,

	/// maximum number of bisections
	#[arg(long, value_name = "int", display_order = 1)]
	max_depth: Option<u32>,

	/// never split tiles at or below this area in km²
	#[arg(long, value_name = "km2", display_order = 1)]
	min_tile_area: Option<f64>,

	/// fail instead of producing more tiles than this
	#[arg(long, value_name = "int", display_order = 1)]
	max_tiles: Option<usize>,

	/// YAML configuration file, flags take precedence over its values
	#[arg(long, short, value_name = "FILE", display_order = 2)]
	config: Option<PathBuf>,

	/// output format
	#[arg(long, short, value_enum, default_value_t = OutputFormat::Wkt, display_order = 3)]
	format: OutputFormat,

	/// write the tiles to a file instead of stdout
	#[arg(long, short, value_name = "FILE", display_order = 3)]
	output: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	info!("divide {:?}", arguments.input);

	let section = settings(arguments)?;
	let Some(max_area) = section.max_area else {
		bail!("no maximum tile area given, use --max-area or set divide.max_area in the config file");
	};

	let polygon = read_polygon(&arguments.input)?;
	let tiles = polygon
		.divide_with(max_area, &section.divide_config())
		.with_context(|| format!("dividing {polygon} into tiles of at most {max_area} km²"))?;
	info!("got {} tiles", tiles.len());

	let text = render_tiles(&tiles, arguments.format)?;
	match &arguments.output {
		Some(path) => fs::write(path, text + "\n").with_context(|| format!("writing tiles to {path:?}"))?,
		None => println!("{text}"),
	}

	Ok(())
}

fn settings(arguments: &Subcommand) -> Result<DivideSection> {
	let mut section = match &arguments.config {
		Some(path) => Config::from_path(path)?.divide,
		None => DivideSection::default(),
	};
	section.merge(&DivideSection {
		max_area: arguments.max_area,
		max_depth: arguments.max_depth,
		min_tile_area: arguments.min_tile_area,
		max_tiles: arguments.max_tiles,
	});
	Ok(section)
}

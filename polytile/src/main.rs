mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Show shape, centroid, area and bounding box of a geometry
	Probe(tools::probe::Subcommand),

	#[clap(alias = "split")]
	/// Split the bounding box of a polygon into tiles below an area threshold
	Divide(tools::divide::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Commands::Probe(arguments) => tools::probe::run(arguments),
		Commands::Divide(arguments) => tools::divide::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(&cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["polytile"]).unwrap_err().to_string();
		assert!(err.starts_with("Typed points and polygons from WKB/WKT"));
		assert!(err.contains("\nUsage: polytile [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["polytile", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("polytile "));
	}

	#[test]
	fn probe_subcommand() {
		let output = run_command(vec!["polytile", "probe"]).unwrap_err().to_string();
		assert!(output.starts_with("Show shape, centroid, area and bounding box of a geometry"));
	}

	#[test]
	fn divide_subcommand() {
		let output = run_command(vec!["polytile", "divide"]).unwrap_err().to_string();
		assert!(output.starts_with("Split the bounding box of a polygon into tiles below an area threshold"));
	}

	#[test]
	fn divide_alias() {
		let msg = run_command(vec!["polytile", "-q", "split", "POLYGON((0 0,0.1 0,0.1 0.1,0 0.1,0 0))", "--max-area", "1000"]).unwrap();
		assert!(msg.contains("Divide("));
	}
}

use anyhow::Result;
use log::info;
use polytile::{
	geometry::{Point, Polygon},
	input::{read_point, read_polygon},
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// geometry as WKT or hex encoded WKB
	/// use @path to read it from a file
	#[arg(required = true, verbatim_doc_comment)]
	input: String,

	/// expect a point instead of a polygon
	#[arg(long, short)]
	point: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	info!("probe {:?}", arguments.input);

	let report = if arguments.point {
		describe_point(&read_point(&arguments.input)?)
	} else {
		describe_polygon(&read_polygon(&arguments.input)?)
	};
	print!("{report}");

	Ok(())
}

fn describe_point(point: &Point) -> String {
	format!(
		"shape:      {}\ndimensions: {}\nposition:   [{}, {}]\n",
		point.shape_type(),
		point.dimensions(),
		point.lon(),
		point.lat()
	)
}

fn describe_polygon(polygon: &Polygon) -> String {
	let centroid = polygon.centroid();
	let [x0, y0, x1, y1] = polygon.bound().as_array();

	format!(
		"shape:      {}\ndimensions: {}\ncentroid:   [{}, {}]\narea:       {}\nbound:      [{x0}, {y0}, {x1}, {y1}]\n",
		polygon.shape_type(),
		polygon.dimensions(),
		centroid.lon(),
		centroid.lat(),
		polygon.area()
	)
}

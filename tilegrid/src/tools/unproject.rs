use super::format_values;
use anyhow::{Result, ensure};
use tilegrid_core::TilingScheme;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Easting in meters
	#[arg(allow_negative_numbers = true)]
	x: f64,

	/// Northing in meters
	#[arg(allow_negative_numbers = true)]
	y: f64,
}

/// Prints `longitude latitude` in degrees.
pub fn run(arguments: &Subcommand, scheme: &TilingScheme) -> Result<String> {
	ensure!(
		!arguments.x.is_nan() && !arguments.y.is_nan(),
		"coordinates ({}, {}) must be numbers",
		arguments.x,
		arguments.y
	);
	let point = scheme.web_mercator_to_cartographic(arguments.x, arguments.y);
	Ok(format_values(&point.to_degrees()))
}

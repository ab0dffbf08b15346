use super::format_values;
use anyhow::{Result, ensure};
use tilegrid_core::{GeoPoint, TilingScheme};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Longitude in degrees
	#[arg(allow_negative_numbers = true)]
	longitude: f64,

	/// Latitude in degrees. The poles project to infinite or very large values.
	#[arg(allow_negative_numbers = true)]
	latitude: f64,
}

/// Prints `x y` in meters.
pub fn run(arguments: &Subcommand, scheme: &TilingScheme) -> Result<String> {
	ensure!(
		arguments.longitude.is_finite() && arguments.latitude.is_finite(),
		"coordinates ({}, {}) must be finite",
		arguments.longitude,
		arguments.latitude
	);
	let point = GeoPoint::from_degrees(arguments.longitude, arguments.latitude);
	let projected = scheme.cartographic_to_web_mercator(point.longitude, point.latitude);
	Ok(format_values(&projected.as_array()))
}

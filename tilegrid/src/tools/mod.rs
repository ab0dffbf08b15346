pub mod extent;
pub mod info;
pub mod project;
pub mod tile;
pub mod tiles;
pub mod unproject;

use anyhow::{Context, Result};
use tilegrid_core::GeoExtent;

/// A geographic extent given as four positional arguments in degrees.
#[derive(clap::Args, Debug)]
pub struct ExtentArguments {
	/// Western longitude in degrees
	#[arg(allow_negative_numbers = true)]
	pub west: f64,

	/// Southern latitude in degrees
	#[arg(allow_negative_numbers = true)]
	pub south: f64,

	/// Eastern longitude in degrees
	#[arg(allow_negative_numbers = true)]
	pub east: f64,

	/// Northern latitude in degrees
	#[arg(allow_negative_numbers = true)]
	pub north: f64,
}

impl ExtentArguments {
	pub fn to_extent(&self) -> Result<GeoExtent> {
		GeoExtent::from_degrees(self.west, self.south, self.east, self.north).with_context(|| {
			format!(
				"Invalid extent [{}, {}, {}, {}]",
				self.west, self.south, self.east, self.north
			)
		})
	}
}

/// Joins numbers with single spaces.
pub fn format_values(values: &[f64]) -> String {
	values.iter().map(f64::to_string).collect::<Vec<_>>().join(" ")
}

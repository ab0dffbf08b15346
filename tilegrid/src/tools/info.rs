use super::format_values;
use anyhow::Result;
use std::fmt::Write;
use tilegrid_core::TilingScheme;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Also print the grid size at this level
	#[arg(long)]
	level: Option<u8>,
}

pub fn run(arguments: &Subcommand, scheme: &TilingScheme) -> Result<String> {
	let mut output = String::new();
	writeln!(
		output,
		"level zero tiles: {} x {}",
		scheme.level_zero_tiles_x(),
		scheme.level_zero_tiles_y()
	)?;
	writeln!(output, "ellipsoid radius: {} m", scheme.projection().radius())?;
	writeln!(output, "extent: {}", format_values(&scheme.extent().as_degrees()))?;
	write!(output, "native extent: {}", format_values(&scheme.native_extent().as_array()))?;
	if let Some(level) = arguments.level {
		write!(
			output,
			"\nlevel {level}: {} x {} tiles",
			scheme.number_of_x_tiles_at_level(level)?,
			scheme.number_of_y_tiles_at_level(level)?
		)?;
	}
	Ok(output)
}

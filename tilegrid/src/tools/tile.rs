use super::ExtentArguments;
use anyhow::Result;
use tilegrid_core::TilingScheme;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Zoom level
	level: u8,

	#[command(flatten)]
	extent: ExtentArguments,

	/// Print the tile as JSON
	#[arg(long)]
	json: bool,
}

/// Prints the tile of the extent's northwest corner as `level/x/y`.
pub fn run(arguments: &Subcommand, scheme: &TilingScheme) -> Result<String> {
	let extent = arguments.extent.to_extent()?;
	let coord = scheme.extent_to_tile_xy(&extent, arguments.level)?;
	Ok(if arguments.json {
		coord.as_json()
	} else {
		coord.to_string()
	})
}

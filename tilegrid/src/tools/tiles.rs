use super::ExtentArguments;
use anyhow::{Result, ensure};
use tilegrid_core::TilingScheme;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Zoom level
	level: u8,

	#[command(flatten)]
	extent: ExtentArguments,

	/// Refuse to list more tiles than this
	#[arg(long, value_name = "N", default_value_t = 1_000_000)]
	max_tiles: u64,

	/// Print one JSON object per tile
	#[arg(long)]
	json: bool,
}

/// Prints every tile overlapping the extent, one per line, north to south and west to east.
///
/// Prints nothing if the extent lies beyond the polar limits of the grid.
pub fn run(arguments: &Subcommand, scheme: &TilingScheme) -> Result<String> {
	let extent = arguments.extent.to_extent()?;
	let Some(range) = scheme.extent_to_tile_range(&extent, arguments.level)? else {
		log::info!("{extent:?} lies outside the tiling scheme");
		return Ok(String::new());
	};
	ensure!(
		range.count_tiles() <= arguments.max_tiles,
		"extent covers {} tiles at level {}, more than --max-tiles ({})",
		range.count_tiles(),
		arguments.level,
		arguments.max_tiles
	);
	log::info!("listing {} tiles in {range:?}", range.count_tiles());

	let lines: Vec<String> = range
		.iter_coords()
		.map(|coord| {
			if arguments.json {
				coord.as_json()
			} else {
				coord.to_string()
			}
		})
		.collect();
	Ok(lines.join("\n"))
}

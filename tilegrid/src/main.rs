mod tools;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use std::path::PathBuf;
use tilegrid_core::{TilingScheme, TilingSchemeConfig};

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

	/// Path to a YAML file configuring the tiling scheme.
	/// Command line arguments will override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", global = true, display_order = 0)]
	config: Option<PathBuf>,

	/// Number of root tiles in east-west direction. Default: 2
	#[arg(long, value_name = "N", global = true, display_order = 1)]
	tiles_x: Option<u32>,

	/// Number of root tiles in north-south direction. Default: 1
	#[arg(long, value_name = "N", global = true, display_order = 1)]
	tiles_y: Option<u32>,

	/// Radius of the reference sphere in meters. Default: 6378137
	#[arg(long, value_name = "METERS", global = true, allow_negative_numbers = true, display_order = 2)]
	radius: Option<f64>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Project a longitude/latitude in degrees to Web Mercator meters
	Project(tools::project::Subcommand),

	/// Convert Web Mercator meters to longitude/latitude in degrees
	Unproject(tools::unproject::Subcommand),

	/// Find the tile containing the northwest corner of an extent
	Tile(tools::tile::Subcommand),

	/// Print the extent of a tile in degrees
	Extent(tools::extent::Subcommand),

	/// List all tiles overlapping an extent
	Tiles(tools::tiles::Subcommand),

	/// Show the tiling scheme
	Info(tools::info::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let scheme = build_scheme(&cli)?;
	let output = match &cli.command {
		Commands::Project(arguments) => tools::project::run(arguments, &scheme)?,
		Commands::Unproject(arguments) => tools::unproject::run(arguments, &scheme)?,
		Commands::Tile(arguments) => tools::tile::run(arguments, &scheme)?,
		Commands::Extent(arguments) => tools::extent::run(arguments, &scheme)?,
		Commands::Tiles(arguments) => tools::tiles::run(arguments, &scheme)?,
		Commands::Info(arguments) => tools::info::run(arguments, &scheme)?,
	};
	if !output.is_empty() {
		println!("{output}");
	}
	Ok(())
}

fn build_scheme(cli: &Cli) -> Result<TilingScheme> {
	let mut config = if let Some(path) = &cli.config {
		TilingSchemeConfig::from_path(path)?
	} else {
		TilingSchemeConfig::default()
	};
	config.override_optional_level_zero_tiles_x(cli.tiles_x);
	config.override_optional_level_zero_tiles_y(cli.tiles_y);
	config.override_optional_ellipsoid_radius(cli.radius);
	log::debug!("using {config:?}");

	TilingScheme::new(&config).context("Failed to set up the tiling scheme")
}

#[cfg(test)]
mod tests {
	use crate::{Cli, build_scheme, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["tilegrid"]).unwrap_err().to_string();
		assert!(err.starts_with("Web Mercator projection and quadtree tiling scheme"));
		assert!(err.contains("\nUsage: tilegrid [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["tilegrid", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("tilegrid "));
	}

	#[test]
	fn subcommands() {
		for (name, about) in [
			("project", "Project a longitude/latitude"),
			("unproject", "Convert Web Mercator meters"),
			("tile", "Find the tile containing"),
			("extent", "Print the extent of a tile"),
			("tiles", "List all tiles overlapping"),
		] {
			let err = run_command(vec!["tilegrid", name]).unwrap_err().to_string();
			assert!(err.starts_with(about), "{name}: {err}");
		}
	}

	#[test]
	fn info() {
		run_command(vec!["tilegrid", "info"]).unwrap();
	}

	#[test]
	fn overrides_after_subcommand() -> Result<()> {
		let cli = Cli::try_parse_from(["tilegrid", "info", "--tiles-x", "1", "--tiles-y", "3", "--radius", "1"])?;
		let scheme = build_scheme(&cli)?;
		assert_eq!(scheme.level_zero_tiles_x(), 1);
		assert_eq!(scheme.level_zero_tiles_y(), 3);
		assert_eq!(scheme.projection().radius(), 1.0);
		Ok(())
	}

	#[test]
	fn config_file_with_overrides() -> Result<()> {
		use std::io::Write;
		let mut file = tempfile::NamedTempFile::new()?;
		writeln!(file, "level_zero_tiles_x: 4\nlevel_zero_tiles_y: 4")?;
		let path = file.path().to_str().unwrap();
		let cli = Cli::try_parse_from(["tilegrid", "-c", path, "--tiles-y", "2", "info"])?;
		let scheme = build_scheme(&cli)?;
		assert_eq!(scheme.level_zero_tiles_x(), 4);
		assert_eq!(scheme.level_zero_tiles_y(), 2);
		Ok(())
	}

	#[test]
	fn invalid_config() {
		let err = run_command(vec!["tilegrid", "--tiles-x", "0", "info"]).unwrap_err();
		assert_eq!(err.to_string(), "Failed to set up the tiling scheme");
		assert_eq!(err.root_cause().to_string(), "level_zero_tiles_x (0) must be > 0");
	}
}

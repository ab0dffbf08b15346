use super::format_values;
use anyhow::Result;
use tilegrid_core::TilingScheme;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Zoom level
	level: u8,

	/// Column, counted eastward from the west edge
	x: u32,

	/// Row, counted southward from the north edge
	y: u32,

	/// Print the extent in Web Mercator meters instead of degrees
	#[arg(long)]
	native: bool,
}

/// Prints `west south east north`.
pub fn run(arguments: &Subcommand, scheme: &TilingScheme) -> Result<String> {
	let Subcommand { level, x, y, native } = *arguments;
	let values = if native {
		scheme.tile_xy_to_native_extent(x, y, level)?.as_array()
	} else {
		scheme.tile_xy_to_extent(x, y, level)?.as_degrees()
	};
	Ok(format_values(&values))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn arguments(level: u8, x: u32, y: u32, native: bool) -> Subcommand {
		Subcommand { level, x, y, native }
	}

	#[rstest]
	#[case(0, 0, 0, "-180 -85.0511287798066 0 85.0511287798066")]
	#[case(1, 1, 1, "-90 -85.0511287798066 0 0")]
	fn degrees(#[case] level: u8, #[case] x: u32, #[case] y: u32, #[case] expected: &str) -> Result<()> {
		assert_eq!(run(&arguments(level, x, y, false), &TilingScheme::default())?, expected);
		Ok(())
	}

	#[test]
	fn native() -> Result<()> {
		assert_eq!(
			run(&arguments(1, 1, 1, true), &TilingScheme::default())?,
			"-10018754.171394622 -20037508.342789244 0 0"
		);
		Ok(())
	}

	#[test]
	fn out_of_bounds() {
		let err = run(&arguments(0, 2, 0, false), &TilingScheme::default()).unwrap_err();
		assert_eq!(err.to_string(), "x (2) out of bounds for level 0 (columns: 2)");
	}
}

use predicates::{prelude::*, str};
use rstest::rstest;
use test_utilities::{tilegrid_cmd, write_config};

#[rstest]
#[case(&["project", "180", "0"], "20037508.342789244 ")]
#[case(&["project", "0", "-90"], "0 -inf\n")]
#[case(&["unproject", "0", "0"], "0 0\n")]
#[case(&["tile", "3", "13.4", "52.5", "13.5", "52.6"], "3/8/2\n")]
#[case(&["tile", "--json", "3", "13.4", "52.5", "13.5", "52.6"], "{\"z\":3,\"x\":8,\"y\":2}\n")]
#[case(&["extent", "0", "0", "0"], "-180 -85.0511287798066 0 85.0511287798066\n")]
#[case(&["extent", "--native", "1", "1", "1"], "-10018754.171394622 -20037508.342789244 0 0\n")]
#[case(&["tiles", "2", "-10", "-10", "10", "10"], "2/3/1\n2/4/1\n2/3/2\n2/4/2\n")]
#[case(&["info"], "level zero tiles: 2 x 1\n")]
fn output(#[case] args: &[&str], #[case] expected: &str) {
	tilegrid_cmd()
		.args(args)
		.assert()
		.success()
		.stdout(str::starts_with(expected));
}

#[test]
fn root_grid_from_flags() {
	tilegrid_cmd()
		.args(["--tiles-x", "1", "--tiles-y", "1", "extent", "0", "0", "0"])
		.assert()
		.success()
		.stdout(str::starts_with("-180 -85.0511287798066 180 85.0511287798066"));
}

#[test]
fn root_grid_from_config_file() {
	let config = write_config("level_zero_tiles_x: 4\nlevel_zero_tiles_y: 2\n");
	tilegrid_cmd()
		.args(["info", "--level", "1", "--config"])
		.arg(config.path())
		.assert()
		.success()
		.stdout(str::contains("level zero tiles: 4 x 2").and(str::contains("level 1: 8 x 4 tiles")));
}

#[test]
fn flags_override_config_file() {
	let config = write_config("level_zero_tiles_x: 4\nlevel_zero_tiles_y: 2\n");
	tilegrid_cmd()
		.arg("-c")
		.arg(config.path())
		.args(["--tiles-x", "3", "info"])
		.assert()
		.success()
		.stdout(str::contains("level zero tiles: 3 x 2"));
}

#[rstest]
#[case(&["extent", "0", "2", "0"], "x (2) out of bounds for level 0 (columns: 2)")]
#[case(&["extent", "0", "0", "1"], "y (1) out of bounds for level 0 (rows: 1)")]
#[case(&["extent", "40", "0", "0"], "level (40) must be <= 31")]
#[case(&["tile", "31", "0", "0", "1", "1"], "level (31) out of range")]
#[case(&["tile", "3", "10", "0", "5", "1"], "Invalid extent [10, 0, 5, 1]")]
#[case(&["tiles", "10", "-180", "-85", "180", "85", "--max-tiles", "10"], "more than --max-tiles (10)")]
#[case(&["--tiles-x", "0", "info"], "level_zero_tiles_x (0) must be > 0")]
#[case(&["--radius", "-1", "info"], "ellipsoid_radius (-1) must be a finite number > 0")]
fn errors(#[case] args: &[&str], #[case] message: &str) {
	tilegrid_cmd()
		.args(args)
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::starts_with("Error: ").and(str::contains(message)));
}

#[test]
fn unknown_config_field() {
	let config = write_config("tiles_x: 3\n");
	tilegrid_cmd()
		.arg("--config")
		.arg(config.path())
		.arg("info")
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("Failed to read config file").and(str::contains("unknown field `tiles_x`")));
}

#[test]
fn missing_config_file() {
	tilegrid_cmd()
		.args(["--config", "/does/not/exist.yaml", "info"])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("Failed to open config file"));
}

#[test]
fn polar_cap_lists_no_tiles() {
	tilegrid_cmd()
		.args(["tiles", "3", "10", "86", "20", "89"])
		.assert()
		.success()
		.stdout(str::is_empty());
}

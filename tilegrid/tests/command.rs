use predicates::str;
use rstest::rstest;
use test_utilities::{BINARY_NAME, tilegrid_cmd};

#[test]
fn command() {
	tilegrid_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("project", "[OPTIONS] <LONGITUDE> <LATITUDE>")]
#[case("unproject", "[OPTIONS] <X> <Y>")]
#[case("tile", "[OPTIONS] <LEVEL> <WEST> <SOUTH> <EAST> <NORTH>")]
#[case("extent", "[OPTIONS] <LEVEL> <X> <Y>")]
#[case("tiles", "[OPTIONS] <LEVEL> <WEST> <SOUTH> <EAST> <NORTH>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	tilegrid_cmd()
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[test]
fn unknown_subcommand() {
	tilegrid_cmd()
		.arg("convert")
		.assert()
		.failure()
		.code(2)
		.stderr(str::contains("unrecognized subcommand"));
}

#[test]
fn version() {
	tilegrid_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(str::starts_with("tilegrid "));
}

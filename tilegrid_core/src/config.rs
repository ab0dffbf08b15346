//! Configuration of a [`TilingScheme`](crate::TilingScheme).
//!
//! A config can be built in code, or loaded from YAML:
//!
//! ```yaml
//! level_zero_tiles_x: 1
//! level_zero_tiles_y: 1
//! ellipsoid_radius: 6378137
//! ```
//!
//! Omitted fields fall back to the defaults (2 × 1 root tiles on the WGS84
//! sphere). Unknown fields are rejected.

use crate::{DEFAULT_LEVEL_ZERO_TILES_X, DEFAULT_LEVEL_ZERO_TILES_Y, EARTH_RADIUS};
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct TilingSchemeConfig {
	/// Number of root tiles in east-west direction.
	pub level_zero_tiles_x: u32,

	/// Number of root tiles in north-south direction.
	pub level_zero_tiles_y: u32,

	/// Radius of the reference sphere in meters.
	pub ellipsoid_radius: f64,
}

impl TilingSchemeConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		serde_yaml_ng::from_reader(reader).context("Failed to parse tiling scheme config")
	}

	pub fn from_string(text: &str) -> Result<Self> {
		serde_yaml_ng::from_str(text).context("Failed to parse tiling scheme config")
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open config file {path:?}"))?;
		TilingSchemeConfig::from_reader(BufReader::new(file)).with_context(|| format!("Failed to read config file {path:?}"))
	}

	/// Validates the values, failing on the first invalid field.
	pub fn check(&self) -> Result<()> {
		ensure!(
			self.level_zero_tiles_x > 0,
			"level_zero_tiles_x ({}) must be > 0",
			self.level_zero_tiles_x
		);
		ensure!(
			self.level_zero_tiles_y > 0,
			"level_zero_tiles_y ({}) must be > 0",
			self.level_zero_tiles_y
		);
		ensure!(
			self.ellipsoid_radius.is_finite() && self.ellipsoid_radius > 0.0,
			"ellipsoid_radius ({}) must be a finite number > 0",
			self.ellipsoid_radius
		);
		Ok(())
	}

	pub fn override_optional_level_zero_tiles_x(&mut self, level_zero_tiles_x: Option<u32>) {
		if let Some(value) = level_zero_tiles_x {
			self.level_zero_tiles_x = value;
		}
	}

	pub fn override_optional_level_zero_tiles_y(&mut self, level_zero_tiles_y: Option<u32>) {
		if let Some(value) = level_zero_tiles_y {
			self.level_zero_tiles_y = value;
		}
	}

	pub fn override_optional_ellipsoid_radius(&mut self, ellipsoid_radius: Option<f64>) {
		if let Some(value) = ellipsoid_radius {
			self.ellipsoid_radius = value;
		}
	}
}

impl Default for TilingSchemeConfig {
	fn default() -> Self {
		Self {
			level_zero_tiles_x: DEFAULT_LEVEL_ZERO_TILES_X,
			level_zero_tiles_y: DEFAULT_LEVEL_ZERO_TILES_Y,
			ellipsoid_radius: EARTH_RADIUS,
		}
	}
}

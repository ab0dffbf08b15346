use super::GeoPoint;
use anyhow::{Result, ensure};
use std::{
	f64::consts::{FRAC_PI_2, PI},
	fmt::{self, Debug},
};

/// A rectangular geographic region, with all edges in **radians**.
///
/// The extent is an immutable value defined by four edges:
/// - `west`: minimum longitude,
/// - `south`: minimum latitude,
/// - `east`: maximum longitude,
/// - `north`: maximum latitude.
///
/// [`GeoExtent::new`] guarantees `-PI <= west < east <= PI` and
/// `-PI/2 <= south < north <= PI/2`.
///
/// # Examples
/// ```
/// use tilegrid_core::GeoExtent;
///
/// let extent = GeoExtent::new(-1.0, -0.5, 1.0, 0.5).unwrap();
/// assert_eq!(extent.as_array(), [-1.0, -0.5, 1.0, 0.5]);
/// assert_eq!(extent.width(), 2.0);
///
/// assert!(GeoExtent::new(1.0, -0.5, -1.0, 0.5).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoExtent {
	west: f64,
	south: f64,
	east: f64,
	north: f64,
}

impl GeoExtent {
	/// Creates a new extent from `west, south, east, north` in radians.
	///
	/// # Errors
	/// Returns an error if an edge is not finite, lies outside the globe, or if
	/// the extent is empty (`west >= east` or `south >= north`).
	pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<GeoExtent> {
		GeoExtent {
			west,
			south,
			east,
			north,
		}
		.checked()
	}

	/// Creates a new extent from `west, south, east, north` in degrees.
	pub fn from_degrees(west: f64, south: f64, east: f64, north: f64) -> Result<GeoExtent> {
		GeoExtent::new(
			west.to_radians(),
			south.to_radians(),
			east.to_radians(),
			north.to_radians(),
		)
	}

	/// Builds an extent whose edges are already known to be valid.
	pub(crate) const fn from_edges(west: f64, south: f64, east: f64, north: f64) -> GeoExtent {
		GeoExtent {
			west,
			south,
			east,
			north,
		}
	}

	pub fn west(&self) -> f64 {
		self.west
	}

	pub fn south(&self) -> f64 {
		self.south
	}

	pub fn east(&self) -> f64 {
		self.east
	}

	pub fn north(&self) -> f64 {
		self.north
	}

	/// East-west size in radians.
	pub fn width(&self) -> f64 {
		self.east - self.west
	}

	/// North-south size in radians.
	pub fn height(&self) -> f64 {
		self.north - self.south
	}

	/// The northwest corner. Tiles are numbered starting from this corner.
	pub fn northwest(&self) -> GeoPoint {
		GeoPoint::new(self.west, self.north)
	}

	pub fn southeast(&self) -> GeoPoint {
		GeoPoint::new(self.east, self.south)
	}

	/// The geographic center, i.e. the mean of opposite edges.
	pub fn center(&self) -> GeoPoint {
		GeoPoint::new(
			(self.west + self.east) / 2.0,
			(self.south + self.north) / 2.0,
		)
	}

	/// Returns `true` if `point` lies inside the extent, edges included.
	pub fn contains_point(&self, point: &GeoPoint) -> bool {
		point.longitude >= self.west
			&& point.longitude <= self.east
			&& point.latitude >= self.south
			&& point.latitude <= self.north
	}

	/// Returns the extent as `[west, south, east, north]` in radians.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}

	/// Returns the extent as `[west, south, east, north]` in degrees.
	#[must_use]
	pub fn as_degrees(&self) -> [f64; 4] {
		self.as_array().map(f64::to_degrees)
	}

	fn checked(self) -> Result<Self> {
		for (name, value) in [
			("west", self.west),
			("south", self.south),
			("east", self.east),
			("north", self.north),
		] {
			ensure!(value.is_finite(), "{name} ({value}) must be finite");
		}
		ensure!(self.west >= -PI, "west ({}) must be >= -PI", self.west);
		ensure!(self.east <= PI, "east ({}) must be <= PI", self.east);
		ensure!(self.south >= -FRAC_PI_2, "south ({}) must be >= -PI/2", self.south);
		ensure!(self.north <= FRAC_PI_2, "north ({}) must be <= PI/2", self.north);
		ensure!(
			self.west < self.east,
			"west ({}) must be < east ({})",
			self.west,
			self.east
		);
		ensure!(
			self.south < self.north,
			"south ({}) must be < north ({})",
			self.south,
			self.north
		);
		Ok(self)
	}
}

impl Debug for GeoExtent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"GeoExtent({}, {}, {}, {})",
			self.west, self.south, self.east, self.north
		)
	}
}

impl TryFrom<[f64; 4]> for GeoExtent {
	type Error = anyhow::Error;

	/// Converts `[west, south, east, north]` in radians into a `GeoExtent`.
	fn try_from(input: [f64; 4]) -> Result<Self> {
		GeoExtent::new(input[0], input[1], input[2], input[3])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[test]
	fn creation_and_getters() {
		let extent = GeoExtent::new(-1.0, -0.5, 1.0, 0.25).unwrap();
		assert_eq!(extent.west(), -1.0);
		assert_eq!(extent.south(), -0.5);
		assert_eq!(extent.east(), 1.0);
		assert_eq!(extent.north(), 0.25);
		assert_eq!(extent.width(), 2.0);
		assert_eq!(extent.height(), 0.75);
	}

	#[test]
	fn whole_globe_is_valid() {
		let extent = GeoExtent::new(-PI, -FRAC_PI_2, PI, FRAC_PI_2).unwrap();
		assert_eq!(extent.as_array(), [-PI, -FRAC_PI_2, PI, FRAC_PI_2]);
	}

	#[rstest]
	#[case([-4.0, -0.5, 1.0, 0.5], "west (-4) must be >= -PI")]
	#[case([-1.0, -0.5, 4.0, 0.5], "east (4) must be <= PI")]
	#[case([-1.0, -2.0, 1.0, 0.5], "south (-2) must be >= -PI/2")]
	#[case([-1.0, -0.5, 1.0, 2.0], "north (2) must be <= PI/2")]
	#[case([1.0, -0.5, -1.0, 0.5], "west (1) must be < east (-1)")]
	#[case([1.0, -0.5, 1.0, 0.5], "west (1) must be < east (1)")]
	#[case([-1.0, 0.5, 1.0, -0.5], "south (0.5) must be < north (-0.5)")]
	#[case([f64::NAN, -0.5, 1.0, 0.5], "west (NaN) must be finite")]
	#[case([-1.0, -0.5, f64::INFINITY, 0.5], "east (inf) must be finite")]
	fn invalid_extents(#[case] input: [f64; 4], #[case] message: &str) {
		let err = GeoExtent::try_from(input).unwrap_err();
		assert_eq!(err.to_string(), message);
	}

	#[test]
	fn from_degrees() {
		let extent = GeoExtent::from_degrees(-180.0, -45.0, 90.0, 45.0).unwrap();
		assert_relative_eq!(extent.west(), -PI, max_relative = 1e-15);
		assert_relative_eq!(extent.east(), FRAC_PI_2, max_relative = 1e-15);
		let degrees = extent.as_degrees();
		assert_relative_eq!(degrees[1], -45.0, max_relative = 1e-14);
		assert_relative_eq!(degrees[3], 45.0, max_relative = 1e-14);
	}

	#[test]
	fn corners_and_center() {
		let extent = GeoExtent::new(-1.0, -0.5, 2.0, 0.75).unwrap();
		assert_eq!(extent.northwest(), GeoPoint::new(-1.0, 0.75));
		assert_eq!(extent.southeast(), GeoPoint::new(2.0, -0.5));
		assert_eq!(extent.center(), GeoPoint::new(0.5, 0.125));
	}

	#[rstest]
	#[case(0.0, 0.0, true)]
	#[case(-1.0, 0.5, true)]
	#[case(1.0, -0.5, true)]
	#[case(1.1, 0.0, false)]
	#[case(0.0, -0.6, false)]
	fn contains_point(#[case] lon: f64, #[case] lat: f64, #[case] expected: bool) {
		let extent = GeoExtent::new(-1.0, -0.5, 1.0, 0.5).unwrap();
		assert_eq!(extent.contains_point(&GeoPoint::new(lon, lat)), expected);
	}

	#[test]
	fn debug_format() {
		let extent = GeoExtent::new(-1.0, -0.5, 1.0, 0.5).unwrap();
		assert_eq!(format!("{extent:?}"), "GeoExtent(-1, -0.5, 1, 0.5)");
	}
}

use anyhow::{Result, ensure};
use std::fmt::{self, Debug};

/// A point in the Web Mercator plane, in meters on the reference sphere.
///
/// `y` grows without bound towards the poles and may be infinite for a
/// projected pole.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct MercatorPoint {
	pub x: f64,
	pub y: f64,
}

impl MercatorPoint {
	pub const fn new(x: f64, y: f64) -> MercatorPoint {
		MercatorPoint { x, y }
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		[self.x, self.y]
	}
}

impl Debug for MercatorPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "MercatorPoint({}, {})", self.x, self.y)
	}
}

/// An axis-aligned rectangle in the Web Mercator plane, in meters.
///
/// Edges are stored as `x_min` (west), `y_min` (south), `x_max` (east) and
/// `y_max` (north).
///
/// # Examples
/// ```
/// use tilegrid_core::MercatorExtent;
///
/// let extent = MercatorExtent::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// assert_eq!(extent.width(), 20.0);
/// assert_eq!(extent.height(), 10.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct MercatorExtent {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl MercatorExtent {
	/// # Errors
	/// Returns an error if `x_min > x_max` or `y_min > y_max`. NaN edges are rejected as well.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<MercatorExtent> {
		ensure!(x_min <= x_max, "x_min ({x_min}) must be <= x_max ({x_max})");
		ensure!(y_min <= y_max, "y_min ({y_min}) must be <= y_max ({y_max})");
		Ok(MercatorExtent {
			x_min,
			y_min,
			x_max,
			y_max,
		})
	}

	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}

	pub fn northwest(&self) -> MercatorPoint {
		MercatorPoint::new(self.x_min, self.y_max)
	}

	pub fn southeast(&self) -> MercatorPoint {
		MercatorPoint::new(self.x_max, self.y_min)
	}

	/// Returns `[x_min, y_min, x_max, y_max]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}
}

impl Debug for MercatorExtent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"MercatorExtent({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

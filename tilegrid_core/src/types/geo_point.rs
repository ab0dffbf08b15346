use std::fmt::{self, Debug};

/// A geographic position, longitude and latitude in **radians**.
///
/// No range is enforced: projection formulas accept any value and poles are a
/// documented singularity of the Web Mercator projection. Valid positions on the
/// globe satisfy `-PI <= longitude <= PI` and `-PI/2 <= latitude <= PI/2`.
///
/// # Examples
/// ```
/// use tilegrid_core::GeoPoint;
///
/// let point = GeoPoint::from_degrees(90.0, -45.0);
/// assert!((point.longitude - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// assert!((point.latitude + std::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
	/// Longitude in radians, positive eastward.
	pub longitude: f64,
	/// Latitude in radians, positive northward.
	pub latitude: f64,
}

impl GeoPoint {
	pub const fn new(longitude: f64, latitude: f64) -> GeoPoint {
		GeoPoint { longitude, latitude }
	}

	/// Creates a point from longitude/latitude given in degrees.
	pub fn from_degrees(longitude: f64, latitude: f64) -> GeoPoint {
		GeoPoint {
			longitude: longitude.to_radians(),
			latitude: latitude.to_radians(),
		}
	}

	/// Returns `[longitude, latitude]` in degrees.
	#[must_use]
	pub fn to_degrees(&self) -> [f64; 2] {
		[self.longitude.to_degrees(), self.latitude.to_degrees()]
	}

	/// Returns `[longitude, latitude]` in radians.
	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		[self.longitude, self.latitude]
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "GeoPoint({}, {})", self.longitude, self.latitude)
	}
}

impl From<[f64; 2]> for GeoPoint {
	fn from(value: [f64; 2]) -> Self {
		GeoPoint::new(value[0], value[1])
	}
}

//! Spherical Web Mercator projection (EPSG:3857).
//!
//! Longitude maps linearly to `x`, latitude goes through the inverse
//! Gudermannian function to `y`. Both axes are scaled by the sphere radius, so
//! projected coordinates are meters on the reference sphere.
//!
//! The poles are a singularity: projecting latitude `-PI/2` yields `y = -∞`.
//! Projecting `+PI/2` yields a large *finite* value (about `2.38e8` meters on
//! the earth sphere), because the nearest `f64` to `PI/2` is slightly smaller
//! than `PI/2` and its tangent is finite. Callers must accept both.

use crate::{EARTH_RADIUS, GeoExtent, GeoPoint, MercatorExtent, MercatorPoint};
use anyhow::{Result, ensure};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Forward and inverse Web Mercator projection on a sphere of fixed radius.
///
/// # Examples
/// ```
/// use tilegrid_core::{GeoPoint, WebMercatorProjection};
///
/// let projection = WebMercatorProjection::default();
/// let point = projection.project(&GeoPoint::from_degrees(180.0, 0.0));
/// assert!((point.x - 20_037_508.342789244).abs() < 1e-6);
/// assert!(point.y.abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebMercatorProjection {
	radius: f64,
}

impl WebMercatorProjection {
	/// # Errors
	/// Returns an error unless `radius` is finite and positive.
	pub fn new(radius: f64) -> Result<WebMercatorProjection> {
		ensure!(
			radius.is_finite() && radius > 0.0,
			"ellipsoid_radius ({radius}) must be a finite number > 0"
		);
		Ok(WebMercatorProjection { radius })
	}

	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Half the side length of the square projected world, `PI * radius`.
	pub fn half_world_size(&self) -> f64 {
		PI * self.radius
	}

	/// Converts geographic radians to projected meters.
	///
	/// `x = radius * longitude`, `y = radius * ln(tan(PI/4 + latitude/2))`.
	/// Longitude is not wrapped and latitude is not clamped.
	pub fn project(&self, point: &GeoPoint) -> MercatorPoint {
		MercatorPoint::new(
			point.longitude * self.radius,
			self.radius * (FRAC_PI_4 + point.latitude / 2.0).tan().ln(),
		)
	}

	/// Converts projected meters back to geographic radians.
	///
	/// `longitude = x / radius`, `latitude = PI/2 - 2 * atan(exp(-y / radius))`.
	pub fn unproject(&self, point: &MercatorPoint) -> GeoPoint {
		GeoPoint::new(
			point.x / self.radius,
			FRAC_PI_2 - 2.0 * (-point.y / self.radius).exp().atan(),
		)
	}

	/// Projects the corners of a geographic extent.
	pub fn project_extent(&self, extent: &GeoExtent) -> MercatorExtent {
		let southwest = self.project(&GeoPoint::new(extent.west(), extent.south()));
		let northeast = self.project(&GeoPoint::new(extent.east(), extent.north()));
		MercatorExtent {
			x_min: southwest.x,
			y_min: southwest.y,
			x_max: northeast.x,
			y_max: northeast.y,
		}
	}
}

impl Default for WebMercatorProjection {
	fn default() -> Self {
		WebMercatorProjection { radius: EARTH_RADIUS }
	}
}

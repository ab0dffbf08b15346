//! Geographic and Web Mercator constants shared by the tiling scheme.

/// WGS84 semi-major axis (equatorial radius) in meters.
///
/// This is the sphere radius used by EPSG:3857, so that the projected square
/// spans `±20_037_508.342789…` meters on both axes.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Number of root tiles in east-west direction of the default scheme.
pub const DEFAULT_LEVEL_ZERO_TILES_X: u32 = 2;

/// Number of root tiles in north-south direction of the default scheme.
pub const DEFAULT_LEVEL_ZERO_TILES_Y: u32 = 1;

/// Deepest level a [`TileCoord`](crate::TileCoord) can address.
///
/// Column and row counts are stored as `u32`, so `2^level` must fit.
pub const MAX_LEVEL: u8 = 31;

/// Maximum latitude in degrees reachable by the square Web Mercator plane.
///
/// Equals `atan(sinh(PI))` in degrees.
pub const MAX_LAT_DEGREES: f64 = 85.051_128_779_806_59;

//! The Web Mercator tiling scheme.
//!
//! The projected world is the square `[-PI * r, PI * r]²`. At level 0 it is cut
//! into `level_zero_tiles_x × level_zero_tiles_y` root tiles, and every deeper
//! level splits each tile into 2 × 2 children. Columns are counted eastward
//! from the west edge, rows southward from the north edge.
//!
//! # Tile boundaries
//!
//! Positions are converted to fractional tile units before they are turned
//! into indices. A position lying on a boundary (within a tolerance of
//! [`SNAP_TOLERANCE`] times the projected world width) belongs to the tile that
//! *starts* there, i.e. the eastern or southern neighbour. The tolerance
//! absorbs the rounding error of a projection round trip, so that
//! `extent_to_tile_xy(tile_xy_to_extent(tile))` returns `tile` at every level.
//! Indices are finally clamped into the grid.


use crate::{
	GeoExtent, GeoPoint, MercatorExtent, MercatorPoint, TileCoord, TileRange, TilingSchemeConfig, WebMercatorProjection,
};
use anyhow::{Context, Result, ensure};
use std::f64::consts::PI;

/// Boundary snapping distance, as a fraction of the projected world width.
pub const SNAP_TOLERANCE: f64 = 1e-13;

/// A quadtree of tiles over the Web Mercator plane.
///
/// The scheme is an immutable value. All methods are pure and may be called
/// concurrently from any number of threads.
///
/// # Examples
/// ```
/// use tilegrid_core::TilingScheme;
///
/// let scheme = TilingScheme::default();
/// assert_eq!(scheme.level_zero_tiles_x(), 2);
/// assert_eq!(scheme.level_zero_tiles_y(), 1);
///
/// let extent = scheme.tile_xy_to_extent(3, 1, 2).unwrap();
/// let tile = scheme.extent_to_tile_xy(&extent, 2).unwrap();
/// assert_eq!((tile.x, tile.y), (3, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilingScheme {
	level_zero_tiles_x: u32,
	level_zero_tiles_y: u32,
	projection: WebMercatorProjection,
	extent: GeoExtent,
	native_extent: MercatorExtent,
}

impl TilingScheme {
	/// Creates a tiling scheme from a validated configuration.
	///
	/// # Errors
	/// Returns an error if a root tile count is zero or the radius is not a
	/// finite positive number.
	pub fn new(config: &TilingSchemeConfig) -> Result<TilingScheme> {
		config.check().context("Invalid tiling scheme config")?;
		let projection = WebMercatorProjection::new(config.ellipsoid_radius)?;
		let scheme = TilingScheme::build(config.level_zero_tiles_x, config.level_zero_tiles_y, projection);
		log::debug!(
			"tiling scheme: {}x{} root tiles, radius {} m, extent {:?}",
			scheme.level_zero_tiles_x,
			scheme.level_zero_tiles_y,
			projection.radius(),
			scheme.extent
		);
		Ok(scheme)
	}

	/// Creates a scheme on the default sphere with the given root grid.
	pub fn with_level_zero_tiles(level_zero_tiles_x: u32, level_zero_tiles_y: u32) -> Result<TilingScheme> {
		TilingScheme::new(&TilingSchemeConfig {
			level_zero_tiles_x,
			level_zero_tiles_y,
			..TilingSchemeConfig::default()
		})
	}

	fn build(level_zero_tiles_x: u32, level_zero_tiles_y: u32, projection: WebMercatorProjection) -> TilingScheme {
		let half = projection.half_world_size();
		let native_extent = MercatorExtent {
			x_min: -half,
			y_min: -half,
			x_max: half,
			y_max: half,
		};
		let south = projection.unproject(&native_extent.southeast()).latitude;
		let north = projection.unproject(&native_extent.northwest()).latitude;
		TilingScheme {
			level_zero_tiles_x,
			level_zero_tiles_y,
			projection,
			extent: GeoExtent::from_edges(-PI, south, PI, north),
			native_extent,
		}
	}

	pub fn level_zero_tiles_x(&self) -> u32 {
		self.level_zero_tiles_x
	}

	pub fn level_zero_tiles_y(&self) -> u32 {
		self.level_zero_tiles_y
	}

	/// The geographic area covered by the root tiles:
	/// longitude `±PI` and latitude `±85.0511…°`.
	pub fn extent(&self) -> GeoExtent {
		self.extent
	}

	/// The root area in projected meters, `±PI * radius` on both axes.
	pub fn native_extent(&self) -> MercatorExtent {
		self.native_extent
	}

	pub fn projection(&self) -> &WebMercatorProjection {
		&self.projection
	}

	/// The configuration this scheme was built from.
	pub fn config(&self) -> TilingSchemeConfig {
		TilingSchemeConfig {
			level_zero_tiles_x: self.level_zero_tiles_x,
			level_zero_tiles_y: self.level_zero_tiles_y,
			ellipsoid_radius: self.projection.radius(),
		}
	}

	/// Number of columns at `level`, `level_zero_tiles_x * 2^level`.
	///
	/// # Errors
	/// Returns an error if the count does not fit in a `u32`.
	pub fn number_of_x_tiles_at_level(&self, level: u8) -> Result<u32> {
		tiles_at_level(self.level_zero_tiles_x, level).with_context(|| {
			format!(
				"level ({level}) out of range: {} root columns overflow the tile index range",
				self.level_zero_tiles_x
			)
		})
	}

	/// Number of rows at `level`, `level_zero_tiles_y * 2^level`.
	///
	/// # Errors
	/// Returns an error if the count does not fit in a `u32`.
	pub fn number_of_y_tiles_at_level(&self, level: u8) -> Result<u32> {
		tiles_at_level(self.level_zero_tiles_y, level).with_context(|| {
			format!(
				"level ({level}) out of range: {} root rows overflow the tile index range",
				self.level_zero_tiles_y
			)
		})
	}

	/// Validates that `coord` lies inside the grid of its level.
	pub fn check_coord(&self, coord: &TileCoord) -> Result<()> {
		let (columns, rows) = self.grid_size(coord.level)?;
		ensure!(
			coord.x < columns,
			"x ({}) out of bounds for level {} (columns: {columns})",
			coord.x,
			coord.level
		);
		ensure!(
			coord.y < rows,
			"y ({}) out of bounds for level {} (rows: {rows})",
			coord.y,
			coord.level
		);
		Ok(())
	}

	/// Projects `longitude`/`latitude` in radians to Web Mercator meters.
	///
	/// See [`WebMercatorProjection::project`] for the behaviour at the poles.
	pub fn cartographic_to_web_mercator(&self, longitude: f64, latitude: f64) -> MercatorPoint {
		self.projection.project(&GeoPoint::new(longitude, latitude))
	}

	/// Converts Web Mercator meters back to longitude/latitude in radians.
	pub fn web_mercator_to_cartographic(&self, x: f64, y: f64) -> GeoPoint {
		self.projection.unproject(&MercatorPoint::new(x, y))
	}

	/// Projects a geographic extent into Web Mercator meters.
	pub fn extent_to_native_extent(&self, extent: &GeoExtent) -> MercatorExtent {
		self.projection.project_extent(extent)
	}

	/// Finds the tile whose cell contains the northwest corner of `extent`.
	///
	/// Corners outside the root extent are clamped to the nearest tile.
	pub fn extent_to_tile_xy(&self, extent: &GeoExtent, level: u8) -> Result<TileCoord> {
		let (columns, rows) = self.grid_size(level)?;
		let anchor = self.projection.project(&extent.northwest());
		let coord = TileCoord::new(
			level,
			first_index(self.column_position(anchor.x, columns), columns),
			first_index(self.row_position(anchor.y, rows), rows),
		)?;
		log::trace!("extent {extent:?} at level {level} -> {coord:?}");
		Ok(coord)
	}

	/// The rectangle of tile (`x`, `y`, `level`) in projected meters.
	///
	/// # Errors
	/// Returns an error if the tile lies outside the grid.
	pub fn tile_xy_to_native_extent(&self, x: u32, y: u32, level: u8) -> Result<MercatorExtent> {
		self.check_coord(&TileCoord::new(level, x, y)?)?;
		let (columns, rows) = self.grid_size(level)?;
		let (tile_width, tile_height) = self.tile_size(columns, rows);
		let root = &self.native_extent;
		MercatorExtent::new(
			root.x_min + f64::from(x) * tile_width,
			root.y_max - f64::from(y + 1) * tile_height,
			root.x_min + f64::from(x + 1) * tile_width,
			root.y_max - f64::from(y) * tile_height,
		)
	}

	/// The geographic extent of tile (`x`, `y`, `level`).
	///
	/// Longitude is linear in `x`, so the west and east edges are computed
	/// directly in radians. Latitudes are unprojected from the tile's native
	/// extent. Neighbouring tiles share their edges exactly.
	///
	/// # Errors
	/// Returns an error if the tile lies outside the grid.
	pub fn tile_xy_to_extent(&self, x: u32, y: u32, level: u8) -> Result<GeoExtent> {
		let native = self.tile_xy_to_native_extent(x, y, level)?;
		let tile_angle = self.extent.width() / f64::from(self.number_of_x_tiles_at_level(level)?);
		let west = self.extent.west() + f64::from(x) * tile_angle;
		let east = self.extent.west() + f64::from(x + 1) * tile_angle;
		let south = self.projection.unproject(&native.southeast()).latitude;
		let north = self.projection.unproject(&native.northwest()).latitude;
		let extent = GeoExtent::new(west.clamp(-PI, PI), south, east.clamp(-PI, PI), north)?;
		log::trace!("tile {level}/{x}/{y} -> {extent:?}");
		Ok(extent)
	}

	/// Finds the tile containing `point`.
	///
	/// Returns `None` if the point lies outside the root [`extent`](Self::extent).
	pub fn position_to_tile_xy(&self, point: &GeoPoint, level: u8) -> Result<Option<TileCoord>> {
		let (columns, rows) = self.grid_size(level)?;
		if !self.extent.contains_point(point) {
			return Ok(None);
		}
		let projected = self.projection.project(point);
		Ok(Some(TileCoord::new(
			level,
			first_index(self.column_position(projected.x, columns), columns),
			first_index(self.row_position(projected.y, rows), rows),
		)?))
	}

	/// All tiles at `level` that overlap `extent`.
	///
	/// The northwest corner is resolved like [`extent_to_tile_xy`](Self::extent_to_tile_xy).
	/// The east and south edges are exclusive: a tile starting exactly at them is not included.
	/// Returns `None` if the extent lies entirely north or south of the root [`extent`](Self::extent).
	pub fn extent_to_tile_range(&self, extent: &GeoExtent, level: u8) -> Result<Option<TileRange>> {
		let (columns, rows) = self.grid_size(level)?;
		if extent.south() >= self.extent.north() || extent.north() <= self.extent.south() {
			log::trace!("extent {extent:?} at level {level} lies outside the grid");
			return Ok(None);
		}
		let native = self.projection.project_extent(extent);
		let (northwest, southeast) = (native.northwest(), native.southeast());
		let x_min = first_index(self.column_position(northwest.x, columns), columns);
		let y_min = first_index(self.row_position(northwest.y, rows), rows);
		let x_max = last_index(self.column_position(southeast.x, columns), columns).max(x_min);
		let y_max = last_index(self.row_position(southeast.y, rows), rows).max(y_min);
		let range = TileRange::from_min_and_max(level, x_min, y_min, x_max, y_max)?;
		log::trace!("extent {extent:?} at level {level} -> {range:?}");
		Ok(Some(range))
	}

	/// Every tile of `level`.
	pub fn full_range(&self, level: u8) -> Result<TileRange> {
		let (columns, rows) = self.grid_size(level)?;
		TileRange::from_min_and_max(level, 0, 0, columns - 1, rows - 1)
	}

	fn grid_size(&self, level: u8) -> Result<(u32, u32)> {
		Ok((
			self.number_of_x_tiles_at_level(level)?,
			self.number_of_y_tiles_at_level(level)?,
		))
	}

	fn tile_size(&self, columns: u32, rows: u32) -> (f64, f64) {
		(
			self.native_extent.width() / f64::from(columns),
			self.native_extent.height() / f64::from(rows),
		)
	}

	/// Fractional column of a projected `x`, counted from the west edge.
	fn column_position(&self, x: f64, columns: u32) -> f64 {
		let tile_width = self.native_extent.width() / f64::from(columns);
		snap((x - self.native_extent.x_min) / tile_width, columns)
	}

	/// Fractional row of a projected `y`, counted from the north edge.
	fn row_position(&self, y: f64, rows: u32) -> f64 {
		let tile_height = self.native_extent.height() / f64::from(rows);
		snap((self.native_extent.y_max - y) / tile_height, rows)
	}
}

impl Default for TilingScheme {
	/// 2 × 1 root tiles on the WGS84 sphere.
	fn default() -> Self {
		let config = TilingSchemeConfig::default();
		TilingScheme::build(
			config.level_zero_tiles_x,
			config.level_zero_tiles_y,
			WebMercatorProjection::default(),
		)
	}
}

fn tiles_at_level(level_zero_tiles: u32, level: u8) -> Option<u32> {
	1u32
		.checked_shl(u32::from(level))
		.and_then(|factor| level_zero_tiles.checked_mul(factor))
}

/// Moves a fractional tile position onto the nearest boundary if it is within tolerance.
fn snap(position: f64, count: u32) -> f64 {
	let boundary = position.round();
	if (position - boundary).abs() <= SNAP_TOLERANCE * f64::from(count) {
		boundary
	} else {
		position
	}
}

/// Index of the tile starting at or before `position`.
fn first_index(position: f64, count: u32) -> u32 {
	clamp_index(position.floor(), count)
}

/// Index of the last tile touched by a span ending at `position`.
fn last_index(position: f64, count: u32) -> u32 {
	clamp_index(position.ceil() - 1.0, count)
}

/// NaN maps to 0, infinities to the outermost tiles.
fn clamp_index(index: f64, count: u32) -> u32 {
	index.clamp(0.0, f64::from(count - 1)) as u32
}

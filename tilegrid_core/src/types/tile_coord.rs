//! Tile indices in a quadtree pyramid
//!
//! A [`TileCoord`] addresses one tile by `level`, column `x` and row `y`.
//! Columns grow eastward and rows grow southward, so `(0, 0)` is the
//! northwest-most tile of every level.
//!
//! Whether a coordinate lies inside the grid depends on the number of root
//! tiles, which is a property of the [`TilingScheme`](crate::TilingScheme);
//! use [`TilingScheme::check_coord`](crate::TilingScheme::check_coord) for that.
//!
//! # Examples
//!
//! ```
//! use tilegrid_core::TileCoord;
//!
//! let coord = TileCoord::new(5, 6, 7).unwrap();
//! let [nw, ne, sw, se] = coord.children().unwrap();
//! assert_eq!((nw.level, nw.x, nw.y), (6, 12, 14));
//! assert_eq!((se.level, se.x, se.y), (6, 13, 15));
//! assert_eq!(se.parent().unwrap(), coord);
//! ```

use super::MAX_LEVEL;
use anyhow::{Result, bail, ensure};
use std::fmt::{self, Debug, Display};

/// A tile index: zoom `level`, column `x` and row `y`.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile, 0 is the root.
	pub level: u8,
	/// The column, counted eastward from the west edge.
	pub x: u32,
	/// The row, counted southward from the north edge.
	pub y: u32,
}

impl TileCoord {
	/// Create a new `TileCoord`.
	///
	/// # Errors
	/// Returns an error if `level` > [`MAX_LEVEL`].
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		Ok(TileCoord { level, x, y })
	}

	/// The four tiles covering this one at `level + 1`, ordered
	/// northwest, northeast, southwest, southeast.
	///
	/// # Errors
	/// Returns an error if the tile already sits at [`MAX_LEVEL`] or the indices overflow.
	pub fn children(&self) -> Result<[TileCoord; 4]> {
		ensure!(
			self.level < MAX_LEVEL,
			"cannot increase level beyond {MAX_LEVEL}"
		);
		let level = self.level + 1;
		let (x, y) = (self.x.checked_mul(2), self.y.checked_mul(2));
		let (Some(x), Some(y)) = (x, y) else {
			bail!("children of {self:?} overflow the tile index range");
		};
		Ok([
			TileCoord { level, x, y },
			TileCoord { level, x: x + 1, y },
			TileCoord { level, x, y: y + 1 },
			TileCoord {
				level,
				x: x + 1,
				y: y + 1,
			},
		])
	}

	/// The tile one level up that contains this one.
	///
	/// # Errors
	/// Returns an error if the current level is 0.
	pub fn parent(&self) -> Result<TileCoord> {
		ensure!(self.level > 0, "cannot decrease level below 0");
		Ok(TileCoord {
			level: self.level - 1,
			x: self.x / 2,
			y: self.y / 2,
		})
	}

	/// Move this coordinate to another `level`.
	///
	/// Going deeper returns the northwest-most descendant, going up returns the ancestor.
	///
	/// # Errors
	/// Returns an error if `level` > [`MAX_LEVEL`].
	pub fn at_level(&self, level: u8) -> Result<TileCoord> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		Ok(if level > self.level {
			let shift = u32::from(level - self.level);
			ensure!(
				self.x.leading_zeros() >= shift && self.y.leading_zeros() >= shift,
				"{self:?} at level {level} overflows the tile index range"
			);
			TileCoord {
				level,
				x: self.x << shift,
				y: self.y << shift,
			}
		} else {
			let shift = u32::from(self.level - level);
			TileCoord {
				level,
				x: self.x >> shift,
				y: self.y >> shift,
			}
		})
	}

	/// Serialize this coordinate to a compact JSON string `{"z":…,"x":…,"y":…}`.
	#[must_use]
	pub fn as_json(&self) -> String {
		format!("{{\"z\":{},\"x\":{},\"y\":{}}}", self.level, self.x, self.y)
	}
}

/// Custom `Debug` format as `TileCoord(level, [x, y])` for readability.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}

/// Formats as `level/x/y`, the usual tile URL path.
impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}

/// Ordering: first by zoom `level`, then `y`, then `x`.
impl PartialOrd for TileCoord {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for TileCoord {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		(self.level, self.y, self.x).cmp(&(other.level, other.y, other.x))
	}
}

use super::TileCoord;
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::fmt::{self, Debug};

/// An inclusive, rectangular block of tiles at a single level.
///
/// Produced by [`TilingScheme::extent_to_tile_range`](crate::TilingScheme::extent_to_tile_range)
/// to enumerate all tiles a geographic extent touches.
///
/// # Examples
/// ```
/// use tilegrid_core::{TileCoord, TileRange};
///
/// let range = TileRange::from_min_and_max(3, 2, 1, 4, 2).unwrap();
/// assert_eq!(range.count_tiles(), 6);
/// assert!(range.contains(&TileCoord::new(3, 4, 1).unwrap()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRange {
	level: u8,
	x_min: u32,
	y_min: u32,
	x_max: u32,
	y_max: u32,
}

impl TileRange {
	/// Creates a range from its northwest (`x_min`, `y_min`) and southeast
	/// (`x_max`, `y_max`) tiles, both included.
	///
	/// # Errors
	/// Returns an error if a minimum exceeds its maximum or the level is invalid.
	pub fn from_min_and_max(level: u8, x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Result<TileRange> {
		TileCoord::new(level, x_min, y_min)?;
		ensure!(x_min <= x_max, "x_min ({x_min}) must be <= x_max ({x_max})");
		ensure!(y_min <= y_max, "y_min ({y_min}) must be <= y_max ({y_max})");
		Ok(TileRange {
			level,
			x_min,
			y_min,
			x_max,
			y_max,
		})
	}

	pub fn level(&self) -> u8 {
		self.level
	}

	pub fn x_min(&self) -> u32 {
		self.x_min
	}

	pub fn y_min(&self) -> u32 {
		self.y_min
	}

	pub fn x_max(&self) -> u32 {
		self.x_max
	}

	pub fn y_max(&self) -> u32 {
		self.y_max
	}

	/// Number of columns in the range.
	pub fn width(&self) -> u32 {
		self.x_max - self.x_min + 1
	}

	/// Number of rows in the range.
	pub fn height(&self) -> u32 {
		self.y_max - self.y_min + 1
	}

	pub fn count_tiles(&self) -> u64 {
		u64::from(self.width()) * u64::from(self.height())
	}

	/// The northwest tile of the range.
	pub fn min_corner(&self) -> TileCoord {
		TileCoord {
			level: self.level,
			x: self.x_min,
			y: self.y_min,
		}
	}

	/// The southeast tile of the range.
	pub fn max_corner(&self) -> TileCoord {
		TileCoord {
			level: self.level,
			x: self.x_max,
			y: self.y_max,
		}
	}

	/// Returns `true` if `coord` is at the same level and inside the range.
	pub fn contains(&self, coord: &TileCoord) -> bool {
		coord.level == self.level
			&& coord.x >= self.x_min
			&& coord.x <= self.x_max
			&& coord.y >= self.y_min
			&& coord.y <= self.y_max
	}

	/// Returns an iterator over all tile coordinates in the range.
	///
	/// The iteration is in row-major order: north to south, and west to east within a row.
	pub fn iter_coords(&self) -> impl Iterator<Item = TileCoord> + use<> {
		let level = self.level;
		(self.y_min..=self.y_max)
			.cartesian_product(self.x_min..=self.x_max)
			.map(move |(y, x)| TileCoord { level, x, y })
	}

	/// Returns `[x_min, y_min, x_max, y_max]`.
	#[must_use]
	pub fn as_array(&self) -> [u32; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}
}

impl Debug for TileRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"TileRange({}, [{}, {}, {}, {}])",
			self.level, self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn coord(level: u8, x: u32, y: u32) -> TileCoord {
		TileCoord::new(level, x, y).unwrap()
	}

	#[test]
	fn dimensions() {
		let range = TileRange::from_min_and_max(4, 3, 5, 7, 6).unwrap();
		assert_eq!(range.level(), 4);
		assert_eq!(range.width(), 5);
		assert_eq!(range.height(), 2);
		assert_eq!(range.count_tiles(), 10);
		assert_eq!(range.as_array(), [3, 5, 7, 6]);
		assert_eq!(range.min_corner(), coord(4, 3, 5));
		assert_eq!(range.max_corner(), coord(4, 7, 6));
	}

	#[test]
	fn single_tile() {
		let range = TileRange::from_min_and_max(0, 1, 0, 1, 0).unwrap();
		assert_eq!(range.count_tiles(), 1);
		assert_eq!(range.iter_coords().collect::<Vec<_>>(), vec![coord(0, 1, 0)]);
	}

	#[rstest]
	#[case(2, 3, 1, 1, 1)]
	#[case(2, 1, 3, 1, 1)]
	#[case(40, 0, 0, 0, 0)]
	fn invalid(#[case] level: u8, #[case] x_min: u32, #[case] y_min: u32, #[case] x_max: u32, #[case] y_max: u32) {
		assert!(TileRange::from_min_and_max(level, x_min, y_min, x_max, y_max).is_err());
	}

	#[test]
	fn iteration_is_row_major() {
		let range = TileRange::from_min_and_max(2, 1, 2, 2, 3).unwrap();
		let coords: Vec<TileCoord> = range.iter_coords().collect();
		assert_eq!(
			coords,
			vec![coord(2, 1, 2), coord(2, 2, 2), coord(2, 1, 3), coord(2, 2, 3)]
		);
	}

	#[rstest]
	#[case(coord(3, 2, 1), true)]
	#[case(coord(3, 4, 2), true)]
	#[case(coord(3, 5, 2), false)]
	#[case(coord(3, 2, 0), false)]
	#[case(coord(4, 2, 1), false)]
	fn contains(#[case] c: TileCoord, #[case] expected: bool) {
		let range = TileRange::from_min_and_max(3, 2, 1, 4, 2).unwrap();
		assert_eq!(range.contains(&c), expected);
	}

	#[test]
	fn debug_format() {
		let range = TileRange::from_min_and_max(3, 2, 1, 4, 2).unwrap();
		assert_eq!(format!("{range:?}"), "TileRange(3, [2, 1, 4, 2])");
	}
}

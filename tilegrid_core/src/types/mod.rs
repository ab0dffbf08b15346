//! Value types: coordinates, extents and tile indices.

mod constants;
pub use constants::*;

mod geo_extent;
pub use geo_extent::*;

mod geo_point;
pub use geo_point::*;

mod mercator;
pub use mercator::*;

mod tile_coord;
pub use tile_coord::*;

mod tile_range;
pub use tile_range::*;

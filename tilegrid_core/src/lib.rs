//! Web Mercator projection and the quadtree tiling scheme built on top of it.
//!
//! The crate maps between three spaces:
//! - geographic coordinates (longitude/latitude in radians, [`GeoPoint`], [`GeoExtent`]),
//! - projected Web Mercator coordinates in meters ([`MercatorPoint`], [`MercatorExtent`]),
//! - tile indices of a power-of-two pyramid ([`TileCoord`], [`TileRange`]).
//!
//! [`TilingScheme`] ties them together. Every operation is a pure function on
//! immutable values, so a scheme can be shared freely between threads.
//!
//! ```
//! use tilegrid_core::{GeoPoint, TilingScheme};
//!
//! let scheme = TilingScheme::default();
//! let tile = scheme.position_to_tile_xy(&GeoPoint::from_degrees(13.4, 52.5), 3).unwrap().unwrap();
//! assert_eq!((tile.level, tile.x, tile.y), (3, 8, 2));
//! ```

pub mod config;
pub use config::*;

pub mod projection;
pub use projection::*;

pub mod tiling_scheme;
pub use tiling_scheme::*;

pub mod types;
pub use types::*;

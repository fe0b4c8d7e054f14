//! Terrain grid: chunk/cell/patch addressing, triangle resolution, and height queries.
#![forbid(unsafe_code)]

pub mod borders;
pub mod consts;
pub mod coords;
pub mod error;
pub mod map;
pub mod query;
pub mod triangle;

pub use borders::{BorderReport, align_borders};
pub use coords::GridLocation;
pub use error::TerrainError;
pub use map::{Cell, Chunk, Map, MapHandle};
pub use query::{CellTriangles, GroundState, Triangle};
pub use triangle::{PatchTriangle, ResolvedTriangle, resolve_patch_triangle};

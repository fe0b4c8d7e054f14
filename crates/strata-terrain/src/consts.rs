//! Fixed grid dimensions.
//!
//! A map is 64×64 chunks, a chunk 16×16 cells, a cell 8×8 patches. Each cell stores a 9×9
//! outer vertex grid interleaved with an 8×8 inner grid of patch centres, row by row:
//! 9 outer samples followed by 8 inner samples (17 per row, 145 total).

pub const MAP_CHUNKS_PER_MAP_STRIDE: u16 = 64;
pub const MAP_CHUNKS_PER_MAP: usize = 64 * 64;
pub const MAP_CELLS_PER_CHUNK_SIDE: u16 = 16;
pub const MAP_CELLS_PER_CHUNK: usize = 16 * 16;
pub const MAP_PATCHES_PER_CELL_SIDE: u16 = 8;

pub const MAP_CHUNK_SIZE: f32 = 533.333_33;
pub const MAP_CELL_SIZE: f32 = MAP_CHUNK_SIZE / MAP_CELLS_PER_CHUNK_SIDE as f32;
pub const MAP_PATCH_SIZE: f32 = MAP_CELL_SIZE / MAP_PATCHES_PER_CELL_SIDE as f32;
pub const MAP_PATCH_HALF_SIZE: f32 = MAP_PATCH_SIZE * 0.5;
pub const MAP_HALF_SIZE: f32 = MAP_CHUNK_SIZE * (MAP_CHUNKS_PER_MAP_STRIDE / 2) as f32;

pub const CELL_OUTER_GRID_STRIDE: u16 = 9;
pub const CELL_INNER_GRID_STRIDE: u16 = 8;
pub const CELL_GRID_ROW_SIZE: u16 = CELL_OUTER_GRID_STRIDE + CELL_INNER_GRID_STRIDE;
pub const CELL_TOTAL_GRID_SIZE: usize = (CELL_OUTER_GRID_STRIDE * CELL_OUTER_GRID_STRIDE
    + CELL_INNER_GRID_STRIDE * CELL_INNER_GRID_STRIDE) as usize;

pub const TRIANGLES_PER_PATCH: usize = 4;
pub const PATCHES_PER_CELL: usize =
    (MAP_PATCHES_PER_CELL_SIDE * MAP_PATCHES_PER_CELL_SIDE) as usize;
pub const TRIANGLES_PER_CELL: usize = PATCHES_PER_CELL * TRIANGLES_PER_PATCH;

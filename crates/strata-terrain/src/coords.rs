//! World position ↔ grid coordinate transforms.
//!
//! World space is Z-up. ADT space is the map's 2D tile space: axis-swapped and offset by half
//! the map extent so that chunk indices run `0..64` instead of `-32..32`.

use strata_geom::{Vec2, Vec3};

use crate::consts::*;

#[inline]
pub fn world_to_adt(pos: Vec3) -> Vec2 {
    Vec2::new(MAP_HALF_SIZE - pos.y, MAP_HALF_SIZE - pos.x)
}

#[inline]
pub fn adt_to_world(adt: Vec2, height: f32) -> Vec3 {
    Vec3::new(MAP_HALF_SIZE - adt.y, MAP_HALF_SIZE - adt.x, height)
}

#[inline]
pub fn chunk_pos_from_adt(adt: Vec2) -> Vec2 {
    adt / MAP_CHUNK_SIZE
}

/// Row-major chunk id for a fractional chunk position; `None` when outside the 64×64 grid.
#[inline]
pub fn chunk_id_from_chunk_pos(chunk_pos: Vec2) -> Option<u16> {
    grid_id(chunk_pos, MAP_CHUNKS_PER_MAP_STRIDE)
}

/// Integer chunk grid coordinate of a chunk id, as floats.
#[inline]
pub fn chunk_position(chunk_id: u16) -> Vec2 {
    let (x, y) = chunk_xy(chunk_id);
    Vec2::new(x as f32, y as f32)
}

#[inline]
pub fn chunk_xy(chunk_id: u16) -> (u16, u16) {
    (
        chunk_id % MAP_CHUNKS_PER_MAP_STRIDE,
        chunk_id / MAP_CHUNKS_PER_MAP_STRIDE,
    )
}

#[inline]
pub fn chunk_id(x: u16, y: u16) -> u16 {
    x + y * MAP_CHUNKS_PER_MAP_STRIDE
}

#[inline]
pub fn cell_id_from_cell_pos(cell_pos: Vec2) -> Option<u16> {
    grid_id(cell_pos, MAP_CELLS_PER_CHUNK_SIDE)
}

#[inline]
pub fn cell_xy(cell_id: u16) -> (u16, u16) {
    (
        cell_id % MAP_CELLS_PER_CHUNK_SIDE,
        cell_id / MAP_CELLS_PER_CHUNK_SIDE,
    )
}

#[inline]
pub fn cell_id(x: u16, y: u16) -> u16 {
    x + y * MAP_CELLS_PER_CHUNK_SIDE
}

#[inline]
fn grid_id(pos: Vec2, stride: u16) -> Option<u16> {
    let x = pos.x.floor();
    let y = pos.y.floor();
    let max = stride as f32;
    if !(0.0..max).contains(&x) || !(0.0..max).contains(&y) {
        return None;
    }
    Some(x as u16 + y as u16 * stride)
}

/// Chunk grid coordinate containing a world position, possibly outside the map.
#[inline]
pub fn chunk_grid_coord(pos: Vec3) -> (i32, i32) {
    let c = chunk_pos_from_adt(world_to_adt(pos)).floor();
    (c.x as i32, c.y as i32)
}

/// Index of the vertex at the top-left corner of patch `(px, py)`.
#[inline]
pub fn patch_vertex_id(px: u16, py: u16) -> u16 {
    px + py * CELL_GRID_ROW_SIZE
}

/// Cell-local ADT offset of a height sample.
pub fn vertex_cell_offset(vertex_id: u16) -> Vec2 {
    let row = vertex_id / CELL_GRID_ROW_SIZE;
    let col = vertex_id % CELL_GRID_ROW_SIZE;
    if col < CELL_OUTER_GRID_STRIDE {
        Vec2::new(col as f32 * MAP_PATCH_SIZE, row as f32 * MAP_PATCH_SIZE)
    } else {
        let inner = col - CELL_OUTER_GRID_STRIDE;
        Vec2::new(
            inner as f32 * MAP_PATCH_SIZE + MAP_PATCH_HALF_SIZE,
            row as f32 * MAP_PATCH_SIZE + MAP_PATCH_HALF_SIZE,
        )
    }
}

/// ADT position of a chunk's origin corner.
#[inline]
pub fn chunk_adt_origin(chunk_id: u16) -> Vec2 {
    chunk_position(chunk_id) * MAP_CHUNK_SIZE
}

/// ADT position of a cell's origin corner.
#[inline]
pub fn cell_adt_origin(chunk_id: u16, cell_id: u16) -> Vec2 {
    let (cx, cy) = cell_xy(cell_id);
    chunk_adt_origin(chunk_id) + Vec2::new(cx as f32, cy as f32) * MAP_CELL_SIZE
}

/// World position of a chunk's origin corner at the given height.
#[inline]
pub fn chunk_world_origin(chunk_id: u16, height: f32) -> Vec3 {
    adt_to_world(chunk_adt_origin(chunk_id), height)
}

/// Reconstructs a world position from grid coordinates plus a patch-local offset.
pub fn grid_to_world(
    chunk_id: u16,
    cell_id: u16,
    patch: (u16, u16),
    patch_local: Vec2,
    height: f32,
) -> Vec3 {
    let patch_origin = Vec2::new(patch.0 as f32, patch.1 as f32) * MAP_PATCH_SIZE;
    adt_to_world(
        cell_adt_origin(chunk_id, cell_id) + patch_origin + patch_local,
        height,
    )
}

/// A world position resolved down to a single patch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLocation {
    pub adt: Vec2,
    pub chunk_id: u16,
    pub cell_id: u16,
    pub patch_x: u16,
    pub patch_y: u16,
    /// Position inside the patch in world units, `0..=MAP_PATCH_SIZE` on both axes.
    pub patch_local: Vec2,
}

impl GridLocation {
    /// Resolves a world position; `None` when it falls outside the map's chunk grid.
    pub fn from_world(pos: Vec3) -> Option<GridLocation> {
        let adt = world_to_adt(pos);
        let chunk_pos = chunk_pos_from_adt(adt);
        let chunk_id = chunk_id_from_chunk_pos(chunk_pos)?;

        let chunk_local = chunk_pos.fract() * MAP_CHUNK_SIZE;
        let cell_pos = chunk_local / MAP_CELL_SIZE;
        let (cell_x, cell_rem_x) = split_index(cell_pos.x, MAP_CELLS_PER_CHUNK_SIDE);
        let (cell_y, cell_rem_y) = split_index(cell_pos.y, MAP_CELLS_PER_CHUNK_SIDE);

        let cell_local = Vec2::new(cell_rem_x, cell_rem_y) * MAP_CELL_SIZE;
        let patch_pos = cell_local / MAP_PATCH_SIZE;
        let (patch_x, patch_rem_x) = split_index(patch_pos.x, MAP_PATCHES_PER_CELL_SIDE);
        let (patch_y, patch_rem_y) = split_index(patch_pos.y, MAP_PATCHES_PER_CELL_SIDE);

        Some(GridLocation {
            adt,
            chunk_id,
            cell_id: cell_id(cell_x, cell_y),
            patch_x,
            patch_y,
            patch_local: Vec2::new(patch_rem_x, patch_rem_y) * MAP_PATCH_SIZE,
        })
    }

    #[inline]
    pub fn patch_vertex_id(&self) -> u16 {
        patch_vertex_id(self.patch_x, self.patch_y)
    }

    #[inline]
    pub fn cell_adt_origin(&self) -> Vec2 {
        cell_adt_origin(self.chunk_id, self.cell_id)
    }
}

// Rounding can push a remainder scaled back up to exactly `count`; clamp the index and keep
// the overflow in the remainder so the point stays on the far edge.
#[inline]
fn split_index(pos: f32, count: u16) -> (u16, f32) {
    let max = (count - 1) as f32;
    let idx = pos.floor().clamp(0.0, max);
    (idx as u16, pos - idx)
}

//! Height and triangle queries against a loaded [`Map`].

use std::sync::atomic::{AtomicBool, Ordering};

use strata_geom::{Barycentric, Vec2, Vec3};

use crate::consts::{
    MAP_PATCH_SIZE, MAP_PATCHES_PER_CELL_SIDE, TRIANGLES_PER_CELL, TRIANGLES_PER_PATCH,
};
use crate::coords::{self, adt_to_world, vertex_cell_offset};
use crate::error::TerrainError;
use crate::map::{Cell, Map};
use crate::triangle::{PatchTriangle, ResolvedTriangle, resolve_patch_triangle};

/// A terrain triangle in world space; the first vertex is the patch centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

/// Ground relation of a position, for movement/physics consumers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GroundState {
    Grounded { height: f32 },
    Airborne { height: f32 },
    NoTerrain,
}

static DEGENERATE_WARNED: AtomicBool = AtomicBool::new(false);

/// Interpolated height inside one patch triangle from the cell's samples.
///
/// A degenerate reference triangle puts all weight on the centre vertex.
pub fn sample_triangle_height(cell: &Cell, resolved: &ResolvedTriangle, local: Vec2) -> f32 {
    let [a, b, c] = resolved.reference;
    let weights = Barycentric::compute(a, b, c, local).unwrap_or_else(|| {
        if !DEGENERATE_WARNED.swap(true, Ordering::Relaxed) {
            log::warn!(
                "degenerate terrain triangle {:?} at vertices {:?}; using centre height",
                resolved.triangle,
                resolved.vertex_ids
            );
        }
        Barycentric::FIRST
    });
    let [ia, ib, ic] = resolved.vertex_ids;
    weights.interpolate(cell.height(ia), cell.height(ib), cell.height(ic))
}

fn world_triangle(cell: &Cell, cell_origin: Vec2, vertex_ids: [u16; 3]) -> Triangle {
    let vertex = |id: u16| adt_to_world(cell_origin + vertex_cell_offset(id), cell.height(id));
    Triangle {
        vertices: [
            vertex(vertex_ids[0]),
            vertex(vertex_ids[1]),
            vertex(vertex_ids[2]),
        ],
    }
}

impl Map {
    /// World-space triangle under `pos` and the interpolated ground height there.
    pub fn query_triangle_and_height(&self, pos: Vec3) -> Result<(Triangle, f32), TerrainError> {
        let (loc, cell) = self.locate(pos)?;
        let resolved = resolve_patch_triangle(loc.patch_local, loc.patch_vertex_id());
        let height = sample_triangle_height(cell, &resolved, loc.patch_local);
        let triangle = world_triangle(cell, loc.cell_adt_origin(), resolved.vertex_ids);
        Ok((triangle, height))
    }

    pub fn query_height(&self, pos: Vec3) -> Result<f32, TerrainError> {
        let (loc, cell) = self.locate(pos)?;
        let resolved = resolve_patch_triangle(loc.patch_local, loc.patch_vertex_id());
        Ok(sample_triangle_height(cell, &resolved, loc.patch_local))
    }

    /// All 256 triangles of the cell under `pos`, patch x outermost, then patch y, then
    /// triangle index.
    pub fn enumerate_cell_triangles(&self, pos: Vec3) -> Result<CellTriangles<'_>, TerrainError> {
        let (loc, cell) = self.locate(pos)?;
        Ok(CellTriangles::new(cell, loc.cell_adt_origin()))
    }

    pub fn is_grounded_at(&self, pos: Vec3) -> Result<bool, TerrainError> {
        Ok(pos.z <= self.query_height(pos)?)
    }

    pub fn ground_state(&self, pos: Vec3) -> GroundState {
        match self.query_height(pos) {
            Ok(height) if pos.z <= height => GroundState::Grounded { height },
            Ok(height) => GroundState::Airborne { height },
            Err(_) => GroundState::NoTerrain,
        }
    }

    /// World-space triangles of one cell by id, for debug tooling.
    pub fn cell_triangles(
        &self,
        chunk_id: u16,
        cell_id: u16,
    ) -> Result<CellTriangles<'_>, TerrainError> {
        let cell = self
            .chunk(chunk_id)
            .and_then(|c| c.cell(cell_id))
            .ok_or_else(|| {
                let (x, y) = coords::chunk_xy(chunk_id);
                TerrainError::ChunkNotFound {
                    x: x as i32,
                    y: y as i32,
                }
            })?;
        Ok(CellTriangles::new(cell, coords::cell_adt_origin(chunk_id, cell_id)))
    }
}

/// Iterator over every triangle of a cell. Cloning restarts from the current position; a
/// fresh query always starts at the first triangle.
#[derive(Clone, Debug)]
pub struct CellTriangles<'a> {
    cell: &'a Cell,
    cell_origin: Vec2,
    next: usize,
}

impl<'a> CellTriangles<'a> {
    fn new(cell: &'a Cell, cell_origin: Vec2) -> Self {
        Self {
            cell,
            cell_origin,
            next: 0,
        }
    }

    fn triangle_at(&self, index: usize) -> Triangle {
        let per_column = MAP_PATCHES_PER_CELL_SIDE as usize * TRIANGLES_PER_PATCH;
        let px = (index / per_column) as u16;
        let py = ((index / TRIANGLES_PER_PATCH) % MAP_PATCHES_PER_CELL_SIDE as usize) as u16;
        let tri = PatchTriangle::ALL[index % TRIANGLES_PER_PATCH];
        let resolved = ResolvedTriangle::new(tri, coords::patch_vertex_id(px, py), MAP_PATCH_SIZE);
        world_triangle(self.cell, self.cell_origin, resolved.vertex_ids)
    }
}

impl Iterator for CellTriangles<'_> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        if self.next >= TRIANGLES_PER_CELL {
            return None;
        }
        let t = self.triangle_at(self.next);
        self.next += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = TRIANGLES_PER_CELL - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CellTriangles<'_> {}

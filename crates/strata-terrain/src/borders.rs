//! Seam alignment run once after a map finishes loading.
//!
//! Each cell's last outer column and last outer row are overwritten with the first column /
//! first row of the neighbouring cell (in the same chunk or the adjacent chunk), so both
//! sides of a seam sample identical heights. The far corner takes the diagonal neighbour's
//! first sample when that neighbour is loaded, otherwise the sample the +x neighbour keeps.

use crate::consts::{
    CELL_GRID_ROW_SIZE, CELL_OUTER_GRID_STRIDE, MAP_CELLS_PER_CHUNK_SIDE, MAP_CHUNKS_PER_MAP_STRIDE,
};
use crate::coords::{cell_id, cell_xy, chunk_id, chunk_xy};
use crate::map::{Cell, Map};

const LAST: u16 = CELL_OUTER_GRID_STRIDE - 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BorderReport {
    pub cells_visited: usize,
    pub samples_written: usize,
    pub samples_changed: usize,
}

#[inline]
fn outer_index(row: u16, col: u16) -> usize {
    (row * CELL_GRID_ROW_SIZE + col) as usize
}

/// Neighbour cell `(dx, dy)` cells away, crossing into the adjacent chunk when needed.
fn neighbour<'a>(map: &'a Map, chunk: u16, cell: u16, dx: u16, dy: u16) -> Option<&'a Cell> {
    let (chx, chy) = chunk_xy(chunk);
    let (cx, cy) = cell_xy(cell);
    let gx = chx * MAP_CELLS_PER_CHUNK_SIDE + cx + dx;
    let gy = chy * MAP_CELLS_PER_CHUNK_SIDE + cy + dy;
    let (nchx, nchy) = (gx / MAP_CELLS_PER_CHUNK_SIDE, gy / MAP_CELLS_PER_CHUNK_SIDE);
    if nchx >= MAP_CHUNKS_PER_MAP_STRIDE || nchy >= MAP_CHUNKS_PER_MAP_STRIDE {
        return None;
    }
    map.chunk(chunk_id(nchx, nchy))?.cell(cell_id(
        gx % MAP_CELLS_PER_CHUNK_SIDE,
        gy % MAP_CELLS_PER_CHUNK_SIDE,
    ))
}

pub fn align_borders(map: &mut Map) -> BorderReport {
    let mut report = BorderReport::default();
    // (chunk, cell, sample index, value); sources are read before anything is written.
    let mut writes: Vec<(u16, u16, usize, f32)> = Vec::new();
    for chunk in map.chunk_ids() {
        for cell in 0..(MAP_CELLS_PER_CHUNK_SIDE * MAP_CELLS_PER_CHUNK_SIDE) {
            report.cells_visited += 1;
            let next_x = neighbour(map, chunk, cell, 1, 0);
            let next_y = neighbour(map, chunk, cell, 0, 1);
            let diag = neighbour(map, chunk, cell, 1, 1);
            if let Some(n) = next_x {
                for row in 0..LAST {
                    let v = n.heights[outer_index(row, 0)];
                    writes.push((chunk, cell, outer_index(row, LAST), v));
                }
            }
            if let Some(n) = next_y {
                for col in 0..LAST {
                    let v = n.heights[outer_index(0, col)];
                    writes.push((chunk, cell, outer_index(LAST, col), v));
                }
            }
            // The far corner follows the diagonal; without one it matches the +x neighbour's
            // untouched bottom-left sample, then the +y neighbour's top-right.
            let corner = diag
                .map(|d| d.heights[outer_index(0, 0)])
                .or_else(|| next_x.map(|n| n.heights[outer_index(LAST, 0)]))
                .or_else(|| next_y.map(|n| n.heights[outer_index(0, LAST)]));
            if let Some(v) = corner {
                writes.push((chunk, cell, outer_index(LAST, LAST), v));
            }
        }
    }
    for (chunk, cell, idx, v) in writes {
        let Some(target) = map.chunk_mut(chunk).and_then(|c| c.cell_mut(cell)) else {
            continue;
        };
        report.samples_written += 1;
        if target.heights[idx] != v {
            report.samples_changed += 1;
            target.heights[idx] = v;
        }
    }
    log::debug!(
        "aligned borders of map {}: {} cell(s), {} sample(s) written, {} changed",
        map.id,
        report.cells_visited,
        report.samples_written,
        report.samples_changed
    );
    report
}

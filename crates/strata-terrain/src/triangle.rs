//! Picks which of a patch's four triangles contains a point.
//!
//! A patch is the quad between four outer samples, split into four triangles that all share
//! the inner centre sample. In patch-local space the top-left corner is the origin and Y
//! grows towards the bottom row.
//!
//! ```text
//!  TL ───── TR
//!  │ \  N  / │
//!  │  \   /  │
//!  │ W  C  E │
//!  │  /   \  │
//!  │ /  S  \ │
//!  BL ───── BR
//! ```

use strata_geom::{Vec2, point_in_triangle};

use crate::consts::{CELL_GRID_ROW_SIZE, CELL_OUTER_GRID_STRIDE, MAP_PATCH_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatchTriangle {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl PatchTriangle {
    /// Evaluation order; on a shared edge the earlier triangle wins.
    pub const ALL: [PatchTriangle; 4] = [
        PatchTriangle::North,
        PatchTriangle::East,
        PatchTriangle::South,
        PatchTriangle::West,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<PatchTriangle> {
        Self::ALL.get(i).copied()
    }

    /// The two outer corners of this triangle in winding order.
    #[inline]
    fn corners(self) -> (Corner, Corner) {
        match self {
            PatchTriangle::North => (Corner::TopLeft, Corner::TopRight),
            PatchTriangle::East => (Corner::TopRight, Corner::BottomRight),
            PatchTriangle::South => (Corner::BottomRight, Corner::BottomLeft),
            PatchTriangle::West => (Corner::BottomLeft, Corner::TopLeft),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    #[inline]
    fn vertex_offset(self) -> u16 {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => CELL_GRID_ROW_SIZE,
            Corner::BottomRight => CELL_GRID_ROW_SIZE + 1,
        }
    }

    #[inline]
    fn reference(self, size: f32) -> Vec2 {
        match self {
            Corner::TopLeft => Vec2::new(0.0, 0.0),
            Corner::TopRight => Vec2::new(size, 0.0),
            Corner::BottomLeft => Vec2::new(0.0, size),
            Corner::BottomRight => Vec2::new(size, size),
        }
    }
}

/// Offset from a patch's top-left vertex to its centre vertex.
pub const CENTER_VERTEX_OFFSET: u16 = CELL_OUTER_GRID_STRIDE;

/// One patch triangle: vertex ids and patch-local reference positions, centre first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTriangle {
    pub triangle: PatchTriangle,
    pub vertex_ids: [u16; 3],
    pub reference: [Vec2; 3],
}

impl ResolvedTriangle {
    pub fn new(triangle: PatchTriangle, patch_vertex_id: u16, size: f32) -> Self {
        let (b, c) = triangle.corners();
        ResolvedTriangle {
            triangle,
            vertex_ids: [
                patch_vertex_id + CENTER_VERTEX_OFFSET,
                patch_vertex_id + b.vertex_offset(),
                patch_vertex_id + c.vertex_offset(),
            ],
            reference: [Vec2::splat(size * 0.5), b.reference(size), c.reference(size)],
        }
    }

    #[inline]
    pub fn contains(&self, local: Vec2) -> bool {
        let [a, b, c] = self.reference;
        point_in_triangle(local, a, b, c)
    }
}

/// Resolves the triangle under `local` for a terrain patch whose top-left vertex is
/// `patch_vertex_id`.
#[inline]
pub fn resolve_patch_triangle(local: Vec2, patch_vertex_id: u16) -> ResolvedTriangle {
    resolve_patch_triangle_scaled(local, MAP_PATCH_SIZE, patch_vertex_id)
}

/// As [`resolve_patch_triangle`] for a patch of arbitrary side length.
pub fn resolve_patch_triangle_scaled(
    local: Vec2,
    size: f32,
    patch_vertex_id: u16,
) -> ResolvedTriangle {
    for tri in PatchTriangle::ALL {
        let resolved = ResolvedTriangle::new(tri, patch_vertex_id, size);
        if resolved.contains(local) {
            return resolved;
        }
    }
    // Only reachable for points outside the quad.
    ResolvedTriangle::new(PatchTriangle::West, patch_vertex_id, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_points() {
        let s = 4.0;
        let pick = |x: f32, y: f32| resolve_patch_triangle_scaled(Vec2::new(x, y), s, 0).triangle;
        assert_eq!(pick(2.0, 0.5), PatchTriangle::North);
        assert_eq!(pick(3.5, 2.0), PatchTriangle::East);
        assert_eq!(pick(2.0, 3.5), PatchTriangle::South);
        assert_eq!(pick(0.5, 2.0), PatchTriangle::West);
    }

    #[test]
    fn shared_edges_follow_priority() {
        let s = 4.0;
        let pick = |x: f32, y: f32| resolve_patch_triangle_scaled(Vec2::new(x, y), s, 0).triangle;
        // Centre belongs to all four
        assert_eq!(pick(2.0, 2.0), PatchTriangle::North);
        // N/E diagonal
        assert_eq!(pick(3.0, 1.0), PatchTriangle::North);
        // E/S diagonal
        assert_eq!(pick(3.0, 3.0), PatchTriangle::East);
        // S/W diagonal
        assert_eq!(pick(1.0, 3.0), PatchTriangle::South);
        // W/N diagonal
        assert_eq!(pick(1.0, 1.0), PatchTriangle::North);
    }

    #[test]
    fn vertex_ids_for_base() {
        let base = 3 + 2 * CELL_GRID_ROW_SIZE;
        let r = ResolvedTriangle::new(PatchTriangle::South, base, 4.0);
        assert_eq!(r.vertex_ids, [base + 9, base + 18, base + 17]);
        assert_eq!(
            r.reference,
            [Vec2::new(2.0, 2.0), Vec2::new(4.0, 4.0), Vec2::new(0.0, 4.0)]
        );
    }
}

use proptest::prelude::*;
use strata_geom::{Vec2, Vec3};
use strata_terrain::GridLocation;
use strata_terrain::consts::{MAP_CHUNKS_PER_MAP, MAP_HALF_SIZE, MAP_PATCH_SIZE};
use strata_terrain::coords::{
    cell_id_from_cell_pos, cell_xy, chunk_id_from_chunk_pos, chunk_position, chunk_xy,
    grid_to_world,
};

fn in_map() -> impl Strategy<Value = f32> {
    -(MAP_HALF_SIZE - 1.0)..(MAP_HALF_SIZE - 1.0)
}

proptest! {
    // Chunk id -> chunk position -> chunk id is the identity, for any point inside the chunk
    #[test]
    fn chunk_id_roundtrip(
        id in 0u16..MAP_CHUNKS_PER_MAP as u16,
        fx in 0.0f32..0.999,
        fy in 0.0f32..0.999,
    ) {
        let pos = chunk_position(id);
        prop_assert_eq!(chunk_id_from_chunk_pos(pos), Some(id));
        prop_assert_eq!(chunk_id_from_chunk_pos(pos + Vec2::new(fx, fy)), Some(id));
        let (x, y) = chunk_xy(id);
        prop_assert_eq!(x + y * 64, id);
    }

    // Cell ids obey the same row-major rule with stride 16
    #[test]
    fn cell_id_roundtrip(x in 0u16..16, y in 0u16..16, fx in 0.0f32..0.999, fy in 0.0f32..0.999) {
        let id = cell_id_from_cell_pos(Vec2::new(x as f32 + fx, y as f32 + fy)).unwrap();
        prop_assert_eq!(id, x + y * 16);
        prop_assert_eq!(cell_xy(id), (x, y));
    }

    // Every position on the map resolves to an in-range patch and maps back to itself
    #[test]
    fn world_grid_roundtrip(x in in_map(), y in in_map(), z in -500.0f32..500.0) {
        let pos = Vec3::new(x, y, z);
        let loc = GridLocation::from_world(pos).unwrap();
        prop_assert!(loc.cell_id < 256);
        prop_assert!(loc.patch_x < 8 && loc.patch_y < 8);
        prop_assert!(loc.patch_local.x >= 0.0 && loc.patch_local.x <= MAP_PATCH_SIZE + 1e-3);
        prop_assert!(loc.patch_local.y >= 0.0 && loc.patch_local.y <= MAP_PATCH_SIZE + 1e-3);
        let back = grid_to_world(
            loc.chunk_id,
            loc.cell_id,
            (loc.patch_x, loc.patch_y),
            loc.patch_local,
            z,
        );
        prop_assert!((back.x - x).abs() <= 0.05, "x {} vs {}", back.x, x);
        prop_assert!((back.y - y).abs() <= 0.05, "y {} vs {}", back.y, y);
        prop_assert_eq!(back.z, z);
    }

    // Positions beyond the map edge never resolve
    #[test]
    fn outside_map_has_no_location(x in in_map(), over in 1.0f32..10_000.0) {
        prop_assert!(GridLocation::from_world(Vec3::new(MAP_HALF_SIZE + over, x, 0.0)).is_none());
        prop_assert!(GridLocation::from_world(Vec3::new(x, MAP_HALF_SIZE + over, 0.0)).is_none());
    }
}

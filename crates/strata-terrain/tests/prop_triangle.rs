use proptest::prelude::*;
use strata_geom::{Barycentric, Vec2};
use strata_terrain::triangle::{PatchTriangle, ResolvedTriangle, resolve_patch_triangle_scaled};

const SIZE: f32 = 4.0;

fn arb_triangle() -> impl Strategy<Value = PatchTriangle> {
    (0usize..4).prop_map(|i| PatchTriangle::from_index(i).unwrap())
}

// Convex weights bounded away from zero keep the point strictly inside
fn interior_weights() -> impl Strategy<Value = (f32, f32, f32)> {
    (0.05f32..1.0, 0.05f32..1.0, 0.05f32..1.0).prop_map(|(a, b, c)| {
        let s = a + b + c;
        (a / s, b / s, c / s)
    })
}

proptest! {
    // Strictly interior points resolve to the triangle that contains them
    #[test]
    fn interior_points_resolve_to_their_triangle(
        tri in arb_triangle(),
        (wa, wb, wc) in interior_weights(),
        base in 0u16..(7 + 7 * 17),
    ) {
        let reference = ResolvedTriangle::new(tri, base, SIZE).reference;
        let p = reference[0] * wa + reference[1] * wb + reference[2] * wc;
        let got = resolve_patch_triangle_scaled(p, SIZE, base);
        prop_assert_eq!(got.triangle, tri);
        prop_assert_eq!(got.vertex_ids[0], base + 9);
    }

    // Every point of the quad is claimed, and its weights are a convex combination
    #[test]
    fn quad_is_covered(x in 0.0f32..=SIZE, y in 0.0f32..=SIZE) {
        let p = Vec2::new(x, y);
        let got = resolve_patch_triangle_scaled(p, SIZE, 0);
        prop_assert!(got.contains(p));
        let [a, b, c] = got.reference;
        let w = Barycentric::compute(a, b, c, p).unwrap();
        prop_assert!((w.sum() - 1.0).abs() <= 1e-5);
        prop_assert!(w.alpha >= -1e-5 && w.beta >= -1e-5 && w.gamma >= -1e-5);
    }

    // The two edge vertices always belong to the patch's outer corners
    #[test]
    fn edge_vertices_are_corners(
        x in 0.0f32..=SIZE,
        y in 0.0f32..=SIZE,
        base in 0u16..(7 + 7 * 17),
    ) {
        let got = resolve_patch_triangle_scaled(Vec2::new(x, y), SIZE, base);
        let corners = [base, base + 1, base + 17, base + 18];
        prop_assert!(corners.contains(&got.vertex_ids[1]));
        prop_assert!(corners.contains(&got.vertex_ids[2]));
        prop_assert_ne!(got.vertex_ids[1], got.vertex_ids[2]);
    }
}

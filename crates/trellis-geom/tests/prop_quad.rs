use proptest::prelude::*;
use trellis_geom::{Quad, Sprite, Submap, Uv, Vec3};

fn arb_quad() -> impl Strategy<Value = Quad> {
    prop::array::uniform4(prop::array::uniform3(-16.0f32..16.0))
        .prop_map(|c| Quad::from_corners(c.map(|[x, y, z]| Vec3::new(x, y, z))))
}

fn arb_sprite() -> impl Strategy<Value = Sprite> {
    (0.0f32..0.9, 0.0f32..0.9, 0.01f32..0.1)
        .prop_map(|(u, v, d)| Sprite::new(Uv::new(u, v), Uv::new(u + d, v + d)))
}

proptest! {
    // Four quarter-turns are the identity; composition adds mod 4.
    #[test]
    fn rotate_composes_mod_4(q in arb_quad(), a in 0u8..4, b in 0u8..4) {
        prop_assert_eq!(q.rotate(a).rotate(b), q.rotate((a + b) % 4));
        prop_assert_eq!(q.rotate(a).rotate(4 - a), q.rotate(0));
    }

    #[test]
    fn rotate_leaves_positions_in_place(q in arb_quad(), steps in 0u8..8) {
        let r = q.rotate(steps);
        for i in 0..4 {
            prop_assert_eq!(r.verts[i].pos, q.verts[i].pos);
        }
    }

    // Remapped UVs always land inside the chosen quadrant of the sprite.
    #[test]
    fn map_to_subrect_stays_inside_target(
        q in arb_quad(),
        sprite in arb_sprite(),
        which in 0usize..5,
    ) {
        let submap = if which < 4 { Some(Submap::ALL[which]) } else { None };
        let rect = match submap {
            Some(s) => s.rect(),
            None => trellis_geom::SubRect { x: 0.0, y: 0.0, w: 1.0, h: 1.0 },
        };
        let lo = sprite.interpolate(rect.x, rect.y);
        let hi = sprite.interpolate(rect.x + rect.w, rect.y + rect.h);
        let eps = 1e-5;
        for v in q.map_to_subrect(sprite, submap).verts {
            prop_assert!(v.uv.u >= lo.u - eps && v.uv.u <= hi.u + eps);
            prop_assert!(v.uv.v >= lo.v - eps && v.uv.v <= hi.v + eps);
        }
    }

    // Rotation permutes the UV set; remapping after any rotation covers the
    // same target corners, just assigned to different geometry corners.
    #[test]
    fn rotation_then_remap_covers_quadrant_corners(
        q in arb_quad(),
        sprite in arb_sprite(),
        steps in 0u8..4,
        which in 0usize..4,
    ) {
        let submap = Submap::ALL[which];
        let mapped = q.rotate(steps).map_to_subrect(sprite, Some(submap));
        let rect = submap.rect();
        let corners = [
            sprite.interpolate(rect.x, rect.y),
            sprite.interpolate(rect.x, rect.y + rect.h),
            sprite.interpolate(rect.x + rect.w, rect.y + rect.h),
            sprite.interpolate(rect.x + rect.w, rect.y),
        ];
        for c in corners {
            let hit = mapped
                .verts
                .iter()
                .any(|v| (v.uv.u - c.u).abs() < 1e-5 && (v.uv.v - c.v).abs() < 1e-5);
            prop_assert!(hit, "corner {:?} not covered by {:?}", c, mapped);
        }
    }
}

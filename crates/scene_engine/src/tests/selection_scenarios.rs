//! Click-to-select scenarios through the scene context
//!
//! The camera sits at (0, 0, 10) looking down -Z with a square 800x800
//! viewport, so the center pixel casts a ray straight along -Z.

use crate::foundation::color::Color;
use crate::foundation::math::Vec3;
use crate::input::Viewport;
use crate::picking::{Ray, Raycaster, ShapeRaycaster};
use crate::render::Camera;
use crate::runtime::SceneContext;
use crate::scene::{ObjectId, PickShape, SceneObject, SceneTree};

const CENTER: (f64, f64) = (400.0, 400.0);
const EMPTY_CORNER: (f64, f64) = (0.0, 0.0);

fn context() -> SceneContext {
    let camera = Camera::perspective(Vec3::new(0.0, 0.0, 10.0), 75.0, 1.0, 0.1, 1000.0);
    SceneContext::new(Box::new(SceneTree::new()), camera, Viewport::new(800, 800))
}

/// Unit sphere whose front surface is `distance` away from the camera along -Z
fn sphere_at_distance(ctx: &mut SceneContext, name: &str, hex: u32, distance: f32) -> ObjectId {
    let center_z = 10.0 - distance - 1.0;
    ctx.spawn_pickable(
        SceneObject::mesh(name, PickShape::Sphere { radius: 1.0 }, Color::from_hex(hex))
            .with_position(Vec3::new(0.0, 0.0, center_z)),
    )
}

fn highlighted(ctx: &SceneContext) -> Vec<ObjectId> {
    ctx.scene()
        .traversal_order()
        .into_iter()
        .filter(|&id| ctx.scene().get(id).is_some_and(|o| o.appearance.is_emissive()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_near_object_wins_and_empty_click_restores() {
        let mut ctx = context();
        let a = sphere_at_distance(&mut ctx, "a", 0x2266aa, 2.0);
        let b = sphere_at_distance(&mut ctx, "b", 0xaa6622, 5.0);

        let ray = Ray::try_new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0)).unwrap();
        let hits = ShapeRaycaster.intersect(&ray, &[b, a], ctx.scene());
        assert_eq!(hits[0].object, a);
        assert_relative_eq!(hits[0].distance, 2.0, epsilon = 1e-4);
        assert_relative_eq!(hits[1].distance, 5.0, epsilon = 1e-4);

        assert_eq!(ctx.click(CENTER.0, CENTER.1), Some(a));
        assert_eq!(ctx.scene().get(a).unwrap().emissive(), Color::RED);
        assert!(!ctx.scene().get(b).unwrap().appearance.is_emissive());

        assert_eq!(ctx.click(EMPTY_CORNER.0, EMPTY_CORNER.1), None);
        assert_eq!(ctx.scene().get(a).unwrap().emissive(), Color::BLACK);
        assert_eq!(ctx.scene().get(a).unwrap().base_color(), Color::from_hex(0x2266aa));
        assert_eq!(ctx.selected(), None);
        assert_eq!(ctx.picking().selection().saved_base_color(), None);
    }

    #[test]
    fn test_reselect_after_deselect_saves_true_color() {
        let mut ctx = context();
        let a = sphere_at_distance(&mut ctx, "a", 0x13579b, 3.0);

        ctx.click(CENTER.0, CENTER.1);
        ctx.click(EMPTY_CORNER.0, EMPTY_CORNER.1);
        ctx.click(CENTER.0, CENTER.1);

        assert_eq!(ctx.selected(), Some(a));
        assert_eq!(ctx.picking().selection().saved_base_color(), Some(Color::from_hex(0x13579b)));
    }

    #[test]
    fn test_pick_is_deterministic() {
        let mut ctx = context();
        sphere_at_distance(&mut ctx, "a", 0xffffff, 4.0);
        sphere_at_distance(&mut ctx, "b", 0xffffff, 4.0);

        let first = ctx.pick(CENTER.0, CENTER.1);
        for _ in 0..10 {
            assert_eq!(ctx.pick(CENTER.0, CENTER.1), first);
        }
        // Equal distance: registration order breaks the tie
        assert_eq!(first, ctx.registry().all().first().copied());
    }

    #[test]
    fn test_at_most_one_highlight_over_click_sequence() {
        let mut ctx = context();
        for (i, x) in [-3.0_f32, 0.0, 3.0].into_iter().enumerate() {
            ctx.spawn_pickable(
                SceneObject::mesh(format!("cube{i}"), PickShape::unit_cube(), Color::from_hex(0x404040 + i as u32))
                    .with_position(Vec3::new(x, 0.0, 0.0)),
            );
        }

        let clicks = [
            (400.0, 400.0),
            (236.0, 400.0),
            (564.0, 400.0),
            (564.0, 400.0),
            (0.0, 0.0),
            (400.0, 400.0),
            (236.0, 400.0),
            (799.0, 799.0),
        ];
        for (x, y) in clicks {
            let selected = ctx.click(x, y);
            let lit = highlighted(&ctx);
            assert!(lit.len() <= 1, "{} objects highlighted after click ({x}, {y})", lit.len());
            assert_eq!(lit.first().copied(), selected);
        }
    }

    #[test]
    fn test_clicks_follow_resized_viewport() {
        let mut ctx = context();
        let a = sphere_at_distance(&mut ctx, "a", 0xffffff, 2.0);
        let mut renderer = crate::render::HeadlessRenderer::new(800, 800);

        ctx.on_resize(&mut renderer, 400, 200);
        assert_eq!(ctx.click(200.0, 100.0), Some(a));
        assert_eq!(ctx.click(400.0, 400.0), None);
    }
}

//! Demo scene population
//!
//! Floor, lights, sky, a textured cube, a field of random pickable shapes
//! with the first one spinning, billboard sprites, and a model that arrives
//! from a loader thread after startup.

use std::f32::consts::FRAC_PI_2;
use std::thread::JoinHandle;
use std::time::Duration;

use rand::prelude::*;
use scene_engine::animation::Behavior;
use scene_engine::foundation::color::Color;
use scene_engine::foundation::math::Vec3;
use scene_engine::input::{AppEvent, EventSender, Spawn};
use scene_engine::runtime::SceneContext;
use scene_engine::scene::{ObjectId, ObjectKind, PickShape, SceneObject};

use crate::config::PopulationSettings;

const FLOOR_SIZE: f32 = 50.0;
const FLOOR_COLOR: u32 = 0x808080;
const SKY_RADIUS: f32 = 500.0;
const SKY_COLOR: u32 = 0x87ceeb;
const MODEL_COLOR: u32 = 0xff0000;

/// Handles to the objects the demo creates at startup
#[derive(Debug, Default)]
pub struct DemoScene {
    /// Pickable shapes in registration order
    pub shapes: Vec<ObjectId>,
    /// Shape with the spin behavior
    pub spinner: Option<ObjectId>,
    /// Camera-facing sprites
    pub billboards: Vec<ObjectId>,
    /// Static textured cube
    pub textured_cube: Option<ObjectId>,
}

/// Shape cycle for the random field
fn shape_for(index: usize) -> (&'static str, PickShape) {
    match index % 3 {
        0 => ("box", PickShape::unit_cube()),
        1 => ("sphere", PickShape::Sphere { radius: 0.5 }),
        _ => (
            "cylinder",
            PickShape::Cylinder {
                radius: 0.5,
                half_height: 0.5,
            },
        ),
    }
}

/// Populate `ctx` with the static demo scene
pub fn populate(ctx: &mut SceneContext, settings: &PopulationSettings, spin_step: Vec3) -> DemoScene {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut demo = DemoScene::default();

    add_environment(ctx);

    demo.textured_cube = Some(ctx.add(
        SceneObject::mesh("textured_cube", PickShape::unit_cube(), Color::WHITE)
            .with_position(Vec3::new(2.0, 1.0, -3.0)),
    ));

    let half_spread = settings.spread / 2.0;
    for i in 0..settings.shape_count {
        let (label, shape) = shape_for(i);
        let position = Vec3::new(
            rng.gen_range(-half_spread..=half_spread),
            rng.gen_range(0.0..=settings.max_height),
            rng.gen_range(-half_spread..=half_spread),
        );
        let color = Color::from_hex(rng.gen_range(0..=0xff_ffff));
        let id = ctx.spawn_pickable(
            SceneObject::mesh(format!("{label}_{i}"), shape, color).with_position(position),
        );
        demo.shapes.push(id);
    }

    // Only the first shape animates
    if let Some(&first) = demo.shapes.first() {
        ctx.attach_behavior(first, Behavior::spin(spin_step));
        demo.spinner = Some(first);
    }

    for i in 0..settings.billboard_count {
        let position = Vec3::new(rng.gen_range(-5.0..5.0), 2.0, rng.gen_range(-5.0..5.0));
        let id = ctx.add(
            SceneObject::new(format!("billboard_{i}"), ObjectKind::Sprite)
                .with_position(position)
                .with_scale(Vec3::new(2.0, 2.0, 1.0)),
        );
        demo.billboards.push(id);
    }

    log::info!(
        "Populated scene: {} shapes ({} pickable), {} billboards, {} objects total",
        demo.shapes.len(),
        ctx.registry().len(),
        demo.billboards.len(),
        ctx.scene().len()
    );
    demo
}

fn add_environment(ctx: &mut SceneContext) {
    ctx.add(
        SceneObject::new("floor", ObjectKind::Mesh)
            .with_color(Color::from_hex(FLOOR_COLOR))
            .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0))
            .with_scale(Vec3::new(FLOOR_SIZE, FLOOR_SIZE, 1.0)),
    );

    let lights = [
        ("ambient_light", 0x40_4040, Vec3::zeros()),
        ("directional_light", 0xff_ffff, Vec3::new(10.0, 15.0, 10.0)),
        ("spot_light", 0xff_ffff, Vec3::new(5.0, 15.0, 5.0)),
        ("hemisphere_light", 0x40_40ff, Vec3::zeros()),
    ];
    for (name, hex, position) in lights {
        ctx.add(
            SceneObject::new(name, ObjectKind::Light)
                .with_color(Color::from_hex(hex))
                .with_position(position),
        );
    }

    ctx.add(
        SceneObject::new("sky", ObjectKind::Mesh)
            .with_color(Color::from_hex(SKY_COLOR))
            .with_scale(Vec3::repeat(SKY_RADIUS)),
    );
}

/// The loaded model: a group at (0, 1, 0) with red mesh parts
pub fn model_spawn() -> Spawn {
    let red = Color::from_hex(MODEL_COLOR);
    Spawn {
        object: SceneObject::group("model").with_position(Vec3::new(0.0, 1.0, 0.0)),
        children: vec![
            SceneObject::mesh("model_body", PickShape::cuboid(1.0, 0.5, 2.0), red),
            SceneObject::mesh("model_cabin", PickShape::Sphere { radius: 0.4 }, red)
                .with_position(Vec3::new(0.0, 0.5, 0.0)),
        ],
        pickable: false,
    }
}

/// Deliver the model from a background thread after `delay`
pub fn load_model_async(sender: EventSender, delay: Duration) -> JoinHandle<()> {
    std::thread::spawn(move || {
        std::thread::sleep(delay);
        log::info!("Model loaded, handing it to the scene");
        if !sender.send(AppEvent::Spawn(model_spawn())) {
            log::warn!("Scene went away before the model arrived");
        }
    })
}

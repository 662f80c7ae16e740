//! Render loop iterations against recording host doubles

use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::Behavior;
use crate::foundation::color::Color;
use crate::foundation::math::Vec3;
use crate::input::{AppEvent, EventQueue, Spawn};
use crate::render::{Camera, CameraControls, FrameScheduler, RenderError, RenderPass};
use crate::runtime::{RenderLoop, SceneContext};
use crate::scene::{ObjectKind, PickShape, SceneGraph, SceneObject};

type CallLog = Rc<RefCell<Vec<&'static str>>>;

struct RecordingControls(CallLog);

impl CameraControls for RecordingControls {
    fn update(&mut self, _camera: &mut Camera) {
        self.0.borrow_mut().push("controls");
    }
}

struct RecordingRenderer {
    log: CallLog,
    size: (u32, u32),
}

impl RenderPass for RecordingRenderer {
    fn render(&mut self, _scene: &dyn SceneGraph, _camera: &Camera) -> Result<(), RenderError> {
        self.log.borrow_mut().push("render");
        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}

struct RecordingScheduler(CallLog);

impl FrameScheduler for RecordingScheduler {
    fn request_frame(&mut self) {
        self.0.borrow_mut().push("request_frame");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_iteration_order() {
        let log = CallLog::default();
        let mut ctx = SceneContext::default();
        let cube = ctx.add(SceneObject::mesh("cube", PickShape::unit_cube(), Color::WHITE));
        let hook_log = Rc::clone(&log);
        ctx.attach_behavior(
            cube,
            Behavior::hook(move |_: &mut SceneObject, _: Option<f32>| hook_log.borrow_mut().push("behavior")),
        );

        let mut controls = RecordingControls(Rc::clone(&log));
        let mut renderer = RecordingRenderer {
            log: Rc::clone(&log),
            size: (1280, 720),
        };
        let mut scheduler = RecordingScheduler(Rc::clone(&log));
        let mut render_loop = RenderLoop::new();

        render_loop.start(&mut scheduler);
        render_loop.frame(&mut ctx, &mut controls, &mut renderer, &mut scheduler);

        assert_eq!(
            *log.borrow(),
            ["request_frame", "behavior", "controls", "render", "request_frame"]
        );
    }

    #[test]
    fn test_one_behavior_call_among_many_members() {
        let log = CallLog::default();
        let mut ctx = SceneContext::default();
        let mut first = None;
        for i in 0..25 {
            let id = ctx.add(SceneObject::new(format!("object{i}"), ObjectKind::Mesh));
            first.get_or_insert(id);
        }
        let hook_log = Rc::clone(&log);
        ctx.attach_behavior(
            first.unwrap(),
            Behavior::hook(move |_: &mut SceneObject, _: Option<f32>| hook_log.borrow_mut().push("behavior")),
        );

        let mut renderer = crate::render::HeadlessRenderer::new(1280, 720);
        let mut scheduler = RecordingScheduler(CallLog::default());
        let mut render_loop = RenderLoop::new();
        render_loop.start(&mut scheduler);
        for _ in 0..4 {
            render_loop.frame(&mut ctx, &mut crate::render::FixedTargetControls::default(), &mut renderer, &mut scheduler);
        }

        assert_eq!(log.borrow().len(), 4);
        assert_eq!(renderer.frames_rendered(), 4);
    }

    #[test]
    fn test_spin_accumulates_per_frame() {
        let mut ctx = SceneContext::default();
        let cube = ctx.add(SceneObject::mesh("cube", PickShape::unit_cube(), Color::WHITE));
        ctx.attach_behavior(cube, Behavior::spin(Vec3::new(0.01, 0.01, 0.0)));

        let mut renderer = crate::render::HeadlessRenderer::new(1280, 720);
        let mut scheduler = RecordingScheduler(CallLog::default());
        let mut render_loop = RenderLoop::new();
        render_loop.start(&mut scheduler);
        for _ in 0..10 {
            render_loop.frame(&mut ctx, &mut crate::render::FixedTargetControls::default(), &mut renderer, &mut scheduler);
        }

        let rotation = ctx.scene().get(cube).unwrap().transform.rotation;
        assert_relative_eq!(rotation, Vec3::new(0.1, 0.1, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_object_spawned_mid_loop_is_pickable() {
        let mut ctx = SceneContext::default();
        let queue = EventQueue::new();
        let mut renderer = crate::render::HeadlessRenderer::new(1280, 720);
        let mut controls = crate::render::FixedTargetControls::default();
        let mut scheduler = RecordingScheduler(CallLog::default());
        let mut render_loop = RenderLoop::new();
        render_loop.start(&mut scheduler);
        render_loop.frame(&mut ctx, &mut controls, &mut renderer, &mut scheduler);
        assert_eq!(ctx.click(640.0, 360.0), None);

        let sender = queue.sender();
        std::thread::spawn(move || {
            let cube = SceneObject::mesh("late_cube", PickShape::unit_cube(), Color::WHITE);
            sender.send(AppEvent::Spawn(Spawn::single(cube, true)))
        })
        .join()
        .unwrap();
        for event in queue.drain() {
            assert!(ctx.handle_event(event, &mut renderer));
        }
        render_loop.frame(&mut ctx, &mut controls, &mut renderer, &mut scheduler);

        assert_eq!(ctx.registry().len(), 1);
        let spawned = ctx.registry().all()[0];
        assert_eq!(ctx.scene().get(spawned).unwrap().name, "late_cube");

        assert!(ctx.handle_event(AppEvent::Click { x: 640.0, y: 360.0 }, &mut renderer));
        assert_eq!(ctx.selected(), Some(spawned));
        assert!(ctx.scene().get(spawned).unwrap().appearance.is_emissive());
    }
}

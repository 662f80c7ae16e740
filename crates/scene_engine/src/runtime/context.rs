//! Scene context: the single owner of all interactive scene state

use crate::animation::{AnimationDispatcher, Behavior};
use crate::config::SceneSettings;
use crate::input::{AppEvent, Spawn, Viewport};
use crate::picking::{PickLayers, PickableRegistry, PickingSystem};
use crate::render::{resize::apply_resize, Camera, RenderError, RenderPass};
use crate::scene::{ObjectId, SceneGraph, SceneObject, SceneTree};

/// Everything the render loop and click handling operate on
///
/// The context owns the scene graph, the pickable registry, the selection,
/// the behavior table, the camera and the viewport. Nothing here is shared;
/// other threads talk to it through an [`EventQueue`](crate::input::EventQueue).
pub struct SceneContext {
    scene: Box<dyn SceneGraph>,
    registry: PickableRegistry,
    picking: PickingSystem,
    dispatcher: AnimationDispatcher,
    camera: Camera,
    viewport: Viewport,
}

impl SceneContext {
    /// Create a context around an existing scene graph
    pub fn new(scene: Box<dyn SceneGraph>, camera: Camera, viewport: Viewport) -> Self {
        Self {
            scene,
            registry: PickableRegistry::new(),
            picking: PickingSystem::new(viewport),
            dispatcher: AnimationDispatcher::new(),
            camera,
            viewport,
        }
    }

    /// Create an empty scene configured from settings
    pub fn from_settings(settings: &SceneSettings) -> Self {
        let viewport = Viewport::new(settings.window.width, settings.window.height);
        let camera = Camera::from_settings(&settings.camera, viewport.aspect());
        log::info!(
            "Scene context ready: {}x{} viewport, camera at {:?}",
            viewport.width,
            viewport.height,
            camera.position
        );
        let picking = PickingSystem::new(viewport)
            .with_highlight(settings.picking.highlight())
            .with_layer_mask(settings.picking.layers());
        Self::new(Box::new(SceneTree::new()), camera, viewport).with_picking(picking)
    }

    /// Replace the picking system (custom ray caster, highlight, layers)
    pub fn with_picking(mut self, picking: PickingSystem) -> Self {
        self.picking = picking;
        self.picking.update_viewport(self.viewport);
        self
    }

    /// Add an object at the scene root
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.scene.add(object)
    }

    /// Add an object under `parent`; `None` if the parent is unknown
    pub fn add_child(&mut self, parent: ObjectId, object: SceneObject) -> Option<ObjectId> {
        self.scene.add_child(parent, object)
    }

    /// Register a scene member as pickable on every layer
    pub fn make_pickable(&mut self, id: ObjectId) -> bool {
        self.make_pickable_on(id, PickLayers::all())
    }

    /// Register a scene member as pickable on some layers
    ///
    /// Ids that are not in the scene are rejected, so every registry entry
    /// stays a live scene member.
    pub fn make_pickable_on(&mut self, id: ObjectId, layers: PickLayers) -> bool {
        if !self.scene.contains(id) {
            log::warn!("Refusing to register {:?} as pickable: not in scene", id);
            return false;
        }
        self.registry.register_with_layers(id, layers)
    }

    /// Add an object at the root and register it as pickable
    pub fn spawn_pickable(&mut self, object: SceneObject) -> ObjectId {
        let id = self.scene.add(object);
        self.registry.register(id);
        id
    }

    /// Attach a per-frame behavior to a scene member
    pub fn attach_behavior(&mut self, id: ObjectId, behavior: Behavior) -> bool {
        if !self.scene.contains(id) {
            log::warn!("Refusing to animate {:?}: not in scene", id);
            return false;
        }
        self.dispatcher.attach(id, behavior);
        true
    }

    /// Add objects that arrived after setup
    ///
    /// The root goes to the scene root with the children beneath it. When
    /// `pickable` is set, the root and every child that has pick bounds are
    /// registered. Returns the root id.
    pub fn apply_spawn(&mut self, spawn: Spawn) -> ObjectId {
        let Spawn {
            object,
            children,
            pickable,
        } = spawn;
        let root_pickable = object.pick_shape.is_some();
        let root = self.scene.add(object);
        if pickable && root_pickable {
            self.registry.register(root);
        }

        for child in children {
            let child_pickable = child.pick_shape.is_some();
            if let Some(id) = self.scene.add_child(root, child) {
                if pickable && child_pickable {
                    self.registry.register(id);
                }
            }
        }
        log::info!("Spawned {:?}, scene now holds {} objects", root, self.scene.len());
        root
    }

    /// Resolve a click into a selection change; returns the new selection
    pub fn click(&mut self, pointer_x: f64, pointer_y: f64) -> Option<ObjectId> {
        self.picking.handle_click(
            pointer_x,
            pointer_y,
            &self.camera,
            &self.registry,
            self.scene.as_mut(),
        )
    }

    /// Object under the pointer without touching the selection
    pub fn pick(&self, pointer_x: f64, pointer_y: f64) -> Option<ObjectId> {
        self.picking
            .pick(pointer_x, pointer_y, &self.camera, &self.registry, self.scene.as_ref())
    }

    /// Move the selection directly
    pub fn select(&mut self, target: Option<ObjectId>) -> Option<ObjectId> {
        self.picking.select(target, self.scene.as_mut())
    }

    /// React to a new output size
    ///
    /// Renderer size, camera aspect and projection are all updated before
    /// this returns, and later clicks map through the new viewport.
    pub fn on_resize(&mut self, renderer: &mut dyn RenderPass, width: u32, height: u32) {
        apply_resize(&mut self.viewport, &mut self.camera, renderer, width, height);
        self.picking.update_viewport(self.viewport);
    }

    /// Apply one host event; returns `false` when the host should shut down
    pub fn handle_event(&mut self, event: AppEvent, renderer: &mut dyn RenderPass) -> bool {
        match event {
            AppEvent::Click { x, y } => {
                self.click(x, y);
            }
            AppEvent::Resized { width, height } => self.on_resize(renderer, width, height),
            AppEvent::Spawn(spawn) => {
                self.apply_spawn(spawn);
            }
            AppEvent::CloseRequested => {
                log::info!("Close requested");
                return false;
            }
        }
        true
    }

    /// Run every attached behavior once; returns the invocation count
    pub fn tick(&mut self, delta: Option<f32>) -> usize {
        self.dispatcher.tick(self.scene.as_mut(), delta)
    }

    /// Draw the scene from the current camera
    pub fn render(&self, renderer: &mut dyn RenderPass) -> Result<(), RenderError> {
        renderer.render(self.scene.as_ref(), &self.camera)
    }

    /// Scene graph
    pub fn scene(&self) -> &dyn SceneGraph {
        self.scene.as_ref()
    }

    /// Mutable scene graph
    pub fn scene_mut(&mut self) -> &mut dyn SceneGraph {
        self.scene.as_mut()
    }

    /// Pickable registry
    pub fn registry(&self) -> &PickableRegistry {
        &self.registry
    }

    /// Picking system and selection
    pub fn picking(&self) -> &PickingSystem {
        &self.picking
    }

    /// Currently selected object
    pub fn selected(&self) -> Option<ObjectId> {
        self.picking.selected()
    }

    /// Behavior table
    pub fn dispatcher(&self) -> &AnimationDispatcher {
        &self.dispatcher
    }

    /// Camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::from_settings(&SceneSettings::default())
    }
}

impl std::fmt::Debug for SceneContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneContext")
            .field("objects", &self.scene.len())
            .field("pickable", &self.registry.len())
            .field("animated", &self.dispatcher.len())
            .field("picking", &self.picking)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::Color;
    use crate::foundation::math::Vec3;
    use crate::render::HeadlessRenderer;
    use crate::scene::{ObjectKind, PickShape};
    use approx::assert_relative_eq;

    #[test]
    fn test_make_pickable_rejects_foreign_ids() {
        let mut context = SceneContext::default();
        let mut elsewhere = SceneTree::new();
        elsewhere.add(SceneObject::group("a"));
        let foreign = elsewhere.add(SceneObject::group("b"));

        assert!(!context.make_pickable(foreign));
        assert!(context.registry().is_empty());

        let local = context.add(SceneObject::mesh("cube", PickShape::unit_cube(), Color::WHITE));
        assert!(context.make_pickable(local));
        assert!(!context.make_pickable(local));
        assert_eq!(context.registry().len(), 1);
    }

    #[test]
    fn test_spawn_registers_children_with_bounds() {
        let mut context = SceneContext::default();
        let model = Spawn {
            object: SceneObject::group("model"),
            children: vec![
                SceneObject::mesh("body", PickShape::unit_cube(), Color::RED),
                SceneObject::new("socket", ObjectKind::Group),
            ],
            pickable: true,
        };

        let root = context.apply_spawn(model);
        assert_eq!(context.scene().len(), 3);
        assert_eq!(context.registry().len(), 1);
        assert!(!context.registry().contains(root));
    }

    #[test]
    fn test_non_pickable_spawn_is_not_registered() {
        let mut context = SceneContext::default();
        let root = context.apply_spawn(Spawn::single(
            SceneObject::mesh("model", PickShape::unit_cube(), Color::RED),
            false,
        ));
        assert!(context.scene().contains(root));
        assert!(context.registry().is_empty());
    }

    #[test]
    fn test_resize_event_updates_camera_and_picking() {
        let mut context = SceneContext::default();
        let mut renderer = HeadlessRenderer::new(1280, 720);

        assert!(context.handle_event(AppEvent::Resized { width: 600, height: 300 }, &mut renderer));
        assert_relative_eq!(context.camera().aspect, 2.0);
        assert_eq!(renderer.size(), (600, 300));
        assert_eq!(context.picking().viewport(), Viewport::new(600, 300));
        assert!(!context.handle_event(AppEvent::CloseRequested, &mut renderer));
    }

    #[test]
    fn test_click_event_selects() {
        let mut context = SceneContext::default();
        let mut renderer = HeadlessRenderer::new(1280, 720);
        let cube = context.spawn_pickable(
            SceneObject::mesh("cube", PickShape::unit_cube(), Color::WHITE).with_position(Vec3::zeros()),
        );

        context.handle_event(AppEvent::Click { x: 640.0, y: 360.0 }, &mut renderer);
        assert_eq!(context.selected(), Some(cube));
        assert_eq!(context.scene().get(cube).unwrap().emissive(), Color::RED);
    }
}

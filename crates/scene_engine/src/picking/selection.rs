//! Selection state machine for pointer picking
//!
//! At most one object is selected. Selecting an object saves its base color
//! and switches its emissive overlay to the highlight color; the previous
//! selection gets its overlay turned off and its saved color restored.
//! Deselecting (a click on empty space) restores the same way, so no object
//! stays highlighted after it loses the selection.

use crate::foundation::color::Color;
use crate::input::Viewport;
use crate::render::Camera;
use crate::scene::{ObjectId, SceneGraph};

use super::{PickLayers, PickableRegistry, Raycaster, ShapeRaycaster};

/// The single current selection and what is needed to undo its highlight
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    selected: Option<ObjectId>,
    saved_base_color: Option<Color>,
    highlight: Color,
}

impl SelectionState {
    /// Create an empty selection highlighting with `highlight`
    ///
    /// Black is the "off" value of the overlay and cannot mark a selection;
    /// it is replaced by red.
    pub fn new(highlight: Color) -> Self {
        let highlight = if highlight.is_black() {
            log::warn!("Black highlight is indistinguishable from no highlight, using red");
            Color::RED
        } else {
            highlight
        };
        Self {
            selected: None,
            saved_base_color: None,
            highlight,
        }
    }

    /// Currently selected object
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Base color of the selected object at the time it was selected
    pub fn saved_base_color(&self) -> Option<Color> {
        self.saved_base_color
    }

    /// Emissive color applied to the selection
    pub fn highlight(&self) -> Color {
        self.highlight
    }

    /// Move the selection to `target`
    ///
    /// - a different object: restore the previous one, highlight the new one
    /// - the selected object again: re-apply the highlight, keep the saved color
    /// - `None`: restore the previous one and clear the selection
    ///
    /// Targets that are not in the scene are ignored. Returns the selection
    /// after the call.
    pub fn select(&mut self, target: Option<ObjectId>, scene: &mut dyn SceneGraph) -> Option<ObjectId> {
        match target {
            None => self.clear(scene),
            Some(id) if self.selected == Some(id) => {
                if let Some(object) = scene.get_mut(id) {
                    object.set_emissive(self.highlight);
                } else {
                    self.selected = None;
                    self.saved_base_color = None;
                }
            }
            Some(id) => {
                if !scene.contains(id) {
                    log::warn!("Ignoring selection of {:?}: not in scene", id);
                    return self.selected;
                }
                self.restore_previous(scene);

                if let Some(object) = scene.get_mut(id) {
                    self.saved_base_color = Some(object.base_color());
                    object.set_emissive(self.highlight);
                    self.selected = Some(id);
                    log::debug!("Selected '{}' ({:?})", object.name, id);
                }
            }
        }
        self.selected
    }

    /// Restore the selected object's appearance and clear the selection
    pub fn clear(&mut self, scene: &mut dyn SceneGraph) {
        if self.selected.is_some() {
            self.restore_previous(scene);
            log::debug!("Selection cleared");
        }
    }

    fn restore_previous(&mut self, scene: &mut dyn SceneGraph) {
        let (Some(previous), saved) = (self.selected.take(), self.saved_base_color.take()) else {
            return;
        };
        if let Some(object) = scene.get_mut(previous) {
            object.appearance.clear_emissive();
            if let Some(color) = saved {
                object.set_base_color(color);
            }
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Color::RED)
    }
}

/// Pointer picking: viewport conversion, ray casting and the selection
///
/// ```
/// # use scene_engine::foundation::color::Color;
/// # use scene_engine::input::Viewport;
/// # use scene_engine::picking::{PickableRegistry, PickingSystem};
/// # use scene_engine::render::Camera;
/// # use scene_engine::scene::{PickShape, SceneGraph, SceneObject, SceneTree};
/// let mut scene = SceneTree::new();
/// let mut registry = PickableRegistry::new();
/// let cube = scene.add(SceneObject::mesh("cube", PickShape::unit_cube(), Color::WHITE));
/// registry.register(cube);
///
/// let camera = Camera::default();
/// let mut picking = PickingSystem::new(Viewport::new(800, 600));
/// // The default camera looks at the origin, so the center pixel hits the cube
/// assert_eq!(picking.handle_click(400.0, 300.0, &camera, &registry, &mut scene), Some(cube));
/// assert!(scene.get(cube).unwrap().appearance.is_emissive());
/// ```
pub struct PickingSystem {
    viewport: Viewport,
    layer_mask: PickLayers,
    raycaster: Box<dyn Raycaster>,
    selection: SelectionState,
}

impl PickingSystem {
    /// Create a picking system using pick shapes and a red highlight
    pub fn new(viewport: Viewport) -> Self {
        Self::with_raycaster(viewport, Box::new(ShapeRaycaster))
    }

    /// Create a picking system backed by an external ray caster
    pub fn with_raycaster(viewport: Viewport, raycaster: Box<dyn Raycaster>) -> Self {
        Self {
            viewport,
            layer_mask: PickLayers::all(),
            raycaster,
            selection: SelectionState::default(),
        }
    }

    /// Builder: set the highlight color
    pub fn with_highlight(mut self, highlight: Color) -> Self {
        self.selection = SelectionState::new(highlight);
        self
    }

    /// Builder: restrict picks to some layers
    pub fn with_layer_mask(mut self, mask: PickLayers) -> Self {
        self.layer_mask = mask;
        self
    }

    /// Update the viewport used for pointer conversion
    pub fn update_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Viewport used for pointer conversion
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Set the layer mask for filtering pickable objects
    pub fn set_layer_mask(&mut self, mask: PickLayers) {
        self.layer_mask = mask;
    }

    /// Selection state
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Currently selected object
    pub fn selected(&self) -> Option<ObjectId> {
        self.selection.selected()
    }

    /// Nearest registered object under the pointer
    ///
    /// `pointer_x`/`pointer_y` are window pixels from the top-left corner.
    /// Returns `None` when nothing is hit, the registry is empty, the
    /// viewport is empty, or the camera cannot produce a ray. Picking reads
    /// only, so repeated calls with the same inputs return the same object.
    pub fn pick(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        camera: &Camera,
        registry: &PickableRegistry,
        scene: &dyn SceneGraph,
    ) -> Option<ObjectId> {
        if registry.is_empty() {
            return None;
        }
        let (ndc_x, ndc_y) = self.viewport.pointer_to_ndc(pointer_x, pointer_y)?;
        let ray = camera.screen_to_world_ray(ndc_x, ndc_y)?;

        let candidates = registry.candidates(self.layer_mask);
        let hit = self.raycaster.intersect(&ray, &candidates, scene).into_iter().next();

        match &hit {
            Some(hit) => log::debug!("Pick at ({:.1}, {:.1}): hit {:?} at distance {:.2}", pointer_x, pointer_y, hit.object, hit.distance),
            None => log::debug!("Pick at ({:.1}, {:.1}): no hit", pointer_x, pointer_y),
        }
        hit.map(|hit| hit.object)
    }

    /// Move the selection (see [`SelectionState::select`])
    pub fn select(&mut self, target: Option<ObjectId>, scene: &mut dyn SceneGraph) -> Option<ObjectId> {
        self.selection.select(target, scene)
    }

    /// Pick under the pointer and select the result
    pub fn handle_click(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        camera: &Camera,
        registry: &PickableRegistry,
        scene: &mut dyn SceneGraph,
    ) -> Option<ObjectId> {
        let target = self.pick(pointer_x, pointer_y, camera, registry, scene);
        self.select(target, scene)
    }
}

impl std::fmt::Debug for PickingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickingSystem")
            .field("viewport", &self.viewport)
            .field("layer_mask", &self.layer_mask)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::scene::{PickShape, SceneObject, SceneTree};

    fn cube(scene: &mut SceneTree, hex: u32, position: Vec3) -> ObjectId {
        scene.add(SceneObject::mesh("cube", PickShape::unit_cube(), Color::from_hex(hex)).with_position(position))
    }

    #[test]
    fn test_select_then_switch_restores_previous() {
        let mut scene = SceneTree::new();
        let a = cube(&mut scene, 0x112233, Vec3::zeros());
        let b = cube(&mut scene, 0x445566, Vec3::new(3.0, 0.0, 0.0));
        let mut selection = SelectionState::default();

        assert_eq!(selection.select(Some(a), &mut scene), Some(a));
        assert_eq!(scene.get(a).unwrap().emissive(), Color::RED);
        assert_eq!(selection.saved_base_color(), Some(Color::from_hex(0x112233)));

        assert_eq!(selection.select(Some(b), &mut scene), Some(b));
        assert!(!scene.get(a).unwrap().appearance.is_emissive());
        assert_eq!(scene.get(a).unwrap().base_color(), Color::from_hex(0x112233));
        assert_eq!(scene.get(b).unwrap().emissive(), Color::RED);
        assert_eq!(selection.saved_base_color(), Some(Color::from_hex(0x445566)));
    }

    #[test]
    fn test_reselecting_is_idempotent() {
        let mut scene = SceneTree::new();
        let a = cube(&mut scene, 0x00ff00, Vec3::zeros());
        let mut selection = SelectionState::default();

        selection.select(Some(a), &mut scene);
        let snapshot = scene.get(a).unwrap().clone();
        selection.select(Some(a), &mut scene);

        assert_eq!(scene.get(a).unwrap(), &snapshot);
        assert_eq!(selection.saved_base_color(), Some(Color::from_hex(0x00ff00)));
    }

    #[test]
    fn test_deselect_restores_and_empty_deselect_is_noop() {
        let mut scene = SceneTree::new();
        let a = cube(&mut scene, 0x0000ff, Vec3::zeros());
        let mut selection = SelectionState::default();

        assert_eq!(selection.select(None, &mut scene), None);
        assert_eq!(selection, SelectionState::default());

        selection.select(Some(a), &mut scene);
        assert_eq!(selection.select(None, &mut scene), None);
        assert!(!scene.get(a).unwrap().appearance.is_emissive());
        assert_eq!(selection.saved_base_color(), None);
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let mut scene = SceneTree::new();
        let a = cube(&mut scene, 0xffffff, Vec3::zeros());
        let mut other = SceneTree::new();
        other.add(SceneObject::group("x"));
        other.add(SceneObject::group("y"));
        let foreign = other.add(SceneObject::group("z"));

        let mut selection = SelectionState::default();
        selection.select(Some(a), &mut scene);
        assert_eq!(selection.select(Some(foreign), &mut scene), Some(a));
        assert!(scene.get(a).unwrap().appearance.is_emissive());
    }

    #[test]
    fn test_black_highlight_falls_back_to_red() {
        assert_eq!(SelectionState::new(Color::BLACK).highlight(), Color::RED);
        assert_eq!(SelectionState::new(Color::WHITE).highlight(), Color::WHITE);
    }

    #[test]
    fn test_pick_with_empty_registry_or_viewport() {
        let mut scene = SceneTree::new();
        let a = cube(&mut scene, 0xffffff, Vec3::zeros());
        let camera = Camera::default();
        let mut registry = PickableRegistry::new();

        let picking = PickingSystem::new(Viewport::new(800, 600));
        assert_eq!(picking.pick(400.0, 300.0, &camera, &registry, &scene), None);

        registry.register(a);
        assert_eq!(picking.pick(400.0, 300.0, &camera, &registry, &scene), Some(a));

        let minimized = PickingSystem::new(Viewport::new(0, 0));
        assert_eq!(minimized.pick(400.0, 300.0, &camera, &registry, &scene), None);
    }

    #[test]
    fn test_layer_mask_excludes_candidates() {
        let mut scene = SceneTree::new();
        let a = cube(&mut scene, 0xffffff, Vec3::zeros());
        let camera = Camera::default();
        let mut registry = PickableRegistry::new();
        registry.register_with_layers(a, PickLayers::GIZMO);

        let picking = PickingSystem::new(Viewport::new(800, 600)).with_layer_mask(PickLayers::WORLD);
        assert_eq!(picking.pick(400.0, 300.0, &camera, &registry, &scene), None);
    }
}

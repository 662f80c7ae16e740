//! Scene objects and their appearance

use crate::foundation::color::Color;
use crate::foundation::math::{Transform, Vec3};

use super::PickShape;

slotmap::new_key_type! {
    /// Stable handle to an object owned by a [`SceneGraph`](super::SceneGraph)
    pub struct ObjectId;
}

/// What an object is, as far as the scene core cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Lit geometry (floor, shapes, loaded model parts)
    Mesh,
    /// Camera-facing billboard
    Sprite,
    /// Light source
    Light,
    /// Pure transform node grouping children
    Group,
}

/// Display properties the selection machinery mutates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Unmodified display color
    pub base_color: Color,
    /// Overlay color; [`Color::BLACK`] means off
    pub emissive: Color,
}

impl Appearance {
    /// Appearance with the given base color and the emissive overlay off
    pub fn new(base_color: Color) -> Self {
        Self {
            base_color,
            emissive: Color::BLACK,
        }
    }

    /// Whether the emissive overlay is on
    pub fn is_emissive(&self) -> bool {
        !self.emissive.is_black()
    }

    /// Turn the emissive overlay off
    pub fn clear_emissive(&mut self) {
        self.emissive = Color::BLACK;
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

/// A renderable entity owned by the scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Debug name
    pub name: String,
    /// Object category
    pub kind: ObjectKind,
    /// Local transform relative to the parent
    pub transform: Transform,
    /// Color state
    pub appearance: Appearance,
    /// Local-space bounds used for ray picking, if any
    pub pick_shape: Option<PickShape>,
}

impl SceneObject {
    /// Create an object of the given kind at the origin
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::identity(),
            appearance: Appearance::default(),
            pick_shape: None,
        }
    }

    /// A mesh with pick bounds and a base color
    pub fn mesh(name: impl Into<String>, shape: PickShape, color: Color) -> Self {
        Self::new(name, ObjectKind::Mesh)
            .with_pick_shape(shape)
            .with_color(color)
    }

    /// A group node
    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, ObjectKind::Group)
    }

    /// Builder: set the position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Builder: set the Euler rotation
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    /// Builder: set the scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    /// Builder: set the base color
    pub fn with_color(mut self, color: Color) -> Self {
        self.appearance.base_color = color;
        self
    }

    /// Builder: set the pick bounds
    pub fn with_pick_shape(mut self, shape: PickShape) -> Self {
        self.pick_shape = Some(shape);
        self
    }

    /// Current base color
    pub fn base_color(&self) -> Color {
        self.appearance.base_color
    }

    /// Replace the base color
    pub fn set_base_color(&mut self, color: Color) {
        self.appearance.base_color = color;
    }

    /// Current emissive overlay
    pub fn emissive(&self) -> Color {
        self.appearance.emissive
    }

    /// Replace the emissive overlay
    pub fn set_emissive(&mut self, color: Color) {
        self.appearance.emissive = color;
    }
}

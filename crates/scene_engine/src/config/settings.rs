//! Engine settings loaded through [`Config`]

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::color::Color;
use crate::foundation::math::Vec3;
use crate::picking::PickLayers;

/// Top-level engine settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Initial window/viewport
    pub window: WindowSettings,
    /// Camera placement and projection
    pub camera: CameraSettings,
    /// Selection highlight and pick filtering
    pub picking: PickingSettings,
    /// Per-frame behavior parameters
    pub animation: AnimationSettings,
}

impl Config for SceneSettings {}

/// Initial window size and title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Scene Showcase".to_string(),
        }
    }
}

/// Perspective camera parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Camera position in world space
    pub position: [f32; 3],
    /// Look-at target in world space
    pub target: [f32; 3],
}

impl CameraSettings {
    /// Position as a vector
    pub fn position_vec(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Target as a vector
    pub fn target_vec(&self) -> Vec3 {
        Vec3::from(self.target)
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 5.0, 10.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Selection highlight and pick filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickingSettings {
    /// Emissive color applied to the selected object (`0xRRGGBB`)
    pub highlight_color: u32,
    /// Layer bits considered by pointer picks
    pub layer_mask: u32,
}

impl PickingSettings {
    /// Highlight as a color
    pub fn highlight(&self) -> Color {
        Color::from_hex(self.highlight_color)
    }

    /// Layer mask as pick layers (unknown bits dropped)
    pub fn layers(&self) -> PickLayers {
        PickLayers::from_bits_truncate(self.layer_mask)
    }
}

impl Default for PickingSettings {
    fn default() -> Self {
        Self {
            highlight_color: 0xff0000,
            layer_mask: PickLayers::all().bits(),
        }
    }
}

/// Per-frame behavior parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Euler increment applied by spinning objects each frame (radians)
    pub spin_step: [f32; 3],
    /// Feed the measured frame delta to behaviors
    pub use_frame_delta: bool,
}

impl AnimationSettings {
    /// Spin step as a vector
    pub fn spin_step_vec(&self) -> Vec3 {
        Vec3::from(self.spin_step)
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            spin_step: [0.01, 0.01, 0.0],
            use_frame_delta: false,
        }
    }
}

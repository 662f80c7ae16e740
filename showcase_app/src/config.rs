//! Showcase configuration: engine settings plus population and host

use scene_engine::config::{Config, SceneSettings};
use scene_engine::input::AppEvent;
use serde::{Deserialize, Serialize};

/// Everything the showcase binary reads from its config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Engine settings (window, camera, picking, animation)
    pub scene: SceneSettings,
    /// How the demo scene is populated
    pub population: PopulationSettings,
    /// Headless host behavior
    pub host: HostSettings,
}

impl Config for ShowcaseConfig {}

/// Demo scene population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationSettings {
    /// Number of random pickable shapes
    pub shape_count: usize,
    /// Number of billboard sprites
    pub billboard_count: usize,
    /// Shapes are scattered over a square of this side on the XZ plane
    pub spread: f32,
    /// Maximum shape height above the floor
    pub max_height: f32,
    /// Fixed RNG seed for reproducible layouts
    pub seed: Option<u64>,
    /// Load the model on a background thread after startup
    pub load_model: bool,
}

impl Default for PopulationSettings {
    fn default() -> Self {
        Self {
            shape_count: 20,
            billboard_count: 5,
            spread: 20.0,
            max_height: 5.0,
            seed: None,
            load_model: true,
        }
    }
}

/// Headless host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Frames to run before exiting
    pub max_frames: u64,
    /// Hold each frame to the nominal frame time, as a display would
    pub paced: bool,
    /// Input replayed before the given frames
    pub script: Vec<ScriptedEvent>,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            max_frames: 120,
            paced: true,
            script: vec![
                ScriptedEvent {
                    frame: 10,
                    action: ScriptedAction::Click { x: 640.0, y: 360.0 },
                },
                ScriptedEvent {
                    frame: 60,
                    action: ScriptedAction::Resize {
                        width: 1024,
                        height: 768,
                    },
                },
                ScriptedEvent {
                    frame: 90,
                    action: ScriptedAction::Click { x: 5.0, y: 5.0 },
                },
            ],
        }
    }
}

/// One input replayed by the headless host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    /// Frame number the event is delivered before
    pub frame: u64,
    /// What happens
    pub action: ScriptedAction,
}

/// Scriptable host input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScriptedAction {
    /// Pointer click in window pixels
    Click {
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
    },
    /// Window resize
    Resize {
        /// New width
        width: u32,
        /// New height
        height: u32,
    },
    /// Close the window
    Close,
}

impl From<ScriptedAction> for AppEvent {
    fn from(action: ScriptedAction) -> Self {
        match action {
            ScriptedAction::Click { x, y } => Self::Click { x, y },
            ScriptedAction::Resize { width, height } => Self::Resized { width, height },
            ScriptedAction::Close => Self::CloseRequested,
        }
    }
}

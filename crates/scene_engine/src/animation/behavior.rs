//! Behavior descriptors

use std::fmt;

use crate::foundation::math::Vec3;
use crate::foundation::time::NOMINAL_FRAME_SECONDS;
use crate::scene::SceneObject;

/// Arbitrary per-frame update bound to one object
///
/// Implemented for any `FnMut(&mut SceneObject, Option<f32>)`; the second
/// argument is the frame delta in seconds when the loop measures one.
pub trait AnimationHook {
    /// Run once for the frame
    fn update(&mut self, object: &mut SceneObject, delta: Option<f32>);
}

impl<F> AnimationHook for F
where
    F: FnMut(&mut SceneObject, Option<f32>),
{
    fn update(&mut self, object: &mut SceneObject, delta: Option<f32>) {
        self(object, delta);
    }
}

/// What an object does every frame
pub enum Behavior {
    /// Add a fixed Euler increment (radians) every frame
    Spin {
        /// Increment per frame
        step: Vec3,
    },

    /// Rotate at a fixed rate, independent of frame rate
    ///
    /// Without a measured delta one nominal 60 Hz frame is assumed.
    SpinRate {
        /// Angular rate per axis
        radians_per_second: Vec3,
    },

    /// Custom update
    Hook(Box<dyn AnimationHook>),
}

impl Behavior {
    /// Spin by `step` every frame
    pub fn spin(step: Vec3) -> Self {
        Self::Spin { step }
    }

    /// Wrap a closure or other hook
    pub fn hook(hook: impl AnimationHook + 'static) -> Self {
        Self::Hook(Box::new(hook))
    }

    /// Run the behavior against its object
    pub fn apply(&mut self, object: &mut SceneObject, delta: Option<f32>) {
        match self {
            Self::Spin { step } => object.transform.rotation += *step,
            Self::SpinRate { radians_per_second } => {
                let seconds = delta.unwrap_or(NOMINAL_FRAME_SECONDS);
                object.transform.rotation += *radians_per_second * seconds;
            }
            Self::Hook(hook) => hook.update(object, delta),
        }
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spin { step } => f.debug_struct("Spin").field("step", step).finish(),
            Self::SpinRate { radians_per_second } => f
                .debug_struct("SpinRate")
                .field("radians_per_second", radians_per_second)
                .finish(),
            Self::Hook(_) => f.write_str("Hook(..)"),
        }
    }
}

//! Math utilities and types
//!
//! Provides fundamental math types for 3D scene handling.

pub use nalgebra::{Matrix4, Rotation3, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Transform representing position, rotation, and scale
///
/// Rotation is stored as Euler angles in radians (about X, Y and Z) so that
/// per-frame behaviors can increment individual axes directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Euler rotation in radians
    pub rotation: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder: set the Euler rotation
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set the scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation part as a rotation matrix
    pub fn rotation_matrix(&self) -> Rotation3<f32> {
        Rotation3::from_euler_angles(self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Convert to a transformation matrix (T * R * S)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation_matrix().to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// Angle helpers
pub mod utils {
    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees.to_radians()
    }
}

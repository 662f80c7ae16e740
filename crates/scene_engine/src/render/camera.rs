//! # 3D Camera
//!
//! Perspective camera with a cached projection matrix.
//!
//! ## Coordinate System
//! Right-handed, Y-up world space. Projection follows the OpenGL convention:
//! NDC depth runs from -1 (near) to +1 (far).
//!
//! Changing [`Camera::aspect`] or the field of view does not touch the cached
//! projection; call [`Camera::update_projection_matrix`] afterwards, as the
//! resize handler does.

use crate::config::CameraSettings;
use crate::foundation::math::{utils, Mat4, Point3, Vec3, Vec4};
use crate::picking::Ray;

/// 3D perspective camera
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,

    projection: Mat4,
}

impl Camera {
    /// Create a perspective camera looking at the origin
    ///
    /// # Example
    /// ```rust
    /// use scene_engine::foundation::math::Vec3;
    /// use scene_engine::render::Camera;
    ///
    /// let camera = Camera::perspective(Vec3::new(0.0, 5.0, 10.0), 75.0, 16.0 / 9.0, 0.1, 1000.0);
    /// assert_eq!(camera.aspect, 16.0 / 9.0);
    /// ```
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
            projection: Mat4::identity(),
        };
        camera.update_projection_matrix();
        camera
    }

    /// Build from settings for a viewport with the given aspect ratio
    pub fn from_settings(settings: &CameraSettings, aspect: f32) -> Self {
        let mut camera = Self::perspective(
            settings.position_vec(),
            settings.fov_degrees,
            aspect,
            settings.near,
            settings.far,
        );
        camera.target = settings.target_vec();
        camera
    }

    /// Update camera target (look-at point)
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        log::trace!("Camera target updated to: {:?}", target);
    }

    /// Set the aspect ratio; the projection is recomputed separately
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::debug!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Recompute the cached projection from fov, aspect and clip planes
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::new_perspective(self.aspect, self.fov, self.near, self.far);
    }

    /// Cached projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World-to-camera matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.position),
            &Point3::from(self.target),
            &self.up,
        )
    }

    /// Combined projection × view
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// Convert normalized device coordinates to a world-space ray
    ///
    /// The ray starts at the camera position and passes through the point
    /// under the pointer. Returns `None` when the camera matrices cannot be
    /// inverted (degenerate up vector, zero-size frustum).
    pub fn screen_to_world_ray(&self, ndc_x: f32, ndc_y: f32) -> Option<Ray> {
        let inv_view_proj = self.view_projection_matrix().try_inverse()?;

        let unproject = |depth: f32| {
            let h = inv_view_proj * Vec4::new(ndc_x, ndc_y, depth, 1.0);
            (h.w.abs() > f32::EPSILON).then(|| Vec3::new(h.x / h.w, h.y / h.w, h.z / h.w))
        };
        let world_near = unproject(-1.0)?;
        let world_far = unproject(1.0)?;

        Ray::try_new(self.position, world_far - world_near)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default(), 16.0 / 9.0)
    }
}

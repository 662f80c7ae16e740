//! Rays and the ray-casting seam

use crate::foundation::math::{Point3, Vec3};
use crate::scene::{ObjectId, SceneGraph};

/// A ray for ray casting and picking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, `None` if the direction has no length
    pub fn try_new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize(f32::EPSILON)?;
        if !origin.iter().chain(direction.iter()).all(|c| c.is_finite()) {
            return None;
        }
        Some(Self { origin, direction })
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The object that was hit
    pub object: ObjectId,
    /// Ray parameter (world distance from the ray origin)
    pub distance: f32,
    /// The point of intersection in world space
    pub point: Vec3,
}

/// Ray-intersection interface of the rendering backend
pub trait Raycaster {
    /// Intersect `ray` with `candidates`, returning hits nearest-first
    ///
    /// Hits at equal distance keep the order of `candidates`.
    fn intersect(&self, ray: &Ray, candidates: &[ObjectId], scene: &dyn SceneGraph) -> Vec<RayHit>;
}

/// Ray caster testing each candidate's [`PickShape`](crate::scene::PickShape)
///
/// Shapes are tested in object space, so rotated and scaled objects (and
/// children of transformed groups) pick correctly. Candidates without a
/// shape, with a degenerate transform, or missing from the scene are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShapeRaycaster;

impl Raycaster for ShapeRaycaster {
    fn intersect(&self, ray: &Ray, candidates: &[ObjectId], scene: &dyn SceneGraph) -> Vec<RayHit> {
        let mut hits: Vec<RayHit> = candidates
            .iter()
            .filter_map(|&id| {
                let shape = scene.get(id)?.pick_shape?;
                let inverse = scene.world_matrix(id)?.try_inverse()?;
                let local_origin = inverse.transform_point(&Point3::from(ray.origin));
                let local_direction = inverse.transform_vector(&ray.direction);

                let distance = shape.intersect_local(local_origin, local_direction)?;
                Some(RayHit {
                    object: id,
                    distance,
                    point: ray.point_at(distance),
                })
            })
            .collect();

        // Stable: equal distances keep candidate order
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::Color;
    use crate::scene::{PickShape, SceneObject, SceneTree};
    use approx::assert_relative_eq;

    fn cube_at(z: f32) -> SceneObject {
        SceneObject::mesh("cube", PickShape::unit_cube(), Color::WHITE).with_position(Vec3::new(0.0, 0.0, z))
    }

    fn forward_ray() -> Ray {
        Ray::try_new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0)).unwrap()
    }

    #[test]
    fn test_zero_direction_is_rejected() {
        assert!(Ray::try_new(Vec3::zeros(), Vec3::zeros()).is_none());
    }

    #[test]
    fn test_hits_are_sorted_nearest_first() {
        let mut scene = SceneTree::new();
        let far = scene.add(cube_at(-5.0));
        let near = scene.add(cube_at(2.0));

        let hits = ShapeRaycaster.intersect(&forward_ray(), &[far, near], &scene);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].object, near);
        assert_relative_eq!(hits[0].distance, 7.5, epsilon = 1e-5);
        assert_relative_eq!(hits[0].point, Vec3::new(0.0, 0.0, 2.5), epsilon = 1e-5);
        assert_eq!(hits[1].object, far);
    }

    #[test]
    fn test_equal_distances_keep_candidate_order() {
        let mut scene = SceneTree::new();
        let first = scene.add(cube_at(0.0));
        let second = scene.add(cube_at(0.0));

        let hits = ShapeRaycaster.intersect(&forward_ray(), &[second, first], &scene);
        assert_eq!(hits[0].object, second);
        assert_eq!(hits[1].object, first);
    }

    #[test]
    fn test_rotated_and_scaled_objects() {
        let mut scene = SceneTree::new();
        // A thin slab rotated a quarter turn about Y faces the ray edge-on
        let slab = scene.add(
            SceneObject::mesh("slab", PickShape::cuboid(4.0, 1.0, 0.2), Color::WHITE)
                .with_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0)),
        );
        let hits = ShapeRaycaster.intersect(&forward_ray(), &[slab], &scene);
        assert_relative_eq!(hits[0].distance, 8.0, epsilon = 1e-4);

        let scaled = scene.add(cube_at(0.0).with_scale(Vec3::new(1.0, 1.0, 4.0)));
        let hits = ShapeRaycaster.intersect(&forward_ray(), &[scaled], &scene);
        assert_relative_eq!(hits[0].distance, 8.0, epsilon = 1e-4);
    }

    #[test]
    fn test_objects_without_shape_are_skipped() {
        let mut scene = SceneTree::new();
        let group = scene.add(SceneObject::group("group"));
        assert!(ShapeRaycaster.intersect(&forward_ray(), &[group], &scene).is_empty());
    }
}

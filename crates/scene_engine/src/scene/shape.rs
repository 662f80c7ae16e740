//! Local-space pick bounds
//!
//! Shapes are centered on the object's origin. Ray tests run in local space:
//! the caller transforms the ray with the inverse world matrix and keeps the
//! direction unnormalized, so the returned parameter is valid in world space.

use crate::foundation::math::{Point3, Vec3};

/// Bounding volume used for ray picking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickShape {
    /// Sphere around the origin
    Sphere {
        /// Radius
        radius: f32,
    },
    /// Box around the origin
    Box {
        /// Half size along each axis
        half_extents: Vec3,
    },
    /// Cylinder along the local Y axis
    Cylinder {
        /// Radius
        radius: f32,
        /// Half of the height
        half_height: f32,
    },
}

impl PickShape {
    /// Box with the given full size
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Box {
            half_extents: Vec3::new(width, height, depth) * 0.5,
        }
    }

    /// 1×1×1 box
    pub fn unit_cube() -> Self {
        Self::cuboid(1.0, 1.0, 1.0)
    }

    /// Ray parameter of the nearest intersection at or ahead of the origin
    pub fn intersect_local(&self, origin: Point3, direction: Vec3) -> Option<f32> {
        match *self {
            Self::Sphere { radius } => intersect_sphere(origin.coords, direction, radius),
            Self::Box { half_extents } => intersect_box(origin.coords, direction, half_extents),
            Self::Cylinder {
                radius,
                half_height,
            } => intersect_cylinder(origin.coords, direction, radius, half_height),
        }
    }
}

/// Smallest non-negative root of `a t² + b t + c = 0`
fn nearest_root(a: f32, b: f32, c: f32) -> Option<f32> {
    if a.abs() <= f32::EPSILON {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_discriminant = discriminant.sqrt();
    let t1 = (-b - sqrt_discriminant) / (2.0 * a);
    let t2 = (-b + sqrt_discriminant) / (2.0 * a);
    let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

fn intersect_sphere(origin: Vec3, direction: Vec3, radius: f32) -> Option<f32> {
    let a = direction.dot(&direction);
    let b = 2.0 * origin.dot(&direction);
    let c = origin.dot(&origin) - radius * radius;
    nearest_root(a, b, c)
}

// Slab method, as in "An Efficient and Robust Ray-Box Intersection Algorithm"
fn intersect_box(origin: Vec3, direction: Vec3, half_extents: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        let h = half_extents[axis];

        if d.abs() <= f32::EPSILON {
            if o < -h || o > h {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let t1 = (-h - o) * inv;
        let t2 = (h - o) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_max >= 0.0 {
        Some(t_min.max(0.0))
    } else {
        None
    }
}

fn intersect_cylinder(origin: Vec3, direction: Vec3, radius: f32, half_height: f32) -> Option<f32> {
    let inside_radius = |t: f32| {
        let p = origin + direction * t;
        p.x * p.x + p.z * p.z <= radius * radius
    };
    let within_height = |t: f32| (origin.y + direction.y * t).abs() <= half_height;

    if inside_radius(0.0) && within_height(0.0) {
        return Some(0.0);
    }

    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |current| t < current) {
            best = Some(t);
        }
    };

    // Side wall
    let a = direction.x * direction.x + direction.z * direction.z;
    let b = 2.0 * (origin.x * direction.x + origin.z * direction.z);
    let c = origin.x * origin.x + origin.z * origin.z - radius * radius;
    if a > f32::EPSILON {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 {
            let sqrt_discriminant = discriminant.sqrt();
            for t in [
                (-b - sqrt_discriminant) / (2.0 * a),
                (-b + sqrt_discriminant) / (2.0 * a),
            ] {
                if within_height(t) {
                    consider(t);
                }
            }
        }
    }

    // Caps
    if direction.y.abs() > f32::EPSILON {
        for cap in [-half_height, half_height] {
            let t = (cap - origin.y) / direction.y;
            if inside_radius(t) {
                consider(t);
            }
        }
    }

    best
}

use glam::Vec3A;

use super::hittable::Hittable;
use super::ray::{Ray, RaycastHit};

/// Analytic sphere, immutable after construction.
#[derive(Debug, Copy, Clone)]
pub struct Sphere {
    center: Vec3A,
    radius: f32,
}

impl Sphere {
    /// # Panics
    /// Debug builds panic on a non-positive radius.
    pub fn new(center: Vec3A, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self { center, radius }
    }

    pub fn center(&self) -> Vec3A {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit_test(&self, ray: &Ray, min_t: f32, max_t: f32) -> Option<RaycastHit> {
        // Half-b reduction of the ray-sphere quadratic.
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let disc_sqrt = discriminant.sqrt();

        // Smaller root first, larger root as fallback.
        let mut root = (-half_b - disc_sqrt) / a;
        if root < min_t || root > max_t {
            root = (-half_b + disc_sqrt) / a;
            if root < min_t || root > max_t {
                return None;
            }
        }

        let position = ray.at(root);
        let outward_normal = (position - self.center) / self.radius;

        let mut hit = RaycastHit {
            position,
            normal: outward_normal,
            distance: root,
            front_face: false,
        };
        hit.set_face_normal(ray, outward_normal);

        Some(hit)
    }
}

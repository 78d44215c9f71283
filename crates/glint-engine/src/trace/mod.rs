//! CPU ray-tracing core.
//!
//! Responsibilities:
//! - ray and intersection value types
//! - the `Hittable` capability and its sphere implementation
//! - the ordered scene collection
//! - per-pixel world-space ray generation from the camera matrices

mod camera;
mod hittable;
mod ray;
mod scene;
mod sphere;

pub use camera::Camera;
pub use hittable::Hittable;
pub use ray::{Ray, RaycastHit};
pub use scene::Scene;
pub use sphere::Sphere;

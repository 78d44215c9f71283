use glam::Vec3A;

/// Semi-infinite line `r(t) = origin + t * direction`.
///
/// The direction is not required to be unit length; camera-generated
/// directions are normalized at generation time.
#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub origin: Vec3A,
    pub direction: Vec3A,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + self.direction * t
    }
}

/// Intersection record produced by a [`Hittable`](super::Hittable) test.
#[derive(Debug, Copy, Clone)]
pub struct RaycastHit {
    /// World-space intersection point.
    pub position: Vec3A,
    /// Unit surface normal, oriented against the incident ray.
    pub normal: Vec3A,
    /// Ray parameter at the intersection.
    pub distance: f32,
    /// True when the ray approaches from the outward-normal side.
    pub front_face: bool,
}

impl RaycastHit {
    /// Derives `front_face` and the stored normal from the outward normal.
    ///
    /// The normal is never stored independent of the face flag: a back-face
    /// hit flips it so shading always sees a normal opposing the ray.
    #[inline]
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3A) {
        self.front_face = ray.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

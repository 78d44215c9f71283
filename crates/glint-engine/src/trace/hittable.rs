use super::ray::{Ray, RaycastHit};

/// Capability: can be intersection-tested against a ray.
///
/// Implementations are stateless with respect to the test itself and must
/// be thread-safe; pixel results are independent, so the trace loop may be
/// parallelized without changing observable output.
pub trait Hittable: Send + Sync {
    /// Tests `ray` against this object within `[min_t, max_t]`.
    ///
    /// Returns `None` when the ray misses or every root falls outside the
    /// parameter range.
    fn hit_test(&self, ray: &Ray, min_t: f32, max_t: f32) -> Option<RaycastHit>;
}

use std::sync::Arc;

use crate::render::FramePass;

use super::hittable::Hittable;

/// Ordered collection of shared hittable objects.
///
/// Insertion order is semantically significant: the renderer resolves
/// overlapping hits in submission order, and [`on_render`](Scene::on_render)
/// submits in collection order.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Arc<dyn Hittable>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object. No deduplication; ownership stays shared, so the
    /// object lives as long as its longest holder.
    pub fn add_object(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> &[Arc<dyn Hittable>] {
        &self.objects
    }

    /// Registers every contained object, in collection order, with the
    /// current frame's submission list. Not a draw call.
    pub fn on_render(&self, pass: &mut FramePass<'_, '_>) {
        for object in &self.objects {
            pass.submit(Arc::clone(object));
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3A;

    use crate::trace::Sphere;

    use super::*;

    #[test]
    fn objects_keep_insertion_order() {
        let mut scene = Scene::new();
        let a: Arc<dyn Hittable> = Arc::new(Sphere::new(Vec3A::new(2.0, 0.0, -5.0), 0.5));
        let b: Arc<dyn Hittable> = Arc::new(Sphere::new(Vec3A::new(-2.0, 0.0, -5.0), 0.5));

        scene.add_object(Arc::clone(&a));
        scene.add_object(Arc::clone(&b));

        assert_eq!(scene.objects().len(), 2);
        assert!(Arc::ptr_eq(&a, &scene.objects()[0]));
        assert!(Arc::ptr_eq(&b, &scene.objects()[1]));
    }

    #[test]
    fn on_render_submits_every_object() {
        let mut camera = crate::trace::Camera::perspective(60.0, 1.0, 0.1, 100.0);
        camera.generate_ray_directions(2, 2);
        let mut renderer = crate::render::Renderer::new(1, camera).unwrap();
        let mut target = crate::render::OffscreenTarget::new(2, 2);

        let mut scene = Scene::new();
        scene.add_object(Arc::new(Sphere::new(Vec3A::new(2.0, 0.0, -5.0), 0.5)));
        scene.add_object(Arc::new(Sphere::new(Vec3A::new(-2.0, 0.0, -5.0), 0.5)));

        let mut pass = renderer.begin(0, &mut target);
        scene.on_render(&mut pass);
        assert_eq!(pass.submission_count(), 2);
        pass.end();
    }

    #[test]
    fn duplicate_objects_are_kept() {
        let mut scene = Scene::new();
        let a: Arc<dyn Hittable> = Arc::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5));
        scene.add_object(Arc::clone(&a));
        scene.add_object(a);
        assert_eq!(scene.objects().len(), 2);
    }
}

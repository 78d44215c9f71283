use std::sync::Arc;

use anyhow::Result;
use glam::Vec3A;

use crate::frame::{DescriptorSet, DescriptorSetRequest, FrameScheduler, Presentation};
use crate::trace::{Camera, Hittable, Ray};

use super::buffer::PixelBuffer;
use super::color::{normal_color, pack_rgba, sky_color};
use super::target::TargetImage;

/// Ray parameter range used for every per-pixel intersection test.
const T_MIN: f32 = -1000.0;
const T_MAX: f32 = 1000.0;

/// Set budget per frame slot, reclaimed in bulk each slot reuse.
const MAX_SETS_PER_POOL: u32 = 10_000;

/// Render context owned by the caller and threaded through the frame loop.
///
/// One `begin .. end` cycle corresponds to exactly one frame-in-flight
/// slot; the external presentation layer supplies the slot index and
/// guarantees that slot's previous GPU work has retired before reuse.
pub struct Renderer {
    scheduler: FrameScheduler,
    camera: Camera,
    submissions: Vec<Arc<dyn Hittable>>,
    pixels: PixelBuffer,
    recording: bool,
}

impl Renderer {
    pub fn new(frames_in_flight: u32, camera: Camera) -> Result<Self> {
        Ok(Self {
            scheduler: FrameScheduler::new(frames_in_flight, MAX_SETS_PER_POOL)?,
            camera,
            submissions: Vec::new(),
            pixels: PixelBuffer::default(),
            recording: false,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Defers a destruction action to the current slot's next flush.
    pub fn submit_resource_free(&mut self, action: impl FnOnce() + Send + 'static) {
        self.scheduler.submit_resource_free(action);
    }

    /// Defers an invalidation action to the current slot's next flush.
    pub fn submit_invalidation(&mut self, action: impl FnOnce() + Send + 'static) {
        self.scheduler.submit_invalidation(action);
    }

    /// Allocates a binding set from the current slot's pool.
    ///
    /// The handle dies at the next reuse of the same slot; it must not be
    /// cached across frames without an [`is_live`](crate::frame::DescriptorPool::is_live)
    /// check.
    pub fn allocate_descriptor_set(&mut self, request: &DescriptorSetRequest) -> DescriptorSet {
        self.scheduler.allocate_from_pool(request)
    }

    /// Opens the frame for `frame_index` against `target`.
    ///
    /// Resets the slot's descriptor pool (bulk reclaim), flushes the slot's
    /// deferred queues, and re-keys the pixel buffer to the target extent.
    /// The returned pass mutably borrows the renderer, so a second `begin`
    /// before [`FramePass::end`] cannot compile.
    pub fn begin<'r, 't>(
        &'r mut self,
        frame_index: u32,
        target: &'t mut dyn TargetImage,
    ) -> FramePass<'r, 't> {
        debug_assert!(!self.recording, "begin called while a frame is recording");
        self.recording = true;

        self.scheduler.set_current_frame(frame_index);
        self.scheduler.reset_current_pool();
        self.scheduler.flush_resources(false);

        self.pixels.resize(target.width(), target.height());

        FramePass {
            renderer: self,
            target,
        }
    }

    /// Tears the renderer down in the mandatory order: wait for all
    /// outstanding GPU work, flush every slot's deferred queues, then drop
    /// pools and buffers. No slot reuse remains to trigger per-slot flushes,
    /// so this is the only moment the flush-all path runs.
    pub fn shutdown(mut self, presentation: &mut dyn Presentation) {
        presentation.wait_idle();
        self.scheduler.flush_resources(true);
        log::debug!("renderer shut down");
    }
}

/// In-progress frame: `begin → submit* → render → end`, strictly in order.
pub struct FramePass<'r, 't> {
    renderer: &'r mut Renderer,
    target: &'t mut dyn TargetImage,
}

impl FramePass<'_, '_> {
    /// Appends `object` to this frame's submission list.
    ///
    /// The list is cleared at [`end`](FramePass::end); submissions never
    /// leak into the next frame.
    pub fn submit(&mut self, object: Arc<dyn Hittable>) {
        self.renderer.submissions.push(object);
    }

    pub fn submission_count(&self) -> usize {
        self.renderer.submissions.len()
    }

    /// Traces every pixel of the target and uploads the buffer in one
    /// transfer.
    ///
    /// Each pixel's ray starts at the world origin with the camera's
    /// precomputed direction for that pixel. All submitted objects are
    /// tested in submission order and the last one reporting a hit
    /// determines the pixel; there is no nearest-distance comparison.
    /// Misses fall back to the sky gradient.
    pub fn render(&mut self) {
        let width = self.target.width();
        let height = self.target.height();

        let origin = Vec3A::ZERO;

        for y in 0..height {
            for x in 0..width {
                let direction = self
                    .renderer
                    .camera
                    .ray_direction_at((x + y * width) as usize);
                let ray = Ray::new(origin, direction);

                let mut color = Vec3A::ZERO;
                let mut has_hit = false;

                for object in &self.renderer.submissions {
                    if let Some(hit) = object.hit_test(&ray, T_MIN, T_MAX) {
                        color = normal_color(hit.normal);
                        has_hit = true;
                    }
                }

                if !has_hit {
                    color = sky_color(direction);
                }

                self.renderer.pixels.put(x, y, pack_rgba(color, 1.0));
            }
        }

        self.target.set_data(self.renderer.pixels.as_bytes());
    }

    /// Closes the frame: clears the submission list and releases the
    /// recording state.
    pub fn end(self) {
        self.renderer.submissions.clear();
        self.renderer.recording = false;
    }
}

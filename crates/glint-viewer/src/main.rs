use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use glam::Vec3A;

use glint_engine::frame::Presentation;
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::render::{OffscreenTarget, Renderer};
use glint_engine::trace::{Camera, Scene, Sphere};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FRAMES_IN_FLIGHT: u32 = 3;
const DEMO_FRAMES: u32 = 12;

/// Stand-in for the swapchain: rotates the slot index the way a real
/// presentation layer would after its per-slot fence wait.
struct MockSwapchain {
    frames_in_flight: u32,
    current: u32,
}

impl MockSwapchain {
    fn new(frames_in_flight: u32) -> Self {
        Self {
            frames_in_flight,
            current: 0,
        }
    }

    /// Advances to the next slot and returns its index.
    fn acquire(&mut self) -> u32 {
        self.current = (self.current + 1) % self.frames_in_flight;
        self.current
    }
}

impl Presentation for MockSwapchain {
    fn frames_in_flight(&self) -> u32 {
        self.frames_in_flight
    }

    fn current_frame(&self) -> u32 {
        self.current
    }

    fn wait_idle(&mut self) {
        log::debug!("swapchain idle");
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut swapchain = MockSwapchain::new(FRAMES_IN_FLIGHT);

    let mut camera = Camera::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
    camera.generate_ray_directions(WIDTH, HEIGHT);

    let mut renderer = Renderer::new(swapchain.frames_in_flight(), camera)?;

    let mut scene = Scene::new();
    scene.add_object(Arc::new(Sphere::new(Vec3A::new(2.0, 0.0, -5.0), 0.5)));
    scene.add_object(Arc::new(Sphere::new(Vec3A::new(-2.0, 0.0, -5.0), 0.5)));

    let mut target = OffscreenTarget::new(WIDTH, HEIGHT);

    log::info!(
        "tracing {DEMO_FRAMES} frames at {WIDTH}x{HEIGHT}, {} objects, {FRAMES_IN_FLIGHT} frames in flight",
        scene.objects().len()
    );

    for n in 0..DEMO_FRAMES {
        let frame = swapchain.acquire();
        let started = Instant::now();

        let mut pass = renderer.begin(frame, &mut target);
        scene.on_render(&mut pass);
        pass.render();
        pass.end();

        log::info!(
            "frame {n:>2} (slot {frame}): traced in {:.2} ms",
            started.elapsed().as_secs_f64() * 1000.0
        );
    }

    renderer.shutdown(&mut swapchain);
    log::info!("done");

    Ok(())
}

/// Presentation-layer contract implemented outside the engine.
///
/// The swapchain owns GPU submission, fencing and present; the engine only
/// needs the slot rotation it drives and a global wait for shutdown.
///
/// Implementations must guarantee that by the time a slot index is handed
/// out again, the GPU work submitted the previous time that slot was
/// current has retired. The deferred-flush correctness of
/// [`FrameScheduler`](super::FrameScheduler) rests on that discipline.
pub trait Presentation {
    /// Number of frame-in-flight slots, fixed for the swapchain's lifetime.
    fn frames_in_flight(&self) -> u32;

    /// Slot index for the frame currently being prepared.
    fn current_frame(&self) -> u32;

    /// Blocks until all outstanding GPU work across every slot has retired.
    ///
    /// Shutdown only. Steady-state frames rely on per-slot fences instead.
    fn wait_idle(&mut self);
}

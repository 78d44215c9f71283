use anyhow::Result;

use super::pool::{DescriptorPool, DescriptorSet, DescriptorSetRequest};

type DeferredAction = Box<dyn FnOnce() + Send + 'static>;

/// Per-slot deferred work: invalidations run before deletions so a resource
/// is always unbound before it is destroyed.
#[derive(Default)]
struct SlotQueues {
    invalidation: Vec<DeferredAction>,
    deletion: Vec<DeferredAction>,
}

impl SlotQueues {
    fn flush(&mut self) {
        for action in self.invalidation.drain(..) {
            action();
        }
        for action in self.deletion.drain(..) {
            action();
        }
    }

    fn pending(&self) -> usize {
        self.invalidation.len() + self.deletion.len()
    }
}

/// Frame-synchronized resource scheduler.
///
/// GPU consumption of a resource referenced while slot `i` is current can
/// straggle up to N-1 frames behind submission. Work enqueued here fires
/// only when the same slot comes around again and its prior GPU work is
/// known retired (the presentation layer's wait discipline), or during
/// shutdown after a global wait-idle via `flush_resources(true)`.
///
/// Single-writer by design: only the render thread enqueues and flushes.
pub struct FrameScheduler {
    slots: Vec<SlotQueues>,
    pools: Vec<DescriptorPool>,
    current: u32,
}

impl FrameScheduler {
    /// Creates a scheduler with one queue pair and one descriptor pool per
    /// frame-in-flight slot. The slot count is fixed for the scheduler's
    /// lifetime.
    pub fn new(frames_in_flight: u32, max_sets_per_pool: u32) -> Result<Self> {
        anyhow::ensure!(frames_in_flight > 0, "frames_in_flight must be non-zero");

        let slots = (0..frames_in_flight).map(|_| SlotQueues::default()).collect();
        let pools = (0..frames_in_flight)
            .map(|slot| DescriptorPool::new(slot, max_sets_per_pool))
            .collect();

        Ok(Self {
            slots,
            pools,
            current: 0,
        })
    }

    pub fn frames_in_flight(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Routes subsequent submissions and allocations to slot `index`.
    ///
    /// The index comes from the presentation layer once per frame.
    ///
    /// # Panics
    /// Panics if `index` is not a valid slot.
    pub fn set_current_frame(&mut self, index: u32) {
        assert!(
            index < self.frames_in_flight(),
            "frame index {index} out of range ({} frames in flight)",
            self.frames_in_flight()
        );
        self.current = index;
    }

    pub fn current_frame(&self) -> u32 {
        self.current
    }

    /// Defers a destruction action to the current slot's next flush.
    pub fn submit_resource_free(&mut self, action: impl FnOnce() + Send + 'static) {
        self.slots[self.current as usize].deletion.push(Box::new(action));
    }

    /// Defers an invalidation action to the current slot's next flush.
    ///
    /// Invalidations for a slot always run before that slot's deletions.
    pub fn submit_invalidation(&mut self, action: impl FnOnce() + Send + 'static) {
        self.slots[self.current as usize]
            .invalidation
            .push(Box::new(action));
    }

    /// Executes and clears deferred queues.
    ///
    /// With `flush_all` unset, only the current slot's queues run; this is
    /// the steady-state per-frame call. With `flush_all` set, every slot
    /// flushes in slot order. That path is for shutdown only, after the
    /// presentation layer has waited for all outstanding GPU work, since no
    /// further slot reuse will trigger the per-slot flushes naturally.
    pub fn flush_resources(&mut self, flush_all: bool) {
        if !flush_all {
            self.slots[self.current as usize].flush();
        } else {
            for slot in &mut self.slots {
                slot.flush();
            }
        }
    }

    /// Routes an allocation to the current slot's pool.
    pub fn allocate_from_pool(&mut self, request: &DescriptorSetRequest) -> DescriptorSet {
        self.pools[self.current as usize].allocate(request)
    }

    /// Bulk-resets the current slot's pool, retiring every set allocated
    /// the last time this slot was current.
    pub fn reset_current_pool(&mut self) {
        self.pools[self.current as usize].reset();
    }

    pub fn pool(&self, slot: u32) -> &DescriptorPool {
        &self.pools[slot as usize]
    }

    /// Deferred actions not yet flushed, across all slots.
    pub fn pending_actions(&self) -> usize {
        self.slots.iter().map(SlotQueues::pending).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn scheduler(frames: u32) -> FrameScheduler {
        FrameScheduler::new(frames, 16).unwrap()
    }

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zero_slots_is_rejected() {
        assert!(FrameScheduler::new(0, 16).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn frame_index_beyond_slot_count_panics() {
        scheduler(2).set_current_frame(2);
    }

    // ── per-slot flush ────────────────────────────────────────────────────

    #[test]
    fn action_runs_exactly_once_on_its_own_slot_flush() {
        let mut sched = scheduler(3);
        let ran = counter();

        sched.set_current_frame(1);
        let c = Arc::clone(&ran);
        sched.submit_resource_free(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        // Flushes of other slots must not touch slot 1's queue.
        sched.set_current_frame(0);
        sched.flush_resources(false);
        sched.set_current_frame(2);
        sched.flush_resources(false);
        assert_eq!(ran.load(Ordering::SeqCst), 0);

        sched.set_current_frame(1);
        sched.flush_resources(false);
        assert_eq!(ran.load(Ordering::SeqCst), 1);

        // Already drained; a second flush is a no-op.
        sched.flush_resources(false);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn invalidation_runs_before_deletion_within_a_slot() {
        let mut sched = scheduler(1);
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        let o = Arc::clone(&order);
        sched.submit_resource_free(move || o.lock().unwrap().push("delete"));
        let o = Arc::clone(&order);
        sched.submit_invalidation(move || o.lock().unwrap().push("invalidate"));

        sched.flush_resources(false);
        assert_eq!(*order.lock().unwrap(), vec!["invalidate", "delete"]);
    }

    #[test]
    fn actions_drain_fifo_within_a_queue() {
        let mut sched = scheduler(1);
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        for i in 0..4 {
            let o = Arc::clone(&order);
            sched.submit_resource_free(move || o.lock().unwrap().push(i));
        }

        sched.flush_resources(false);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    // ── flush all ─────────────────────────────────────────────────────────

    #[test]
    fn flush_all_drains_every_slot_exactly_once() {
        let mut sched = scheduler(3);
        let ran = counter();

        for slot in 0..3 {
            sched.set_current_frame(slot);
            let c = Arc::clone(&ran);
            sched.submit_resource_free(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
            let c = Arc::clone(&ran);
            sched.submit_invalidation(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(sched.pending_actions(), 6);

        sched.flush_resources(true);
        assert_eq!(ran.load(Ordering::SeqCst), 6);
        assert_eq!(sched.pending_actions(), 0);
    }

    // ── pool routing ──────────────────────────────────────────────────────

    #[test]
    fn allocations_route_to_the_current_slot_pool() {
        let mut sched = scheduler(2);
        let request = DescriptorSetRequest { layout: 0 };

        sched.set_current_frame(0);
        let a = sched.allocate_from_pool(&request);
        sched.set_current_frame(1);
        let b = sched.allocate_from_pool(&request);

        assert_eq!(a.slot(), 0);
        assert_eq!(b.slot(), 1);
        assert_eq!(sched.pool(0).allocated(), 1);
        assert_eq!(sched.pool(1).allocated(), 1);
    }

    #[test]
    fn reset_retires_only_the_current_slot_sets() {
        let mut sched = scheduler(2);
        let request = DescriptorSetRequest { layout: 0 };

        sched.set_current_frame(0);
        let a = sched.allocate_from_pool(&request);
        sched.set_current_frame(1);
        let b = sched.allocate_from_pool(&request);

        sched.set_current_frame(0);
        sched.reset_current_pool();

        assert!(!sched.pool(0).is_live(&a));
        assert!(sched.pool(1).is_live(&b));
    }
}

/// Identifies the binding layout a set is allocated against.
///
/// Layouts themselves are owned by the resource-binding collaborator; the
/// pool only records which layout a handle was cut from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DescriptorSetRequest {
    pub layout: u32,
}

/// Opaque handle to a set allocated from a [`DescriptorPool`].
///
/// Handles are invalidated in bulk by the next pool reset; check
/// [`DescriptorPool::is_live`] before reuse across frames.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DescriptorSet {
    slot: u32,
    index: u32,
    generation: u64,
    layout: u32,
}

impl DescriptorSet {
    /// Slot of the pool this set was allocated from.
    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// Layout the set was requested against.
    pub fn layout(&self) -> u32 {
        self.layout
    }
}

/// Recyclable per-slot binding allocator.
///
/// Allocation is a bump of an index; reclamation is a single bulk reset per
/// slot reuse rather than per-set frees. A reset bumps the generation, which
/// retires every handle issued since the previous reset.
#[derive(Debug)]
pub struct DescriptorPool {
    slot: u32,
    max_sets: u32,
    allocated: u32,
    generation: u64,
}

impl DescriptorPool {
    pub fn new(slot: u32, max_sets: u32) -> Self {
        Self {
            slot,
            max_sets,
            allocated: 0,
            generation: 0,
        }
    }

    /// Allocates the next set in this pool's current cycle.
    ///
    /// # Panics
    /// Aborts the process when the pool's set budget is exhausted. This runs
    /// on the frame-critical path; there is no degraded state to recover to.
    pub fn allocate(&mut self, request: &DescriptorSetRequest) -> DescriptorSet {
        if self.allocated == self.max_sets {
            log::error!(
                "descriptor pool for slot {} exhausted ({} sets)",
                self.slot,
                self.max_sets
            );
            panic!("descriptor pool exhausted");
        }

        let index = self.allocated;
        self.allocated += 1;

        DescriptorSet {
            slot: self.slot,
            index,
            generation: self.generation,
            layout: request.layout,
        }
    }

    /// Bulk-reclaims the pool.
    ///
    /// All sets allocated since the last reset become invalid at once.
    pub fn reset(&mut self) {
        self.allocated = 0;
        self.generation += 1;
    }

    /// Whether `set` was issued in the current cycle of this pool.
    pub fn is_live(&self, set: &DescriptorSet) -> bool {
        set.slot == self.slot && set.generation == self.generation && set.index < self.allocated
    }

    /// Number of sets handed out since the last reset.
    pub fn allocated(&self) -> u32 {
        self.allocated
    }
}

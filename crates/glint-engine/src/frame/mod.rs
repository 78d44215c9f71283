//! Frame-in-flight resource scheduling.
//!
//! Responsibilities:
//! - defer resource invalidation/destruction until the owning frame slot is
//!   known to be free of in-flight GPU references
//! - recycle one descriptor pool per slot through bulk resets
//! - expose the presentation-layer contract that supplies the frame index

mod pool;
mod scheduler;
mod sync;

pub use pool::{DescriptorPool, DescriptorSet, DescriptorSetRequest};
pub use scheduler::FrameScheduler;
pub use sync::Presentation;

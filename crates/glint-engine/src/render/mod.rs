//! Renderer orchestration.
//!
//! The renderer ties the frame scheduler and the trace core together once
//! per presented frame: begin → flush deferred work → accept submissions →
//! trace into the pixel buffer → upload → end.
//!
//! Convention:
//! - pixels are top-left origin, row-major `x + y * width`
//! - the traced buffer is uploaded to the target in one bulk transfer

mod buffer;
mod color;
mod renderer;
mod target;

pub use buffer::PixelBuffer;
pub use color::{normal_color, pack_rgba, sky_color};
pub use renderer::{FramePass, Renderer};
pub use target::{OffscreenTarget, TargetImage};

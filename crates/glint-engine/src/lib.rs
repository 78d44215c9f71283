//! Glint engine crate.
//!
//! This crate owns the frame-synchronized resource scheduling and the CPU
//! ray-tracing core used by higher layers. Windowing, swapchain mechanics
//! and UI live outside; the engine only sees the presentation layer's frame
//! index and an image to upload pixels into.

pub mod frame;
pub mod render;
pub mod trace;

pub mod logging;

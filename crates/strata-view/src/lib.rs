//! # Strata View
//!
//! Viewport and rendering contract for Strata:
//! - Pan/zoom viewport with world/screen transforms
//! - The `Renderer` trait and the world render pass
//! - A CPU framebuffer renderer with PNG export
//! - Debug overlay text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod camera;
pub mod framebuffer;
pub mod overlay;
pub mod render;

pub use camera::{Viewport, ViewMode, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use framebuffer::{Framebuffer, Pixel};
pub use overlay::{debug_label, format_label};
pub use render::{render_world, Renderer, CLEAR_COLOUR};

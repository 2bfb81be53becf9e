//! # Strata Engine
//!
//! Session driver for the Strata terrain viewer. Ties the terrain core and
//! the viewport together behind a frame-driven event API, and renders frames
//! headlessly for export.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod app;
pub mod config;
pub mod input;

pub use app::App;
pub use config::EngineConfig;
pub use input::InputEvent;

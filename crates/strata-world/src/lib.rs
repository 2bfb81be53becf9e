//! # Strata World
//!
//! Procedural terrain core for Strata.
//!
//! This crate handles:
//! - Seeded gradient noise
//! - Chunk generation and colouring
//! - The append-only terrain store
//! - Viewport-driven chunk streaming

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod chunk;
pub mod noise;
pub mod store;
pub mod streaming;
pub mod world;

#[cfg(test)]
mod testing;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::chunk::*;
    pub use crate::noise::*;
    pub use crate::store::*;
    pub use crate::streaming::*;
    pub use crate::world::*;
}

pub use prelude::*;

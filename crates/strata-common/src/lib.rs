//! # Strata Common
//!
//! Common types shared by every Strata subsystem:
//! - Coordinate types (world, chunk, screen)
//! - Colours
//! - Error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod colour;
pub mod coords;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::colour::*;
    pub use crate::coords::*;
    pub use crate::error::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_chunk_conversion() {
        let pos = WorldPos::new(100.25, -200.75);
        assert_eq!(pos.to_chunk_coord(), ChunkCoord::new(100, -201));
    }

    #[test]
    fn test_error_display() {
        let err = StrataError::from(InputParseError::UnknownEvent("jump".into()));
        assert_eq!(err.to_string(), "Input error: unknown input event `jump`");
    }
}

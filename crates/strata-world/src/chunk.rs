//! Terrain chunks and the height-to-colour policies.

use serde::{Deserialize, Serialize};
use strata_common::{ChunkCoord, Rgb, WorldRect};

use crate::noise::HeightSource;

/// How a chunk's height is turned into a display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourPolicy {
    /// Blue ramp: `(0, 0, 255 * (h + 1) / 2)`.
    #[default]
    Simple,
    /// Discrete terrain bands (ocean, beach, plains, mountain, snow).
    Banded,
}

impl ColourPolicy {
    /// Returns the colour for a height.
    #[must_use]
    pub fn colour(self, height: f64) -> Rgb {
        match self {
            Self::Simple => Rgb::new(0, 0, Rgb::channel(255.0 * (height + 1.0) / 2.0)),
            Self::Banded => Self::band(height),
        }
    }

    fn band(height: f64) -> Rgb {
        match height {
            h if h < -2.0 => Rgb::new(79, 66, 181),   // abyss
            h if h < -0.5 => Rgb::new(0, 128, 255),   // ocean
            h if h < 0.0 => Rgb::new(255, 213, 0),    // beach
            h if h < 0.85 => Rgb::new(0, 77, 13),     // plains
            h if h < 0.9 => Rgb::new(50, 50, 50),     // rock
            h if h < 0.95 => Rgb::new(100, 100, 100), // mountain
            _ => Rgb::WHITE,                          // snow
        }
    }
}

/// One unit cell of terrain: a grid coordinate, its sampled height, and the
/// colour derived from that height.
///
/// Chunks never change after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chunk {
    coord: ChunkCoord,
    height: f64,
    colour: Rgb,
}

impl Chunk {
    /// Creates a chunk with a known height.
    #[must_use]
    pub fn new(coord: ChunkCoord, height: f64, policy: ColourPolicy) -> Self {
        Self {
            coord,
            height,
            colour: policy.colour(height),
        }
    }

    /// Samples `source` at the chunk origin and builds the chunk.
    #[must_use]
    pub fn generate<S: HeightSource + ?Sized>(
        coord: ChunkCoord,
        source: &S,
        policy: ColourPolicy,
    ) -> Self {
        let height = source.height(coord.x as f64, coord.y as f64);
        Self::new(coord, height, policy)
    }

    /// Returns the chunk coordinate.
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Returns the sampled height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Returns the display colour.
    #[must_use]
    pub const fn colour(&self) -> Rgb {
        self.colour
    }

    /// World-space bounds, `[x, x + 1) × [y, y + 1)`.
    #[must_use]
    pub fn bounds(&self) -> WorldRect {
        self.coord.bounds()
    }
}

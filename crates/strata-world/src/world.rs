//! A world: one seed, its noise field, everything generated from it, and the
//! chunks currently in view.

use strata_common::{ChunkCoord, Rgb, WorldPos, WorldRect};
use tracing::info;

use crate::chunk::{Chunk, ColourPolicy};
use crate::noise::NoiseField;
use crate::store::TerrainStore;
use crate::streaming::{ChunkStreamer, SyncReport};

/// Terrain generated from a single seed.
///
/// Noise field, store, and working set belong together. Changing the seed
/// means building a new `World`; the old store is meaningless under a new
/// field.
#[derive(Debug)]
pub struct World {
    noise: NoiseField,
    store: TerrainStore,
    streamer: ChunkStreamer,
}

impl World {
    /// Creates an empty world for `seed`.
    #[must_use]
    pub fn new(seed: i64, policy: ColourPolicy) -> Self {
        info!("Creating world (seed {seed}, {policy:?} colours)");
        Self {
            noise: NoiseField::new(seed),
            store: TerrainStore::new(policy),
            streamer: ChunkStreamer::new(),
        }
    }

    /// Builds a fresh world for `seed` with the same colour policy.
    #[must_use]
    pub fn reseeded(&self, seed: i64) -> Self {
        info!("Regenerating world: seed {} -> {seed}", self.seed());
        Self::new(seed, self.policy())
    }

    /// Returns the world seed.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.noise.seed()
    }

    /// Returns the colour policy.
    #[must_use]
    pub const fn policy(&self) -> ColourPolicy {
        self.store.policy()
    }

    /// Returns the noise field.
    #[must_use]
    pub const fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Returns the terrain store.
    #[must_use]
    pub const fn store(&self) -> &TerrainStore {
        &self.store
    }

    /// Returns the streamer holding the working set.
    #[must_use]
    pub const fn streamer(&self) -> &ChunkStreamer {
        &self.streamer
    }

    /// Resynchronizes the working set with a visible rectangle.
    pub fn sync(&mut self, visible: WorldRect) -> SyncReport {
        self.streamer.sync(&mut self.store, &self.noise, visible)
    }

    /// Iterates over chunks in the working set.
    pub fn visible_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.streamer.chunks()
    }

    /// Bounds and colour of every chunk in the working set.
    pub fn renderables(&self) -> impl Iterator<Item = (WorldRect, Rgb)> + '_ {
        self.visible_chunks()
            .map(|chunk| (chunk.bounds(), chunk.colour()))
    }

    /// Number of chunks in the working set.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.streamer.loaded_count()
    }

    /// Returns the generated chunk covering `pos`, if any.
    #[must_use]
    pub fn chunk_at(&self, pos: WorldPos) -> Option<&Chunk> {
        self.store
            .get(ChunkCoord::containing(pos))
            .map(|chunk| &**chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::HeightSource;

    #[test]
    fn test_new_world_is_empty() {
        let world = World::new(0, ColourPolicy::Simple);
        assert_eq!(world.seed(), 0);
        assert!(world.store().is_empty());
        assert_eq!(world.loaded_count(), 0);
    }

    #[test]
    fn test_sync_populates_renderables() {
        let mut world = World::new(21, ColourPolicy::Banded);
        let report = world.sync(WorldRect::from_edges(-2.0, -2.0, 2.0, 2.0));

        assert_eq!(report.working_set, 6 * 6);
        assert_eq!(world.renderables().count(), 36);
        for (bounds, colour) in world.renderables() {
            let chunk = world
                .chunk_at(bounds.min)
                .expect("rendered chunk must be generated");
            assert_eq!(chunk.colour(), colour);
            assert_eq!(chunk.height(), world.noise().height(bounds.min.x, bounds.min.y));
        }
    }

    #[test]
    fn test_chunk_at_negative_position() {
        let mut world = World::new(3, ColourPolicy::Simple);
        world.sync(WorldRect::from_edges(-3.0, -3.0, -1.0, -1.0));

        let chunk = world
            .chunk_at(WorldPos::new(-0.5, -2.5))
            .expect("chunk generated");
        assert_eq!(chunk.coord(), ChunkCoord::new(-1, -3));
        assert!(world.chunk_at(WorldPos::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_reseeded_replaces_everything() {
        let mut world = World::new(1, ColourPolicy::Banded);
        world.sync(WorldRect::from_edges(0.0, 0.0, 4.0, 4.0));

        let fresh = world.reseeded(2);
        assert_eq!(fresh.seed(), 2);
        assert_eq!(fresh.policy(), ColourPolicy::Banded);
        assert!(fresh.store().is_empty());
        assert_eq!(fresh.loaded_count(), 0);
    }

    #[test]
    fn test_same_seed_same_terrain() {
        let view = WorldRect::from_edges(-20.0, 100.0, 20.0, 140.0);
        let mut a = World::new(77, ColourPolicy::Simple);
        let mut b = World::new(77, ColourPolicy::Simple);
        a.sync(view);
        b.sync(view);

        for chunk in a.visible_chunks() {
            let other = b.chunk_at(chunk.bounds().min).expect("same coverage");
            assert_eq!(chunk, other);
        }
    }
}

//! Append-only cache of every chunk generated in a world.

use std::sync::Arc;

use ahash::AHashMap;
use strata_common::ChunkCoord;

use crate::chunk::{Chunk, ColourPolicy};
use crate::noise::HeightSource;

/// Every chunk ever generated for one world, keyed by grid coordinate.
///
/// Entries are never removed. The working set shares chunks with the store
/// through `Arc`, so dropping a chunk from view keeps it cached here.
#[derive(Debug, Default)]
pub struct TerrainStore {
    chunks: AHashMap<ChunkCoord, Arc<Chunk>>,
    policy: ColourPolicy,
}

impl TerrainStore {
    /// Creates an empty store colouring new chunks with `policy`.
    #[must_use]
    pub fn new(policy: ColourPolicy) -> Self {
        Self {
            chunks: AHashMap::new(),
            policy,
        }
    }

    /// Returns the chunk at `coord`, sampling `source` only on first access.
    pub fn get_or_create<S: HeightSource + ?Sized>(
        &mut self,
        coord: ChunkCoord,
        source: &S,
    ) -> Arc<Chunk> {
        let policy = self.policy;
        Arc::clone(
            self.chunks
                .entry(coord)
                .or_insert_with(|| Arc::new(Chunk::generate(coord, source, policy))),
        )
    }

    /// Returns the chunk at `coord` if it has been generated.
    #[must_use]
    pub fn get(&self, coord: ChunkCoord) -> Option<&Arc<Chunk>> {
        self.chunks.get(&coord)
    }

    /// Whether `coord` has been generated.
    #[must_use]
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Number of chunks generated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether nothing has been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Colour policy applied to new chunks.
    #[must_use]
    pub const fn policy(&self) -> ColourPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseField;
    use crate::testing::CountingSource;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let source = CountingSource::new(NoiseField::new(0));
        let mut store = TerrainStore::new(ColourPolicy::Simple);
        let coord = ChunkCoord::new(12, -40);

        let first = store.get_or_create(coord, &source);
        assert_eq!(source.calls(), 1);

        let second = store.get_or_create(coord, &source);
        assert_eq!(source.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_chunk_uses_noise_height() {
        let field = NoiseField::new(9);
        let mut store = TerrainStore::new(ColourPolicy::Banded);
        let chunk = store.get_or_create(ChunkCoord::new(-300, 77), &field);

        assert_eq!(chunk.height(), field.height(-300.0, 77.0));
        assert_eq!(chunk.colour(), ColourPolicy::Banded.colour(chunk.height()));
    }

    #[test]
    fn test_get_only_returns_generated() {
        let field = NoiseField::new(1);
        let mut store = TerrainStore::default();
        assert!(store.is_empty());
        assert!(store.get(ChunkCoord::new(0, 0)).is_none());

        store.get_or_create(ChunkCoord::new(0, 0), &field);
        assert!(store.contains(ChunkCoord::new(0, 0)));
        assert!(!store.contains(ChunkCoord::new(1, 0)));
    }
}

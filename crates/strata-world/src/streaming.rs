//! Visibility-driven chunk streaming.
//!
//! The streamer keeps a working set of chunks overlapping the visible
//! rectangle plus a one-chunk margin. Each sync first drops chunks that no
//! longer touch the rectangle, then fills every margin-expanded cell from the
//! terrain store. Dropped chunks stay cached in the store.

use std::sync::Arc;

use ahash::AHashMap;
use strata_common::{ChunkCoord, WorldRect};
use tracing::debug;

use crate::chunk::Chunk;
use crate::noise::HeightSource;
use crate::store::TerrainStore;

/// Extra chunks loaded on every side of the visible rectangle.
pub const LOAD_MARGIN: i64 = 1;

/// Chunks currently visible, shared with the terrain store.
pub type WorkingSet = AHashMap<ChunkCoord, Arc<Chunk>>;

/// Outcome of one sync pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    /// Chunks dropped from the working set
    pub evicted: usize,
    /// Chunks added to the working set
    pub loaded: usize,
    /// Chunks newly generated into the store
    pub generated: usize,
    /// Working-set size after the sync
    pub working_set: usize,
}

/// Maintains the working set for a moving viewport.
#[derive(Debug, Default)]
pub struct ChunkStreamer {
    loaded: WorkingSet,
}

impl ChunkStreamer {
    /// Creates a streamer with an empty working set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the working set in line with `visible`.
    ///
    /// Chunks are evicted when their bounds are disjoint from `visible`, then
    /// every cell in `floor(x1) - 1 .. ceil(x2) + 1` by
    /// `floor(y1) - 1 .. ceil(y2) + 1` is loaded, generating it from `source`
    /// if the store has never seen it. Re-running with the same rectangle
    /// leaves the working set unchanged.
    pub fn sync<S: HeightSource + ?Sized>(
        &mut self,
        store: &mut TerrainStore,
        source: &S,
        visible: WorldRect,
    ) -> SyncReport {
        let before = self.loaded.len();
        self.loaded.retain(|_, chunk| visible.overlaps(&chunk.bounds()));
        let evicted = before - self.loaded.len();

        let mut loaded = 0;
        let mut generated = 0;
        let (columns, rows) = visible.chunk_span(LOAD_MARGIN);
        for x in columns {
            for y in rows.clone() {
                let coord = ChunkCoord::new(x, y);
                if self.loaded.contains_key(&coord) {
                    continue;
                }
                if !store.contains(coord) {
                    generated += 1;
                }
                let chunk = store.get_or_create(coord, source);
                self.loaded.insert(coord, chunk);
                loaded += 1;
            }
        }

        let report = SyncReport {
            evicted,
            loaded,
            generated,
            working_set: self.loaded.len(),
        };
        debug!(
            working_set = report.working_set,
            loaded, evicted, generated, "Chunks rendered: {}", report.working_set
        );
        report
    }

    /// Returns the working set.
    #[must_use]
    pub fn working_set(&self) -> &WorkingSet {
        &self.loaded
    }

    /// Iterates over the loaded chunks in no particular order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.loaded.values().map(|chunk| &**chunk)
    }

    /// Whether `coord` is in the working set.
    #[must_use]
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.loaded.contains_key(&coord)
    }

    /// Returns the number of loaded chunks.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }
}

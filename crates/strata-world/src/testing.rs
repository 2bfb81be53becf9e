//! Test helpers shared across modules.

use std::cell::Cell;

use crate::noise::HeightSource;

/// Wraps a height source and counts samples.
pub(crate) struct CountingSource<S> {
    inner: S,
    calls: Cell<usize>,
}

impl<S> CountingSource<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<S: HeightSource> HeightSource for CountingSource<S> {
    fn height(&self, x: f64, y: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.height(x, y)
    }
}

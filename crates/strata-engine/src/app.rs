//! Interactive session: one world, one viewport, and the event handling that
//! keeps them in step.
//!
//! Every event runs to completion, including a full chunk resync, before
//! control returns to the caller's frame loop.

use strata_common::WorldPos;
use strata_view::{render_world, Renderer, Viewport};
use strata_world::{SyncReport, World};
use tracing::{debug, info};

use crate::config::{EngineConfig, MAX_WINDOW_DIMENSION};
use crate::input::InputEvent;

/// Upper bound (exclusive) for randomly drawn seeds.
pub const RANDOM_SEED_LIMIT: i64 = 100_000_000;

/// Draws a fresh world seed.
#[must_use]
pub fn random_seed() -> i64 {
    fastrand::i64(0..RANDOM_SEED_LIMIT)
}

/// A running terrain viewer.
#[derive(Debug)]
pub struct App {
    world: World,
    viewport: Viewport,
    last_sync: SyncReport,
}

impl App {
    /// Builds the world and viewport described by `config` and performs the
    /// initial sync.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let seed = if config.random_seed {
            random_seed()
        } else {
            config.world_seed
        };

        let mut viewport = Viewport::new(config.window_width, config.window_height);
        viewport.set_zoom(config.initial_zoom);
        viewport.center_on(WorldPos::new(config.center_x, config.center_y));
        if config.show_debug_overlay {
            viewport.toggle_debug();
        }

        let mut app = Self {
            world: World::new(seed, config.colour_policy),
            viewport,
            last_sync: SyncReport::default(),
        };
        app.resync();
        app
    }

    /// Returns the current world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the viewport.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the report of the most recent sync.
    #[must_use]
    pub const fn last_sync(&self) -> SyncReport {
        self.last_sync
    }

    /// Applies one input event and resynchronizes the working set.
    pub fn handle(&mut self, event: InputEvent) -> SyncReport {
        debug!("Handling {event}");
        match event {
            InputEvent::Pan { dx, dy } => self.viewport.pan(dx, dy),
            InputEvent::ZoomIn => self.viewport.zoom_in(),
            InputEvent::ZoomOut => self.viewport.zoom_out(),
            InputEvent::ToggleDebug => self.viewport.toggle_debug(),
            InputEvent::Resize { width, height } => self.viewport.set_viewport(
                width.clamp(1, MAX_WINDOW_DIMENSION),
                height.clamp(1, MAX_WINDOW_DIMENSION),
            ),
            InputEvent::Regenerate(seed) => {
                let seed = seed.unwrap_or_else(random_seed);
                self.world = self.world.reseeded(seed);
            },
        }
        self.resync()
    }

    /// Applies a sequence of events in order.
    pub fn run<I: IntoIterator<Item = InputEvent>>(&mut self, events: I) {
        let mut count = 0usize;
        for event in events {
            self.handle(event);
            count += 1;
        }
        info!(
            "Replayed {count} events, {} chunks in view, {} generated",
            self.last_sync.working_set,
            self.world.store().len()
        );
    }

    /// Draws the current frame.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> usize {
        render_world(&self.world, &self.viewport, renderer)
    }

    fn resync(&mut self) -> SyncReport {
        self.last_sync = self.world.sync(self.viewport.visible_rect());
        self.last_sync
    }
}

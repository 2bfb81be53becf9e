//! 2D viewport for panning and zooming over the terrain.
//!
//! The viewport is centered on a world position. Zoom is the number of screen
//! pixels per world unit, so one chunk is `zoom` pixels wide. Screen origin is
//! top-left and Y increases downward in both spaces.

use strata_common::{ScreenRect, WorldPos, WorldRect};

/// Minimum zoom level (one pixel per chunk).
pub const MIN_ZOOM: f64 = 1.0;

/// Maximum zoom level.
pub const MAX_ZOOM: f64 = 1024.0;

/// Factor applied by a single zoom step.
pub const ZOOM_STEP: f64 = 2.0;

/// Default viewport size in pixels.
pub const DEFAULT_VIEWPORT: (u32, u32) = (800, 600);

/// Whether the debug overlay is drawn on top of the terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Terrain only.
    #[default]
    Normal,
    /// Terrain plus position/zoom text.
    DebugOverlayOn,
}

/// Pan/zoom state and the world/screen transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Center of view in world coordinates
    center: WorldPos,
    /// Pixels per world unit, always within `[MIN_ZOOM, MAX_ZOOM]`
    zoom: f64,
    /// Viewport size in pixels (width, height)
    viewport_size: (u32, u32),
    /// Overlay state
    mode: ViewMode,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT.0, DEFAULT_VIEWPORT.1)
    }
}

impl Viewport {
    /// Creates a viewport centered on the origin at minimum zoom.
    #[must_use]
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            center: WorldPos::default(),
            zoom: MIN_ZOOM,
            viewport_size: (viewport_width, viewport_height),
            mode: ViewMode::Normal,
        }
    }

    /// Returns the center of view.
    #[must_use]
    pub const fn center(&self) -> WorldPos {
        self.center
    }

    /// Returns the zoom level.
    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the viewport size in pixels.
    #[must_use]
    pub const fn viewport(&self) -> (u32, u32) {
        self.viewport_size
    }

    /// Returns the overlay mode.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether the debug overlay is on.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.mode == ViewMode::DebugOverlayOn
    }

    /// Center camera on a world position.
    pub fn center_on(&mut self, pos: WorldPos) {
        self.center = pos;
    }

    /// Set absolute zoom level (clamped). NaN resets to the minimum.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if zoom.is_nan() {
            MIN_ZOOM
        } else {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        };
    }

    /// Doubles the zoom, up to [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    /// Halves the zoom, down to [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Drags the view by a pixel delta.
    ///
    /// Dragging right moves the camera left, so the terrain follows the
    /// cursor. World distance per pixel shrinks as zoom grows.
    pub fn pan(&mut self, dx_pixels: f64, dy_pixels: f64) {
        self.center.x -= dx_pixels / self.zoom;
        self.center.y -= dy_pixels / self.zoom;
    }

    /// Flips between [`ViewMode::Normal`] and [`ViewMode::DebugOverlayOn`].
    pub fn toggle_debug(&mut self) {
        self.mode = match self.mode {
            ViewMode::Normal => ViewMode::DebugOverlayOn,
            ViewMode::DebugOverlayOn => ViewMode::Normal,
        };
    }

    /// Set the viewport size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport_size = (width, height);
    }

    /// Get visible world size (width, height) in world units.
    #[must_use]
    pub fn visible_size(&self) -> (f64, f64) {
        (
            f64::from(self.viewport_size.0) / self.zoom,
            f64::from(self.viewport_size.1) / self.zoom,
        )
    }

    /// Returns the world rectangle covered by the viewport.
    #[must_use]
    pub fn visible_rect(&self) -> WorldRect {
        let (width, height) = self.visible_size();
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        WorldRect::from_edges(
            self.center.x - half_width,
            self.center.y - half_height,
            self.center.x + half_width,
            self.center.y + half_height,
        )
    }

    /// Convert a world point to screen coordinates.
    #[must_use]
    pub fn world_point_to_screen(&self, pos: WorldPos) -> (f64, f64) {
        let half_width = f64::from(self.viewport_size.0) / 2.0;
        let half_height = f64::from(self.viewport_size.1) / 2.0;
        (
            (pos.x - self.center.x) * self.zoom + half_width,
            (pos.y - self.center.y) * self.zoom + half_height,
        )
    }

    /// Convert screen coordinates to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> WorldPos {
        let half_width = f64::from(self.viewport_size.0) / 2.0;
        let half_height = f64::from(self.viewport_size.1) / 2.0;
        WorldPos::new(
            self.center.x + (screen_x - half_width) / self.zoom,
            self.center.y + (screen_y - half_height) / self.zoom,
        )
    }

    /// Maps a world rectangle to the screen rectangle it occupies.
    #[must_use]
    pub fn world_to_screen(&self, bounds: WorldRect) -> ScreenRect {
        let (x, y) = self.world_point_to_screen(bounds.min);
        ScreenRect::new(
            x,
            y,
            bounds.width() * self.zoom,
            bounds.height() * self.zoom,
        )
    }
}

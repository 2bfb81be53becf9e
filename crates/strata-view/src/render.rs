//! The contract between the terrain core and whatever draws it.

use strata_common::{Rgb, ScreenRect};
use strata_world::World;
use tracing::debug;

use crate::camera::Viewport;
use crate::overlay::debug_label;

/// Background colour behind the terrain.
pub const CLEAR_COLOUR: Rgb = Rgb::BLACK;

/// A drawing surface for terrain frames.
///
/// The core only hands over screen rectangles and colours; pixels, fonts,
/// and presentation belong to the implementor.
pub trait Renderer {
    /// Clears the whole surface.
    fn clear(&mut self, colour: Rgb);

    /// Fills a screen rectangle with a solid colour.
    fn fill_rect(&mut self, rect: ScreenRect, colour: Rgb);

    /// Draws overlay text in the top-left corner.
    fn draw_label(&mut self, text: &str);
}

/// Draws every chunk in the world's working set through the viewport
/// transform, then the debug label if the overlay is on.
///
/// Returns the number of chunks drawn.
pub fn render_world<R: Renderer + ?Sized>(
    world: &World,
    viewport: &Viewport,
    renderer: &mut R,
) -> usize {
    renderer.clear(CLEAR_COLOUR);

    let mut drawn = 0;
    for (bounds, colour) in world.renderables() {
        renderer.fill_rect(viewport.world_to_screen(bounds), colour);
        drawn += 1;
    }

    if let Some(label) = debug_label(viewport) {
        renderer.draw_label(&label);
    }

    debug!("Rendered {drawn} chunks");
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_world::ColourPolicy;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        rects: Vec<(ScreenRect, Rgb)>,
        labels: Vec<String>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self, _colour: Rgb) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, rect: ScreenRect, colour: Rgb) {
            self.rects.push((rect, colour));
        }

        fn draw_label(&mut self, text: &str) {
            self.labels.push(text.to_owned());
        }
    }

    #[test]
    fn test_render_draws_working_set() {
        let mut viewport = Viewport::new(64, 32);
        viewport.set_zoom(16.0);
        let mut world = World::new(0, ColourPolicy::Simple);
        world.sync(viewport.visible_rect());

        let mut recorder = Recorder::default();
        let drawn = render_world(&world, &viewport, &mut recorder);

        // Visible 4x2 chunks plus a one-chunk margin
        assert_eq!(drawn, 6 * 4);
        assert_eq!(recorder.clears, 1);
        assert_eq!(recorder.rects.len(), drawn);
        assert!(recorder.labels.is_empty());
        for (rect, _) in &recorder.rects {
            assert_eq!((rect.width, rect.height), (16.0, 16.0));
        }
    }

    #[test]
    fn test_render_draws_label_in_debug_mode() {
        let mut viewport = Viewport::new(8, 8);
        viewport.toggle_debug();
        let world = World::new(0, ColourPolicy::Simple);

        let mut recorder = Recorder::default();
        render_world(&world, &viewport, &mut recorder);
        assert_eq!(recorder.labels, vec!["(0, 0) 1".to_owned()]);
    }
}

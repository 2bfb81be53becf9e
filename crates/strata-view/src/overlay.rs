//! Debug overlay text.

use crate::camera::Viewport;

/// Formats the overlay label: rounded center then zoom, e.g. `(12, -3) 4`.
///
/// Halves round to the even neighbour, so `2.5` shows as `2`.
#[must_use]
pub fn format_label(viewport: &Viewport) -> String {
    let center = viewport.center();
    // Adding zero turns -0 into 0
    format!(
        "({}, {}) {}",
        center.x.round_ties_even() + 0.0,
        center.y.round_ties_even() + 0.0,
        viewport.zoom()
    )
}

/// Returns the overlay label when the viewport has the overlay switched on.
#[must_use]
pub fn debug_label(viewport: &Viewport) -> Option<String> {
    viewport.is_debug().then(|| format_label(viewport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_common::WorldPos;

    #[test]
    fn test_label_hidden_in_normal_mode() {
        assert_eq!(debug_label(&Viewport::default()), None);
    }

    #[test]
    fn test_label_format() {
        let mut viewport = Viewport::default();
        viewport.toggle_debug();
        viewport.center_on(WorldPos::new(12.4, -3.6));
        viewport.set_zoom(4.0);
        assert_eq!(debug_label(&viewport).as_deref(), Some("(12, -4) 4"));
    }

    #[test]
    fn test_label_rounds_halves_to_even() {
        let mut viewport = Viewport::default();
        viewport.center_on(WorldPos::new(2.5, -2.5));
        assert_eq!(format_label(&viewport), "(2, -2) 1");

        viewport.center_on(WorldPos::new(3.5, -0.5));
        assert_eq!(format_label(&viewport), "(4, 0) 1");
    }

    #[test]
    fn test_label_has_no_negative_zero() {
        let mut viewport = Viewport::default();
        viewport.center_on(WorldPos::new(-0.3, -0.2));
        assert_eq!(format_label(&viewport), "(0, 0) 1");
    }
}

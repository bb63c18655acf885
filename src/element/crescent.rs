//! Crescent moon element.

use image::RgbaImage;

use crate::element::Element;
use crate::metrics::IconMetrics;
use crate::raster::{BoxPx, fill_ellipse};
use crate::theme::{IconTheme, opaque};

/// The crescent: a gold disc with an offset disc of the background color
/// painted over it, leaving the sliver between the two outlines.
///
/// The exact curve depends on how the integer offsets round at each
/// density; it is decorative, and only its linear scaling with the edge
/// length is relied upon.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crescent;

impl Element for Crescent {
    fn paint(&self, canvas: &mut RgbaImage, metrics: &IconMetrics, theme: &IconTheme) {
        let moon = metrics.moon_size as i32;
        let (mx, my) = metrics.moon_origin();

        // Full moon disc
        fill_ellipse(
            canvas,
            BoxPx::new(mx - moon / 4, my, mx + moon / 2, my + moon),
            opaque(theme.accent),
        );

        // Carve with the background color; the offset leaves the crescent
        fill_ellipse(
            canvas,
            BoxPx::new(mx, my + moon / 8, mx + moon / 2, my + moon - moon / 8),
            opaque(theme.background),
        );
    }
}

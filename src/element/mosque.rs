//! Mosque silhouette element.

use image::RgbaImage;

use crate::element::Element;
use crate::metrics::IconMetrics;
use crate::raster::{BoxPx, fill_ellipse, fill_rect};
use crate::theme::{IconTheme, opaque};

/// The mosque silhouette: main building, dome, and minaret, drawn in the
/// foreground color with the building's bottom edge on the disc margin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mosque;

impl Element for Mosque {
    fn paint(&self, canvas: &mut RgbaImage, metrics: &IconMetrics, theme: &IconTheme) {
        let color = opaque(theme.foreground);
        let width = metrics.mosque_width as i32;
        let height = metrics.mosque_height as i32;
        let (bx, by) = metrics.mosque_origin();

        // Main building
        fill_rect(canvas, BoxPx::new(bx, by, bx + width, by + height), color);

        // Dome, straddling the building's top edge
        let dome = metrics.dome_size as i32;
        let dx = bx + width / 2 - dome / 2;
        let dy = by - dome / 2;
        fill_ellipse(canvas, BoxPx::new(dx, dy, dx + dome, dy + dome), color);

        // Minaret, one minaret-width to the right of the building
        let minaret = metrics.minaret_width as i32;
        let mx = bx + width + minaret;
        fill_rect(canvas, BoxPx::new(mx, by, mx + minaret, by + height), color);
    }
}

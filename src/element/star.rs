//! Five-pointed star element.

use std::f32::consts::PI;

use image::RgbaImage;

use crate::element::Element;
use crate::metrics::IconMetrics;
use crate::raster::fill_polygon;
use crate::theme::{IconTheme, opaque};

/// A five-pointed star, up and to the right of the crescent.
///
/// Ten vertices walk the circle in π/5 steps starting from straight up,
/// alternating between the outer radius and half of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Star;

impl Star {
    /// Generates the polygon vertices for the given metrics.
    pub fn vertices(metrics: &IconMetrics) -> Vec<(f32, f32)> {
        let (cx, cy) = metrics.star_center();
        let outer = metrics.star_radius;
        let inner = outer / 2;

        (0..10)
            .map(|i| {
                let angle = i as f32 * PI / 5.0 - PI / 2.0;
                let radius = if i % 2 == 0 { outer } else { inner };
                (
                    cx as f32 + radius as f32 * angle.cos(),
                    cy as f32 + radius as f32 * angle.sin(),
                )
            })
            .collect()
    }
}

impl Element for Star {
    fn paint(&self, canvas: &mut RgbaImage, metrics: &IconMetrics, theme: &IconTheme) {
        fill_polygon(canvas, &Self::vertices(metrics), opaque(theme.accent));
    }
}

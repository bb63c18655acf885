//! Background disc element.

use image::RgbaImage;

use crate::element::Element;
use crate::metrics::IconMetrics;
use crate::raster::{BoxPx, fill_ellipse};
use crate::theme::{IconTheme, opaque};

/// The circular background, inset by the margin on all sides.
///
/// The inset keeps the canvas corners transparent at every density.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackgroundDisc;

impl Element for BackgroundDisc {
    fn paint(&self, canvas: &mut RgbaImage, metrics: &IconMetrics, theme: &IconTheme) {
        let margin = metrics.margin as i32;
        let edge = metrics.edge as i32;
        fill_ellipse(
            canvas,
            BoxPx::new(margin, margin, edge - margin, edge - margin),
            opaque(theme.background),
        );
    }
}

//! Icon rendering engine.

use image::RgbaImage;

use crate::element::ElementStack;
use crate::metrics::IconMetrics;
use crate::theme::IconTheme;
use crate::variant::{DENSITY_VARIANTS, DensityVariant};

/// Renders the launcher icon at any requested edge length.
///
/// The renderer holds a theme and the fixed element stack; each render
/// allocates a fresh transparent canvas, paints the stack onto it, and
/// returns it. Rendering is deterministic (the same edge length and theme
/// always produce a bit-identical raster) and keeps no state between
/// calls.
///
/// # Example
///
/// ```
/// use hilal_renderer::IconRenderer;
///
/// let renderer = IconRenderer::default();
/// let icon = renderer.render(96);
/// assert_eq!(icon.dimensions(), (96, 96));
/// ```
pub struct IconRenderer {
    theme: IconTheme,
    stack: ElementStack,
}

impl IconRenderer {
    /// Creates a renderer drawing with the given theme.
    pub fn new(theme: IconTheme) -> Self {
        Self {
            theme,
            stack: ElementStack::default(),
        }
    }

    /// Returns the theme this renderer draws with.
    pub fn theme(&self) -> &IconTheme {
        &self.theme
    }

    /// Renders the icon at `edge` × `edge` pixels.
    pub fn render(&self, edge: u32) -> RgbaImage {
        let metrics = IconMetrics::for_edge(edge);
        let mut canvas = RgbaImage::new(edge, edge);
        self.stack.paint(&mut canvas, &metrics, &self.theme);
        canvas
    }

    /// Renders the icon at a density variant's edge length.
    pub fn render_variant(&self, variant: &DensityVariant) -> RgbaImage {
        self.render(variant.edge)
    }

    /// Renders every density variant, in table order.
    pub fn render_all(&self) -> Vec<(DensityVariant, RgbaImage)> {
        DENSITY_VARIANTS
            .iter()
            .map(|variant| (*variant, self.render_variant(variant)))
            .collect()
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAL: [u8; 4] = [46, 139, 139, 255];

    #[test]
    fn canvas_matches_requested_edge() {
        let renderer = IconRenderer::default();
        for variant in &DENSITY_VARIANTS {
            let icon = renderer.render_variant(variant);
            assert_eq!(icon.dimensions(), (variant.edge, variant.edge));
        }
    }

    #[test]
    fn corners_are_transparent_at_every_density() {
        let renderer = IconRenderer::default();
        for variant in &DENSITY_VARIANTS {
            let icon = renderer.render_variant(variant);
            let last = variant.edge - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(
                    icon.get_pixel(x, y).0[3],
                    0,
                    "corner ({x}, {y}) opaque at {}",
                    variant.label
                );
            }
        }
    }

    #[test]
    fn center_is_the_background_color_at_every_density() {
        let renderer = IconRenderer::default();
        for variant in &DENSITY_VARIANTS {
            let icon = renderer.render_variant(variant);
            let mid = variant.edge / 2;
            assert_eq!(icon.get_pixel(mid, mid).0, TEAL, "center at {}", variant.label);
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = IconRenderer::default();
        let first = renderer.render(144);
        let second = renderer.render(144);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn crescent_and_star_use_the_accent_color() {
        let renderer = IconRenderer::default();
        let icon = renderer.render(192);
        let gold = [255, 215, 0, 255];

        // Left edge of the moon disc, outside the carve.
        assert_eq!(icon.get_pixel(66, 96).0, gold);

        // Star center.
        let (sx, sy) = IconMetrics::for_edge(192).star_center();
        assert_eq!(icon.get_pixel(sx as u32, sy as u32).0, gold);
    }

    #[test]
    fn mosque_sits_in_the_foreground_color() {
        let renderer = IconRenderer::default();
        let icon = renderer.render(48);
        let metrics = IconMetrics::for_edge(48);
        let (bx, by) = metrics.mosque_origin();

        let x = (bx + metrics.mosque_width as i32 / 2) as u32;
        let y = (by + metrics.mosque_height as i32 / 2) as u32;
        assert_eq!(icon.get_pixel(x, y).0, [255, 255, 255, 255]);
    }

    #[test]
    fn render_all_covers_the_density_table() {
        let renderer = IconRenderer::default();
        let rendered = renderer.render_all();
        assert_eq!(rendered.len(), DENSITY_VARIANTS.len());
        for (variant, icon) in &rendered {
            assert_eq!(icon.width(), variant.edge);
        }
    }

    #[test]
    fn custom_theme_flows_through() {
        use palette::Srgb;

        let theme = IconTheme {
            background: Srgb::new(10, 40, 80),
            ..IconTheme::default()
        };
        let renderer = IconRenderer::new(theme);
        let icon = renderer.render(96);
        assert_eq!(icon.get_pixel(48, 48).0, [10, 40, 80, 255]);
    }
}

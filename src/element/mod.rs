//! Icon elements and their paint order.
//!
//! Each element paints one piece of the icon onto the shared canvas, taking
//! its coordinates from [`IconMetrics`] and its colors from [`IconTheme`].
//! [`ElementStack`] applies them bottom to top in a fixed order. Later
//! elements overwrite earlier ones where they overlap; the crescent depends
//! on this to carve its silhouette out of the disc.

pub mod crescent;
pub mod disc;
pub mod mosque;
pub mod star;

pub use crescent::Crescent;
pub use disc::BackgroundDisc;
pub use mosque::Mosque;
pub use star::Star;

use image::RgbaImage;

use crate::metrics::IconMetrics;
use crate::theme::IconTheme;

/// A single paintable piece of the icon.
pub trait Element {
    /// Paints this element onto the canvas.
    ///
    /// Implementations derive every coordinate from `metrics` and take
    /// their colors from `theme`; they never read back what earlier
    /// elements drew.
    fn paint(&self, canvas: &mut RgbaImage, metrics: &IconMetrics, theme: &IconTheme);
}

/// The fixed element stack, bottom to top.
///
/// # Paint order
///
/// ```text
/// BackgroundDisc   teal disc inset by the margin
///       │
///       ▼
/// Crescent         gold disc, then a background-color carve
///       │
///       ▼
/// Star             gold five-pointed polygon
///       │
///       ▼
/// Mosque           white building + dome + minaret
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementStack {
    pub disc: BackgroundDisc,
    pub crescent: Crescent,
    pub star: Star,
    pub mosque: Mosque,
}

impl ElementStack {
    /// Paints every element onto `canvas` in stack order.
    pub fn paint(&self, canvas: &mut RgbaImage, metrics: &IconMetrics, theme: &IconTheme) {
        self.disc.paint(canvas, metrics, theme);
        self.crescent.paint(canvas, metrics, theme);
        self.star.paint(canvas, metrics, theme);
        self.mosque.paint(canvas, metrics, theme);
    }
}

//! hilal-renderer: procedural launcher icon generator
//!
//! This crate draws a stylized launcher icon (a teal disc carrying a gold
//! crescent and star over a white mosque silhouette) at the five Android
//! density sizes, and writes the results into the `mipmap-<density>`
//! resource layout.
//!
//! Rendering is pure and deterministic: shapes are composed by painting
//! filled primitives over each other on a transparent canvas, with every
//! coordinate derived from the target edge length by integer division.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use hilal_renderer::{IconRenderer, export_all};
//!
//! let renderer = IconRenderer::default();
//!
//! // Render one size in memory...
//! let icon = renderer.render(96);
//! assert_eq!(icon.dimensions(), (96, 96));
//!
//! // ...or write the full mipmap tree.
//! export_all(&renderer, Path::new("android/app/src/main/res")).unwrap();
//! ```

mod element;
mod export;
mod metrics;
mod raster;
mod renderer;
mod theme;
mod variant;

pub use element::{BackgroundDisc, Crescent, Element, ElementStack, Mosque, Star};
pub use export::{
    DEFAULT_RES_DIR, ExportError, ICON_FILE_NAME, export_all, export_variant, icon_path,
};
pub use metrics::IconMetrics;
pub use raster::{BoxPx, fill_ellipse, fill_polygon, fill_rect};
pub use renderer::IconRenderer;
pub use theme::{IconTheme, opaque};
pub use variant::{DENSITY_VARIANTS, DensityVariant};

//! PNG export into the Android mipmap resource layout.
//!
//! This is the only part of the crate that touches the filesystem. Each
//! density variant gets a `mipmap-<label>/ic_launcher.png` under the
//! resource root. Directory creation is idempotent and existing files are
//! overwritten, so re-running an export is safe.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::renderer::IconRenderer;
use crate::variant::{DENSITY_VARIANTS, DensityVariant};

/// Default resource root, relative to the working directory.
pub const DEFAULT_RES_DIR: &str = "android/app/src/main/res";

/// File name shared by every density variant.
pub const ICON_FILE_NAME: &str = "ic_launcher.png";

/// Errors raised while writing icons to disk.
///
/// There is no retry or partial-success handling; the first failure aborts
/// the export and propagates to the caller.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Returns the output path for one variant under `res_dir`.
pub fn icon_path(res_dir: &Path, variant: &DensityVariant) -> PathBuf {
    res_dir.join(variant.dir_name()).join(ICON_FILE_NAME)
}

/// Renders one variant and writes it under `res_dir`.
///
/// Creates the `mipmap-<label>` directory (and any missing parents) first.
/// Returns the path of the written file.
pub fn export_variant(
    renderer: &IconRenderer,
    res_dir: &Path,
    variant: &DensityVariant,
) -> Result<PathBuf, ExportError> {
    let dir = res_dir.join(variant.dir_name());
    fs::create_dir_all(&dir)?;

    let path = dir.join(ICON_FILE_NAME);
    renderer.render_variant(variant).save(&path)?;
    Ok(path)
}

/// Renders and writes every density variant under `res_dir`.
///
/// Variants are processed in table order; one progress line is logged per
/// file. Returns the written paths.
pub fn export_all(renderer: &IconRenderer, res_dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(DENSITY_VARIANTS.len());

    for variant in &DENSITY_VARIANTS {
        let path = export_variant(renderer, res_dir, variant)?;
        log::info!(
            "Created {} icon: {} ({}x{})",
            variant.label,
            path.display(),
            variant.edge,
            variant.edge
        );
        written.push(path);
    }

    Ok(written)
}

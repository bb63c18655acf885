//! Batch driver: renders the launcher icon at every density and writes the
//! Android mipmap resource tree.

use std::path::Path;
use std::process::ExitCode;

use hilal_renderer::{DEFAULT_RES_DIR, IconRenderer, export_all};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Creating launcher icons for all densities...");

    let renderer = IconRenderer::default();
    match export_all(&renderer, Path::new(DEFAULT_RES_DIR)) {
        Ok(written) => {
            log::info!("All {} launcher icons created successfully", written.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Icon export failed: {err}");
            ExitCode::FAILURE
        }
    }
}
